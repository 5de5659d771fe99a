#![allow(dead_code)]

use implreg::{BoxError, Implementors, RegistrationHook, implementors};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Payloads
// ============================================================================

pub fn scenario_payload() -> Implementors {
    implementors! { "ns" => ["a", "b"] }
}

pub fn neg_implementors() -> Implementors {
    implementors! {
        "cursive" => [
            "impl Neg for XY<isize>",
            "impl Neg for XY<i32>",
            "impl Neg for Vec2",
        ],
    }
}

// ============================================================================
// Test Hooks
// ============================================================================

/// Flattens every registered payload into `namespace: entry` lines,
/// the way a search index would consume it.
pub struct IndexHook {
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl RegistrationHook<Implementors> for IndexHook {
    fn register(&self, payload: &Implementors) -> Result<(), BoxError> {
        let mut lines = self.lines.lock().unwrap();
        for (namespace, entries) in payload.iter() {
            for entry in entries {
                lines.push(format!("{namespace}: {entry}"));
            }
        }
        Ok(())
    }
}

/// Rejects payloads without the expected namespace.
pub struct ShapeCheckingHook {
    pub required: &'static str,
}

impl RegistrationHook<Implementors> for ShapeCheckingHook {
    fn register(&self, payload: &Implementors) -> Result<(), BoxError> {
        if payload.get(self.required).is_none() {
            return Err(implreg::HookError::rejected(format!("missing namespace {}", self.required)).into());
        }
        Ok(())
    }
}
