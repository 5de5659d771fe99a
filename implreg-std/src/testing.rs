//! Testing utilities for implreg.
//!
//! This module provides hooks that make publish paths easy to assert on.
//!
//! # Features
//!
//! - [`RecordingHook`]: A hook that records every payload it receives
//! - [`FailingHook`]: A hook that rejects every payload

use implreg_core::{BoxError, HookError, Payload, RegistrationHook};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records all payloads it receives.
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to the publisher.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHook::<Implementors>::new();
/// let publisher = DeferredPublisher::with_hook(recorder.clone());
///
/// publisher.publish(payload.clone())?;
///
/// assert_eq!(recorder.calls(), vec![payload]);
/// ```
pub struct RecordingHook<P: Clone> {
    calls: Arc<Mutex<Vec<P>>>,
}

impl<P: Clone> RecordingHook<P> {
    /// Create a new, empty recording hook.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_calls<R>(&self, f: impl FnOnce(&mut Vec<P>) -> R) -> R {
        f(&mut self.calls.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Get a clone of the recorded payloads, oldest first.
    pub fn calls(&self) -> Vec<P> {
        self.with_calls(|calls| calls.clone())
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.with_calls(|calls| calls.len())
    }

    /// Get the most recently recorded payload.
    pub fn last(&self) -> Option<P> {
        self.with_calls(|calls| calls.last().cloned())
    }

    /// Clear all recorded payloads.
    pub fn clear(&self) {
        self.with_calls(Vec::clear);
    }
}

impl<P: Clone> Default for RecordingHook<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> Clone for RecordingHook<P> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<P: Payload + Clone> RegistrationHook<P> for RecordingHook<P> {
    fn register(&self, payload: &P) -> Result<(), BoxError> {
        self.with_calls(|calls| calls.push(payload.clone()));
        Ok(())
    }
}

// ============================================================================
// Failing Hook
// ============================================================================

/// A hook that rejects every payload with [`HookError::Rejected`].
///
/// Counts its invocations so tests can check it ran exactly once.
#[derive(Clone)]
pub struct FailingHook {
    reason: String,
    attempts: Arc<AtomicUsize>,
}

impl FailingHook {
    /// Create a hook that fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times the hook was invoked.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl<P: Payload> RegistrationHook<P> for FailingHook {
    fn register(&self, _payload: &P) -> Result<(), BoxError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(HookError::rejected(self.reason.clone()).into())
    }
}
