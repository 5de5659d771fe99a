//! Process-wide hook and pending slot.
//!
//! For producers that cannot be handed a publisher: generated fragments call
//! [`publish`] at load time, and the consumer calls [`define_hook`] whenever
//! it becomes ready. Whichever runs first, the payload meets the hook.
//!
//! Several fragments publishing before the hook is defined overwrite one
//! another; only the last survives. Fragments that need to coexist should be
//! merged into one payload (see `collect_submitted` with the `inventory`
//! feature) or use an injected [`DeferredPublisher`](crate::DeferredPublisher).

use crate::publisher::{DeferredPublisher, SharedHook};
use implreg_core::{Delivery, HookError, Implementors, PublishError, RegistrationHook};
use implreg_std::PendingSlot;
use lazy_static::lazy_static;
use std::sync::{Arc, PoisonError, RwLock};

lazy_static! {
    static ref HOOK: RwLock<Option<SharedHook<Implementors>>> = RwLock::new(None);
    static ref PENDING: PendingSlot<Implementors> = PendingSlot::new();
}

fn current_hook() -> Option<SharedHook<Implementors>> {
    HOOK.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn replace_hook(hook: Option<SharedHook<Implementors>>) -> Option<SharedHook<Implementors>> {
    let mut guard = HOOK.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, hook)
}

/// Publishes `payload` to the process-wide hook, or parks it in the
/// process-wide pending slot.
///
/// The hook is cloned out of its lock before it runs, so it may itself call
/// back into this module.
pub fn publish(payload: Implementors) -> Result<Delivery, PublishError> {
    DeferredPublisher::builder()
        .shared_hook(current_hook())
        .stash(PENDING.clone())
        .name("global")
        .build()
        .publish(payload)
}

/// Installs the process-wide hook and drains the pending slot into it.
///
/// Returns `Ok(true)` if a pending payload was delivered. The hook remains
/// installed if that delivery fails.
///
/// The hook is installed before the drain, so a `publish` racing in from
/// another thread can reach it ahead of the older pending payload.
pub fn define_hook<H>(hook: H) -> Result<bool, HookError>
where
    H: RegistrationHook<Implementors>,
{
    let hook: SharedHook<Implementors> = Arc::new(hook);
    replace_hook(Some(Arc::clone(&hook)));
    PENDING.drain_into(&*hook)
}

/// Removes the process-wide hook, returning it.
pub fn remove_hook() -> Option<SharedHook<Implementors>> {
    replace_hook(None)
}

/// Returns `true` if a process-wide hook is installed.
pub fn has_hook() -> bool {
    HOOK.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

/// Takes the process-wide pending payload.
pub fn take_pending() -> Option<Implementors> {
    PENDING.take()
}

/// A handle to the process-wide pending slot.
pub fn pending() -> PendingSlot<Implementors> {
    PENDING.clone()
}
