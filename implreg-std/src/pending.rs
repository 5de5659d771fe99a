//! Single-slot mailbox for payloads that arrive before their consumer.
//!
//! The slot holds at most one payload. Writing overwrites, reading takes and
//! clears. A consumer that becomes ready later drains it with
//! [`PendingSlot::drain_into`].

use implreg_core::{HookError, Payload, RegistrationHook, Stash};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A shared, cloneable handle to one pending payload.
///
/// Clones observe the same slot, so the publisher and a late consumer can
/// each hold a handle.
///
/// # Example
///
/// ```rust
/// use implreg_std::PendingSlot;
///
/// let slot = PendingSlot::new();
/// assert!(slot.stash("first".to_string()).is_none());
/// assert_eq!(slot.stash("second".to_string()).as_deref(), Some("first"));
/// assert_eq!(slot.take().as_deref(), Some("second"));
/// assert!(slot.is_empty());
/// ```
pub struct PendingSlot<P> {
    inner: Arc<Mutex<Option<P>>>,
}

impl<P> PendingSlot<P> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    // A panic while holding the lock cannot leave `Option<P>` half-written.
    fn lock(&self) -> MutexGuard<'_, Option<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `payload`, returning the payload it overwrote.
    pub fn stash(&self, payload: P) -> Option<P> {
        self.lock().replace(payload)
    }

    /// Removes and returns the pending payload.
    pub fn take(&self) -> Option<P> {
        self.lock().take()
    }

    /// Drops the pending payload, if any.
    pub fn clear(&self) {
        self.lock().take();
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }

    /// Returns `true` if both handles point at the same slot.
    pub fn same_slot(&self, other: &PendingSlot<P>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P: Clone> PendingSlot<P> {
    /// Returns a copy of the pending payload without taking it.
    pub fn peek(&self) -> Option<P> {
        self.lock().clone()
    }
}

impl<P: Payload> PendingSlot<P> {
    /// Takes the pending payload and hands it to `hook`.
    ///
    /// Returns `Ok(false)` when nothing was pending. The payload is read
    /// once: if the hook fails it is not put back.
    pub fn drain_into<H>(&self, hook: &H) -> Result<bool, HookError>
    where
        H: RegistrationHook<P> + ?Sized,
    {
        let Some(payload) = self.take() else {
            return Ok(false);
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("draining pending payload into registration hook");

        hook.register(&payload)?;
        Ok(true)
    }
}

impl<P> Default for PendingSlot<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for PendingSlot<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> std::fmt::Debug for PendingSlot<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSlot")
            .field("occupied", &!self.is_empty())
            .finish()
    }
}

impl<P: Payload> Stash<P> for PendingSlot<P> {
    fn stash(&self, payload: P) -> Option<P> {
        PendingSlot::stash(self, payload)
    }
}
