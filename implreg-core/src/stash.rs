//! Buffering strategies for payloads published before their consumer exists.

use crate::payload::Payload;

/// Where a published payload ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Delivery {
    /// The registration hook was present and accepted the payload.
    Registered,
    /// No hook was present; the payload was handed to the stash.
    Pending {
        /// A previously buffered payload was overwritten and is lost.
        displaced: bool,
    },
}

impl Delivery {
    /// Returns `true` if the hook received the payload.
    pub fn is_registered(&self) -> bool {
        matches!(self, Delivery::Registered)
    }

    /// Returns `true` if the payload was buffered.
    pub fn is_pending(&self) -> bool {
        matches!(self, Delivery::Pending { .. })
    }
}

/// Fallback used by a publisher when no hook is present.
///
/// `stash` overwrites whatever the strategy held before and returns the
/// displaced payload, if any. Last write wins.
pub trait Stash<P: Payload>: Send + Sync + 'static {
    /// Buffers `payload`, returning the payload it replaced.
    fn stash(&self, payload: P) -> Option<P>;
}

/// A stash that drops every payload.
///
/// For consumers that never pick up late payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardStash;

impl<P: Payload> Stash<P> for DiscardStash {
    fn stash(&self, _payload: P) -> Option<P> {
        None
    }
}

impl<P: Payload, S: Stash<P> + ?Sized> Stash<P> for std::sync::Arc<S> {
    fn stash(&self, payload: P) -> Option<P> {
        (**self).stash(payload)
    }
}
