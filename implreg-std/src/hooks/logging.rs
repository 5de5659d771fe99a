//! Logging hook for payload observation.

use implreg_core::{BoxError, Payload, RegistrationHook};
use std::fmt::Debug;

/// A hook wrapper that logs each registration.
///
/// With the `tracing` feature enabled an info event is emitted before the
/// inner hook runs and a warning if it fails. Without the feature this is a
/// plain pass-through.
///
/// # Example
///
/// ```rust,ignore
/// let hook = LoggingHook::new(search_index, "search");
/// let publisher = DeferredPublisher::with_hook(hook);
/// ```
pub struct LoggingHook<H> {
    inner: H,
    name: &'static str,
}

impl<H> LoggingHook<H> {
    /// Wraps `inner`, tagging its log events with `name`.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name used in log events.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Unwraps the inner hook.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: Clone> Clone for LoggingHook<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<P, H> RegistrationHook<P> for LoggingHook<H>
where
    P: Payload + Debug,
    H: RegistrationHook<P>,
{
    #[cfg(feature = "tracing")]
    fn register(&self, payload: &P) -> Result<(), BoxError> {
        tracing::info!(hook = %self.name, ?payload, "registering payload");
        let result = self.inner.register(payload);
        if let Err(ref error) = result {
            tracing::warn!(hook = %self.name, %error, "registration hook failed");
        }
        result
    }

    #[cfg(not(feature = "tracing"))]
    fn register(&self, payload: &P) -> Result<(), BoxError> {
        self.inner.register(payload)
    }
}
