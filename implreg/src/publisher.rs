//! # Deferred Publisher
//!
//! Makes a payload available to a registration hook whether or not that hook
//! exists yet. The hook is an explicit optional capability supplied at
//! construction; when it is absent the payload goes to a buffering strategy,
//! a [`PendingSlot`] unless another [`Stash`] is configured.
//!
//! # Delivery
//!
//! - **Hook present**: called once, synchronously, with the payload. An error
//!   from the hook is returned to the caller; the stash is not touched.
//! - **Hook absent**: the payload overwrites whatever the stash held.
//!
//! Nothing guarantees a buffered payload is ever drained. A consumer that
//! arrives later can pick it up through [`DeferredPublisher::attach`] or
//! [`PendingSlot::drain_into`].

use implreg_core::{Delivery, HookError, Payload, PublishError, RegistrationHook, Stash};
use implreg_std::PendingSlot;
use std::sync::Arc;

/// Shared, type-erased registration hook.
pub type SharedHook<P> = Arc<dyn RegistrationHook<P>>;

const DEFAULT_NAME: &str = "implementors";

/// Publishes payloads to an optional hook, buffering when it is absent.
///
/// # Example
///
/// ```rust
/// use implreg::{DeferredPublisher, Delivery, Implementors};
///
/// let publisher = DeferredPublisher::new();
/// let delivery = publisher
///     .publish(Implementors::from([("ns", ["a", "b"])]))
///     .unwrap();
///
/// assert_eq!(delivery, Delivery::Pending { displaced: false });
/// assert_eq!(
///     publisher.stash().peek(),
///     Some(Implementors::from([("ns", ["a", "b"])]))
/// );
/// ```
pub struct DeferredPublisher<P: Payload, S = PendingSlot<P>> {
    hook: Option<SharedHook<P>>,
    stash: S,
    name: &'static str,
}

impl<P: Payload> DeferredPublisher<P> {
    /// A publisher with no hook that buffers into a fresh [`PendingSlot`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// A publisher that delivers straight to `hook`.
    pub fn with_hook<H: RegistrationHook<P>>(hook: H) -> Self {
        Self::builder().hook(hook).build()
    }

    /// Start configuring a publisher.
    pub fn builder() -> PublisherBuilder<P> {
        PublisherBuilder::new()
    }

    /// Installs `hook` and drains any pending payload into it.
    ///
    /// Returns `Ok(true)` if a buffered payload was delivered. The hook stays
    /// installed even when the drain fails.
    pub fn attach<H: RegistrationHook<P>>(&mut self, hook: H) -> Result<bool, PublishError> {
        let hook: SharedHook<P> = Arc::new(hook);
        self.hook = Some(Arc::clone(&hook));
        let drained = self.stash.drain_into(&*hook)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(publisher = %self.name, drained, "registration hook attached");

        Ok(drained)
    }
}

impl<P: Payload> Default for DeferredPublisher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Payload, S: Stash<P>> DeferredPublisher<P, S> {
    /// Delivers `payload` to the hook, or to the stash when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Hook`] if the hook fails. The failure is not
    /// retried and the payload is not buffered.
    pub fn publish(&self, payload: P) -> Result<Delivery, PublishError> {
        let Some(hook) = &self.hook else {
            let displaced = self.stash.stash(payload).is_some();

            #[cfg(feature = "tracing")]
            {
                if displaced {
                    tracing::warn!(publisher = %self.name, "pending payload overwritten before delivery");
                } else {
                    tracing::debug!(publisher = %self.name, "no registration hook; payload buffered");
                }
            }

            return Ok(Delivery::Pending { displaced });
        };

        hook.register(&payload).map_err(HookError::from)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(publisher = %self.name, "payload delivered to registration hook");

        Ok(Delivery::Registered)
    }

    /// Replaces the hook without draining, returning the previous one.
    pub fn set_hook<H: RegistrationHook<P>>(&mut self, hook: H) -> Option<SharedHook<P>> {
        self.hook.replace(Arc::new(hook))
    }

    /// Removes the hook so later publishes are buffered.
    pub fn clear_hook(&mut self) -> Option<SharedHook<P>> {
        self.hook.take()
    }

    /// The installed hook, if any.
    pub fn hook(&self) -> Option<&SharedHook<P>> {
        self.hook.as_ref()
    }

    /// Returns `true` if a hook is installed.
    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// The buffering strategy.
    pub fn stash(&self) -> &S {
        &self.stash
    }

    /// The name used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<P: Payload, S> std::fmt::Debug for DeferredPublisher<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredPublisher")
            .field("name", &self.name)
            .field("has_hook", &self.hook.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`DeferredPublisher`].
pub struct PublisherBuilder<P: Payload, S = PendingSlot<P>> {
    hook: Option<SharedHook<P>>,
    stash: S,
    name: &'static str,
}

impl<P: Payload> PublisherBuilder<P> {
    /// A builder with no hook and a fresh [`PendingSlot`].
    pub fn new() -> Self {
        Self {
            hook: None,
            stash: PendingSlot::new(),
            name: DEFAULT_NAME,
        }
    }
}

impl<P: Payload> Default for PublisherBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Payload, S> PublisherBuilder<P, S> {
    /// Set the registration hook.
    pub fn hook<H: RegistrationHook<P>>(mut self, hook: H) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Set an already shared hook, or none.
    pub fn shared_hook(mut self, hook: Option<SharedHook<P>>) -> Self {
        self.hook = hook;
        self
    }

    /// Set the hook if one is given.
    pub fn maybe_hook<H: RegistrationHook<P>>(self, hook: Option<H>) -> Self {
        match hook {
            Some(hook) => self.hook(hook),
            None => self,
        }
    }

    /// Replace the buffering strategy.
    pub fn stash<S2: Stash<P>>(self, stash: S2) -> PublisherBuilder<P, S2> {
        PublisherBuilder {
            hook: self.hook,
            stash,
            name: self.name,
        }
    }

    /// Name the publisher in log events.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Build the publisher.
    pub fn build(self) -> DeferredPublisher<P, S> {
        DeferredPublisher {
            hook: self.hook,
            stash: self.stash,
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use implreg_core::{DiscardStash, Implementors, hook_fn};
    use implreg_std::testing::{FailingHook, RecordingHook};

    fn sample() -> Implementors {
        Implementors::from([("ns", ["a", "b"])])
    }

    #[test]
    fn test_hook_present_registers_once() {
        let recorder = RecordingHook::new();
        let publisher = DeferredPublisher::with_hook(recorder.clone());

        let delivery = publisher.publish(sample()).unwrap();

        assert_eq!(delivery, Delivery::Registered);
        assert_eq!(recorder.calls(), vec![sample()]);
        assert!(publisher.stash().is_empty());
    }

    #[test]
    fn test_hook_absent_buffers() {
        let publisher = DeferredPublisher::new();

        let delivery = publisher.publish(sample()).unwrap();

        assert_eq!(delivery, Delivery::Pending { displaced: false });
        assert_eq!(publisher.stash().peek(), Some(sample()));
    }

    #[test]
    fn test_second_publish_overwrites_pending() {
        let publisher = DeferredPublisher::new();
        let first = Implementors::from([("ns", ["first"])]);
        let second = Implementors::from([("ns", ["second"])]);

        assert_eq!(
            publisher.publish(first).unwrap(),
            Delivery::Pending { displaced: false }
        );
        let delivery = publisher.publish(second.clone()).unwrap();

        assert_eq!(delivery, Delivery::Pending { displaced: true });
        assert_eq!(publisher.stash().take(), Some(second));
        assert!(publisher.stash().is_empty());
    }

    #[test]
    fn test_failing_hook_propagates_and_skips_stash() {
        let failing = FailingHook::new("bad payload");
        let publisher = DeferredPublisher::with_hook(failing.clone());

        let err = publisher.publish(sample()).unwrap_err();

        assert!(matches!(err, PublishError::Hook(HookError::Rejected(ref r)) if r == "bad payload"));
        assert_eq!(failing.attempts(), 1);
        assert!(publisher.stash().is_empty());
    }

    #[test]
    #[should_panic(expected = "hook exploded")]
    fn test_panicking_hook_unwinds_through_publish() {
        let publisher = DeferredPublisher::with_hook(hook_fn(
            |_: &Implementors| -> Result<(), implreg_core::BoxError> { panic!("hook exploded") },
        ));
        let _ = publisher.publish(sample());
    }

    #[test]
    fn test_attach_drains_pending() {
        let mut publisher = DeferredPublisher::new();
        let _ = publisher.publish(sample()).unwrap();

        let recorder = RecordingHook::new();
        assert!(publisher.attach(recorder.clone()).unwrap());
        assert_eq!(recorder.calls(), vec![sample()]);
        assert!(publisher.stash().is_empty());

        // Later publishes go straight to the hook.
        let delivery = publisher.publish(Implementors::new()).unwrap();
        assert_eq!(delivery, Delivery::Registered);
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn test_attach_with_nothing_pending() {
        let mut publisher = DeferredPublisher::<Implementors>::new();
        assert!(!publisher.attach(RecordingHook::<Implementors>::new()).unwrap());
        assert!(publisher.has_hook());
    }

    #[test]
    fn test_set_hook_does_not_drain() {
        let mut publisher = DeferredPublisher::new();
        let _ = publisher.publish(sample()).unwrap();

        let recorder = RecordingHook::new();
        assert!(publisher.set_hook(recorder.clone()).is_none());

        assert_eq!(recorder.count(), 0);
        assert_eq!(publisher.stash().peek(), Some(sample()));

        let next = Implementors::from([("ns", ["c"])]);
        assert_eq!(publisher.publish(next.clone()).unwrap(), Delivery::Registered);
        assert_eq!(recorder.calls(), vec![next]);
        assert_eq!(publisher.stash().peek(), Some(sample()));
    }

    #[test]
    fn test_clear_hook_returns_to_buffering() {
        let recorder = RecordingHook::new();
        let mut publisher = DeferredPublisher::with_hook(recorder.clone());
        assert!(publisher.clear_hook().is_some());

        let delivery = publisher.publish(sample()).unwrap();
        assert!(delivery.is_pending());
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_builder_with_discard_stash() {
        let publisher = DeferredPublisher::<Implementors>::builder()
            .name("discarding")
            .stash(DiscardStash)
            .build();

        assert_eq!(publisher.name(), "discarding");
        assert_eq!(
            publisher.publish(sample()).unwrap(),
            Delivery::Pending { displaced: false }
        );
    }

    #[test]
    fn test_builder_shares_external_slot() {
        let slot = PendingSlot::new();
        let publisher = DeferredPublisher::<Implementors>::builder()
            .maybe_hook(None::<RecordingHook<Implementors>>)
            .stash(slot.clone())
            .build();

        let _ = publisher.publish(sample()).unwrap();
        assert_eq!(slot.take(), Some(sample()));
    }
}
