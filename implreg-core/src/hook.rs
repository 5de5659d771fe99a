//! # Registration Hook
//!
//! The consumer side of a publish: a function of one argument that takes the
//! payload and folds it into whatever larger system owns it (a search index,
//! a display list). Hooks run synchronously and are called at most once per
//! publish.
//!
//! A hook that returns `Err` makes the publish fail. A hook that panics
//! unwinds straight through the publisher; nothing isolates it.

use crate::{error::BoxError, payload::Payload};
use std::sync::Arc;

/// A consumer that accepts a published payload.
///
/// The trait is object safe; publishers hold hooks as
/// `Arc<dyn RegistrationHook<P>>`.
///
/// # Example
///
/// ```rust,ignore
/// struct Index { .. }
///
/// impl RegistrationHook<Implementors> for Index {
///     fn register(&self, payload: &Implementors) -> Result<(), BoxError> {
///         for (ns, entries) in payload.iter() { .. }
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `RegistrationHook<{P}>`",
    label = "missing `RegistrationHook` implementation",
    note = "Hooks must implement `register` for the payload type `{P}`, or be wrapped with `hook_fn`."
)]
pub trait RegistrationHook<P: Payload>: Send + Sync + 'static {
    /// Called with the payload being published.
    fn register(&self, payload: &P) -> Result<(), BoxError>;
}

impl<P: Payload, H: RegistrationHook<P> + ?Sized> RegistrationHook<P> for Arc<H> {
    fn register(&self, payload: &P) -> Result<(), BoxError> {
        (**self).register(payload)
    }
}

impl<P: Payload, H: RegistrationHook<P> + ?Sized> RegistrationHook<P> for Box<H> {
    fn register(&self, payload: &P) -> Result<(), BoxError> {
        (**self).register(payload)
    }
}

/// Hook adapter for fallible closures. See [`hook_fn`].
#[derive(Clone, Copy)]
pub struct FnHook<F>(F);

/// Wraps `Fn(&P) -> Result<(), BoxError>` as a [`RegistrationHook`].
pub fn hook_fn<P, F>(f: F) -> FnHook<F>
where
    P: Payload,
    F: Fn(&P) -> Result<(), BoxError> + Send + Sync + 'static,
{
    FnHook(f)
}

impl<P, F> RegistrationHook<P> for FnHook<F>
where
    P: Payload,
    F: Fn(&P) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn register(&self, payload: &P) -> Result<(), BoxError> {
        (self.0)(payload)
    }
}

/// Hook adapter for closures that cannot fail. See [`infallible_fn`].
#[derive(Clone, Copy)]
pub struct InfallibleFn<F>(F);

/// Wraps `Fn(&P)` as a [`RegistrationHook`] that always succeeds.
pub fn infallible_fn<P, F>(f: F) -> InfallibleFn<F>
where
    P: Payload,
    F: Fn(&P) + Send + Sync + 'static,
{
    InfallibleFn(f)
}

impl<P, F> RegistrationHook<P> for InfallibleFn<F>
where
    P: Payload,
    F: Fn(&P) + Send + Sync + 'static,
{
    fn register(&self, payload: &P) -> Result<(), BoxError> {
        (self.0)(payload);
        Ok(())
    }
}
