//! # implreg-core
//!
//! Core traits for the implreg deferred registration shim.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! consumers that only need to implement a hook or name the payload type,
//! without pulling in `implreg-std`.
//!
//! # Two Delivery Paths
//!
//! A payload produced ahead of time reaches its consumer in one of two ways:
//!
//! ## Direct ([`RegistrationHook`])
//!
//! The consumer is already present. The payload is handed to the hook
//! synchronously, once, and the hook's failure (if any) goes back to the
//! publisher's caller.
//!
//! ## Buffered ([`Stash`])
//!
//! The consumer does not exist yet. The payload is parked in a buffering
//! strategy, normally a single-slot mailbox, where a consumer that shows up
//! later may pick it up.
//!
//! # Error Types
//!
//! - [`HookError`] - Errors from registration hooks
//! - [`PublishError`] - Top-level publish error

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hook;
mod payload;
mod stash;

// Re-exports
pub use error::{BoxError, HookError, PublishError};
pub use hook::{FnHook, InfallibleFn, RegistrationHook, hook_fn, infallible_fn};
pub use payload::{Implementors, Payload};
pub use stash::{Delivery, DiscardStash, Stash};
