//! # implreg - Deferred Implementor Registration
//!
//! `implreg` delivers a statically known payload, such as the list of types
//! implementing a trait grouped by crate, to a registration hook that may or
//! may not exist yet. When the hook is present it is called directly; when it
//! is not, the payload waits in a single-slot mailbox for a consumer that
//! arrives later.
//!
//! ## Quick Start
//!
//! ```rust
//! use implreg::{DeferredPublisher, implementors, testing::RecordingHook};
//!
//! // Producer runs first: the payload is buffered.
//! let mut publisher = DeferredPublisher::new();
//! let delivery = publisher.publish(implementors! { "ns" => ["a", "b"] }).unwrap();
//! assert!(delivery.is_pending());
//!
//! // Consumer shows up and drains it.
//! let index = RecordingHook::new();
//! assert!(publisher.attach(index.clone()).unwrap());
//! assert_eq!(index.count(), 1);
//! ```
//!
//! ## Ambient Mode
//!
//! Code that cannot be handed a publisher uses the process-wide pair in
//! [`global`].
//!
//! ## Features
//!
//! - `tracing`: log delivery paths and hook failures through `tracing`
//! - `inventory`: collect fragments submitted with [`submit_implementors!`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use implreg_core::{
    // Error types
    BoxError,
    // Stash
    Delivery,
    DiscardStash,
    // Hook
    FnHook,
    HookError,
    // Payload
    Implementors,
    InfallibleFn,
    Payload,
    PublishError,
    RegistrationHook,
    Stash,
    hook_fn,
    infallible_fn,
};

pub use implreg_std::PendingSlot;

mod macros;
mod publisher;

pub mod global;

pub use publisher::{DeferredPublisher, PublisherBuilder, SharedHook};

/// Standard hook implementations.
pub mod hooks {
    pub use implreg_std::hooks::LoggingHook;
}

/// Testing utilities.
pub mod testing {
    pub use implreg_std::testing::{FailingHook, RecordingHook};
}

/// Link-time fragment collection.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use implreg_std::collected::{SubmittedImplementors, collect_submitted};
}

#[cfg(feature = "inventory")]
#[doc(hidden)]
pub use implreg_std::inventory;

/// Prelude module - common imports for implreg.
///
/// # Usage
///
/// ```rust,ignore
/// use implreg::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DeferredPublisher, Delivery, Implementors, Payload, PendingSlot, PublishError,
        RegistrationHook, implementors,
    };
}
