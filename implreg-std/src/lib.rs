//! # implreg-std
//!
//! Standard implementations for the implreg deferred registration shim.
//!
//! This crate provides:
//! - **Pending slot**: [`PendingSlot`], the single-item mailbox used when no hook is present
//! - **Standard hooks**: Logging
//! - **Testing utilities**: [`testing::RecordingHook`], [`testing::FailingHook`]
//! - **Static collection**: fragments submitted through `inventory` (feature `inventory`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use implreg_core;

// Modules
#[cfg(feature = "inventory")]
pub mod collected;
pub mod hooks;
pub mod pending;
pub mod testing;

pub use pending::PendingSlot;

#[cfg(feature = "inventory")]
pub use inventory;
