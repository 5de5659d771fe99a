//! Error types for implreg.
//!
//! A hook being absent is never an error; the only failure a publish can
//! report is the hook refusing or failing on the payload.
//!
//! - [`PublishError`] - Top-level error type for publish operations
//! - [`HookError`] - Errors from individual registration hooks

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for publish operations.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The registration hook failed while handling the payload.
    #[error("registration hook failed: {0}")]
    Hook(#[from] HookError),
}

/// Errors raised by a registration hook.
#[derive(Error, Debug)]
pub enum HookError {
    /// The hook refused the payload.
    #[error("payload rejected: {0}")]
    Rejected(String),

    /// A custom hook error.
    #[error(transparent)]
    Custom(BoxError),
}

impl HookError {
    /// Builds a [`HookError::Rejected`] from any displayable reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        HookError::Rejected(reason.into())
    }
}

// Convenience conversions
impl From<BoxError> for HookError {
    fn from(err: BoxError) -> Self {
        // Hooks that already produced a HookError get it back unchanged.
        match err.downcast::<HookError>() {
            Ok(hook_err) => *hook_err,
            Err(other) => HookError::Custom(other),
        }
    }
}

impl From<BoxError> for PublishError {
    fn from(err: BoxError) -> Self {
        PublishError::Hook(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_hook_error_is_unwrapped() {
        let boxed: BoxError = Box::new(HookError::rejected("bad shape"));
        let err = HookError::from(boxed);
        assert!(matches!(err, HookError::Rejected(ref r) if r == "bad shape"));
    }

    #[test]
    fn test_foreign_error_becomes_custom() {
        let boxed: BoxError = "boom".into();
        let err = PublishError::from(boxed);
        assert!(matches!(err, PublishError::Hook(HookError::Custom(_))));
        assert_eq!(err.to_string(), "registration hook failed: boom");
    }
}
