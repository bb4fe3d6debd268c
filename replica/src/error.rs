//! Provider errors.

use thiserror::Error;

use crate::duplicable::DuplicateError;

/// Errors raised by object providers.
///
/// `InvalidArgument` comes from construction and is never retried; `DuplicationFailed` comes
/// from a request and keeps the prototype's own error as its [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider was given an unusable argument at construction.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The prototype's duplication operation returned an error.
    #[error("Attempt to duplicate object of type {type_name} failed")]
    DuplicationFailed {
        type_name: &'static str,
        #[source]
        source: DuplicateError,
    },
}

impl ProviderError {
    /// Builds a [`ProviderError::DuplicationFailed`] naming `T`.
    pub fn duplication_failed<T: ?Sized>(source: DuplicateError) -> Self {
        ProviderError::DuplicationFailed {
            type_name: std::any::type_name::<T>(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn duplication_failed_names_type_and_keeps_cause() {
        let err = ProviderError::duplication_failed::<Vec<u8>>("disk on fire".into());
        let msg = err.to_string();
        assert!(msg.contains("Vec<u8>"), "{msg}");
        assert!(msg.contains("failed"), "{msg}");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk on fire"));
    }

    #[test]
    fn invalid_argument_display() {
        let err = ProviderError::InvalidArgument("prototype cannot be None".into());
        assert_eq!(err.to_string(), "Invalid argument: prototype cannot be None");
    }
}
