//! ConstantProvider: always returns the same shared instance.

use std::sync::Arc;

use super::ObjectProvider;
use crate::error::ProviderError;

/// Provider that returns one shared instance on every request.
///
/// Unlike [`CloningProvider`](super::CloningProvider), no copy is made: every caller gets an
/// `Arc` pointing at the same value.
///
/// ```rust
/// use std::sync::Arc;
/// use replica::{ConstantProvider, ObjectProvider};
///
/// let provider = ConstantProvider::new("shared".to_string());
/// let a = provider.get_object().unwrap();
/// let b = provider.get_object().unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug)]
pub struct ConstantProvider<T> {
    value: Arc<T>,
}

impl<T> ConstantProvider<T> {
    /// Wraps `value` so it can be shared.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(value),
        }
    }

    /// Uses an already shared value.
    pub fn from_arc(value: Arc<T>) -> Self {
        Self { value }
    }
}

impl<T> Clone for ConstantProvider<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> ObjectProvider<Arc<T>> for ConstantProvider<T> {
    fn get_object(&self) -> Result<Arc<T>, ProviderError> {
        Ok(Arc::clone(&self.value))
    }
}
