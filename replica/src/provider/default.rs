//! DefaultProvider: builds a new `T::default()` per request.

use std::fmt;
use std::marker::PhantomData;

use super::ObjectProvider;
use crate::error::ProviderError;

/// Provider that constructs a fresh `T` through `Default` on every request.
pub struct DefaultProvider<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Default> DefaultProvider<T> {
    /// Creates a new DefaultProvider.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Default> Default for DefaultProvider<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DefaultProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultProvider")
            .field("type_name", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: Default> ObjectProvider<T> for DefaultProvider<T> {
    fn get_object(&self) -> Result<T, ProviderError> {
        Ok(T::default())
    }
}
