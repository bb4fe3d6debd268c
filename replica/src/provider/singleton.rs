//! SingletonProvider: asks an inner provider once and shares the result.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::ObjectProvider;
use crate::error::ProviderError;

/// Provider that lazily produces one instance from `inner` and hands out that instance forever.
///
/// The inner provider is consulted on the first request. If it fails, the error is returned and
/// nothing is cached, so the next request tries again. Once it succeeds, the inner provider is
/// never called again, even under concurrent first requests.
pub struct SingletonProvider<T, P> {
    inner: P,
    instance: OnceCell<Arc<T>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T, P> SingletonProvider<T, P>
where
    P: ObjectProvider<T>,
{
    /// Wraps `inner`; nothing is produced until the first request.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            instance: OnceCell::new(),
            _marker: PhantomData,
        }
    }

    /// Whether the shared instance has been produced yet.
    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

impl<T, P> ObjectProvider<Arc<T>> for SingletonProvider<T, P>
where
    P: ObjectProvider<T>,
{
    fn get_object(&self) -> Result<Arc<T>, ProviderError> {
        let instance = self.instance.get_or_try_init(|| {
            tracing::debug!(
                type_name = std::any::type_name::<T>(),
                "initializing singleton instance"
            );
            self.inner.get_object().map(Arc::new)
        })?;
        Ok(Arc::clone(instance))
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for SingletonProvider<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonProvider")
            .field("inner", &self.inner)
            .field("instance", &self.instance.get())
            .finish()
    }
}
