//! Object providers: strategies that produce a `T` on request.
//!
//! All variants implement [`ObjectProvider`], so callers can swap one for another behind a
//! `Box<dyn ObjectProvider<T>>` or a generic parameter.

mod cloning;
mod constant;
mod default;
mod singleton;

pub use cloning::CloningProvider;
pub use constant::ConstantProvider;
pub use default::DefaultProvider;
pub use singleton::SingletonProvider;

use std::sync::Arc;

use crate::error::ProviderError;

/// Source of objects of type `T`.
///
/// Each call to [`get_object`](ObjectProvider::get_object) is independent; whether it returns a
/// fresh value or a shared one is up to the variant.
pub trait ObjectProvider<T> {
    /// Produces an object, or the reason it could not be produced.
    fn get_object(&self) -> Result<T, ProviderError>;
}

impl<T, P> ObjectProvider<T> for &P
where
    P: ObjectProvider<T> + ?Sized,
{
    fn get_object(&self) -> Result<T, ProviderError> {
        (**self).get_object()
    }
}

impl<T, P> ObjectProvider<T> for Box<P>
where
    P: ObjectProvider<T> + ?Sized,
{
    fn get_object(&self) -> Result<T, ProviderError> {
        (**self).get_object()
    }
}

impl<T, P> ObjectProvider<T> for Arc<P>
where
    P: ObjectProvider<T> + ?Sized,
{
    fn get_object(&self) -> Result<T, ProviderError> {
        (**self).get_object()
    }
}
