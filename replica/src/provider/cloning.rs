//! CloningProvider: hands out a fresh duplicate of one prototype per request.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ObjectProvider;
use crate::duplicable::{Duplicable, DuplicateError};
use crate::error::ProviderError;

type DuplicateFn<T> = fn(&T) -> Result<T, DuplicateError>;

/// Provider that answers every request with a duplicate of its prototype.
///
/// The prototype is fixed at construction and never mutated. Duplication is delegated
/// entirely to the prototype's type: [`Duplicable::duplicate`] for [`new`](Self::new), or
/// `Clone::clone` for [`from_clone`](Self::from_clone). The chosen operation is resolved once,
/// at construction.
///
/// A prototype whose type has no duplication capability is rejected by the compiler:
///
/// ```rust,compile_fail
/// use replica::CloningProvider;
///
/// struct Opaque;
///
/// let _ = CloningProvider::new(Opaque);
/// ```
///
/// A failed request does not affect later ones; if the prototype's failure was transient, the
/// next [`get_object`](ObjectProvider::get_object) succeeds.
///
/// Serializes as its prototype; deserializing rebuilds the provider with [`new`](Self::new).
pub struct CloningProvider<T> {
    prototype: T,
    duplicate: DuplicateFn<T>,
}

impl<T: Duplicable> CloningProvider<T> {
    /// Creates a provider that duplicates `prototype` through [`Duplicable::duplicate`].
    pub fn new(prototype: T) -> Self {
        Self {
            prototype,
            duplicate: T::duplicate,
        }
    }
}

impl<T: Clone> CloningProvider<T> {
    /// Creates a provider that duplicates `prototype` through `Clone::clone`.
    ///
    /// Requests on such a provider never fail.
    pub fn from_clone(prototype: T) -> Self {
        Self {
            prototype,
            duplicate: clone_prototype::<T>,
        }
    }

    /// Like [`from_clone`](Self::from_clone), rejecting a missing prototype the same way
    /// `TryFrom<Option<T>>` does for [`Duplicable`] types.
    pub fn from_clone_opt(prototype: Option<T>) -> Result<Self, ProviderError> {
        prototype
            .map(Self::from_clone)
            .ok_or_else(missing_prototype)
    }
}

impl<T> CloningProvider<T> {
    /// The prototype every produced object is copied from.
    pub fn prototype(&self) -> &T {
        &self.prototype
    }
}

fn missing_prototype() -> ProviderError {
    ProviderError::InvalidArgument("prototype cannot be None".to_string())
}

fn clone_prototype<T: Clone>(prototype: &T) -> Result<T, DuplicateError> {
    Ok(prototype.clone())
}

impl<T> ObjectProvider<T> for CloningProvider<T> {
    fn get_object(&self) -> Result<T, ProviderError> {
        let type_name = std::any::type_name::<T>();
        tracing::trace!(type_name, "duplicating prototype");
        (self.duplicate)(&self.prototype).map_err(|source| {
            tracing::debug!(type_name, error = %source, "prototype duplication failed");
            ProviderError::duplication_failed::<T>(source)
        })
    }
}

/// `None` stands in for a missing prototype and is rejected.
impl<T: Duplicable> TryFrom<Option<T>> for CloningProvider<T> {
    type Error = ProviderError;

    fn try_from(prototype: Option<T>) -> Result<Self, Self::Error> {
        prototype.map(Self::new).ok_or_else(missing_prototype)
    }
}

impl<T: fmt::Debug> fmt::Debug for CloningProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloningProvider")
            .field("prototype", &self.prototype)
            .finish_non_exhaustive()
    }
}

impl<T: Serialize> Serialize for CloningProvider<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.prototype.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for CloningProvider<T>
where
    T: Duplicable + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
