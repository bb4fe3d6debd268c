//! The duplication capability handed to [`CloningProvider`](crate::CloningProvider).

/// Error a [`Duplicable::duplicate`] implementation may return.
pub type DuplicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A value that can produce an independent copy of itself.
///
/// The copy has the same type and equivalent state at the moment of the call. Whether the copy
/// is shallow or deep is the implementing type's business; providers make no claim about it.
///
/// Types that are plain `Clone` do not need this trait: use
/// [`CloningProvider::from_clone`](crate::CloningProvider::from_clone).
pub trait Duplicable: Sized {
    /// Produces a new value equivalent to `self`.
    fn duplicate(&self) -> Result<Self, DuplicateError>;
}

impl<T: Duplicable> Duplicable for Box<T> {
    fn duplicate(&self) -> Result<Self, DuplicateError> {
        Ok(Box::new((**self).duplicate()?))
    }
}

impl<T: Duplicable> Duplicable for Option<T> {
    fn duplicate(&self) -> Result<Self, DuplicateError> {
        self.as_ref().map(Duplicable::duplicate).transpose()
    }
}

/// Duplicates element by element; the first failing element aborts the whole copy.
impl<T: Duplicable> Duplicable for Vec<T> {
    fn duplicate(&self) -> Result<Self, DuplicateError> {
        self.iter().map(Duplicable::duplicate).collect()
    }
}
