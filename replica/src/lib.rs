//! # Replica
//!
//! Object providers: small strategies that hand out a `T` on demand. The centrepiece is
//! [`CloningProvider`], which is given one prototype at setup time and answers every request
//! with a fresh duplicate of it, produced by the prototype's own [`Duplicable::duplicate`].
//!
//! ## Design principles
//!
//! - **One interface, many variants**: every strategy implements [`ObjectProvider`]; callers
//!   hold a `Box<dyn ObjectProvider<T>>` or a generic `P: ObjectProvider<T>` and never care which.
//! - **Capability by trait**: a prototype is duplicable because its type implements
//!   [`Duplicable`] (or `Clone`, via [`CloningProvider::from_clone`]). There is no runtime probe.
//! - **Immutable prototype**: providers only read what they were built with; a failed request
//!   leaves the provider usable.
//!
//! ## Main modules
//!
//! - [`provider`]: [`ObjectProvider`] and its variants [`CloningProvider`], [`ConstantProvider`],
//!   [`DefaultProvider`], [`SingletonProvider`].
//! - [`duplicable`]: [`Duplicable`], [`DuplicateError`].
//! - [`error`]: [`ProviderError`].
//!
//! ## Quick start
//!
//! ```rust
//! use replica::{CloningProvider, Duplicable, DuplicateError, ObjectProvider};
//!
//! #[derive(Debug, PartialEq)]
//! struct Ticket {
//!     value: u32,
//! }
//!
//! impl Duplicable for Ticket {
//!     fn duplicate(&self) -> Result<Self, DuplicateError> {
//!         Ok(Ticket { value: self.value })
//!     }
//! }
//!
//! let provider = CloningProvider::new(Ticket { value: 42 });
//! let a = provider.get_object().unwrap();
//! let b = provider.get_object().unwrap();
//! assert_eq!(a, Ticket { value: 42 });
//! assert_eq!(a, b);
//! ```

pub mod duplicable;
pub mod error;
pub mod provider;

pub use duplicable::{Duplicable, DuplicateError};
pub use error::ProviderError;
pub use provider::{
    CloningProvider, ConstantProvider, DefaultProvider, ObjectProvider, SingletonProvider,
};
