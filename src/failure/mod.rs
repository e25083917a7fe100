//! # Failures
//!
//! The dynamic failure value that flows through handlers and resolvers, plus the
//! descriptors used to match it.
//!
//! ## Overview
//!
//! A [`Failure`] wraps any `std::error::Error` behind an [`anyhow::Error`], remembering
//! the concrete type name it was built from and whether it belongs to the *checked*
//! (declared by a callable) or *unchecked* (already escalated) [`Category`].
//!
//! Matching happens through two seams:
//!
//! - [`FailureType`] - a named descriptor (exact type, family of types, or predicate)
//! - [`FailureBound`] - the type-level bound a configurer narrows failures to
//!
//! ```rust
//! use checked_fn::{Failure, FailureType};
//! use std::io;
//!
//! let failure = Failure::new(io::Error::new(io::ErrorKind::Interrupted, "signal"));
//!
//! assert!(FailureType::of::<io::Error>().matches(&failure));
//! assert!(FailureType::io_kind(io::ErrorKind::Interrupted).matches(&failure));
//! assert!(!failure.is_unchecked());
//! ```

pub mod bound;
pub mod failure_type;

pub use bound::FailureBound;
pub use failure_type::FailureType;

use crate::error::BoxError;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};
use std::ops::Deref;

/// Whether a failure is still declared by its callable or was already escalated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Declared failure, expected to be resolved by the caller
    Checked,

    /// Escalated failure, passes through the default strategy untouched
    Unchecked,
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Checked => write!(f, "checked"),
            Category::Unchecked => write!(f, "unchecked"),
        }
    }
}

/// A failure raised by a checked callable or by a resolver
///
/// Like [`anyhow::Error`], `Failure` does not implement `std::error::Error` itself, so
/// that every error type converts into it with `?`. It dereferences to
/// `dyn Error + Send + Sync + 'static` for source chains and downcasting.
pub struct Failure {
    inner: anyhow::Error,
    type_name: &'static str,
    category: Category,
}

impl Failure {
    /// Create a checked failure from any error value
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: anyhow::Error::new(error),
            type_name: std::any::type_name::<E>(),
            category: Category::Checked,
        }
    }

    /// Create an unchecked failure from any error value
    pub fn unchecked<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::new(error).into_unchecked()
    }

    /// Create a checked failure from a plain message
    pub fn msg<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            inner: anyhow::Error::msg(message),
            type_name: std::any::type_name::<M>(),
            category: Category::Checked,
        }
    }

    /// Adopt an existing `anyhow::Error` as a checked failure
    ///
    /// The concrete type behind the `anyhow::Error` is erased, so [`type_name`](Self::type_name)
    /// and any `MisconfiguredHandler` built from this failure report `anyhow::Error`.
    /// Downcasting and type matching still reach the wrapped error.
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self {
            inner: error,
            type_name: std::any::type_name::<anyhow::Error>(),
            category: Category::Checked,
        }
    }

    /// Mark this failure as unchecked
    pub fn into_unchecked(mut self) -> Self {
        self.category = Category::Unchecked;
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_unchecked(&self) -> bool {
        self.category == Category::Unchecked
    }

    /// Concrete type name the failure was built from
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the underlying error (or any context layered on it) is an `E`
    pub fn is<E>(&self) -> bool
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.inner.is::<E>()
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Take the underlying error out by value, or get the failure back unchanged
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        let Self {
            inner,
            type_name,
            category,
        } = self;

        inner.downcast::<E>().map_err(|inner| Self {
            inner,
            type_name,
            category,
        })
    }

    /// Layer a context message on top of the failure, keeping its type and category
    pub fn context<C>(self, context: C) -> Self
    where
        C: Display + Send + Sync + 'static,
    {
        Self {
            inner: self.inner.context(context),
            ..self
        }
    }

    /// Iterate over the failure and its chain of sources
    pub fn chain(&self) -> anyhow::Chain<'_> {
        self.inner.chain()
    }

    /// Convert into a boxed standard error, e.g. to serve as another error's source
    pub fn into_boxed(self) -> BoxError {
        self.inner.into()
    }

    pub fn into_inner(self) -> anyhow::Error {
        self.inner
    }
}

impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Failure::new(error)
    }
}

impl Deref for Failure {
    type Target = dyn StdError + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("type_name", &self.type_name)
            .field("category", &self.category)
            .field("error", &format_args!("{:#}", self.inner))
            .finish()
    }
}
