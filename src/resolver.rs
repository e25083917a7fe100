//! # Failure Resolvers
//!
//! The capability contract every resolution strategy implements.
//!
//! ## Overview
//!
//! A [`Resolver`] answers two questions about a [`Failure`]:
//!
//! - **matches**: can this resolver handle the failure? (pure, no side effects)
//! - **resolve**: produce an outcome for it, or raise a new failure
//!
//! Resolvers are generic over the outcome they produce. The shapes the crate is built
//! around each have an alias and a neutral [`Outcome`]:
//!
//! | Shape     | Outcome     | Neutral value |
//! |-----------|-------------|---------------|
//! | void      | `()`        | `()`          |
//! | boolean   | `bool`      | `false`       |
//! | int       | `i32`       | `0`           |
//! | long      | `i64`       | `0`           |
//! | double    | `f64`       | `NaN`         |
//! | reference | `Option<R>` | `None`        |

use crate::failure::Failure;
use std::sync::Arc;

/// Strategy turning a matched failure into an outcome of type `O`
pub trait Resolver<O> {
    /// Whether this resolver accepts the failure
    fn matches(&self, failure: &Failure) -> bool;

    /// Resolve the failure into an outcome, or raise a new failure
    ///
    /// Only called after [`matches`](Resolver::matches) returned `true` when driven by a
    /// [`Handler`](crate::Handler).
    fn resolve(&self, failure: Failure) -> Result<O, Failure>;
}

impl<O, R> Resolver<O> for &R
where
    R: Resolver<O> + ?Sized,
{
    fn matches(&self, failure: &Failure) -> bool {
        (**self).matches(failure)
    }

    fn resolve(&self, failure: Failure) -> Result<O, Failure> {
        (**self).resolve(failure)
    }
}

impl<O, R> Resolver<O> for Box<R>
where
    R: Resolver<O> + ?Sized,
{
    fn matches(&self, failure: &Failure) -> bool {
        (**self).matches(failure)
    }

    fn resolve(&self, failure: Failure) -> Result<O, Failure> {
        (**self).resolve(failure)
    }
}

impl<O, R> Resolver<O> for Arc<R>
where
    R: Resolver<O> + ?Sized,
{
    fn matches(&self, failure: &Failure) -> bool {
        (**self).matches(failure)
    }

    fn resolve(&self, failure: Failure) -> Result<O, Failure> {
        (**self).resolve(failure)
    }
}

/// Outcome shapes that have a neutral value to fall back on when discarding a failure
pub trait Outcome: Sized {
    fn neutral() -> Self;
}

impl Outcome for () {
    fn neutral() -> Self {}
}

impl Outcome for bool {
    fn neutral() -> Self {
        false
    }
}

impl Outcome for i32 {
    fn neutral() -> Self {
        0
    }
}

impl Outcome for i64 {
    fn neutral() -> Self {
        0
    }
}

impl Outcome for f64 {
    fn neutral() -> Self {
        f64::NAN
    }
}

impl<T> Outcome for Option<T> {
    fn neutral() -> Self {
        None
    }
}

pub type VoidResolver = dyn Resolver<()> + Send + Sync;
pub type BooleanResolver = dyn Resolver<bool> + Send + Sync;
pub type IntResolver = dyn Resolver<i32> + Send + Sync;
pub type LongResolver = dyn Resolver<i64> + Send + Sync;
pub type DoubleResolver = dyn Resolver<f64> + Send + Sync;
pub type ReferenceResolver<R> = dyn Resolver<Option<R>> + Send + Sync;
