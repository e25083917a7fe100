//! # Checked Callables
//!
//! Callables that declare their failure type in their signature, and the adapter turning
//! them into plain callables of the same shape.
//!
//! ## Overview
//!
//! A checked callable returns `Result<O, X>`, `X` being its declared failure bound. The
//! [`Checked`] contract adapts it, given a [`Resolver`], into a callable returning plain
//! `O` with the same parameters:
//!
//! ```text
//! Fn(T) -> Result<O, X>   --apply_resolver(resolver)-->   Fn(T) -> O
//! ```
//!
//! On failure the adapted callable hands the failure to the resolver. A failure the
//! resolver raises leaves the callable through [`unchecked::raise`].
//!
//! The shapes themselves ([`CheckedSupplier`], [`CheckedFunction`],
//! [`CheckedBiFunction`] and their aliases) are generated in [`shapes`]; the
//! wrap/invoke/delegate logic lives once in [`recover`].
//!
//! ```rust
//! use checked_fn::{Checked, CheckedFunction};
//!
//! let parse = CheckedFunction::wrap(|input: String| input.parse::<i32>()).return_fallback(-1);
//!
//! let parsed: Vec<i32> = ["1", "two", "3"]
//!     .into_iter()
//!     .map(|input| parse(input.to_string()))
//!     .collect();
//! assert_eq!(parsed, vec![1, -1, 3]);
//! ```

pub mod shapes;
pub mod unchecked;

pub use shapes::*;

use crate::error::MisconfiguredHandler;
use crate::failure::{Failure, FailureBound};
use crate::handler::Handler;
use crate::resolver::{Outcome, Resolver};
use unchecked::RethrowUnchecked;

/// Run the declared failure of a checked call through a resolver
///
/// Successful outcomes pass through. A failure the resolver does not accept becomes an
/// unchecked [`MisconfiguredHandler`].
pub fn recover<O, X, R>(result: Result<O, X>, resolver: &R) -> Result<O, Failure>
where
    X: FailureBound,
    R: Resolver<O> + ?Sized,
{
    match result {
        Ok(outcome) => Ok(outcome),
        Err(declared) => {
            let failure = declared.into_failure();
            if resolver.matches(&failure) {
                resolver.resolve(failure)
            } else {
                Err(Failure::unchecked(MisconfiguredHandler::for_failure(failure)))
            }
        }
    }
}

/// A callable declaring failures of type [`Declared`](Checked::Declared), adaptable
/// into a plain callable of the same shape producing `O`
pub trait Checked<O: 'static>: Sized {
    /// Failure bound declared by the callable
    type Declared: FailureBound;

    /// Plain callable of the same shape, returning `O`
    type Adapted;

    /// Callable of the same shape reporting unresolved failures as `Err`
    type Fallible;

    /// Adapt the callable, resolving its failures with `resolver`
    ///
    /// The adapted callable [raises](unchecked::raise) any failure the resolver does not
    /// turn into an outcome.
    fn apply_resolver<R>(self, resolver: R) -> Self::Adapted
    where
        R: Resolver<O> + Send + Sync + 'static;

    /// Like [`apply_resolver`](Checked::apply_resolver), returning unresolved failures
    /// instead of raising them
    fn try_apply_resolver<R>(self, resolver: R) -> Self::Fallible
    where
        R: Resolver<O> + Send + Sync + 'static;

    /// Run a side effect on every failure, then produce the neutral outcome
    fn handle_failure<F>(self, side_effect: F) -> Self::Adapted
    where
        F: Fn(&Self::Declared) + Send + Sync + 'static,
        O: Outcome,
    {
        self.apply_resolver(
            Handler::<O>::new()
                .in_case_of::<Self::Declared>()
                .handle(side_effect)
                .discard(),
        )
    }

    /// Raise the failure derived from every declared failure, as an unchecked failure
    fn rethrow_as<F, E>(self, mapper: F) -> Self::Adapted
    where
        F: Fn(Self::Declared) -> E + Send + Sync + 'static,
        E: Into<Failure>,
    {
        self.apply_resolver(Handler::<O>::new().in_case_of::<Self::Declared>().rethrow(mapper))
    }

    /// Swallow every failure, producing the neutral outcome
    fn discard(self) -> Self::Adapted
    where
        O: Outcome,
    {
        self.apply_resolver(Handler::<O>::new().in_case_of::<Self::Declared>().discard())
    }

    fn supply_fallback<F>(self, supplier: F) -> Self::Adapted
    where
        F: Fn() -> O + Send + Sync + 'static,
    {
        self.apply_resolver(Handler::<O>::new().in_case_of::<Self::Declared>().supply(supplier))
    }

    fn return_fallback(self, value: O) -> Self::Adapted
    where
        O: Clone + Send + Sync,
    {
        self.apply_resolver(
            Handler::<O>::new()
                .in_case_of::<Self::Declared>()
                .return_value(value),
        )
    }

    /// Adapt with the default strategy: unchecked failures pass through, checked ones are
    /// wrapped in an [`UnhandledCheckedFailure`](crate::UnhandledCheckedFailure)
    fn unchecked(self) -> Self::Adapted {
        self.apply_resolver(RethrowUnchecked)
    }
}
