//! # Unchecked Failures
//!
//! Adapted callables keep their plain signatures (`Fn(T) -> O`), so a failure that no
//! strategy turns into an outcome has to leave them some other way. It is raised as an
//! unwinding panic whose payload is the [`Failure`] itself:
//!
//! - [`raise`] starts the unwind
//! - [`catch_unchecked`] turns it back into a `Result`, resuming any other panic untouched
//!
//! The default strategy, [`rethrow_unchecked`], lets unchecked failures through as they are
//! and wraps checked ones in an [`UnhandledCheckedFailure`].
//!
//! Binaries built with `panic = "abort"` cannot catch raised failures.

use crate::error::UnhandledCheckedFailure;
use crate::failure::Failure;
use crate::logging;
use crate::resolver::Resolver;
use std::panic::{self, AssertUnwindSafe};

/// Default strategy applied to a failure with no explicit resolution
///
/// An unchecked failure is returned unchanged; a checked one is wrapped in an unchecked
/// [`UnhandledCheckedFailure`] keeping the original as its source.
pub fn rethrow_unchecked(failure: Failure) -> Failure {
    if failure.is_unchecked() {
        failure
    } else {
        Failure::unchecked(UnhandledCheckedFailure::new(failure))
    }
}

/// Resolver applying [`rethrow_unchecked`] to every failure, whatever the outcome shape
#[derive(Debug, Clone, Copy, Default)]
pub struct RethrowUnchecked;

impl<O> Resolver<O> for RethrowUnchecked {
    fn matches(&self, _failure: &Failure) -> bool {
        true
    }

    fn resolve(&self, failure: Failure) -> Result<O, Failure> {
        Err(rethrow_unchecked(failure))
    }
}

/// Raise the failure out of a non-throwing callable
pub fn raise(failure: Failure) -> ! {
    logging::log_raise(failure.type_name(), &failure.category().to_string());
    panic::panic_any(failure)
}

/// Unwrap an outcome, raising the failure if there is none
pub fn or_raise<O>(result: Result<O, Failure>) -> O {
    match result {
        Ok(outcome) => outcome,
        Err(failure) => raise(failure),
    }
}

/// Run `f`, catching a failure raised inside it
///
/// Panics that don't carry a [`Failure`] keep unwinding.
pub fn catch_unchecked<T, F>(f: F) -> Result<T, Failure>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Failure>() {
            Ok(failure) => Err(*failure),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unchecked_failure_passes_through() {
        let failure = rethrow_unchecked(Failure::unchecked(io::Error::other("io")));

        assert!(failure.is_unchecked());
        assert!(failure.is::<io::Error>());
    }

    #[test]
    fn test_checked_failure_is_wrapped() {
        let failure = rethrow_unchecked(Failure::new(io::Error::other("io")));

        assert!(failure.is_unchecked());
        let wrapper = failure
            .downcast_ref::<UnhandledCheckedFailure>()
            .expect("should be wrapped");
        assert_eq!(wrapper.type_name(), "std::io::error::Error");
        let cause = std::error::Error::source(wrapper).expect("cause should be kept");
        assert!(cause.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_rethrow_unchecked_resolver_matches_everything() {
        let resolver = RethrowUnchecked;

        assert!(Resolver::<i32>::matches(&resolver, &Failure::msg("x")));
        let failure = Resolver::<i32>::resolve(&resolver, Failure::msg("x")).unwrap_err();
        assert!(failure.is::<UnhandledCheckedFailure>());
    }

    #[test]
    fn test_catch_unchecked_round_trips_raised_failure() {
        let caught = catch_unchecked(|| -> i32 { raise(Failure::unchecked(std::fmt::Error)) });

        let failure = caught.unwrap_err();
        assert!(failure.is::<std::fmt::Error>());
        assert_eq!(catch_unchecked(|| or_raise(Ok::<_, Failure>(5))).ok(), Some(5));
    }

    #[test]
    fn test_foreign_panics_keep_unwinding() {
        let outer = panic::catch_unwind(|| catch_unchecked(|| panic!("not a failure")));

        let payload = outer.expect_err("panic should escape");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"not a failure"));
    }
}
