//! Type-level bounds a configurer narrows failures to.

use super::{Failure, FailureType};
use std::error::Error as StdError;

/// The failure type a configurer, resolver or checked callable is declared against
///
/// A bound decides whether a [`Failure`] is *admitted* (a `TypeId` check, never an
/// attempted conversion) and how to narrow it back into the declared type once admitted.
///
/// Two kinds of bounds exist:
///
/// - any concrete error type `E` - admits failures whose underlying error is an `E`
/// - [`Failure`] itself - the unconstrained bound, flagged by
///   [`UNCONSTRAINED`](FailureBound::UNCONSTRAINED), admitting everything
pub trait FailureBound: Sized + Send + 'static {
    /// `true` when every failure satisfies this bound
    const UNCONSTRAINED: bool = false;

    /// Name used when reporting the bound itself
    fn bound_name() -> &'static str;

    /// Descriptor a configurer declared against this bound starts out with
    fn failure_type() -> Option<FailureType>;

    /// Whether the failure satisfies this bound
    fn admits(failure: &Failure) -> bool;

    /// Narrow an admitted failure into the declared type
    fn narrow(failure: Failure) -> Result<Self, Failure>;

    /// Widen a declared value into a (checked) failure
    fn into_failure(self) -> Failure;
}

impl FailureBound for Failure {
    const UNCONSTRAINED: bool = true;

    fn bound_name() -> &'static str {
        std::any::type_name::<Failure>()
    }

    fn failure_type() -> Option<FailureType> {
        None
    }

    fn admits(_failure: &Failure) -> bool {
        true
    }

    fn narrow(failure: Failure) -> Result<Self, Failure> {
        Ok(failure)
    }

    fn into_failure(self) -> Failure {
        self
    }
}

impl<E> FailureBound for E
where
    E: StdError + Send + Sync + 'static,
{
    fn bound_name() -> &'static str {
        std::any::type_name::<E>()
    }

    fn failure_type() -> Option<FailureType> {
        Some(FailureType::of::<E>())
    }

    fn admits(failure: &Failure) -> bool {
        failure.is::<E>()
    }

    fn narrow(failure: Failure) -> Result<Self, Failure> {
        failure.downcast::<E>()
    }

    fn into_failure(self) -> Failure {
        Failure::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unconstrained_bound_admits_everything() {
        let failure = Failure::msg("anything");

        assert!(<Failure as FailureBound>::UNCONSTRAINED);
        assert!(<Failure as FailureBound>::failure_type().is_none());
        assert!(<Failure as FailureBound>::admits(&failure));
        assert!(<Failure as FailureBound>::narrow(failure).is_ok());
    }

    #[test]
    fn test_concrete_bound_admits_only_its_type() {
        let io_failure = Failure::new(io::Error::other("io"));
        let fmt_failure = Failure::new(std::fmt::Error);

        assert!(!<io::Error as FailureBound>::UNCONSTRAINED);
        assert_eq!(
            <io::Error as FailureBound>::failure_type(),
            Some(FailureType::of::<io::Error>())
        );
        assert!(<io::Error as FailureBound>::admits(&io_failure));
        assert!(!<io::Error as FailureBound>::admits(&fmt_failure));
    }

    #[test]
    fn test_narrow_returns_failure_unchanged_when_not_admitted() {
        let failure = Failure::unchecked(std::fmt::Error);

        let failure = <io::Error as FailureBound>::narrow(failure).unwrap_err();
        assert!(failure.is_unchecked());
        assert!(failure.is::<std::fmt::Error>());
    }

    #[test]
    fn test_into_failure_is_checked() {
        let failure = io::Error::other("declared").into_failure();

        assert!(!failure.is_unchecked());
        assert_eq!(failure.type_name(), <io::Error as FailureBound>::bound_name());
    }
}
