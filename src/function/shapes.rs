//! Checked callable shapes by arity, plus the named aliases built on them.
//!
//! | Shape                  | Wraps                          | Adapted as          |
//! |------------------------|--------------------------------|---------------------|
//! | [`CheckedSupplier`]    | `Fn() -> Result<O, X>`         | `Fn() -> O`         |
//! | [`CheckedFunction`]    | `Fn(T) -> Result<O, X>`        | `Fn(T) -> O`        |
//! | [`CheckedBiFunction`]  | `Fn(T, U) -> Result<O, X>`     | `Fn(T, U) -> O`     |
//!
//! Consumers, predicates, operators and typed suppliers are aliases fixing the outcome
//! or parameter types, e.g. [`CheckedPredicate`] is a [`CheckedFunction`] producing `bool`.
//! A reference-shaped callable that should support [`discard`](super::Checked::discard)
//! produces `Option<R>`.

use super::unchecked::or_raise;
use super::{recover, Checked};
use crate::failure::{Failure, FailureBound};
use crate::macros::debug_with_closures;
use crate::resolver::Resolver;
use std::marker::PhantomData;

macro_rules! checked_shape {
    ($(#[$meta:meta])* $name:ident($($arg:ident: $param:ident),*)) => {
        $(#[$meta])*
        pub struct $name<F, $($param,)* O, X> {
            function: F,
            shape: PhantomData<fn($($param),*) -> Result<O, X>>,
        }

        debug_with_closures!($name<F, $($param,)* O, X> { function: closure });

        impl<F, $($param,)* O, X> $name<F, $($param,)* O, X>
        where
            F: Fn($($param),*) -> Result<O, X>,
        {
            /// Wrap a closure or function declaring failures of type `X`
            pub fn wrap(function: F) -> Self {
                Self {
                    function,
                    shape: PhantomData,
                }
            }

            /// Invoke the wrapped callable, exposing its declared failure
            pub fn call_checked(&self, $($arg: $param),*) -> Result<O, X> {
                (self.function)($($arg),*)
            }

            pub fn into_inner(self) -> F {
                self.function
            }
        }

        impl<F, $($param,)* O, X> Checked<O> for $name<F, $($param,)* O, X>
        where
            F: Fn($($param),*) -> Result<O, X> + Send + Sync + 'static,
            $($param: 'static,)*
            O: 'static,
            X: FailureBound,
        {
            type Declared = X;
            type Adapted = Box<dyn Fn($($param),*) -> O + Send + Sync>;
            type Fallible = Box<dyn Fn($($param),*) -> Result<O, Failure> + Send + Sync>;

            fn apply_resolver<R>(self, resolver: R) -> Self::Adapted
            where
                R: Resolver<O> + Send + Sync + 'static,
            {
                let function = self.function;
                Box::new(move |$($arg: $param),*| or_raise(recover(function($($arg),*), &resolver)))
            }

            fn try_apply_resolver<R>(self, resolver: R) -> Self::Fallible
            where
                R: Resolver<O> + Send + Sync + 'static,
            {
                let function = self.function;
                Box::new(move |$($arg: $param),*| recover(function($($arg),*), &resolver))
            }
        }
    };
}

checked_shape! {
    /// Zero-argument checked callable
    CheckedSupplier()
}

checked_shape! {
    /// One-argument checked callable
    CheckedFunction(t: T)
}

checked_shape! {
    /// Two-argument checked callable
    CheckedBiFunction(t: T, u: U)
}

pub type CheckedRunnable<F, X> = CheckedSupplier<F, (), X>;
pub type CheckedBooleanSupplier<F, X> = CheckedSupplier<F, bool, X>;
pub type CheckedIntSupplier<F, X> = CheckedSupplier<F, i32, X>;
pub type CheckedLongSupplier<F, X> = CheckedSupplier<F, i64, X>;
pub type CheckedDoubleSupplier<F, X> = CheckedSupplier<F, f64, X>;

pub type CheckedConsumer<F, T, X> = CheckedFunction<F, T, (), X>;
pub type CheckedIntConsumer<F, X> = CheckedFunction<F, i32, (), X>;
pub type CheckedLongConsumer<F, X> = CheckedFunction<F, i64, (), X>;
pub type CheckedDoubleConsumer<F, X> = CheckedFunction<F, f64, (), X>;

pub type CheckedPredicate<F, T, X> = CheckedFunction<F, T, bool, X>;
pub type CheckedIntPredicate<F, X> = CheckedFunction<F, i32, bool, X>;
pub type CheckedLongPredicate<F, X> = CheckedFunction<F, i64, bool, X>;
pub type CheckedDoublePredicate<F, X> = CheckedFunction<F, f64, bool, X>;

pub type CheckedToIntFunction<F, T, X> = CheckedFunction<F, T, i32, X>;
pub type CheckedToLongFunction<F, T, X> = CheckedFunction<F, T, i64, X>;
pub type CheckedToDoubleFunction<F, T, X> = CheckedFunction<F, T, f64, X>;
pub type CheckedIntFunction<F, R, X> = CheckedFunction<F, i32, R, X>;

pub type CheckedUnaryOperator<F, T, X> = CheckedFunction<F, T, T, X>;
pub type CheckedIntUnaryOperator<F, X> = CheckedFunction<F, i32, i32, X>;
pub type CheckedLongUnaryOperator<F, X> = CheckedFunction<F, i64, i64, X>;
pub type CheckedDoubleUnaryOperator<F, X> = CheckedFunction<F, f64, f64, X>;

pub type CheckedBiConsumer<F, T, U, X> = CheckedBiFunction<F, T, U, (), X>;
pub type CheckedObjIntConsumer<F, T, X> = CheckedBiFunction<F, T, i32, (), X>;
pub type CheckedBiPredicate<F, T, U, X> = CheckedBiFunction<F, T, U, bool, X>;
pub type CheckedToIntBiFunction<F, T, U, X> = CheckedBiFunction<F, T, U, i32, X>;
pub type CheckedToLongBiFunction<F, T, U, X> = CheckedBiFunction<F, T, U, i64, X>;
pub type CheckedToDoubleBiFunction<F, T, U, X> = CheckedBiFunction<F, T, U, f64, X>;

pub type CheckedBinaryOperator<F, T, X> = CheckedBiFunction<F, T, T, T, X>;
pub type CheckedIntBinaryOperator<F, X> = CheckedBiFunction<F, i32, i32, i32, X>;
pub type CheckedLongBinaryOperator<F, X> = CheckedBiFunction<F, i64, i64, i64, X>;
pub type CheckedDoubleBinaryOperator<F, X> = CheckedBiFunction<F, f64, f64, f64, X>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::unchecked::catch_unchecked;
    use crate::handler::IntHandler;
    use std::io;

    fn divide(dividend: i32, divisor: i32) -> Result<i32, io::Error> {
        if divisor == 0 {
            Err(io::Error::new(io::ErrorKind::InvalidInput, "division by zero"))
        } else {
            Ok(dividend / divisor)
        }
    }

    #[test]
    fn test_call_checked_exposes_declared_failure() {
        let function = CheckedIntBinaryOperator::wrap(divide);

        assert_eq!(function.call_checked(6, 3).ok(), Some(2));
        assert_eq!(
            function.call_checked(6, 0).map_err(|error| error.kind()),
            Err(io::ErrorKind::InvalidInput)
        );
    }

    #[test]
    fn test_apply_resolver_keeps_shape() {
        let handler = IntHandler::new().in_case_of::<io::Error>().return_int(-1);
        let adapted = CheckedBiFunction::wrap(divide).apply_resolver(handler);

        assert_eq!(adapted(6, 3), 2);
        assert_eq!(adapted(6, 0), -1);
    }

    #[test]
    fn test_try_apply_resolver_reports_unresolved_failure() {
        let adapted = CheckedBiFunction::wrap(divide).try_apply_resolver(IntHandler::new());

        assert_eq!(adapted(6, 3).ok(), Some(2));
        assert!(adapted(6, 0).is_err());
    }

    #[test]
    fn test_unchecked_raises_wrapped_failure() {
        let adapted = CheckedRunnable::wrap(|| Err(io::Error::other("io"))).unchecked();

        let failure = catch_unchecked(|| adapted()).unwrap_err();
        assert!(failure.is::<crate::error::UnhandledCheckedFailure>());
    }

    #[test]
    fn test_debug_hides_wrapped_callable() {
        let function = CheckedIntSupplier::wrap(|| Ok::<_, io::Error>(1));

        assert_eq!(format!("{function:?}"), r#"CheckedSupplier { function: "<closure>" }"#);
        assert_eq!(function.into_inner()().ok(), Some(1));
    }
}
