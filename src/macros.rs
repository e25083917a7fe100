//! Utility macros for common patterns across the crate
//!
//! Handlers, configurers and adapted callables all hold boxed closures, which don't
//! implement `Debug`. These macros keep those `Debug` impls from being written by hand.

/// Implement Debug for a type holding closure fields
///
/// Closure fields are rendered as the string `"<closure>"`, the remaining listed fields
/// use their own `Debug` impl.
///
/// ```ignore
/// debug_with_closures!(Configurer<O, X> { pre_action: closure; handler, types });
/// ```
macro_rules! debug_with_closures {
    // Pattern: Name<G1, G2> { closure_field: closure, ...; field1, field2 }
    ($name:ident $(<$($gen:ident),+ $(,)?>)? {
        $($closure_field:ident: closure),+ $(,)?
        $(; $($field:ident),+ $(,)?)?
    }) => {
        impl$(<$($gen),+>)? std::fmt::Debug for $name$(<$($gen),+>)? {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(
                        .field(stringify!($closure_field), &"<closure>")
                    )+
                    $($(
                        .field(stringify!($field), &self.$field)
                    )+)?
                    .finish()
            }
        }
    };
}

pub(crate) use debug_with_closures;

/// Build a `Vec<FailureType>` from a list of error types
///
/// Each entry becomes [`FailureType::of`](crate::FailureType::of), so the list can be
/// handed straight to
/// [`Handler::in_case_of_types`](crate::Handler::in_case_of_types) or
/// [`Configurer::for_types`](crate::Configurer::for_types).
///
/// # Examples
///
/// ```
/// use checked_fn::{failure_types, IntHandler};
///
/// let handler = IntHandler::new()
///     .in_case_of_types(failure_types![std::io::Error, std::fmt::Error])
///     .return_int(5);
///
/// assert_eq!(handler.len(), 1);
/// ```
#[macro_export]
macro_rules! failure_types {
    ($($failure:ty),* $(,)?) => {
        vec![$($crate::FailureType::of::<$failure>()),*]
    };
}
