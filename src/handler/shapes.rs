//! Per-shape terminal aliases.
//!
//! Every shape shares the generic terminals of [`Configurer`]; the aliases below name the
//! outcome in the method, e.g. `return_boolean(true)` or `map_to_int(..)`, and the
//! reference shape wraps plain values into `Some`.

use super::{Configurer, Handler};
use crate::failure::FailureBound;

macro_rules! primitive_terminals {
    ($outcome:ty => $map_to:ident, $supply:ident, $constant:ident) => {
        impl<X> Configurer<$outcome, X>
        where
            X: FailureBound,
        {
            #[doc = concat!("Resolve to the `", stringify!($outcome), "` computed from the failure")]
            pub fn $map_to<F>(self, mapper: F) -> Handler<$outcome>
            where
                F: Fn(X) -> $outcome + Send + Sync + 'static,
            {
                self.map_to(mapper)
            }

            #[doc = concat!("Resolve to a freshly supplied `", stringify!($outcome), "`")]
            pub fn $supply<F>(self, supplier: F) -> Handler<$outcome>
            where
                F: Fn() -> $outcome + Send + Sync + 'static,
            {
                self.supply(supplier)
            }

            #[doc = concat!("Resolve to a constant `", stringify!($outcome), "`")]
            pub fn $constant(self, value: $outcome) -> Handler<$outcome> {
                self.return_value(value)
            }
        }
    };
}

primitive_terminals!(bool => map_to_boolean, supply_boolean, return_boolean);
primitive_terminals!(i32 => map_to_int, supply_int, return_int);
primitive_terminals!(i64 => map_to_long, supply_long, return_long);
primitive_terminals!(f64 => map_to_double, supply_double, return_double);

impl<R, X> Configurer<Option<R>, X>
where
    R: Send + Sync + 'static,
    X: FailureBound,
{
    /// Resolve to `Some` value computed from the failure
    pub fn map_to_some<F>(self, mapper: F) -> Handler<Option<R>>
    where
        F: Fn(X) -> R + Send + Sync + 'static,
    {
        self.map_to(move |failure| Some(mapper(failure)))
    }

    pub fn supply_some<F>(self, supplier: F) -> Handler<Option<R>>
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.supply(move || Some(supplier()))
    }

    pub fn return_some(self, value: R) -> Handler<Option<R>>
    where
        R: Clone,
    {
        self.return_value(Some(value))
    }
}
