//! Builder for a single resolver, registered on its handler by a terminal method.

use super::Handler;
use crate::error::MisconfiguredHandler;
use crate::failure::{Failure, FailureBound, FailureType};
use crate::macros::debug_with_closures;
use crate::resolver::{Outcome, Resolver};
use std::collections::HashSet;

type PreAction<X> = Box<dyn Fn(&X) -> Result<(), Failure> + Send + Sync>;
type Production<O, X> = Box<dyn Fn(X) -> Result<O, Failure> + Send + Sync>;

/// Accumulates the failure types and pre-actions of one resolver
///
/// A configurer owns the handler it was started from. Each terminal method (`map_to`,
/// `rethrow`, `supply`, `return_value`, `discard` and their per-shape aliases) builds
/// exactly one resolver, appends it to that handler and hands the handler back.
///
/// `X` is the bound failures are narrowed to before reaching pre-actions and mappers;
/// [`Failure`] itself is the unconstrained bound.
pub struct Configurer<O, X> {
    handler: Handler<O>,
    types: HashSet<FailureType>,
    pre_action: Option<PreAction<X>>,
}

debug_with_closures!(Configurer<O, X> { pre_action: closure; handler, types });

/// Matching rule shared by configurers and the resolvers they build
///
/// The failure must satisfy the bound `X`; beyond that, an empty type set accepts it and a
/// non-empty one requires membership in at least one listed type.
fn accepts<X>(types: &HashSet<FailureType>, failure: &Failure) -> bool
where
    X: FailureBound,
{
    if !X::UNCONSTRAINED && !X::admits(failure) {
        return false;
    }
    types.is_empty()
        || types
            .iter()
            .any(|failure_type| failure_type.matches(failure))
}

impl<O, X> Configurer<O, X>
where
    O: 'static,
    X: FailureBound,
{
    pub(crate) fn new(handler: Handler<O>) -> Self {
        Self {
            handler,
            types: HashSet::new(),
            pre_action: None,
        }
    }

    /// Add a failure type to the accepted set
    pub fn for_type(mut self, failure_type: FailureType) -> Self {
        self.types.insert(failure_type);
        self
    }

    /// Add several failure types to the accepted set
    pub fn for_types<I>(mut self, failure_types: I) -> Self
    where
        I: IntoIterator<Item = FailureType>,
    {
        self.types.extend(failure_types);
        self
    }

    /// Run a side effect on the failure before the terminal outcome is produced
    ///
    /// Successive calls compose: earlier actions run first, all of them once per
    /// resolution.
    pub fn handle<F>(self, action: F) -> Self
    where
        F: Fn(&X) + Send + Sync + 'static,
    {
        self.try_handle(move |failure| {
            action(failure);
            Ok(())
        })
    }

    /// Fallible variant of [`handle`](Configurer::handle)
    ///
    /// A failure returned by the action propagates out of the handler's `resolve` as is;
    /// later actions and the terminal step are skipped.
    pub fn try_handle<F>(mut self, action: F) -> Self
    where
        F: Fn(&X) -> Result<(), Failure> + Send + Sync + 'static,
    {
        let composed: PreAction<X> = match self.pre_action.take() {
            Some(earlier) => Box::new(move |failure: &X| {
                earlier(failure)?;
                action(failure)
            }),
            None => Box::new(action),
        };
        self.pre_action = Some(composed);
        self
    }

    /// Whether the resolver under construction would accept the failure
    pub fn is_configured_for(&self, failure: &Failure) -> bool {
        accepts::<X>(&self.types, failure)
    }

    /// Failure types accumulated so far
    pub fn types(&self) -> impl Iterator<Item = &FailureType> {
        self.types.iter()
    }

    /// Resolve to the value computed from the failure
    pub fn map_to<F>(self, mapper: F) -> Handler<O>
    where
        F: Fn(X) -> O + Send + Sync + 'static,
    {
        self.finish(Box::new(move |failure| Ok(mapper(failure))))
    }

    /// Raise the failure computed from the original one, as an unchecked failure
    pub fn rethrow<F, E>(self, mapper: F) -> Handler<O>
    where
        F: Fn(X) -> E + Send + Sync + 'static,
        E: Into<Failure>,
    {
        self.finish(Box::new(move |failure| {
            let raised: Failure = mapper(failure).into();
            Err(raised.into_unchecked())
        }))
    }

    /// Resolve to a freshly supplied value
    pub fn supply<F>(self, supplier: F) -> Handler<O>
    where
        F: Fn() -> O + Send + Sync + 'static,
    {
        self.finish(Box::new(move |_| Ok(supplier())))
    }

    /// Resolve to a constant
    pub fn return_value(self, value: O) -> Handler<O>
    where
        O: Clone + Send + Sync,
    {
        self.finish(Box::new(move |_| Ok(value.clone())))
    }

    /// Resolve to the neutral outcome of the shape
    pub fn discard(self) -> Handler<O>
    where
        O: Outcome,
    {
        self.finish(Box::new(|_| Ok(O::neutral())))
    }

    fn finish(self, produce: Production<O, X>) -> Handler<O> {
        let Self {
            mut handler,
            types,
            pre_action,
        } = self;

        handler.register(ConfiguredResolver {
            types,
            pre_action,
            produce,
        });
        handler
    }
}

struct ConfiguredResolver<O, X> {
    types: HashSet<FailureType>,
    pre_action: Option<PreAction<X>>,
    produce: Production<O, X>,
}

debug_with_closures!(ConfiguredResolver<O, X> { pre_action: closure, produce: closure; types });

impl<O, X> Resolver<O> for ConfiguredResolver<O, X>
where
    X: FailureBound,
{
    fn matches(&self, failure: &Failure) -> bool {
        accepts::<X>(&self.types, failure)
    }

    fn resolve(&self, failure: Failure) -> Result<O, Failure> {
        let failure = X::narrow(failure)
            .map_err(|failure| Failure::unchecked(MisconfiguredHandler::for_failure(failure)))?;

        if let Some(pre_action) = &self.pre_action {
            pre_action(&failure)?;
        }

        (self.produce)(failure)
    }
}
