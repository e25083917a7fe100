//! # Handlers
//!
//! Ordered, first-match dispatch of failures to registered resolvers.
//!
//! ## Overview
//!
//! A [`Handler`] owns an ordered list of [`Resolver`]s of one outcome shape. It is populated
//! through `configurer -> terminal` chains, each appending exactly one resolver, and then
//! used for dispatch any number of times:
//!
//! ```text
//! Handler::new()
//!     .in_case_of::<E>()        -> Configurer<O, E>
//!     .for_type(..)             -> Configurer<O, E>
//!     .handle(..)               -> Configurer<O, E>
//!     .return_value(..)         -> Handler<O>        (one resolver appended)
//! ```
//!
//! ## Dispatch rules
//!
//! - The first resolver (in insertion order) whose `matches` accepts the failure wins.
//!   Resolvers are never reordered, deduplicated or removed, so an earlier resolver
//!   permanently shadows a later one for overlapping failures.
//! - A failure no resolver accepts fails with [`MisconfiguredHandler`], raised as an
//!   unchecked failure carrying the missed type name.
//!
//! ```rust
//! use checked_fn::{Failure, IntHandler};
//! use std::io;
//!
//! let handler = IntHandler::new()
//!     .in_case_of::<io::Error>()
//!     .return_int(1)
//!     .in_any_case()
//!     .return_int(2);
//!
//! assert_eq!(handler.resolve(Failure::new(io::Error::other("io"))).ok(), Some(1));
//! assert_eq!(handler.resolve(Failure::new(std::fmt::Error)).ok(), Some(2));
//! ```

pub mod configurer;
pub mod shapes;

pub use configurer::Configurer;

use crate::config::HandlerConfig;
use crate::error::MisconfiguredHandler;
use crate::failure::{Failure, FailureBound, FailureType};
use crate::logging;
use crate::resolver::Resolver;
use std::fmt;

type BoxedResolver<O> = Box<dyn Resolver<O> + Send + Sync>;

/// Ordered collection of resolvers producing outcomes of type `O`
pub struct Handler<O> {
    resolvers: Vec<BoxedResolver<O>>,
    config: HandlerConfig,
}

pub type VoidHandler = Handler<()>;
pub type BooleanHandler = Handler<bool>;
pub type IntHandler = Handler<i32>;
pub type LongHandler = Handler<i64>;
pub type DoubleHandler = Handler<f64>;
pub type ReferenceHandler<R> = Handler<Option<R>>;

impl<O> Handler<O> {
    /// Create an empty handler with the default configuration
    pub fn new() -> Self {
        Self::with_config(HandlerConfig::default())
    }

    /// Create an empty handler reporting under `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_config(HandlerConfig::named(name))
    }

    pub fn with_config(config: HandlerConfig) -> Self {
        Self {
            resolvers: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Append a resolver after every resolver registered so far
    pub fn register<R>(&mut self, resolver: R) -> &mut Self
    where
        R: Resolver<O> + Send + Sync + 'static,
    {
        logging::log_registration(&self.config.name, self.resolvers.len());
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Owned variant of [`register`](Handler::register), for builder chains
    pub fn with_resolver<R>(mut self, resolver: R) -> Self
    where
        R: Resolver<O> + Send + Sync + 'static,
    {
        self.register(resolver);
        self
    }

    /// First registered resolver accepting the failure
    pub fn find_match(&self, failure: &Failure) -> Option<&(dyn Resolver<O> + Send + Sync)> {
        self.position_of(failure)
            .map(|position| self.resolvers[position].as_ref())
    }

    /// Whether any registered resolver accepts the failure
    pub fn supports(&self, failure: &Failure) -> bool {
        self.position_of(failure).is_some()
    }

    /// Dispatch the failure to the first matching resolver
    ///
    /// # Errors
    ///
    /// - the failure raised by the matching resolver (rethrow or pre-action), unchanged
    /// - an unchecked [`MisconfiguredHandler`] when no resolver matches
    pub fn resolve(&self, failure: Failure) -> Result<O, Failure> {
        match self.position_of(&failure) {
            Some(position) => {
                if self.config.trace_dispatch {
                    logging::log_dispatch(&self.config.name, failure.type_name(), position);
                }
                self.resolvers[position].resolve(failure)
            }
            None => {
                if self.config.warn_on_misconfiguration {
                    logging::log_misconfiguration(
                        &self.config.name,
                        failure.type_name(),
                        self.resolvers.len(),
                    );
                }
                Err(Failure::unchecked(MisconfiguredHandler::for_failure(failure)))
            }
        }
    }

    /// Number of registered resolvers
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    fn position_of(&self, failure: &Failure) -> Option<usize> {
        self.resolvers
            .iter()
            .position(|resolver| resolver.matches(failure))
    }

    /// Begin a resolver for failures admitted by the bound `X`
    ///
    /// The type set starts empty: without further `for_type` calls every failure admitted
    /// by `X` is accepted, with them only the listed types within `X` are. Pre-actions and
    /// mappers receive the failure narrowed to `X`.
    pub fn in_case_of<X>(self) -> Configurer<O, X>
    where
        O: 'static,
        X: FailureBound,
    {
        Configurer::new(self)
    }

    /// Like [`in_case_of`](Handler::in_case_of), with the type set seeded with `X` itself
    ///
    /// Every failure admitted by `X` already belongs to the seed, so later `for_type` calls
    /// cannot narrow what the resolver accepts.
    pub fn in_case_of_seeded<X>(self) -> Configurer<O, X>
    where
        O: 'static,
        X: FailureBound,
    {
        let configurer = Configurer::new(self);
        match X::failure_type() {
            Some(failure_type) => configurer.for_type(failure_type),
            None => configurer,
        }
    }

    /// Begin a catch-all resolver, accepting any failure
    pub fn in_any_case(self) -> Configurer<O, Failure>
    where
        O: 'static,
    {
        Configurer::new(self)
    }

    /// Begin a resolver for failures belonging to `failure_type`
    pub fn in_case_of_type(self, failure_type: FailureType) -> Configurer<O, Failure>
    where
        O: 'static,
    {
        Configurer::new(self).for_type(failure_type)
    }

    /// Begin a resolver for failures belonging to any of `failure_types`
    ///
    /// An empty collection yields a catch-all, like [`in_any_case`](Handler::in_any_case).
    pub fn in_case_of_types<I>(self, failure_types: I) -> Configurer<O, Failure>
    where
        O: 'static,
        I: IntoIterator<Item = FailureType>,
    {
        Configurer::new(self).for_types(failure_types)
    }
}

impl<O> Default for Handler<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handlers nest: a handler can be registered on another handler, or handed directly to
/// [`Checked::apply_resolver`](crate::Checked::apply_resolver).
impl<O> Resolver<O> for Handler<O> {
    fn matches(&self, failure: &Failure) -> bool {
        self.supports(failure)
    }

    fn resolve(&self, failure: Failure) -> Result<O, Failure> {
        Handler::resolve(self, failure)
    }
}

impl<O> fmt::Debug for Handler<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("config", &self.config)
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}
