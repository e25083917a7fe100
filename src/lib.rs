#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Checked Fn
//!
//! Callables that declare their failure type, and explicit strategies for resolving it.
//!
//! ## Overview
//!
//! Closures such as `Fn(T) -> Result<O, X>` don't fit where a plain `Fn(T) -> O` is
//! expected (iterator adapters, callbacks, lookups). This crate lets such a callable keep
//! its declared failure type `X` and attach a recovery strategy once, producing a plain
//! callable of the same shape:
//!
//! - **rethrow** the failure as another (unchecked) failure
//! - **discard** it, producing the shape's neutral value
//! - **fall back** to a supplied or constant value
//! - **handle** it with custom side effects
//!
//! ## Architecture
//!
//! ```text
//! Checked callable --apply_resolver--> plain callable
//!                                          |
//!                                     on failure
//!                                          v
//!                   Handler: [Resolver, Resolver, ...]   (first match wins)
//!                                 ^
//!               Configurer: types + pre-actions + terminal
//! ```
//!
//! ## Module Organization
//!
//! - [`failure`] - The dynamic [`Failure`] value, type descriptors and bounds
//! - [`resolver`] - The [`Resolver`] contract and neutral [`Outcome`]s
//! - [`handler`] - Ordered dispatch ([`Handler`]) and its builder ([`Configurer`])
//! - [`function`] - Checked callable shapes and the [`Checked`] adapter contract
//! - [`config`] - Per-handler settings
//! - [`error`] - Errors raised by the crate itself
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use checked_fn::function::unchecked::catch_unchecked;
//! use checked_fn::{Checked, CheckedFunction, IntHandler, MisconfiguredHandler};
//! use std::num::ParseIntError;
//!
//! let handler = IntHandler::new()
//!     .in_case_of::<ParseIntError>()
//!     .handle(|error| eprintln!("not a number: {error}"))
//!     .return_int(0);
//!
//! let parse = CheckedFunction::wrap(|input: String| input.parse::<i32>()).apply_resolver(handler);
//! assert_eq!(parse("42".to_string()), 42);
//! assert_eq!(parse("forty-two".to_string()), 0);
//!
//! // No resolver for the failure: the adapted callable raises a misconfiguration
//! let strict = CheckedFunction::wrap(|input: String| input.parse::<i32>())
//!     .apply_resolver(IntHandler::new());
//! let failure = catch_unchecked(|| strict("x".to_string())).unwrap_err();
//! assert!(failure.is::<MisconfiguredHandler>());
//! ```
//!
//! ## Raising From Plain Callables
//!
//! An adapted callable has no error channel, so a failure its strategy does not resolve
//! is raised as an unwinding panic carrying the [`Failure`] (see [`function::unchecked`]).
//! Use [`Checked::try_apply_resolver`] to get a `Result` instead.

pub mod config;
pub mod error;
pub mod failure;
pub mod function;
pub mod handler;
pub mod logging;
pub mod resolver;

mod macros;

/// Serializes unit tests that read or mutate `CHECKED_FN_*` environment variables
#[cfg(test)]
pub(crate) static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

pub use config::HandlerConfig;
pub use error::{
    BoxError, CheckedError, MisconfiguredHandler, Result, UnhandledCheckedFailure,
};
pub use failure::{Category, Failure, FailureBound, FailureType};
pub use function::unchecked::{catch_unchecked, rethrow_unchecked, RethrowUnchecked};
pub use function::{recover, Checked};
pub use function::shapes::*;
pub use handler::{
    BooleanHandler, Configurer, DoubleHandler, Handler, IntHandler, LongHandler,
    ReferenceHandler, VoidHandler,
};
pub use resolver::{
    BooleanResolver, DoubleResolver, IntResolver, LongResolver, Outcome, ReferenceResolver,
    Resolver, VoidResolver,
};
