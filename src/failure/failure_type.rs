//! # Failure Types
//!
//! Named descriptors used by configurers to decide which failures a resolver accepts.
//!
//! A descriptor is one of:
//!
//! - an **exact** type, matched by `TypeId` ([`FailureType::of`])
//! - a **family**, matching when any member matches ([`FailureType::family`]); families
//!   stand in for supertypes and may nest
//! - a **predicate** refining failures further, e.g. by `io::ErrorKind`
//!   ([`FailureType::matching`], [`FailureType::io_kind`])
//!
//! Descriptors compare, hash and deduplicate by name.

use super::Failure;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;
use std::sync::Arc;

type FailurePredicate = Arc<dyn Fn(&Failure) -> bool + Send + Sync>;

#[derive(Clone)]
enum Matcher {
    Exact(fn(&Failure) -> bool),
    Family(Arc<[FailureType]>),
    Predicate(FailurePredicate),
}

/// Descriptor for a category of failures
#[derive(Clone)]
pub struct FailureType {
    name: Cow<'static, str>,
    matcher: Matcher,
}

fn is_exact<E>(failure: &Failure) -> bool
where
    E: StdError + Send + Sync + 'static,
{
    failure.is::<E>()
}

impl FailureType {
    /// Descriptor for exactly the error type `E`
    pub fn of<E>() -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            name: Cow::Borrowed(std::any::type_name::<E>()),
            matcher: Matcher::Exact(is_exact::<E>),
        }
    }

    /// Descriptor for a family of failure types, e.g. every reflective failure
    ///
    /// A failure belongs to the family when it belongs to any member.
    pub fn family<I>(name: impl Into<Cow<'static, str>>, members: I) -> Self
    where
        I: IntoIterator<Item = FailureType>,
    {
        Self {
            name: name.into(),
            matcher: Matcher::Family(members.into_iter().collect()),
        }
    }

    /// Descriptor backed by an arbitrary predicate
    pub fn matching<P>(name: impl Into<Cow<'static, str>>, predicate: P) -> Self
    where
        P: Fn(&Failure) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            matcher: Matcher::Predicate(Arc::new(predicate)),
        }
    }

    /// Descriptor for `io::Error`s of one particular kind
    pub fn io_kind(kind: io::ErrorKind) -> Self {
        Self::matching(format!("std::io::Error({kind:?})"), move |failure| {
            failure
                .downcast_ref::<io::Error>()
                .is_some_and(|error| error.kind() == kind)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the failure belongs to this type
    pub fn matches(&self, failure: &Failure) -> bool {
        match &self.matcher {
            Matcher::Exact(is_instance) => is_instance(failure),
            Matcher::Family(members) => members.iter().any(|member| member.matches(failure)),
            Matcher::Predicate(predicate) => predicate(failure),
        }
    }

    /// Whether `other` is this type or, transitively, a member of this family
    pub fn includes(&self, other: &FailureType) -> bool {
        if self == other {
            return true;
        }
        match &self.matcher {
            Matcher::Family(members) => members.iter().any(|member| member.includes(other)),
            _ => false,
        }
    }

    pub fn is_family(&self) -> bool {
        matches!(self.matcher, Matcher::Family(_))
    }

    /// Direct members of a family, empty for any other descriptor
    pub fn members(&self) -> &[FailureType] {
        match &self.matcher {
            Matcher::Family(members) => &members[..],
            _ => &[],
        }
    }
}

impl PartialEq for FailureType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FailureType {}

impl Hash for FailureType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.matcher {
            Matcher::Exact(_) => f.debug_tuple("Exact").field(&self.name).finish(),
            Matcher::Family(members) => f
                .debug_struct("Family")
                .field("name", &self.name)
                .field("members", members)
                .finish(),
            Matcher::Predicate(_) => f.debug_tuple("Predicate").field(&self.name).finish(),
        }
    }
}
