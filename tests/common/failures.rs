//! Sample failure types shared by the integration tests.

use checked_fn::FailureType;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("interrupted while waiting")]
pub struct Interrupted;

#[derive(Debug, Error)]
#[error("class `{0}` not found")]
pub struct ClassNotFound(pub String);

#[derive(Debug, Error)]
#[error("no such method `{0}`")]
pub struct NoSuchMethod(pub String);

#[derive(Debug, Error)]
#[error("illegal access")]
pub struct IllegalAccess;

#[derive(Debug, Error)]
#[error("record not found")]
pub struct RecordNotFound;

#[derive(Debug, Error)]
#[error("record is stale")]
pub struct StaleRecord;

#[derive(Debug, Error)]
#[error("record is locked")]
pub struct LockedRecord;

#[derive(Debug, Error)]
#[error("quota exceeded")]
pub struct QuotaExceeded;

/// Wrapper raised by rethrowing resolvers
#[derive(Debug, Error)]
#[error("storage unavailable: {source}")]
pub struct StorageUnavailable {
    #[from]
    pub source: io::Error,
}

/// Family standing in for the common supertype of the reflective failures
pub fn reflective() -> FailureType {
    FailureType::family(
        "ReflectiveOperation",
        [
            FailureType::of::<ClassNotFound>(),
            FailureType::of::<NoSuchMethod>(),
            FailureType::of::<IllegalAccess>(),
        ],
    )
}

pub fn io_failure(message: &str) -> io::Error {
    io::Error::other(message.to_string())
}
