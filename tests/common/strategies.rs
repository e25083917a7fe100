use super::failures::*;
use checked_fn::{Failure, FailureType};
use proptest::prelude::*;

/// The sample failures the property tests dispatch, by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Stale,
    Locked,
    Quota,
}

impl FailureKind {
    pub const ALL: [FailureKind; 4] = [
        FailureKind::NotFound,
        FailureKind::Stale,
        FailureKind::Locked,
        FailureKind::Quota,
    ];

    pub fn failure(self) -> Failure {
        match self {
            FailureKind::NotFound => Failure::new(RecordNotFound),
            FailureKind::Stale => Failure::new(StaleRecord),
            FailureKind::Locked => Failure::new(LockedRecord),
            FailureKind::Quota => Failure::new(QuotaExceeded),
        }
    }

    pub fn failure_type(self) -> FailureType {
        match self {
            FailureKind::NotFound => FailureType::of::<RecordNotFound>(),
            FailureKind::Stale => FailureType::of::<StaleRecord>(),
            FailureKind::Locked => FailureType::of::<LockedRecord>(),
            FailureKind::Quota => FailureType::of::<QuotaExceeded>(),
        }
    }
}

/// Strategy for a single failure kind
pub fn failure_kind_strategy() -> impl Strategy<Value = FailureKind> {
    prop::sample::select(FailureKind::ALL.to_vec())
}

/// Strategy for the accepted kinds of one resolver; empty means catch-all
pub fn accepted_kinds_strategy() -> impl Strategy<Value = Vec<FailureKind>> {
    prop::collection::vec(failure_kind_strategy(), 0..=3)
}

/// Strategy for the accepted kinds of every resolver registered on a handler
pub fn handler_layout_strategy() -> impl Strategy<Value = Vec<Vec<FailureKind>>> {
    prop::collection::vec(accepted_kinds_strategy(), 0..8)
}
