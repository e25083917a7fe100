mod common;

use checked_fn::{Failure, IntHandler};
use common::strategies::*;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Build a handler whose resolver at position `i` accepts `layout[i]` and returns `i`
fn handler_for(layout: &[Vec<FailureKind>]) -> IntHandler {
    layout
        .iter()
        .enumerate()
        .fold(IntHandler::new(), |handler, (position, kinds)| {
            handler
                .in_case_of_types(kinds.iter().map(|kind| kind.failure_type()))
                .return_int(position as i32)
        })
}

/// Position of the first resolver accepting `kind`, the model of first-match dispatch
fn expected_position(layout: &[Vec<FailureKind>], kind: FailureKind) -> Option<i32> {
    layout
        .iter()
        .position(|kinds| kinds.is_empty() || kinds.contains(&kind))
        .map(|position| position as i32)
}

proptest! {
    /// Property: dispatch picks the earliest registered resolver accepting the failure
    #[test]
    fn dispatch_is_first_match_by_insertion_order(
        layout in handler_layout_strategy(),
        kind in failure_kind_strategy(),
    ) {
        let handler = handler_for(&layout);
        let outcome = handler.resolve(kind.failure());

        prop_assert_eq!(handler.len(), layout.len());
        prop_assert_eq!(outcome.ok(), expected_position(&layout, kind));
    }

    /// Property: supports agrees with resolve succeeding
    #[test]
    fn supports_agrees_with_resolve(
        layout in handler_layout_strategy(),
        kind in failure_kind_strategy(),
    ) {
        let handler = handler_for(&layout);

        prop_assert_eq!(handler.supports(&kind.failure()), handler.resolve(kind.failure()).is_ok());
    }

    /// Property: a type list accepts exactly the listed failures, or everything when empty
    #[test]
    fn type_list_acceptance_is_union(
        kinds in accepted_kinds_strategy(),
        kind in failure_kind_strategy(),
    ) {
        let configurer = IntHandler::new()
            .in_case_of_types(kinds.iter().map(|kind| kind.failure_type()));

        prop_assert_eq!(
            configurer.is_configured_for(&kind.failure()),
            kinds.is_empty() || kinds.contains(&kind)
        );
    }

    /// Property: every composed pre-action runs exactly once per resolution
    #[test]
    fn pre_actions_run_once_per_resolution(actions in 0usize..6, resolutions in 1usize..4) {
        let counter = Arc::new(AtomicUsize::new(0));
        let configurer = (0..actions).fold(IntHandler::new().in_any_case(), |configurer, _| {
            let counter = Arc::clone(&counter);
            configurer.handle(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        });
        let handler = configurer.discard();

        for _ in 0..resolutions {
            prop_assert_eq!(handler.resolve(Failure::msg("any")).ok(), Some(0));
        }
        prop_assert_eq!(counter.load(Ordering::SeqCst), actions * resolutions);
    }
}
