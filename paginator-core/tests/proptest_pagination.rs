//! Property-based tests for `PaginationState`.
//!
//! Tests cover invariants for:
//! - Ceiling-division page count
//! - Current page staying within `1..=last_page`
//! - First-item offset and next-page derivation
//! - Rejected mutations leaving state untouched

use paginator_core::PageRequest;
use paginator_core::PaginationError;
use paginator_core::PaginationState;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
enum Mutation {
    CurrentPage(i64),
    ItemsPerPage(i64),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (-5i64..200).prop_map(Mutation::CurrentPage),
        (-5i64..200).prop_map(Mutation::ItemsPerPage),
    ]
}

fn apply(state: &mut PaginationState, mutation: &Mutation) -> bool {
    match *mutation {
        Mutation::CurrentPage(page) => state.set_current_page(page).is_ok(),
        Mutation::ItemsPerPage(per_page) => state.set_items_per_page(per_page).is_ok(),
    }
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn assert_consistent(state: &PaginationState) -> Result<(), TestCaseError> {
    let expected_last_page = state.total_items().div_ceil(state.items_per_page());

    prop_assert!(state.total_items() > 0);
    prop_assert!(state.items_per_page() > 0);
    prop_assert_eq!(state.last_page(), expected_last_page);
    prop_assert!(state.current_page() >= 1);
    prop_assert!(state.current_page() <= state.last_page());
    prop_assert_eq!(
        state.current_page_first_item_offset(),
        (state.current_page() - 1) * state.items_per_page() + 1
    );

    if state.current_page() == state.last_page() {
        prop_assert_eq!(state.next_page(), None);
    } else {
        prop_assert_eq!(state.next_page(), Some(state.current_page() + 1));
    }

    prop_assert!(state.current_page_first_item_offset() <= state.total_items());
    prop_assert!(state.items_on_current_page() >= 1);
    prop_assert!(state.items_on_current_page() <= state.items_per_page());

    let request = state.page_request();
    prop_assert_eq!(request, PageRequest::from(state));
    prop_assert_eq!(request.limit(), state.items_per_page());
    prop_assert_eq!(request.offset() + 1, state.current_page_first_item_offset());
    prop_assert_eq!(request.page_number(), state.current_page());
    Ok(())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn test_new_state_is_consistent(total_items in 1u64..100_000) {
        let state = PaginationState::new(total_items).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(state.items_per_page(), 10);
        prop_assert_eq!(state.current_page(), 1);
        assert_consistent(&state)?;
    }

    #[test]
    fn test_mutation_sequences_keep_state_consistent(
        total_items in 1u64..500,
        mutations in prop::collection::vec(mutation(), 0..40),
    ) {
        let mut state = PaginationState::new(total_items).map_err(|e| TestCaseError::fail(e.to_string()))?;

        for mutation in &mutations {
            let before = state;
            if !apply(&mut state, mutation) {
                prop_assert_eq!(state, before);
            }
            prop_assert_eq!(state.total_items(), total_items);
            assert_consistent(&state)?;
        }
    }

    #[test]
    fn test_every_page_up_to_last_is_accepted(total_items in 1u64..300, per_page in 1u64..50) {
        let mut state = PaginationState::new(total_items).map_err(|e| TestCaseError::fail(e.to_string()))?;
        state.set_items_per_page(per_page).map_err(|e| TestCaseError::fail(e.to_string()))?;

        let mut covered = 0;
        for page in 1..=state.last_page() {
            state.set_current_page(page).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(state.current_page_first_item_offset(), covered + 1);
            covered += state.items_on_current_page();
        }
        prop_assert_eq!(covered, total_items);
    }

    #[test]
    fn test_page_beyond_last_is_rejected(
        total_items in 1u64..300,
        per_page in 1u64..50,
        past in 1u64..10,
    ) {
        let mut state = PaginationState::new(total_items).map_err(|e| TestCaseError::fail(e.to_string()))?;
        state.set_items_per_page(per_page).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let before = state;
        prop_assert_eq!(before.last_page(), total_items.div_ceil(per_page));
        let page = state.last_page() + past;

        match state.set_current_page(page) {
            Err(PaginationError::PageOutOfRange { page: rejected, last_page }) => {
                prop_assert_eq!(rejected, page);
                prop_assert_eq!(last_page, before.last_page());
            }
            other => prop_assert!(false, "expected PageOutOfRange, got {:?}", other),
        }
        prop_assert_eq!(state, before);
    }
}

// =============================================================================
// Fixed Cases
// =============================================================================

#[test]
fn test_page_beyond_last_is_rejected_after_page_size_change() -> Result<(), PaginationError> {
    let mut state = PaginationState::new(18)?;
    state.set_items_per_page(7)?;
    let before = state;

    let err = state.set_current_page(4).unwrap_err();
    assert!(matches!(err, PaginationError::PageOutOfRange { page: 4, last_page: 3 }));
    assert_eq!(state, before);
    Ok(())
}
