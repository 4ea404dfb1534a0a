//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::catalog::Catalog;
use crate::models::Space;
use crate::selection::SelectionSet;

/// Validate that a single space record is internally consistent
pub fn assert_space_invariants(space: &Space) {
    debug_assert!(!space.id.trim().is_empty(), "space has empty id");

    debug_assert!(
        !space.location.store_id.trim().is_empty(),
        "space {} has empty store reference",
        space.id
    );

    debug_assert!(
        space.occupancy_rate <= 100,
        "space {} has occupancy rate {} > 100",
        space.id,
        space.occupancy_rate
    );
}

/// Validate that a catalog's records are consistent with each other
pub fn assert_catalog_invariants(catalog: &Catalog) {
    for space in catalog.spaces() {
        assert_space_invariants(space);

        // Every space ID appears exactly once
        let same_id = catalog
            .spaces()
            .iter()
            .filter(|s| s.id == space.id)
            .count();
        debug_assert!(same_id == 1, "duplicate space id {}", space.id);

        // Store references resolve when the catalog carries stores at all
        debug_assert!(
            catalog.stores().is_empty() || catalog.store(&space.location.store_id).is_some(),
            "space {} references unknown store {}",
            space.id,
            space.location.store_id
        );
    }

    for store in catalog.stores() {
        let same_id = catalog
            .stores()
            .iter()
            .filter(|s| s.id == store.id)
            .count();
        debug_assert!(same_id == 1, "duplicate store id {}", store.id);
    }
}

/// Validate that a selection holds each space at most once
pub fn assert_selection_invariants(selection: &SelectionSet) {
    for space in selection.spaces() {
        let same_id = selection
            .spaces()
            .iter()
            .filter(|s| s.id == space.id)
            .count();
        debug_assert!(same_id == 1, "selection holds space {} twice", space.id);
    }
}
