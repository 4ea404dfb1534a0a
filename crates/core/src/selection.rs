//! Selection set - the reservation "cart"
//!
//! Insertion-ordered, deduplicated by space ID, holding full records so the
//! checkout view needs no extra lookups. The set itself is status-agnostic;
//! call sites gate on availability before adding (see `vitrine-app`).
//!
//! Constructed explicitly and passed by reference - never a hidden
//! singleton, so tests build isolated instances.

use std::collections::HashSet;

use crate::invariants::assert_selection_invariants;
use crate::models::Space;

/// Derived aggregates for the cart summary panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    pub count: usize,
    pub total_price: u64,
    pub total_exposure: u64,
    pub distinct_store_count: usize,
}

/// Mutable set of chosen spaces, keyed by ID
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    spaces: Vec<Space>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert if absent; returns false (and leaves the set unchanged) when
    /// the ID is already present.
    pub fn add(&mut self, space: Space) -> bool {
        if self.contains(&space.id) {
            return false;
        }
        self.spaces.push(space);
        assert_selection_invariants(self);
        true
    }

    /// Delete if present; removing an absent ID is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.spaces.len();
        self.spaces.retain(|s| s.id != id);
        self.spaces.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.spaces.iter().any(|s| s.id == id)
    }

    pub fn clear(&mut self) {
        self.spaces.clear();
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Contained spaces in insertion order
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn space_ids(&self) -> Vec<String> {
        self.spaces.iter().map(|s| s.id.clone()).collect()
    }

    pub fn summary(&self) -> SelectionSummary {
        let stores: HashSet<&str> = self
            .spaces
            .iter()
            .map(|s| s.location.store_id.as_str())
            .collect();
        SelectionSummary {
            count: self.spaces.len(),
            total_price: self.spaces.iter().map(|s| u64::from(s.price)).sum(),
            total_exposure: self
                .spaces
                .iter()
                .map(|s| u64::from(s.exposure_potential))
                .sum(),
            distinct_store_count: stores.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SpaceKind, SpaceLocation, SpaceStatus, StoreSector};

    fn make_space(id: &str, store_id: &str, price: u32, exposure: u32) -> Space {
        Space {
            id: id.into(),
            name: format!("Space {}", id),
            description: String::new(),
            kind: SpaceKind::Endcap,
            location: SpaceLocation {
                store_id: store_id.into(),
                sector: StoreSector::Electronics,
                city: "Manaus".into(),
            },
            price,
            images: vec![],
            status: SpaceStatus::Available,
            exposure_potential: exposure,
            occupancy_rate: 50,
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = SelectionSet::new();
        assert!(set.add(make_space("space-001", "store-001", 1000, 500)));
        assert!(!set.add(make_space("space-001", "store-001", 1000, 500)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut set = SelectionSet::new();
        set.add(make_space("space-001", "store-001", 1000, 500));
        assert!(set.remove("space-001"));
        assert!(!set.remove("space-001"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = SelectionSet::new();
        set.add(make_space("space-002", "store-001", 1000, 500));
        set.add(make_space("space-001", "store-002", 2000, 700));
        assert_eq!(set.space_ids(), vec!["space-002", "space-001"]);
    }

    #[test]
    fn test_summary_aggregates() {
        let mut set = SelectionSet::new();
        set.add(make_space("space-001", "store-001", 1000, 500));
        set.add(make_space("space-002", "store-002", 2000, 700));
        let summary = set.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_price, 3000);
        assert_eq!(summary.total_exposure, 1200);
        assert_eq!(summary.distinct_store_count, 2);
    }

    #[test]
    fn test_summary_counts_stores_once() {
        let mut set = SelectionSet::new();
        set.add(make_space("space-001", "store-001", 1000, 500));
        set.add(make_space("space-002", "store-001", 2000, 700));
        assert_eq!(set.summary().distinct_store_count, 1);
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut set = SelectionSet::new();
        set.add(make_space("space-001", "store-001", 1000, 500));
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.summary(), SelectionSummary::default());
    }
}
