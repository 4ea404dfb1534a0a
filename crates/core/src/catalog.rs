//! Session catalog - the read-only ground truth
//!
//! Holds the space and store records for the session. No other component
//! mutates it; the filter engine treats it as an opaque, swappable input.

use crate::invariants::assert_catalog_invariants;
use crate::models::{Space, StoreLocation, StoreSector};

/// Immutable-for-the-session catalog of spaces and stores
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    spaces: Vec<Space>,
    stores: Vec<StoreLocation>,
}

impl Catalog {
    pub fn new(spaces: Vec<Space>, stores: Vec<StoreLocation>) -> Self {
        let catalog = Self { spaces, stores };
        assert_catalog_invariants(&catalog);
        catalog
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn stores(&self) -> &[StoreLocation] {
        &self.stores
    }

    pub fn space(&self, id: &str) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == id)
    }

    pub fn store(&self, id: &str) -> Option<&StoreLocation> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Display-time join for the ID-keyed store reference
    pub fn store_name(&self, id: &str) -> Option<&str> {
        self.store(id).map(|s| s.name.as_str())
    }

    /// Distinct cities across the catalog's spaces, sorted, for filter chrome
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self
            .spaces
            .iter()
            .map(|s| s.location.city.clone())
            .collect();
        cities.sort();
        cities.dedup();
        cities
    }

    /// Distinct sectors across the catalog's spaces, for filter chrome
    pub fn sectors(&self) -> Vec<StoreSector> {
        let mut sectors = Vec::new();
        for space in &self.spaces {
            if !sectors.contains(&space.location.sector) {
                sectors.push(space.location.sector);
            }
        }
        sectors
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_space_lookup() {
        let catalog = seed::catalog();
        let space = catalog.space("space-001").unwrap();
        assert_eq!(space.name, "Premium Endcap");
        assert!(catalog.space("space-999").is_none());
    }

    #[test]
    fn test_store_name_join() {
        let catalog = seed::catalog();
        let space = catalog.space("space-001").unwrap();
        let name = catalog.store_name(&space.location.store_id).unwrap();
        assert!(!name.is_empty());
    }

    #[test]
    fn test_distinct_cities_sorted() {
        let catalog = seed::catalog();
        let cities = catalog.cities();
        let mut sorted = cities.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(cities, sorted);
        assert!(cities.contains(&"Manaus".to_string()));
    }
}
