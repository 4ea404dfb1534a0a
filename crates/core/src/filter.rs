//! Filter engine - pure predicates over the space catalog
//!
//! A space is included iff it satisfies every active predicate category
//! (AND across categories); within a category, any selected value matches
//! (OR). An empty selection for a category imposes no constraint. That
//! default-open policy is deliberate: an empty-means-reject reading would
//! silently empty the catalog.

use serde::{Deserialize, Serialize};

use crate::models::{Space, SpaceKind, StoreSector};

/// Price buckets evaluated against a space's monthly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    /// <= 1000
    Low,
    /// (1000, 3000]
    Medium,
    /// > 3000
    High,
}

impl PriceBand {
    pub const LOW_MAX: u32 = 1_000;
    pub const MEDIUM_MAX: u32 = 3_000;

    /// The single band a price falls into. Boundaries belong to the lower
    /// band: 1000 is `Low`, 3000 is `Medium`.
    pub fn of(price: u32) -> PriceBand {
        if price <= Self::LOW_MAX {
            PriceBand::Low
        } else if price <= Self::MEDIUM_MAX {
            PriceBand::Medium
        } else {
            PriceBand::High
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        Self::of(price) == *self
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceBand::Low => "Up to R$ 1.000",
            PriceBand::Medium => "R$ 1.000 - R$ 3.000",
            PriceBand::High => "Above R$ 3.000",
        }
    }
}

/// Multi-select filter state for the catalog page.
///
/// Every field defaults to "no constraint". The single-select teaser mode
/// (an `all` sentinel in the UI) is expressed through [`SpaceFilter::for_kind`];
/// only one mode is active per call, chosen by which fields the caller
/// populates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceFilter {
    /// Case-insensitive substring match on name or description
    pub search: String,
    pub kinds: Vec<SpaceKind>,
    pub cities: Vec<String>,
    pub sectors: Vec<StoreSector>,
    pub store_ids: Vec<String>,
    pub price_bands: Vec<PriceBand>,
}

impl SpaceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Teaser-mode filter: a single kind, or `None` for "all"
    pub fn for_kind(kind: Option<SpaceKind>) -> Self {
        Self {
            kinds: kind.into_iter().collect(),
            ..Self::default()
        }
    }

    /// True when no predicate constrains anything
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.kinds.is_empty()
            && self.cities.is_empty()
            && self.sectors.is_empty()
            && self.store_ids.is_empty()
            && self.price_bands.is_empty()
    }

    /// Reset every predicate to default-open
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, space: &Space) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            space.name.to_lowercase().contains(&needle)
                || space.description.to_lowercase().contains(&needle)
        };

        let matches_kind = self.kinds.is_empty() || self.kinds.contains(&space.kind);

        let matches_city = self.cities.is_empty()
            || self
                .cities
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&space.location.city));

        let matches_sector =
            self.sectors.is_empty() || self.sectors.contains(&space.location.sector);

        let matches_store = self.store_ids.is_empty()
            || self.store_ids.iter().any(|s| *s == space.location.store_id);

        let matches_price = self.price_bands.is_empty()
            || self.price_bands.iter().any(|b| b.contains(space.price));

        matches_search
            && matches_kind
            && matches_city
            && matches_sector
            && matches_store
            && matches_price
    }

    /// Filter a catalog slice. Pure and stable: input order is preserved,
    /// nothing is mutated.
    pub fn apply(&self, spaces: &[Space]) -> Vec<Space> {
        spaces
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_empty_filter_returns_catalog_unchanged() {
        let spaces = seed::spaces();
        let filter = SpaceFilter::default();
        let out = filter.apply(&spaces);
        assert_eq!(out, spaces);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let spaces = seed::spaces();
        let upper = SpaceFilter {
            search: "WINDOW".into(),
            ..Default::default()
        };
        let lower = SpaceFilter {
            search: "window".into(),
            ..Default::default()
        };
        let a = upper.apply(&spaces);
        let b = lower.apply(&spaces);
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_search_matches_description_too() {
        let spaces = seed::spaces();
        let filter = SpaceFilter {
            search: "gondola".into(),
            ..Default::default()
        };
        let out = filter.apply(&spaces);
        assert!(out.iter().any(|s| !s.name.to_lowercase().contains("gondola")));
    }

    #[test]
    fn test_kind_filter_is_or_within_category() {
        let spaces = seed::spaces();
        let filter = SpaceFilter {
            kinds: vec![SpaceKind::Window, SpaceKind::Checkout],
            ..Default::default()
        };
        let out = filter.apply(&spaces);
        assert!(!out.is_empty());
        assert!(out
            .iter()
            .all(|s| s.kind == SpaceKind::Window || s.kind == SpaceKind::Checkout));
    }

    #[test]
    fn test_categories_combine_with_and() {
        let spaces = seed::spaces();
        let filter = SpaceFilter {
            kinds: vec![SpaceKind::Window],
            price_bands: vec![PriceBand::High],
            ..Default::default()
        };
        let out = filter.apply(&spaces);
        assert!(out
            .iter()
            .all(|s| s.kind == SpaceKind::Window && s.price > PriceBand::MEDIUM_MAX));
    }

    #[test]
    fn test_stricter_filter_yields_subset() {
        let spaces = seed::spaces();
        let loose = SpaceFilter {
            kinds: vec![SpaceKind::Endcap, SpaceKind::Window],
            ..Default::default()
        };
        let strict = SpaceFilter {
            kinds: vec![SpaceKind::Endcap, SpaceKind::Window],
            price_bands: vec![PriceBand::High],
            ..Default::default()
        };
        let loose_out = loose.apply(&spaces);
        let strict_out = strict.apply(&spaces);
        assert!(strict_out.iter().all(|s| loose_out.contains(s)));
    }

    #[test]
    fn test_price_band_partition() {
        for price in [0, 1, 999, 1000, 1001, 2999, 3000, 3001, 10_000] {
            let matching = [PriceBand::Low, PriceBand::Medium, PriceBand::High]
                .iter()
                .filter(|b| b.contains(price))
                .count();
            assert_eq!(matching, 1, "price {} must fall in exactly one band", price);
        }
    }

    #[test]
    fn test_price_band_boundaries() {
        assert_eq!(PriceBand::of(1000), PriceBand::Low);
        assert_eq!(PriceBand::of(1001), PriceBand::Medium);
        assert_eq!(PriceBand::of(3000), PriceBand::Medium);
        assert_eq!(PriceBand::of(3001), PriceBand::High);
    }

    #[test]
    fn test_city_match_ignores_case() {
        let spaces = seed::spaces();
        let filter = SpaceFilter {
            cities: vec!["manaus".into()],
            ..Default::default()
        };
        let out = filter.apply(&spaces);
        assert!(!out.is_empty());
        assert!(out.iter().all(|s| s.location.city == "Manaus"));
    }

    #[test]
    fn test_for_kind_teaser_mode() {
        let spaces = seed::spaces();
        let all = SpaceFilter::for_kind(None);
        assert!(all.is_empty());
        assert_eq!(all.apply(&spaces), spaces);

        let windows = SpaceFilter::for_kind(Some(SpaceKind::Window));
        assert!(windows
            .apply(&spaces)
            .iter()
            .all(|s| s.kind == SpaceKind::Window));
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let spaces = seed::spaces();
        let filter = SpaceFilter {
            price_bands: vec![PriceBand::Medium, PriceBand::High],
            ..Default::default()
        };
        let out = filter.apply(&spaces);
        let positions: Vec<usize> = out
            .iter()
            .map(|s| spaces.iter().position(|o| o.id == s.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
