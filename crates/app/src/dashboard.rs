//! Dashboard derivations - header stats, latest activity, history filtering

use vitrine_core::{Catalog, DateRange, Reservation, ReservationStatus, Space};

/// Header cards on the buyer dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_reservations: usize,
    /// Confirmed reservations only
    pub active_reservations: usize,
    /// Sum over all reservations, cancelled ones included
    pub total_investment: u64,
    /// Estimated people reached, joined through the catalog
    pub estimated_impact: u64,
}

impl DashboardStats {
    pub fn derive(reservations: &[Reservation], catalog: &Catalog) -> Self {
        let total_investment = reservations.iter().map(|r| r.total_price).sum();

        // Daily exposure of each reserved space, scaled to people reached.
        // Spaces missing from the catalog contribute nothing.
        let estimated_impact = reservations
            .iter()
            .map(|r| {
                r.space_ids
                    .iter()
                    .filter_map(|id| catalog.space(id))
                    .map(|s| u64::from(s.exposure_potential))
                    .sum::<u64>()
                    * 100
            })
            .sum();

        Self {
            total_reservations: reservations.len(),
            active_reservations: reservations
                .iter()
                .filter(|r| r.status == ReservationStatus::Confirmed)
                .count(),
            total_investment,
            estimated_impact,
        }
    }
}

/// Most recent reservations by start date, for the dashboard table
pub fn latest(reservations: &[Reservation], count: usize) -> Vec<Reservation> {
    let mut sorted = reservations.to_vec();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted.truncate(count);
    sorted
}

/// Highest-exposure spaces, for the recommendation strip
pub fn recommended(catalog: &Catalog, count: usize) -> Vec<Space> {
    let mut sorted = catalog.spaces().to_vec();
    sorted.sort_by(|a, b| b.exposure_potential.cmp(&a.exposure_potential));
    sorted.truncate(count);
    sorted
}

/// Search and period filter for the reservation history page
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    /// Matches the reservation ID or any joined space name
    pub search: String,
    /// Keeps reservations whose lease overlaps this period
    pub period: Option<DateRange>,
}

impl ReservationFilter {
    pub fn matches(&self, reservation: &Reservation, catalog: &Catalog) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            reservation.id.to_string().to_lowercase().contains(&needle)
                || reservation
                    .space_ids
                    .iter()
                    .filter_map(|id| catalog.space(id))
                    .any(|s| s.name.to_lowercase().contains(&needle))
        };

        let matches_period = match self.period {
            None => true,
            Some(period) => {
                DateRange::new(reservation.start_date, reservation.end_date).overlaps(&period)
            }
        };

        matches_search && matches_period
    }

    pub fn apply(&self, reservations: &[Reservation], catalog: &Catalog) -> Vec<Reservation> {
        reservations
            .iter()
            .filter(|r| self.matches(r, catalog))
            .cloned()
            .collect()
    }
}

/// Split history into (open, closed) tabs: pending/confirmed vs
/// completed/cancelled.
pub fn partition_history(reservations: &[Reservation]) -> (Vec<Reservation>, Vec<Reservation>) {
    reservations
        .iter()
        .cloned()
        .partition(|r| r.status.is_open())
}
