//! Vitrine Application Library
//!
//! The headless session layer a UI binds to: application state wiring
//! (data source selection, selection set, browse session, notices, stub
//! sign-in) and the dashboard derivations. Rendering, routing, and styling
//! belong to the embedding front end.

pub mod dashboard;
pub mod state;

pub use dashboard::{latest, partition_history, recommended, DashboardStats, ReservationFilter};
pub use state::AppState;
