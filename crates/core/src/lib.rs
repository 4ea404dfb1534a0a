//! Vitrine Core Library
//!
//! Domain models, filtering, selection, and reservation assembly for the
//! Vitrine retail-media marketplace: a catalog of advertising spaces inside
//! physical retail stores, browsed and reserved by brand buyers.
//!
//! This crate is the pure center of the system. The filter engine,
//! pagination, and selection set are synchronous and side-effect-free; the
//! one async seam is [`DataSource`], behind which sit the in-memory fake
//! and the networked client (`vitrine-net`).

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod invariants;
pub mod models;
pub mod notify;
pub mod page;
pub mod request;
pub mod seed;
pub mod selection;
pub mod session;
pub mod source;

pub use catalog::Catalog;
pub use config::{AppConfig, CatalogConfig, ReservationConfig, SourceConfig, SourceKind};
pub use error::{Error, Result};
pub use filter::{PriceBand, SpaceFilter};
pub use models::*;
pub use notify::{Notice, NoticeKind};
pub use page::{paginate, total_pages};
pub use request::{build_request, validate_contact, ContactField, DateRange, ReservationPolicy};
pub use selection::{SelectionSet, SelectionSummary};
pub use session::BrowseSession;
pub use source::{DataSource, InMemorySource};
