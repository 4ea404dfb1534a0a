//! Application configuration
//!
//! TOML-loaded knobs: which data source backs the session (in-memory fake
//! vs networked client), page sizes, and the reservation policy. Selecting
//! the source here keeps environment branching out of call sites.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::request::ReservationPolicy;

/// Which `DataSource` implementation to wire up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Memory,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Address of the reservation service, for `kind = "remote"`
    pub remote_addr: String,
    /// Simulated latency for the in-memory source; 0 disables
    pub latency_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Memory,
            remote_addr: "127.0.0.1:7640".into(),
            latency_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Full catalog page
    pub page_size: usize,
    /// Home-page teaser grid
    pub teaser_page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            teaser_page_size: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationConfig {
    pub min_lease_days: u32,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self { min_lease_days: 30 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub catalog: CatalogConfig,
    pub reservation: ReservationConfig,
}

impl AppConfig {
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from an explicit path; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from the platform config directory (`vitrine.toml`)
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn config_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("com", "vitrine", "vitrine")?;
        Some(dirs.config_dir().join("vitrine.toml"))
    }

    pub fn policy(&self) -> ReservationPolicy {
        ReservationPolicy {
            min_lease_days: self.reservation.min_lease_days,
        }
    }
}
