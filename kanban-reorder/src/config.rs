//! Engine configuration loaded with Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. An optional TOML file
//! 3. Environment variables with the `KANBAN_REORDER_` prefix

use crate::error::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KANBAN_REORDER_";

/// What to do when a drop index lies past the end of the destination run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRange {
    /// Insert at the end of the run
    #[default]
    Clamp,
    /// Treat the drag as stale and do nothing
    Ignore,
}

/// Tunables for how strictly a drag is checked against the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// Handling of destination indices past the end of the run
    pub out_of_range: OutOfRange,
    /// Require the dragged item to sit at the drag's source index.
    /// When false the item is located by identity alone.
    pub verify_source_index: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            out_of_range: OutOfRange::Clamp,
            verify_source_index: true,
        }
    }
}

impl ReorderConfig {
    /// Load configuration from defaults, an optional TOML file, and the environment
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(file).extract()?;
        debug!(?config, "loaded reorder configuration");
        Ok(config)
    }

    /// Build the figment with all sources in precedence order
    fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            trace!("merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }
}
