//! Starting inventory and default preferences.
//!
//! The built-in values can be overridden with a RON document, for example:
//!
//! ```text
//! (
//!     starting_stock: [50, 10],
//!     preferences: (
//!         already_caught: None,
//!         already_caught_shiny: Some(Greatball),
//!         not_caught: Some(Ultraball),
//!         not_caught_shiny: Some(Masterball),
//!     ),
//! )
//! ```

use crate::errors::SaveDataError;
use crate::preferences::BallPreferences;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stock every new player starts with, by catalog index.
pub const DEFAULT_STARTING_STOCK: [u32; 4] = [25, 0, 0, 0];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokeballDefaults {
    pub starting_stock: Vec<u32>,
    pub preferences: BallPreferences,
}

impl Default for PokeballDefaults {
    fn default() -> Self {
        Self {
            starting_stock: DEFAULT_STARTING_STOCK.to_vec(),
            preferences: BallPreferences::default(),
        }
    }
}

impl PokeballDefaults {
    pub fn from_ron(source: &str) -> Result<Self, SaveDataError> {
        ron::from_str(source).map_err(|e| SaveDataError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, SaveDataError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SaveDataError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_ron(&content)
    }
}
