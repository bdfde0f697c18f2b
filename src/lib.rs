// In: src/lib.rs

//! Pokeball Inventory
//!
//! Tracks how many of each ball the player owns and decides which ball to
//! throw at a wild Pokemon, based on four player preferences (caught or new,
//! normal or shiny) and what is actually in stock.

// --- MODULE DECLARATIONS ---
pub mod ball_data;
pub mod collaborators;
pub mod config;
pub mod errors;
pub mod pokeballs;
pub mod preferences;
pub mod save;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{ball_from_raw, ball_to_raw, InvalidBallIndex, Pokeball, PokemonType, NO_BALL_RAW};

// --- From this crate's modules (`src/`) ---

// The inventory engine and its state.
pub use ball_data::{BallCatalog, BallData, CatchBonusFn};
pub use pokeballs::Pokeballs;
pub use preferences::{BallPreferences, CaughtState, EditFocus, PreferenceSlot};

// Host integration.
pub use collaborators::{BallUsageCounter, CatchTarget, CaughtStatus, EnemyLookup, UsageStatistics};
pub use config::PokeballDefaults;
pub use save::PokeballsSave;

// Crate-specific error and result types.
pub use errors::{InventoryError, InventoryResult, PokeballError, PokeballResult, SaveDataError};
