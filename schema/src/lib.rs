// Pokeball Inventory Schema - Shared type definitions
// This crate contains the closed enums shared between the inventory engine
// and anything that persists or displays its state.

// Re-export the main types
pub use pokeball::*;
pub use pokemon_types::*;

// Iteration and counting over the enums above.
pub use strum::{EnumCount, IntoEnumIterator};

pub mod pokeball;
pub mod pokemon_types;
