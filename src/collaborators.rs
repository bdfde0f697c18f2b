//! Interfaces to the parts of the game the inventory depends on but does not own.
//!
//! The host hands implementations to [`crate::Pokeballs`] at construction.
//! Everything runs on one thread, so the handles are `Rc` and the traits take
//! `&self`; implementations that mutate use interior mutability.

use schema::{EnumCount, Pokeball, PokemonType};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// The wild Pokemon currently being fought, as far as ball bonuses care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchTarget {
    pub species: u16,
    pub primary_type: Option<PokemonType>,
    pub secondary_type: Option<PokemonType>,
}

impl CatchTarget {
    pub fn new(
        species: u16,
        primary_type: PokemonType,
        secondary_type: Option<PokemonType>,
    ) -> Self {
        Self {
            species,
            primary_type: Some(primary_type),
            secondary_type,
        }
    }

    /// Build a target from raw type ids; negative or unknown ids are unset.
    pub fn from_raw(species: u16, primary_type: i64, secondary_type: i64) -> Self {
        Self {
            species,
            primary_type: PokemonType::from_raw(primary_type),
            secondary_type: PokemonType::from_raw(secondary_type),
        }
    }

    /// True when either type slot matches. A target without a valid primary
    /// type never matches.
    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        match self.primary_type {
            None => false,
            Some(primary) => {
                primary == pokemon_type || self.secondary_type == Some(pokemon_type)
            }
        }
    }
}

/// Party/collection lookup: has this species ever been caught?
pub trait CaughtStatus {
    fn already_caught(&self, species: u16, shiny: bool) -> bool;
}

/// Combat lookup: the enemy currently on the field, if any.
pub trait EnemyLookup {
    fn current_enemy(&self) -> Option<CatchTarget>;
}

/// Statistics sink for thrown balls.
pub trait UsageStatistics {
    fn increment_usage(&self, ball: Pokeball);
}

/// In-memory usage counters, one per ball.
#[derive(Debug, Default)]
pub struct BallUsageCounter {
    counts: [Cell<u64>; Pokeball::COUNT],
}

impl BallUsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn usage(&self, ball: Pokeball) -> u64 {
        self.counts[ball.index()].get()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(Cell::get).sum()
    }
}

impl UsageStatistics for BallUsageCounter {
    fn increment_usage(&self, ball: Pokeball) {
        let counter = &self.counts[ball.index()];
        counter.set(counter.get().saturating_add(1));
    }
}
