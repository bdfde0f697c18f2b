use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Elemental types, numbered the way the host game stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
#[repr(u8)]
pub enum PokemonType {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Decode a raw type id. Negative ids mean "no type" and unknown ids are
    /// treated the same way.
    pub fn from_raw(raw: i64) -> Option<PokemonType> {
        if raw < 0 {
            return None;
        }
        PokemonType::iter().find(|t| *t as i64 == raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(PokemonType::from_raw(0), Some(PokemonType::Normal));
        assert_eq!(PokemonType::from_raw(11), Some(PokemonType::Bug));
        assert_eq!(PokemonType::from_raw(15), Some(PokemonType::Dark));
        assert_eq!(PokemonType::from_raw(17), Some(PokemonType::Fairy));
        assert_eq!(PokemonType::from_raw(-1), None);
        assert_eq!(PokemonType::from_raw(18), None);
    }
}
