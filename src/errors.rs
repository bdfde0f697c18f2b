use schema::{InvalidBallIndex, Pokeball};
use std::fmt;

/// Main error type for the Pokeball inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Error related to ball lookup or stock changes
    Pokeball(PokeballError),
    /// Error related to persisted state or configuration
    SaveData(SaveDataError),
}

/// Errors related to ball inventory operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokeballError {
    /// A raw ball value does not name a ball in the catalog
    InvalidBallIndex(i64),
    /// The ball was asked for while none were left in stock
    OutOfStock(Pokeball),
}

/// Errors related to encoding or decoding inventory state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDataError {
    /// JSON save record could not be encoded
    Json(String),
    /// Binary checkpoint could not be encoded or decoded
    Checkpoint(String),
    /// Defaults file is malformed
    Config(String),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Pokeball(err) => write!(f, "Pokeball error: {}", err),
            InventoryError::SaveData(err) => write!(f, "Save data error: {}", err),
        }
    }
}

impl fmt::Display for PokeballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokeballError::InvalidBallIndex(index) => write!(f, "Invalid ball index: {}", index),
            PokeballError::OutOfStock(ball) => write!(f, "No {} left in stock", ball),
        }
    }
}

impl fmt::Display for SaveDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveDataError::Json(details) => write!(f, "Malformed save record: {}", details),
            SaveDataError::Checkpoint(details) => write!(f, "Corrupt checkpoint: {}", details),
            SaveDataError::Config(details) => write!(f, "Malformed defaults: {}", details),
        }
    }
}

impl std::error::Error for InventoryError {}
impl std::error::Error for PokeballError {}
impl std::error::Error for SaveDataError {}

impl From<PokeballError> for InventoryError {
    fn from(err: PokeballError) -> Self {
        InventoryError::Pokeball(err)
    }
}

impl From<SaveDataError> for InventoryError {
    fn from(err: SaveDataError) -> Self {
        InventoryError::SaveData(err)
    }
}

impl From<InvalidBallIndex> for PokeballError {
    fn from(err: InvalidBallIndex) -> Self {
        PokeballError::InvalidBallIndex(err.0)
    }
}

impl From<InvalidBallIndex> for InventoryError {
    fn from(err: InvalidBallIndex) -> Self {
        InventoryError::Pokeball(err.into())
    }
}

/// Type alias for Results using InventoryError
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Type alias for Results using PokeballError
pub type PokeballResult<T> = Result<T, PokeballError>;
