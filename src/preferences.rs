use schema::Pokeball;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four preference buckets: caught status crossed with shininess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferenceSlot {
    AlreadyCaught,
    AlreadyCaughtShiny,
    NotCaught,
    NotCaughtShiny,
}

impl PreferenceSlot {
    pub const ALL: [PreferenceSlot; 4] = [
        PreferenceSlot::AlreadyCaught,
        PreferenceSlot::AlreadyCaughtShiny,
        PreferenceSlot::NotCaught,
        PreferenceSlot::NotCaughtShiny,
    ];

    /// Field name used for this slot in save records.
    pub fn save_key(self) -> &'static str {
        match self {
            PreferenceSlot::AlreadyCaught => "alreadyCaughtSelection",
            PreferenceSlot::AlreadyCaughtShiny => "alreadyCaughtShinySelection",
            PreferenceSlot::NotCaught => "notCaughtSelection",
            PreferenceSlot::NotCaughtShiny => "notCaughtShinySelection",
        }
    }
}

impl fmt::Display for PreferenceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PreferenceSlot::AlreadyCaught => "Caught",
            PreferenceSlot::AlreadyCaughtShiny => "Caught Shiny",
            PreferenceSlot::NotCaught => "New",
            PreferenceSlot::NotCaughtShiny => "New Shiny",
        };
        write!(f, "{}", label)
    }
}

/// Whether the normal and shiny forms of a species have been caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaughtState {
    pub caught: bool,
    pub caught_shiny: bool,
}

/// The strongest ball the player is willing to throw in each bucket.
/// `None` means "do not throw".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallPreferences {
    pub already_caught: Option<Pokeball>,
    pub already_caught_shiny: Option<Pokeball>,
    pub not_caught: Option<Pokeball>,
    pub not_caught_shiny: Option<Pokeball>,
}

impl Default for BallPreferences {
    fn default() -> Self {
        Self {
            already_caught: None,
            already_caught_shiny: Some(Pokeball::Pokeball),
            not_caught: Some(Pokeball::Pokeball),
            not_caught_shiny: Some(Pokeball::Pokeball),
        }
    }
}

impl BallPreferences {
    pub fn get(&self, slot: PreferenceSlot) -> Option<Pokeball> {
        match slot {
            PreferenceSlot::AlreadyCaught => self.already_caught,
            PreferenceSlot::AlreadyCaughtShiny => self.already_caught_shiny,
            PreferenceSlot::NotCaught => self.not_caught,
            PreferenceSlot::NotCaughtShiny => self.not_caught_shiny,
        }
    }

    pub fn set(&mut self, slot: PreferenceSlot, ball: Option<Pokeball>) {
        let field = match slot {
            PreferenceSlot::AlreadyCaught => &mut self.already_caught,
            PreferenceSlot::AlreadyCaughtShiny => &mut self.already_caught_shiny,
            PreferenceSlot::NotCaught => &mut self.not_caught,
            PreferenceSlot::NotCaughtShiny => &mut self.not_caught_shiny,
        };
        *field = ball;
    }

    /// The ceiling ball for a target.
    ///
    /// A shiny that has never been caught is also a new Pokemon when the
    /// normal form is missing too, so the stronger of the two "not caught"
    /// preferences wins. A caught shiny is likewise also a caught Pokemon.
    pub fn preferred_ball(&self, state: CaughtState, is_shiny: bool) -> Option<Pokeball> {
        match (is_shiny, state.caught_shiny, state.caught) {
            (true, false, false) => self.not_caught.max(self.not_caught_shiny),
            (true, false, true) => self.not_caught_shiny,
            (true, true, _) => self.already_caught.max(self.already_caught_shiny),
            (false, _, false) => self.not_caught,
            (false, _, true) => self.already_caught,
        }
    }
}

/// Which preference the UI is currently editing, with its display title.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFocus {
    pub slot: PreferenceSlot,
    pub title: String,
}

impl Default for EditFocus {
    fn default() -> Self {
        Self {
            slot: PreferenceSlot::AlreadyCaught,
            title: String::new(),
        }
    }
}
