//! The ball inventory and the rules for picking which ball to throw.
//!
//! `Pokeballs` owns the stock of every ball and the player's four
//! preference slots. When a capture starts the host calls
//! [`Pokeballs::calculate_pokeball_to_use`], and once the throw happens it
//! calls [`Pokeballs::use_pokeball`] with the chosen ball.
//!
//! The collaborator handles are `Rc`, which keeps the engine on the thread
//! that owns the party and battle state. Caught-status lookups, the stock
//! scan and any bonus evaluation therefore all see the same game state.

use crate::ball_data::BallCatalog;
use crate::collaborators::{CaughtStatus, EnemyLookup, UsageStatistics};
use crate::config::PokeballDefaults;
use crate::errors::{InventoryResult, PokeballError, PokeballResult};
use crate::preferences::{BallPreferences, CaughtState, EditFocus, PreferenceSlot};
use schema::{ball_from_raw, Pokeball};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

pub struct Pokeballs {
    pub(crate) catalog: BallCatalog,
    pub(crate) preferences: BallPreferences,
    pub(crate) defaults: PokeballDefaults,
    edit_focus: EditFocus,
    party: Rc<dyn CaughtStatus>,
    battle: Rc<dyn EnemyLookup>,
    statistics: Rc<dyn UsageStatistics>,
}

impl Pokeballs {
    /// Key under which the host save document stores this state.
    pub const SAVE_KEY: &'static str = "pokeballs";

    pub fn new(
        party: Rc<dyn CaughtStatus>,
        battle: Rc<dyn EnemyLookup>,
        statistics: Rc<dyn UsageStatistics>,
    ) -> Self {
        Self::with_defaults(PokeballDefaults::default(), party, battle, statistics)
    }

    pub fn with_defaults(
        defaults: PokeballDefaults,
        party: Rc<dyn CaughtStatus>,
        battle: Rc<dyn EnemyLookup>,
        statistics: Rc<dyn UsageStatistics>,
    ) -> Self {
        Self {
            catalog: BallCatalog::with_stock(&defaults.starting_stock),
            preferences: defaults.preferences,
            defaults,
            edit_focus: EditFocus::default(),
            party,
            battle,
            statistics,
        }
    }

    /// The inventory is available from the start of the game.
    pub fn can_access(&self) -> bool {
        true
    }

    pub fn catalog(&self) -> &BallCatalog {
        &self.catalog
    }

    pub fn defaults(&self) -> &PokeballDefaults {
        &self.defaults
    }

    // === Selection ===

    pub fn caught_state(&self, species: u16) -> CaughtState {
        CaughtState {
            caught: self.party.already_caught(species, false),
            caught_shiny: self.party.already_caught(species, true),
        }
    }

    pub fn preferred_ball(&self, state: CaughtState, is_shiny: bool) -> Option<Pokeball> {
        self.preferences.preferred_ball(state, is_shiny)
    }

    /// Pick the ball to throw at `species`.
    ///
    /// The preference for the target's bucket is a ceiling: the strongest
    /// ball at or below it that is in stock is chosen, and a stronger ball is
    /// never substituted. Returns `None` when nothing at or below the ceiling
    /// is in stock or the preference is "no ball".
    pub fn calculate_pokeball_to_use(&self, species: u16, is_shiny: bool) -> Option<Pokeball> {
        let state = self.caught_state(species);
        let preferred = self.preferred_ball(state, is_shiny);

        let chosen = preferred.and_then(|ceiling| {
            (0..=ceiling.index())
                .rev()
                .filter_map(Pokeball::from_index)
                .find(|ball| self.catalog.stock(*ball) > 0)
        });

        debug!(
            species,
            is_shiny,
            caught = state.caught,
            caught_shiny = state.caught_shiny,
            ?preferred,
            ?chosen,
            "selected pokeball"
        );
        chosen
    }

    // === Stock ===

    /// Consume one ball and record the throw.
    ///
    /// An empty ball is rejected with `OutOfStock`; the stock and the usage
    /// statistics are left untouched in that case.
    pub fn use_pokeball(&mut self, ball: Pokeball) -> PokeballResult<u32> {
        if self.catalog.stock(ball) == 0 {
            warn!(%ball, "tried to use a ball that is out of stock");
            return Err(PokeballError::OutOfStock(ball));
        }
        let remaining = self.catalog.add_stock(ball, -1);
        self.statistics.increment_usage(ball);
        Ok(remaining)
    }

    /// Add `amount` balls and return the new stock. Negative amounts are
    /// floored at zero stock.
    pub fn gain_pokeballs(&mut self, ball: Pokeball, amount: i64) -> u32 {
        self.catalog.add_stock(ball, amount)
    }

    /// Stock of a ball, or 0 for "no ball".
    pub fn ball_quantity(&self, ball: Option<Pokeball>) -> u32 {
        ball.map_or(0, |b| self.catalog.stock(b))
    }

    /// Stock for a raw ball index, or 0 if it names no ball.
    pub fn ball_quantity_by_index(&self, raw: i64) -> u32 {
        self.ball_quantity(Pokeball::try_from(raw).ok())
    }

    // === Ball attributes ===

    /// Catch bonus against whatever the battle currently has on the field.
    pub fn catch_bonus(&self, ball: Pokeball) -> u8 {
        let enemy = self.battle.current_enemy();
        self.catalog.catch_bonus(ball, enemy.as_ref())
    }

    pub fn calculate_catch_time(&self, ball: Pokeball) -> u32 {
        self.catalog.catch_duration(ball)
    }

    pub fn description(&self, ball: Pokeball) -> &'static str {
        self.catalog.describe(ball)
    }

    // === Preferences ===

    pub fn preferences(&self) -> &BallPreferences {
        &self.preferences
    }

    pub fn preference(&self, slot: PreferenceSlot) -> Option<Pokeball> {
        self.preferences.get(slot)
    }

    pub fn set_preference(&mut self, slot: PreferenceSlot, ball: Option<Pokeball>) {
        debug!(%slot, ?ball, "preference changed");
        self.preferences.set(slot, ball);
    }

    /// Set a preference from a raw value, where `-1` means "no ball".
    pub fn set_preference_raw(&mut self, slot: PreferenceSlot, raw: i64) -> InventoryResult<()> {
        let ball = ball_from_raw(raw)?;
        self.set_preference(slot, ball);
        Ok(())
    }

    pub fn already_caught_selection(&self) -> Option<Pokeball> {
        self.preferences.already_caught
    }

    pub fn set_already_caught_selection(&mut self, ball: Option<Pokeball>) {
        self.set_preference(PreferenceSlot::AlreadyCaught, ball);
    }

    pub fn already_caught_shiny_selection(&self) -> Option<Pokeball> {
        self.preferences.already_caught_shiny
    }

    pub fn set_already_caught_shiny_selection(&mut self, ball: Option<Pokeball>) {
        self.set_preference(PreferenceSlot::AlreadyCaughtShiny, ball);
    }

    pub fn not_caught_selection(&self) -> Option<Pokeball> {
        self.preferences.not_caught
    }

    pub fn set_not_caught_selection(&mut self, ball: Option<Pokeball>) {
        self.set_preference(PreferenceSlot::NotCaught, ball);
    }

    pub fn not_caught_shiny_selection(&self) -> Option<Pokeball> {
        self.preferences.not_caught_shiny
    }

    pub fn set_not_caught_shiny_selection(&mut self, ball: Option<Pokeball>) {
        self.set_preference(PreferenceSlot::NotCaughtShiny, ball);
    }

    // === Edit focus ===

    /// Point the editor at a preference slot.
    pub fn select_preference(&mut self, slot: PreferenceSlot, title: impl Into<String>) {
        self.edit_focus = EditFocus {
            slot,
            title: title.into(),
        };
    }

    pub fn selected_slot(&self) -> PreferenceSlot {
        self.edit_focus.slot
    }

    pub fn selected_title(&self) -> &str {
        &self.edit_focus.title
    }

    pub fn selected_preference(&self) -> Option<Pokeball> {
        self.preference(self.edit_focus.slot)
    }

    pub fn set_selected_preference(&mut self, ball: Option<Pokeball>) {
        self.set_preference(self.edit_focus.slot, ball);
    }
}

impl fmt::Display for Pokeballs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAME_WIDTH: usize = 12;

        writeln!(f, "Pokeballs:")?;
        for entry in self.catalog.iter() {
            writeln!(
                f,
                "  {:<NAME_WIDTH$} x{:<5} +{:>3}%  {:>5}ms  {}",
                entry.ball.name(),
                entry.quantity(),
                self.catch_bonus(entry.ball),
                entry.catch_time_ms,
                entry.description
            )?;
        }
        writeln!(f, "Preferences:")?;
        for slot in PreferenceSlot::ALL {
            let choice = self
                .preference(slot)
                .map_or("None", |ball| ball.name());
            writeln!(f, "  {:<NAME_WIDTH$} {}", slot.to_string(), choice)?;
        }
        Ok(())
    }
}
