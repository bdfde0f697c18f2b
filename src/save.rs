//! Persisted inventory state.
//!
//! The host save document stores a [`PokeballsSave`] record under
//! [`Pokeballs::SAVE_KEY`]. Loading is lenient: anything missing or malformed
//! falls back to the configured defaults and is only logged. Binary
//! checkpoints use postcard and are strict.

use crate::errors::{InventoryResult, SaveDataError};
use crate::preferences::PreferenceSlot;
use crate::pokeballs::Pokeballs;
use schema::{ball_from_raw, ball_to_raw, Pokeball};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Serialized form of the inventory. Ball values are raw integers with `-1`
/// meaning "no ball"; every field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokeballsSave {
    #[serde(default)]
    pub pokeballs: Option<Vec<i64>>,
    #[serde(default)]
    pub not_caught_selection: Option<i64>,
    #[serde(default)]
    pub not_caught_shiny_selection: Option<i64>,
    #[serde(default)]
    pub already_caught_selection: Option<i64>,
    #[serde(default)]
    pub already_caught_shiny_selection: Option<i64>,
}

impl PokeballsSave {
    pub fn selection(&self, slot: PreferenceSlot) -> Option<i64> {
        match slot {
            PreferenceSlot::AlreadyCaught => self.already_caught_selection,
            PreferenceSlot::AlreadyCaughtShiny => self.already_caught_shiny_selection,
            PreferenceSlot::NotCaught => self.not_caught_selection,
            PreferenceSlot::NotCaughtShiny => self.not_caught_shiny_selection,
        }
    }

    /// Read a record out of a JSON value, field by field.
    ///
    /// Returns `None` for anything that is not an object. Fields with the
    /// wrong shape are treated as absent, and non-integer stock entries as 0.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let selection = |slot: PreferenceSlot| object.get(slot.save_key()).and_then(Value::as_i64);

        Some(Self {
            pokeballs: object.get("pokeballs").and_then(Value::as_array).map(|amounts| {
                amounts
                    .iter()
                    .map(|amount| amount.as_i64().unwrap_or(0))
                    .collect()
            }),
            not_caught_selection: selection(PreferenceSlot::NotCaught),
            not_caught_shiny_selection: selection(PreferenceSlot::NotCaughtShiny),
            already_caught_selection: selection(PreferenceSlot::AlreadyCaught),
            already_caught_shiny_selection: selection(PreferenceSlot::AlreadyCaughtShiny),
        })
    }
}

impl Pokeballs {
    pub fn to_save(&self) -> PokeballsSave {
        let selection = |slot: PreferenceSlot| Some(ball_to_raw(self.preference(slot)));
        PokeballsSave {
            pokeballs: Some(
                self.catalog
                    .stock_levels()
                    .into_iter()
                    .map(i64::from)
                    .collect(),
            ),
            not_caught_selection: selection(PreferenceSlot::NotCaught),
            not_caught_shiny_selection: selection(PreferenceSlot::NotCaughtShiny),
            already_caught_selection: selection(PreferenceSlot::AlreadyCaught),
            already_caught_shiny_selection: selection(PreferenceSlot::AlreadyCaughtShiny),
        }
    }

    /// Restore state from a save record. A missing record leaves everything
    /// untouched; a missing stock list leaves stock untouched. Each
    /// preference is reset to its default when absent or invalid.
    pub fn from_save(&mut self, save: Option<&PokeballsSave>) {
        let Some(save) = save else {
            debug!("no pokeball save record, keeping current state");
            return;
        };

        if let Some(amounts) = &save.pokeballs {
            if amounts.len() != self.catalog.len() {
                debug!(
                    saved = amounts.len(),
                    catalog = self.catalog.len(),
                    "stock list length differs from catalog"
                );
            }
            for (index, amount) in amounts.iter().enumerate() {
                let Some(ball) = Pokeball::from_index(index) else {
                    break;
                };
                let quantity = (*amount).clamp(0, i64::from(u32::MAX)) as u32;
                if i64::from(quantity) != *amount {
                    warn!(%ball, amount, "saved stock out of range, clamped");
                }
                self.catalog.set_stock(ball, quantity);
            }
        }

        for slot in PreferenceSlot::ALL {
            let fallback = self.defaults.preferences.get(slot);
            let ball = match save.selection(slot).map(ball_from_raw) {
                Some(Ok(ball)) => ball,
                Some(Err(err)) => {
                    warn!(%slot, %err, "invalid saved preference, using default");
                    fallback
                }
                None => fallback,
            };
            self.preferences.set(slot, ball);
        }
    }

    pub fn to_json(&self) -> InventoryResult<Value> {
        serde_json::to_value(self.to_save())
            .map_err(|e| SaveDataError::Json(e.to_string()).into())
    }

    /// Restore from the JSON stored under [`Pokeballs::SAVE_KEY`]. `null`
    /// and non-object values count as a missing record.
    pub fn from_json(&mut self, value: &Value) {
        let save = PokeballsSave::from_value(value);
        if save.is_none() && !value.is_null() {
            warn!(kind = ?value, "pokeball save is not an object, ignoring");
        }
        self.from_save(save.as_ref());
    }

    pub fn to_checkpoint(&self) -> InventoryResult<Vec<u8>> {
        postcard::to_allocvec(&self.to_save())
            .map_err(|e| SaveDataError::Checkpoint(e.to_string()).into())
    }

    pub fn restore_checkpoint(&mut self, bytes: &[u8]) -> InventoryResult<()> {
        let save: PokeballsSave = postcard::from_bytes(bytes)
            .map_err(|e| SaveDataError::Checkpoint(e.to_string()))?;
        self.from_save(Some(&save));
        Ok(())
    }
}
