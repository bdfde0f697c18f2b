use crate::collaborators::{BallUsageCounter, CatchTarget, CaughtStatus, EnemyLookup};
use crate::config::PokeballDefaults;
use crate::pokeballs::Pokeballs;
use crate::preferences::BallPreferences;
use schema::{EnumCount, Pokeball};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

/// Party stand-in that answers from two sets of caught species.
#[derive(Default)]
pub struct FakeParty {
    caught: RefCell<HashSet<u16>>,
    caught_shiny: RefCell<HashSet<u16>>,
}

impl FakeParty {
    pub fn catch(&self, species: u16, shiny: bool) {
        self.caught.borrow_mut().insert(species);
        if shiny {
            self.caught_shiny.borrow_mut().insert(species);
        }
    }
}

impl CaughtStatus for FakeParty {
    fn already_caught(&self, species: u16, shiny: bool) -> bool {
        if shiny {
            self.caught_shiny.borrow().contains(&species)
        } else {
            self.caught.borrow().contains(&species)
        }
    }
}

/// Battle stand-in whose enemy can be swapped mid-test.
#[derive(Default)]
pub struct FakeBattle {
    enemy: Cell<Option<CatchTarget>>,
}

impl FakeBattle {
    pub fn set_enemy(&self, enemy: Option<CatchTarget>) {
        self.enemy.set(enemy);
    }
}

impl EnemyLookup for FakeBattle {
    fn current_enemy(&self) -> Option<CatchTarget> {
        self.enemy.get()
    }
}

/// An engine wired to fakes the test can keep poking at.
pub struct TestHarness {
    pub party: Rc<FakeParty>,
    pub battle: Rc<FakeBattle>,
    pub statistics: Rc<BallUsageCounter>,
    pub pokeballs: Pokeballs,
}

/// A builder for creating test inventories with common defaults.
///
/// # Example
/// ```
/// let harness = TestPokeballsBuilder::new()
///     .with_stock(Pokeball::Greatball, 3)
///     .with_preferences(prefs)
///     .build();
/// ```
pub struct TestPokeballsBuilder {
    stock: Vec<u32>,
    preferences: BallPreferences,
}

impl TestPokeballsBuilder {
    /// Starts from the normal new-game defaults.
    pub fn new() -> Self {
        let defaults = PokeballDefaults::default();
        let mut stock = defaults.starting_stock;
        stock.resize(Pokeball::COUNT, 0);
        Self {
            stock,
            preferences: defaults.preferences,
        }
    }

    /// Starts with every ball out of stock.
    pub fn empty() -> Self {
        Self {
            stock: vec![0; Pokeball::COUNT],
            ..Self::new()
        }
    }

    pub fn with_stock(mut self, ball: Pokeball, amount: u32) -> Self {
        self.stock[ball.index()] = amount;
        self
    }

    pub fn with_stock_levels(mut self, stock: &[u32]) -> Self {
        self.stock = stock.to_vec();
        self
    }

    pub fn with_preferences(mut self, preferences: BallPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Every preference slot set to the same ball.
    pub fn with_all_preferences(self, ball: Option<Pokeball>) -> Self {
        self.with_preferences(BallPreferences {
            already_caught: ball,
            already_caught_shiny: ball,
            not_caught: ball,
            not_caught_shiny: ball,
        })
    }

    pub fn build(self) -> TestHarness {
        let party = Rc::new(FakeParty::default());
        let battle = Rc::new(FakeBattle::default());
        let statistics = Rc::new(BallUsageCounter::new());

        let defaults = PokeballDefaults {
            starting_stock: self.stock,
            preferences: self.preferences,
        };
        let pokeballs =
            Pokeballs::with_defaults(defaults, party.clone(), battle.clone(), statistics.clone());

        TestHarness {
            party,
            battle,
            statistics,
            pokeballs,
        }
    }
}
