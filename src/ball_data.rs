use crate::collaborators::CatchTarget;
use schema::{IntoEnumIterator, Pokeball, PokemonType};
use tracing::{debug, warn};

/// Computes a ball's catch bonus, in percent, against the current target.
pub type CatchBonusFn = fn(Option<&CatchTarget>) -> u8;

/// Bonus granted by the type-restricted balls on a matching target.
pub const TYPE_MATCH_BONUS: u8 = 15;

/// Static attributes of one ball kind plus its stock counter.
#[derive(Debug, Clone)]
pub struct BallData {
    pub ball: Pokeball,
    catch_bonus: CatchBonusFn,
    pub catch_time_ms: u32,
    pub description: &'static str,
    quantity: u32,
}

impl BallData {
    fn new(
        ball: Pokeball,
        catch_bonus: CatchBonusFn,
        catch_time_ms: u32,
        description: &'static str,
    ) -> Self {
        Self {
            ball,
            catch_bonus,
            catch_time_ms,
            description,
            quantity: 0,
        }
    }

    pub fn catch_bonus(&self, target: Option<&CatchTarget>) -> u8 {
        (self.catch_bonus)(target)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

fn type_bonus(target: Option<&CatchTarget>, pokemon_type: PokemonType) -> u8 {
    match target {
        Some(enemy) if enemy.has_type(pokemon_type) => TYPE_MATCH_BONUS,
        _ => 0,
    }
}

fn love_ball_bonus(target: Option<&CatchTarget>) -> u8 {
    type_bonus(target, PokemonType::Fairy)
}

fn rocket_ball_bonus(target: Option<&CatchTarget>) -> u8 {
    type_bonus(target, PokemonType::Dark)
}

fn sport_ball_bonus(target: Option<&CatchTarget>) -> u8 {
    type_bonus(target, PokemonType::Bug)
}

/// Build the catalog entry for a ball.
///
/// Premier, Fast and GS balls have no special effect yet, and the Luxury and
/// Timer balls use flat placeholder bonuses.
fn ball_data(ball: Pokeball) -> BallData {
    match ball {
        Pokeball::Pokeball => BallData::new(ball, |_| 0, 1250, "A standard Pokéball"),
        Pokeball::Greatball => BallData::new(ball, |_| 5, 1000, "5% catch chance bonus"),
        Pokeball::Ultraball => BallData::new(ball, |_| 10, 750, "10% catch chance bonus"),
        Pokeball::Masterball => BallData::new(ball, |_| 100, 500, "100% catch chance"),
        Pokeball::Premierball => {
            BallData::new(ball, |_| 0, 1000, "Slightly faster than a Pokéball")
        }
        Pokeball::Fastball => BallData::new(ball, |_| 0, 500, "Catch Pokémon faster"),
        Pokeball::GSball => BallData::new(ball, |_| 0, 2000, "A special Pokéball"),
        Pokeball::Loveball => BallData::new(
            ball,
            love_ball_bonus,
            1000,
            "Fairy Pokémon 15% catch chance bonus",
        ),
        Pokeball::Luxuryball => BallData::new(ball, |_| 20, 500, "+20% chance to catch"),
        Pokeball::Rocketball => BallData::new(
            ball,
            rocket_ball_bonus,
            500,
            "Dark Pokémon 15% catch chance bonus",
        ),
        Pokeball::Sportball => BallData::new(
            ball,
            sport_ball_bonus,
            500,
            "Bug Pokémon 15% catch chance bonus",
        ),
        Pokeball::Timerball => BallData::new(
            ball,
            |_| 20,
            500,
            "5% → 20% catch chance bonus based on route defeats",
        ),
    }
}

/// One entry per `Pokeball`, indexed by `Pokeball::index()`.
#[derive(Debug, Clone)]
pub struct BallCatalog {
    balls: Vec<BallData>,
}

impl BallCatalog {
    /// Create the catalog with every ball's stock at zero.
    pub fn new() -> Self {
        Self {
            balls: Pokeball::iter().map(ball_data).collect(),
        }
    }

    /// Create the catalog with positional starting stock. Missing entries
    /// start at zero and extra entries are ignored.
    pub fn with_stock(starting_stock: &[u32]) -> Self {
        let mut catalog = Self::new();
        for (entry, amount) in catalog.balls.iter_mut().zip(starting_stock) {
            entry.quantity = *amount;
        }
        catalog
    }

    pub fn get(&self, ball: Pokeball) -> &BallData {
        &self.balls[ball.index()]
    }

    fn get_mut(&mut self, ball: Pokeball) -> &mut BallData {
        &mut self.balls[ball.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BallData> {
        self.balls.iter()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Evaluated on every call so type-restricted balls see the current target.
    pub fn catch_bonus(&self, ball: Pokeball, target: Option<&CatchTarget>) -> u8 {
        self.get(ball).catch_bonus(target)
    }

    pub fn catch_duration(&self, ball: Pokeball) -> u32 {
        self.get(ball).catch_time_ms
    }

    pub fn describe(&self, ball: Pokeball) -> &'static str {
        self.get(ball).description
    }

    pub fn stock(&self, ball: Pokeball) -> u32 {
        self.get(ball).quantity
    }

    /// Apply a signed stock change and return the new quantity. The result is
    /// clamped to `0..=u32::MAX`.
    pub fn add_stock(&mut self, ball: Pokeball, amount: i64) -> u32 {
        let entry = self.get_mut(ball);
        let wanted = i64::from(entry.quantity).saturating_add(amount);
        let clamped = wanted.clamp(0, i64::from(u32::MAX));
        if clamped != wanted {
            warn!(%ball, amount, wanted, "stock change clamped");
        }
        entry.quantity = clamped as u32;
        debug!(%ball, amount, quantity = entry.quantity, "stock changed");
        entry.quantity
    }

    /// Overwrite a ball's stock.
    pub fn set_stock(&mut self, ball: Pokeball, quantity: u32) {
        self.get_mut(ball).quantity = quantity;
    }

    /// Current stock of every ball, in catalog order.
    pub fn stock_levels(&self) -> Vec<u32> {
        self.balls.iter().map(BallData::quantity).collect()
    }
}

impl Default for BallCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use schema::EnumCount;

    #[test]
    fn test_catalog_has_one_entry_per_ball_in_order() {
        let catalog = BallCatalog::new();
        assert_eq!(catalog.len(), Pokeball::COUNT);
        for (position, entry) in catalog.iter().enumerate() {
            assert_eq!(entry.ball.index(), position);
        }
    }

    #[rstest]
    #[case(Pokeball::Pokeball, 0, 1250)]
    #[case(Pokeball::Greatball, 5, 1000)]
    #[case(Pokeball::Ultraball, 10, 750)]
    #[case(Pokeball::Masterball, 100, 500)]
    #[case(Pokeball::Premierball, 0, 1000)]
    #[case(Pokeball::Fastball, 0, 500)]
    #[case(Pokeball::GSball, 0, 2000)]
    #[case(Pokeball::Luxuryball, 20, 500)]
    #[case(Pokeball::Timerball, 20, 500)]
    fn test_flat_bonus_and_catch_time(
        #[case] ball: Pokeball,
        #[case] bonus: u8,
        #[case] catch_time: u32,
    ) {
        let catalog = BallCatalog::new();
        let target = CatchTarget::new(1, PokemonType::Grass, Some(PokemonType::Poison));
        assert_eq!(catalog.catch_bonus(ball, None), bonus);
        assert_eq!(catalog.catch_bonus(ball, Some(&target)), bonus);
        assert_eq!(catalog.catch_duration(ball), catch_time);
    }

    #[rstest]
    #[case(Pokeball::Loveball, PokemonType::Fairy)]
    #[case(Pokeball::Rocketball, PokemonType::Dark)]
    #[case(Pokeball::Sportball, PokemonType::Bug)]
    fn test_type_restricted_bonus(#[case] ball: Pokeball, #[case] pokemon_type: PokemonType) {
        let catalog = BallCatalog::new();

        let primary = CatchTarget::new(10, pokemon_type, None);
        let secondary = CatchTarget::new(10, PokemonType::Normal, Some(pokemon_type));
        let mismatch = CatchTarget::new(10, PokemonType::Water, Some(PokemonType::Ice));
        let untyped = CatchTarget::from_raw(10, -1, pokemon_type as i64);

        assert_eq!(catalog.catch_bonus(ball, Some(&primary)), TYPE_MATCH_BONUS);
        assert_eq!(catalog.catch_bonus(ball, Some(&secondary)), TYPE_MATCH_BONUS);
        assert_eq!(catalog.catch_bonus(ball, Some(&mismatch)), 0);
        assert_eq!(catalog.catch_bonus(ball, Some(&untyped)), 0);
        assert_eq!(catalog.catch_bonus(ball, None), 0);
    }

    #[test]
    fn test_with_stock_is_positional() {
        let catalog = BallCatalog::with_stock(&[25, 3]);
        assert_eq!(catalog.stock(Pokeball::Pokeball), 25);
        assert_eq!(catalog.stock(Pokeball::Greatball), 3);
        assert_eq!(catalog.stock(Pokeball::Ultraball), 0);

        let oversized = vec![1; Pokeball::COUNT + 4];
        let catalog = BallCatalog::with_stock(&oversized);
        assert_eq!(catalog.stock_levels(), vec![1; Pokeball::COUNT]);
    }

    #[test]
    fn test_add_stock_never_goes_negative() {
        let mut catalog = BallCatalog::with_stock(&[2]);
        assert_eq!(catalog.add_stock(Pokeball::Pokeball, 5), 7);
        assert_eq!(catalog.add_stock(Pokeball::Pokeball, -3), 4);
        assert_eq!(catalog.add_stock(Pokeball::Pokeball, -10), 0);
        assert_eq!(catalog.stock(Pokeball::Pokeball), 0);
    }

    #[test]
    fn test_add_stock_saturates_at_max() {
        let mut catalog = BallCatalog::new();
        catalog.set_stock(Pokeball::Ultraball, u32::MAX - 1);
        assert_eq!(catalog.add_stock(Pokeball::Ultraball, 10), u32::MAX);
    }

    #[test]
    fn test_descriptions() {
        let catalog = BallCatalog::new();
        assert_eq!(catalog.describe(Pokeball::Pokeball), "A standard Pokéball");
        assert_eq!(
            catalog.describe(Pokeball::Sportball),
            "Bug Pokémon 15% catch chance bonus"
        );
    }
}
