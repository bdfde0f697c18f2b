use pokeball_inventory::{
    BallUsageCounter, CatchTarget, CaughtStatus, EnemyLookup, Pokeball, PokeballDefaults,
    Pokeballs, PokemonType,
};
use std::cell::Cell;
use std::collections::HashSet;
use std::path::Path;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

/// A party that has caught a handful of early-route species.
struct DemoParty {
    caught: HashSet<u16>,
    caught_shiny: HashSet<u16>,
}

impl CaughtStatus for DemoParty {
    fn already_caught(&self, species: u16, shiny: bool) -> bool {
        if shiny {
            self.caught_shiny.contains(&species)
        } else {
            self.caught.contains(&species)
        }
    }
}

struct DemoBattle {
    enemy: Cell<Option<CatchTarget>>,
}

impl EnemyLookup for DemoBattle {
    fn current_enemy(&self) -> Option<CatchTarget> {
        self.enemy.get()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Optional RON file overriding the starting inventory and preferences.
    let defaults = match std::env::args().nth(1) {
        Some(path) => match PokeballDefaults::load(Path::new(&path)) {
            Ok(defaults) => defaults,
            Err(e) => {
                println!("Error loading defaults: {}", e);
                return;
            }
        },
        None => PokeballDefaults::default(),
    };

    let party = Rc::new(DemoParty {
        caught: HashSet::from([16, 19]),
        caught_shiny: HashSet::from([19]),
    });
    let battle = Rc::new(DemoBattle {
        enemy: Cell::new(None),
    });
    let statistics = Rc::new(BallUsageCounter::new());

    let mut pokeballs = Pokeballs::with_defaults(defaults, party, battle.clone(), statistics.clone());
    pokeballs.gain_pokeballs(Pokeball::Greatball, 5);
    pokeballs.gain_pokeballs(Pokeball::Sportball, 2);
    pokeballs.set_not_caught_selection(Some(Pokeball::Sportball));

    // Encounters: (species, primary type, secondary type, shiny)
    let encounters = [
        (10, PokemonType::Bug, None, false),
        (16, PokemonType::Normal, Some(PokemonType::Flying), false),
        (19, PokemonType::Normal, None, true),
        (13, PokemonType::Bug, Some(PokemonType::Poison), false),
        (25, PokemonType::Electric, None, false),
    ];

    for (species, primary, secondary, shiny) in encounters {
        battle
            .enemy
            .set(Some(CatchTarget::new(species, primary, secondary)));

        match pokeballs.calculate_pokeball_to_use(species, shiny) {
            Some(ball) => {
                let bonus = pokeballs.catch_bonus(ball);
                let time = pokeballs.calculate_catch_time(ball);
                match pokeballs.use_pokeball(ball) {
                    Ok(left) => println!(
                        "#{:03}: threw a {} (+{}%, {}ms), {} left",
                        species, ball, bonus, time, left
                    ),
                    Err(e) => println!("#{:03}: {}", species, e),
                }
            }
            None => println!("#{:03}: no ball thrown", species),
        }
    }
    battle.enemy.set(None);

    println!();
    print!("{}", pokeballs);
    println!("Balls thrown: {}", statistics.total());

    match pokeballs.to_json() {
        Ok(json) => println!("Save record: {}", json),
        Err(e) => println!("Error saving: {}", e),
    }
}
