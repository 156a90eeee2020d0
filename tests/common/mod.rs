pub mod macros;

use plantsim_lib::model::config::{GameConfig, PlantConfig};
use plantsim_lib::model::game::Game;
use plantsim_lib::model::Resource;

#[allow(dead_code)]
pub struct GameBuilder {
    game: GameConfig,
    plant: PlantConfig,
    supplies: Vec<(Resource, i64)>,
}

#[allow(dead_code)]
impl GameBuilder {
    pub fn new() -> Self {
        Self {
            game: GameConfig::new("Test garden", 20, 10.0),
            plant: PlantConfig::default(),
            supplies: Vec::new(),
        }
    }

    pub fn with_rounds(mut self, rounds: i64) -> Self {
        self.game.max_time_period = rounds;
        self
    }

    pub fn with_goal(mut self, size: f64) -> Self {
        self.game.max_plant_size = size;
        self
    }

    pub fn with_plant(mut self, plant: PlantConfig) -> Self {
        self.plant = plant;
        self
    }

    /// Adds `amount` of `resource` to the pools before the first round.
    pub fn with_supply(mut self, resource: Resource, amount: i64) -> Self {
        self.supplies.push((resource, amount));
        self
    }

    /// Pools that exactly cover a fresh default plant's needs.
    pub fn with_exact_needs(self) -> Self {
        self.with_supply(Resource::Water, 100)
            .with_supply(Resource::Light, 10)
            .with_supply(Resource::Nutrients, 5)
    }

    pub fn build(self) -> Game {
        let mut game = Game::new(self.game, self.plant);
        for (resource, amount) in self.supplies {
            game.add(resource, amount).expect("builder supplies are positive");
        }
        game
    }
}

/// Tops every pool up to what the plant needs at its current size.
#[allow(dead_code)]
pub fn supply_exact_needs(game: &mut Game) {
    for resource in Resource::ALL {
        let missing = game.plant().needed(resource) - game.available(resource);
        let amount = missing.round() as i64;
        if amount > 0 {
            game.add(resource, amount).unwrap();
        }
    }
}
