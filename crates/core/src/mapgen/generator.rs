//! Level generation orchestration: seeded carving plus entity placement.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::GameConfig;
use crate::types::GenError;

use super::layout::carve_topology;
use super::model::GeneratedLevel;
use super::seed::derive_level_seed;
use super::spawns::place_entities;

pub struct LevelGenerator {
    run_seed: u64,
    config: GameConfig,
}

impl LevelGenerator {
    pub fn new(run_seed: u64, config: GameConfig) -> Self {
        Self { run_seed, config }
    }

    /// Generation is a pure function of `(run_seed, generation, config)`:
    /// the same inputs always carve and place the same level.
    pub fn generate(&self, generation: u32) -> Result<GeneratedLevel, GenError> {
        let level_seed = derive_level_seed(self.run_seed, generation);
        let mut rng = ChaCha8Rng::seed_from_u64(level_seed);

        let topology = carve_topology(&mut rng, &self.config);
        let placement = place_entities(&mut rng, &topology.field, &self.config)?;

        Ok(GeneratedLevel {
            field: topology.field,
            player_start: placement.player_start,
            pickup_spawns: placement.pickups,
            enemy_spawns: placement.enemies,
            placement_failures: placement.failures,
        })
    }
}
