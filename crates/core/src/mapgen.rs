//! Procedural level generation split into coherent submodules.

pub mod model;

mod generator;
mod layout;
pub(crate) mod seed;
mod spawns;

pub use generator::LevelGenerator;
pub use model::GeneratedLevel;
pub use spawns::PickupSpawn;

use crate::config::GameConfig;
use crate::types::GenError;

pub fn generate_level(
    run_seed: u64,
    generation: u32,
    config: &GameConfig,
) -> Result<GeneratedLevel, GenError> {
    LevelGenerator::new(run_seed, config.clone()).generate(generation)
}
