//! Player, pickup, and enemy placement over carved free cells.

use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::state::Field;
use crate::types::{Cell, GenError, PickupKind, PlacementFailure, SpawnRole};

use super::seed::rand_in_range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupSpawn {
    pub kind: PickupKind,
    pub cell: Cell,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) player_start: Cell,
    pub(crate) pickups: Vec<PickupSpawn>,
    pub(crate) enemies: Vec<Cell>,
    pub(crate) failures: Vec<PlacementFailure>,
}

/// Draws one cell per unit in a fixed order: weapons, potions, player,
/// enemies. Capacity is checked up front; per-unit failures are reported
/// without aborting the rest of the batch, except for the player, without
/// whom the run cannot start.
pub(crate) fn place_entities(
    rng: &mut ChaCha8Rng,
    field: &Field,
    config: &GameConfig,
) -> Result<Placement, GenError> {
    let required = config.total_placed_units();
    let available = field.free_cell_count();
    if available < required {
        return Err(GenError::InsufficientSpace { available, required });
    }

    let free: Vec<Cell> = field.free_cells().collect();
    let mut sampler = CellSampler {
        rng,
        free: &free,
        attempt_cap: config.placement_attempt_cap,
        exclusive: config.exclusive_placement,
        used: Vec::new(),
    };

    let mut pickups = Vec::new();
    let mut failures = Vec::new();

    for unit in 0..config.weapon_count {
        match sampler.draw() {
            Some(cell) => pickups.push(PickupSpawn { kind: PickupKind::Weapon, cell }),
            None => failures.push(PlacementFailure {
                role: SpawnRole::Weapon,
                unit,
                attempts: config.placement_attempt_cap,
            }),
        }
    }
    for unit in 0..config.potion_count {
        match sampler.draw() {
            Some(cell) => pickups.push(PickupSpawn { kind: PickupKind::HealthPotion, cell }),
            None => failures.push(PlacementFailure {
                role: SpawnRole::Potion,
                unit,
                attempts: config.placement_attempt_cap,
            }),
        }
    }

    let Some(player_start) = sampler.draw() else {
        return Err(GenError::PlayerUnplaced { attempts: config.placement_attempt_cap });
    };

    let mut enemies = Vec::new();
    for unit in 0..config.enemy_count {
        match sampler.draw() {
            Some(cell) => enemies.push(cell),
            None => failures.push(PlacementFailure {
                role: SpawnRole::Enemy,
                unit,
                attempts: config.placement_attempt_cap,
            }),
        }
    }

    Ok(Placement { player_start, pickups, enemies, failures })
}

struct CellSampler<'a> {
    rng: &'a mut ChaCha8Rng,
    free: &'a [Cell],
    attempt_cap: u32,
    exclusive: bool,
    used: Vec<Cell>,
}

impl CellSampler<'_> {
    fn draw(&mut self) -> Option<Cell> {
        for _ in 0..self.attempt_cap {
            let index = rand_in_range(self.rng, 0, self.free.len() - 1);
            let cell = self.free[index];
            if self.exclusive {
                if self.used.contains(&cell) {
                    continue;
                }
                self.used.push(cell);
            }
            return Some(cell);
        }
        None
    }
}
