//! Initial world construction and post-run regeneration.
//! This module exists to isolate build-time details from runtime simulation flow.
//! It does not own tick advancement or combat resolution once a run has started.

use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use super::*;
use crate::mapgen::{GeneratedLevel, LevelGenerator};
use crate::state::Item;

impl Game {
    /// Builds a fresh run. A level whose placement cannot fit the
    /// configured roster is regenerated from the next derived seed, up to
    /// the configured attempt cap, before the error surfaces.
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, GenError> {
        let generator = LevelGenerator::new(seed, config.clone());
        let mut generation = 0_u32;
        let level = loop {
            match generator.generate(generation) {
                Ok(level) => break level,
                Err(error) => {
                    generation += 1;
                    if generation >= config.regeneration_attempt_cap.max(1) {
                        return Err(error);
                    }
                }
            }
        };

        let state = world_from_level(&level, &config, 0);
        Ok(Self {
            seed,
            generation,
            clock_ms: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state,
            phase: RunPhase::Running,
            aggro: BTreeSet::new(),
            near_band: BTreeSet::new(),
            damage_due_ms: None,
            reset_due_ms: None,
            events: Vec::new(),
            config,
        })
    }

    /// Replaces the world with the next generation after a terminal delay.
    /// On the (practically unreachable) failure of every retry the phase
    /// stays terminal and no reset event is reported.
    pub(super) fn rebuild_world(&mut self) {
        self.reset_due_ms = None;

        let generator = LevelGenerator::new(self.seed, self.config.clone());
        let mut generation = self.generation.wrapping_add(1);
        let mut attempts = 0_u32;
        let level = loop {
            match generator.generate(generation) {
                Ok(level) => break level,
                Err(_) => {
                    generation = generation.wrapping_add(1);
                    attempts += 1;
                    if attempts >= self.config.regeneration_attempt_cap.max(1) {
                        return;
                    }
                }
            }
        };

        self.generation = generation;
        self.state = world_from_level(&level, &self.config, self.clock_ms);
        self.aggro.clear();
        self.near_band.clear();
        self.damage_due_ms = None;
        self.phase = RunPhase::Running;
        self.events.push(GameEvent::GameReset { generation });
    }
}

fn world_from_level(level: &GeneratedLevel, config: &GameConfig, now_ms: u64) -> GameState {
    let mut actors = SlotMap::with_key();
    let player = Actor {
        id: EntityId::default(),
        kind: ActorKind::Player,
        pos: level.player_start,
        hp: config.player_max_health,
        max_hp: config.player_max_health,
        attack: config.player_base_damage,
        facing: Facing::Right,
        aggroed: false,
        halted: false,
        next_move_due_ms: 0,
    };
    let player_id = actors.insert(player);
    actors[player_id].id = player_id;

    for &cell in &level.enemy_spawns {
        let enemy = Actor {
            id: EntityId::default(),
            kind: ActorKind::Enemy,
            pos: cell,
            hp: config.enemy_max_health,
            max_hp: config.enemy_max_health,
            attack: 0,
            facing: Facing::Right,
            aggroed: false,
            halted: false,
            next_move_due_ms: now_ms + config.enemy_move_interval(),
        };
        let id = actors.insert(enemy);
        actors[id].id = id;
    }

    let mut items = SlotMap::with_key();
    for spawn in &level.pickup_spawns {
        let item = Item { id: ItemId::default(), kind: spawn.kind, pos: spawn.cell };
        let id = items.insert(item);
        items[id].id = id;
    }

    GameState { field: level.field.clone(), actors, items, player_id }
}
