//! Shared fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating field and actor setup across tests.
//! It does not own production gameplay logic.

use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use super::*;
use crate::state::{Field, Item};

pub(super) fn open_field(width: usize, height: usize) -> Field {
    let mut field = Field::new(width, height);
    for y in 0..height {
        for x in 0..width {
            field.carve(Cell { x: x as i32, y: y as i32 });
        }
    }
    field
}

pub(super) fn open_field_game(width: usize, height: usize) -> Game {
    game_on_field(open_field(width, height))
}

pub(super) fn game_on_field(field: Field) -> Game {
    game_with_config(field, GameConfig::default())
}

/// A bare world with only the player seated at (0, 0); tests add enemies
/// and pickups as needed.
pub(super) fn game_with_config(field: Field, config: GameConfig) -> Game {
    let mut actors = SlotMap::with_key();
    let player = Actor {
        id: EntityId::default(),
        kind: ActorKind::Player,
        pos: Cell { x: 0, y: 0 },
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

    Game {
        seed: 0,
        generation: 0,
        clock_ms: 0,
        rng: ChaCha8Rng::seed_from_u64(0),
        state: GameState { field, actors, items: SlotMap::with_key(), player_id },
        phase: RunPhase::Running,
        aggro: BTreeSet::new(),
        near_band: BTreeSet::new(),
        damage_due_ms: None,
        reset_due_ms: None,
        events: Vec::new(),
        config,
    }
}

pub(super) fn place_player(game: &mut Game, pos: Cell) {
    let player_id = game.state.player_id;
    game.state.actors[player_id].pos = pos;
}

pub(super) fn set_player_hp(game: &mut Game, hp: i32) {
    let player_id = game.state.player_id;
    game.state.actors[player_id].hp = hp;
}

pub(super) fn add_enemy(game: &mut Game, pos: Cell) -> EntityId {
    let hp = game.config.enemy_max_health;
    add_enemy_with_hp(game, pos, hp)
}

pub(super) fn add_enemy_with_hp(game: &mut Game, pos: Cell, hp: i32) -> EntityId {
    let enemy = Actor {
        id: EntityId::default(),
        kind: ActorKind::Enemy,
        pos,
        hp,
        max_hp: game.config.enemy_max_health,
        attack: 0,
        facing: Facing::Right,
        aggroed: false,
        halted: false,
        next_move_due_ms: game.clock_ms + game.config.enemy_move_interval(),
    };
    let id = game.state.actors.insert(enemy);
    game.state.actors[id].id = id;
    id
}

pub(super) fn add_pickup(game: &mut Game, kind: PickupKind, pos: Cell) -> ItemId {
    let item = Item { id: ItemId::default(), kind, pos };
    let id = game.state.items.insert(item);
    game.state.items[id].id = id;
    id
}
