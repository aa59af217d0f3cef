//! Real-time simulation context: movement, aggro, combat, and lifecycle.
//! This file wires focused game submodules together.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::state::{Actor, GameState};
use crate::types::*;

mod advance;
mod bootstrap;
mod combat;
mod lifecycle;
mod movement;
mod proximity;

#[cfg(test)]
mod test_support;

/// One run's worth of world state, schedule, and reporting. All mutation
/// goes through commands and `advance`; the presentation layer observes
/// through the drainable event log and read-only queries.
pub struct Game {
    config: GameConfig,
    seed: u64,
    generation: u32,
    clock_ms: u64,
    rng: ChaCha8Rng,
    state: GameState,
    phase: RunPhase,
    aggro: BTreeSet<EntityId>,
    near_band: BTreeSet<EntityId>,
    damage_due_ms: Option<u64>,
    reset_due_ms: Option<u64>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Applies one discrete host command. Commands arriving after a
    /// terminal transition are ignored.
    pub fn handle_command(&mut self, command: InputCommand) {
        if self.phase.is_terminal() {
            return;
        }
        match command {
            InputCommand::MoveUp => {
                self.try_move_player(0, -1);
            }
            InputCommand::MoveDown => {
                self.try_move_player(0, 1);
            }
            InputCommand::MoveLeft => {
                self.try_move_player(-1, 0);
            }
            InputCommand::MoveRight => {
                self.try_move_player(1, 0);
            }
            InputCommand::Attack => self.attack(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Actor {
        &self.state.actors[self.state.player_id]
    }

    pub fn enemy_count(&self) -> usize {
        self.state.actors.values().filter(|actor| actor.kind == ActorKind::Enemy).count()
    }

    /// Enemies currently inside the one-cell adjacency band; membership
    /// drives pursuit and the shared damage pulse.
    pub fn aggroed_enemies(&self) -> &BTreeSet<EntityId> {
        &self.aggro
    }

    /// Enemies inside the two-cell band. Reported only; nothing in the
    /// simulation consumes it.
    pub fn nearby_enemies(&self) -> &BTreeSet<EntityId> {
        &self.near_band
    }

    pub fn damage_pulse_active(&self) -> bool {
        self.damage_due_ms.is_some()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;

        use slotmap::Key;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.generation);
        hasher.write_u64(self.clock_ms);
        hasher.write_u8(match self.phase {
            RunPhase::Running => 0,
            RunPhase::Lost => 1,
            RunPhase::Won => 2,
        });

        let mut actors: Vec<&Actor> = self.state.actors.values().collect();
        actors.sort_by_key(|actor| actor.id);
        for actor in actors {
            hasher.write_u64(actor.id.data().as_ffi());
            hasher.write_u8(match actor.kind {
                ActorKind::Player => 0,
                ActorKind::Enemy => 1,
            });
            hasher.write_i32(actor.pos.x);
            hasher.write_i32(actor.pos.y);
            hasher.write_i32(actor.hp);
            hasher.write_i32(actor.attack);
            hasher.write_u8(match actor.facing {
                Facing::Left => 0,
                Facing::Right => 1,
            });
            hasher.write_u8(u8::from(actor.aggroed) | (u8::from(actor.halted) << 1));
            hasher.write_u64(actor.next_move_due_ms);
        }

        let mut items: Vec<_> = self.state.items.values().collect();
        items.sort_by_key(|item| item.id);
        for item in items {
            hasher.write_u8(match item.kind {
                PickupKind::HealthPotion => 0,
                PickupKind::Weapon => 1,
            });
            hasher.write_i32(item.pos.x);
            hasher.write_i32(item.pos.y);
        }

        for id in &self.aggro {
            hasher.write_u64(id.data().as_ffi());
        }
        hasher.write_u64(self.damage_due_ms.unwrap_or(u64::MAX));
        hasher.write_u64(self.reset_due_ms.unwrap_or(u64::MAX));

        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn snapshot_hash_is_stable_for_identical_states() {
        let a = Game::new(7, GameConfig::default()).expect("world");
        let b = Game::new(7, GameConfig::default()).expect("world");
        assert_eq!(a.snapshot_hash(), b.snapshot_hash());
    }

    #[test]
    fn snapshot_hash_tracks_player_movement() {
        let mut game = open_field_game(6, 6);
        let before = game.snapshot_hash();
        game.handle_command(InputCommand::MoveRight);
        assert_ne!(before, game.snapshot_hash());
    }

    #[test]
    fn commands_map_to_unit_cardinal_steps() {
        let mut game = open_field_game(6, 6);
        place_player(&mut game, Cell { x: 2, y: 2 });

        game.handle_command(InputCommand::MoveUp);
        assert_eq!(game.player().pos, Cell { x: 2, y: 1 });
        game.handle_command(InputCommand::MoveLeft);
        assert_eq!(game.player().pos, Cell { x: 1, y: 1 });
        game.handle_command(InputCommand::MoveDown);
        assert_eq!(game.player().pos, Cell { x: 1, y: 2 });
        game.handle_command(InputCommand::MoveRight);
        assert_eq!(game.player().pos, Cell { x: 2, y: 2 });
    }
}
