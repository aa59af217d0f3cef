//! Step validation for the player and scheduler-driven enemy stepping.

use super::*;
use crate::mapgen::seed::rand_in_range;

impl Game {
    /// Validates and applies a single player step. Bounds are checked
    /// before free-set membership; a blocked step is a no-op report, not
    /// an error.
    pub fn try_move_player(&mut self, dx: i32, dy: i32) -> MoveResult {
        let from = self.state.actors[self.state.player_id].pos;
        let to = from.offset(dx, dy);
        if !self.state.field.in_bounds(to) {
            return MoveResult::Blocked(BlockedReason::OutOfBounds);
        }
        if !self.state.field.is_free(to) {
            return MoveResult::Blocked(BlockedReason::Occupied);
        }

        let player = &mut self.state.actors[self.state.player_id];
        player.pos = to;
        if dx > 0 {
            player.facing = Facing::Right;
        } else if dx < 0 {
            player.facing = Facing::Left;
        }
        self.events.push(GameEvent::EntityMoved { id: self.state.player_id, cell: to });
        self.collect_pickups(to);
        self.recompute_proximity();
        MoveResult::Applied(to)
    }

    /// At most one potion and one weapon are consumed per move, first
    /// match in arena order. A potion restores health to the maximum; the
    /// carved cell itself stays walkable after collection.
    fn collect_pickups(&mut self, cell: Cell) {
        if let Some(item_id) = self.pickup_at(cell, PickupKind::HealthPotion) {
            self.state.items.remove(item_id);
            let player = &mut self.state.actors[self.state.player_id];
            player.hp = player.max_hp;
            let health = player.hp;
            self.events.push(GameEvent::PickupCollected { kind: PickupKind::HealthPotion, cell });
            self.events.push(GameEvent::EntityDamaged { id: self.state.player_id, health });
        }
        if let Some(item_id) = self.pickup_at(cell, PickupKind::Weapon) {
            self.state.items.remove(item_id);
            self.state.actors[self.state.player_id].attack += self.config.weapon_damage_bonus;
            self.events.push(GameEvent::PickupCollected { kind: PickupKind::Weapon, cell });
        }
    }

    fn pickup_at(&self, cell: Cell, kind: PickupKind) -> Option<ItemId> {
        self.state
            .items
            .iter()
            .find(|(_, item)| item.pos == cell && item.kind == kind)
            .map(|(id, _)| id)
    }

    pub(super) fn step_enemy(&mut self, id: EntityId) {
        let Some(actor) = self.state.actors.get(id) else {
            return;
        };
        let pos = actor.pos;
        let aggroed = actor.aggroed;
        let player_pos = self.state.actors[self.state.player_id].pos;

        let (dx, dy) =
            if aggroed { pursuit_step(pos, player_pos) } else { self.random_step() };
        let to = pos.offset(dx, dy);
        if (dx, dy) != (0, 0) && self.state.field.is_free(to) {
            self.state.actors[id].pos = to;
            self.events.push(GameEvent::EntityMoved { id, cell: to });
        }

        let interval = self.config.enemy_move_interval();
        let actor = &mut self.state.actors[id];
        actor.next_move_due_ms = self.clock_ms + interval;
        if actor.aggroed && actor.pos == player_pos {
            // Pursuit parks on the player's cell until the next aggro transition.
            actor.halted = true;
        }
        self.recompute_proximity();
    }

    fn random_step(&mut self) -> (i32, i32) {
        const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];
        DIRECTIONS[rand_in_range(&mut self.rng, 0, DIRECTIONS.len() - 1)]
    }
}

/// One cardinal step toward the target, preferring the axis of strictly
/// greater absolute displacement. Ties go to the Y axis.
fn pursuit_step(from: Cell, toward: Cell) -> (i32, i32) {
    let delta_x = toward.x - from.x;
    let delta_y = toward.y - from.y;
    if delta_x.abs() > delta_y.abs() {
        (delta_x.signum(), 0)
    } else {
        (0, delta_y.signum())
    }
}
