//! Adjacency bands, aggro transitions, and damage-pulse scheduling.
//! This module exists to keep proximity bookkeeping in one deterministic pass.
//! It does not own melee resolution or terminal transitions.

use super::*;

impl Game {
    /// Re-derives both adjacency bands and reconciles the aggro set with
    /// them. Runs after every applied move: movement first, then
    /// proximity, then timer decisions.
    pub(super) fn recompute_proximity(&mut self) {
        let close = self.enemies_in_band(1);
        let near = self.enemies_in_band(2);

        for &id in &close {
            if self.aggro.insert(id) {
                let interval = self.config.enemy_move_interval();
                let actor = &mut self.state.actors[id];
                actor.aggroed = true;
                actor.halted = false;
                actor.next_move_due_ms = self.clock_ms + interval;
                if self.damage_due_ms.is_none() {
                    self.damage_due_ms = Some(self.clock_ms + self.config.damage_interval());
                }
            }
        }

        let stale: Vec<EntityId> =
            self.aggro.iter().copied().filter(|id| !close.contains(id)).collect();
        for id in stale {
            self.aggro.remove(&id);
            if let Some(actor) = self.state.actors.get_mut(id) {
                actor.aggroed = false;
                actor.halted = false;
            }
        }

        self.near_band = near;
        if self.aggro.is_empty() {
            self.damage_due_ms = None;
        }
    }

    /// Nine offsets (the 8-neighborhood plus the player's own cell,
    /// unless configured out) multiplied by `scale`. At scale 2 this is
    /// deliberately sparser than a true Chebyshev-2 ring.
    pub(super) fn enemies_in_band(&self, scale: i32) -> BTreeSet<EntityId> {
        let player_pos = self.state.actors[self.state.player_id].pos;
        let mut band = BTreeSet::new();
        for (id, actor) in self.state.actors.iter() {
            if actor.kind != ActorKind::Enemy {
                continue;
            }
            let hit = self
                .adjacency_offsets()
                .iter()
                .any(|&(dx, dy)| actor.pos == player_pos.offset(dx * scale, dy * scale));
            if hit {
                band.insert(id);
            }
        }
        band
    }

    fn adjacency_offsets(&self) -> &'static [(i32, i32)] {
        static WITH_SELF: [(i32, i32); 9] =
            [(0, 0), (0, -1), (-1, 0), (0, 1), (1, 0), (-1, -1), (1, -1), (-1, 1), (1, 1)];
        if self.config.adjacency_includes_self { &WITH_SELF } else { &WITH_SELF[1..] }
    }
}
