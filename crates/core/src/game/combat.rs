//! Melee resolution and the shared damage pulse.

use super::*;

impl Game {
    /// Applies the player's attack damage to every enemy in the one-cell
    /// band. A single command can fell several adjacent enemies; emptying
    /// the roster wins the run.
    pub fn attack(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        let targets = self.enemies_in_band(1);
        if targets.is_empty() {
            return;
        }

        let damage = self.state.actors[self.state.player_id].attack;
        for id in targets {
            let Some(actor) = self.state.actors.get_mut(id) else {
                continue;
            };
            actor.hp -= damage;
            let health = actor.hp;
            self.events.push(GameEvent::EntityDamaged { id, health });
            if health <= 0 {
                self.state.actors.remove(id);
                self.aggro.remove(&id);
                self.near_band.remove(&id);
                self.events.push(GameEvent::EntityRemoved { id });
            }
        }

        if self.enemy_count() == 0 {
            self.end_run(Outcome::Won);
        } else {
            self.recompute_proximity();
        }
    }

    /// Fires while any enemy is aggroed, every damage interval, for
    /// `damage_amount * interval / 1000` health. Reaching zero loses the run.
    pub(super) fn fire_damage_pulse(&mut self) {
        if self.aggro.is_empty() {
            self.damage_due_ms = None;
            return;
        }

        let damage = self.config.damage_per_pulse();
        let player = &mut self.state.actors[self.state.player_id];
        player.hp = (player.hp - damage).clamp(0, player.max_hp);
        let health = player.hp;
        self.events.push(GameEvent::EntityDamaged { id: self.state.player_id, health });

        if health <= 0 {
            self.end_run(Outcome::Lost);
        } else {
            self.damage_due_ms = Some(self.clock_ms + self.config.damage_interval());
        }
    }
}
