//! Clock advancement and due-entry dispatch for the simulation loop.

use super::*;

/// Variant order is the tie-break at equal timestamps: enemy moves resolve
/// before the damage pulse, and the pulse before a pending world reset, so
/// movement always precedes proximity and timer decisions within a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum DueEntry {
    EnemyMove(EntityId),
    DamagePulse,
    WorldReset,
}

impl Game {
    /// Advances the simulation clock by `delta_ms`, firing every scheduled
    /// entry inside the window in deterministic order.
    pub fn advance(&mut self, delta_ms: u64) {
        let target = self.clock_ms.saturating_add(delta_ms);
        while let Some((due, entry)) = self.next_due(target) {
            self.clock_ms = due;
            match entry {
                DueEntry::EnemyMove(id) => self.step_enemy(id),
                DueEntry::DamagePulse => self.fire_damage_pulse(),
                DueEntry::WorldReset => self.rebuild_world(),
            }
        }
        self.clock_ms = target;
    }

    fn next_due(&self, limit: u64) -> Option<(u64, DueEntry)> {
        let mut best: Option<(u64, DueEntry)> = None;
        if self.phase == RunPhase::Running {
            for (id, actor) in self.state.actors.iter() {
                if actor.kind != ActorKind::Enemy || actor.halted {
                    continue;
                }
                consider(&mut best, (actor.next_move_due_ms, DueEntry::EnemyMove(id)));
            }
            if let Some(at) = self.damage_due_ms {
                consider(&mut best, (at, DueEntry::DamagePulse));
            }
        }
        if let Some(at) = self.reset_due_ms {
            consider(&mut best, (at, DueEntry::WorldReset));
        }
        best.filter(|(at, _)| *at <= limit)
    }
}

fn consider(best: &mut Option<(u64, DueEntry)>, candidate: (u64, DueEntry)) {
    let replace = match best {
        None => true,
        Some(current) => candidate < *current,
    };
    if replace {
        *best = Some(candidate);
    }
}
