//! Terminal transitions and scheduling of the delayed world rebuild.

use super::*;

impl Game {
    /// One-way transition out of `Running`. Cancels every live schedule,
    /// reports the outcome, and books the delayed full rebuild.
    pub(super) fn end_run(&mut self, outcome: Outcome) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = match outcome {
            Outcome::Won => RunPhase::Won,
            Outcome::Lost => RunPhase::Lost,
        };
        self.damage_due_ms = None;
        self.aggro.clear();
        self.near_band.clear();
        self.events.push(GameEvent::GameEnded { outcome });
        self.reset_due_ms = Some(self.clock_ms + self.config.reset_delay());
    }
}
