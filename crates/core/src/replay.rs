use crate::config::GameConfig;
use crate::game::Game;
use crate::journal::InputJournal;
use crate::types::{GenError, RunPhase};

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    WorldBuild(GenError),
    InputOutOfOrder { index: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_clock_ms: u64,
    pub final_phase: RunPhase,
    pub final_snapshot_hash: u64,
}

/// Re-simulates a recorded session: the clock advances to each input's
/// timestamp before the command applies, then `settle_ms` of input-free
/// simulation runs. Identical journals always reproduce identical states.
pub fn replay_to_end(
    config: &GameConfig,
    journal: &InputJournal,
    settle_ms: u64,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.seed, config.clone()).map_err(ReplayError::WorldBuild)?;

    for (index, record) in journal.inputs.iter().enumerate() {
        if record.at_ms < game.clock_ms() {
            return Err(ReplayError::InputOutOfOrder { index });
        }
        game.advance(record.at_ms - game.clock_ms());
        game.handle_command(record.command);
    }
    game.advance(settle_ms);

    Ok(ReplayResult {
        final_clock_ms: game.clock_ms(),
        final_phase: game.phase(),
        final_snapshot_hash: game.snapshot_hash(),
    })
}
