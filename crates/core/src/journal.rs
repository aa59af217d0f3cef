use serde::{Deserialize, Serialize};

use crate::types::InputCommand;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct InputRecord {
    pub at_ms: u64,
    pub command: InputCommand,
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: 1, seed, inputs: Vec::new() }
    }

    pub fn append(&mut self, at_ms: u64, command: InputCommand) {
        self.inputs.push(InputRecord { at_ms, command });
    }
}
