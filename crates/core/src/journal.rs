use serde::{Deserialize, Serialize};

use crate::types::Command;

/// A seed plus every command issued against a run, in order. Enough to
/// reconstruct the run exactly; developer tooling, not world persistence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandJournal {
    pub format_version: u16,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub command: Command,
}

impl CommandJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: 1, seed, inputs: Vec::new() }
    }

    pub fn append_command(&mut self, command: Command, seq: u64) {
        self.inputs.push(InputRecord { seq, command });
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
