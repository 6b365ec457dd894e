use crate::config::GameConfig;
use crate::game::Game;
use crate::journal::CommandJournal;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// The journal keeps issuing commands after the run already ended; a
    /// faithfully recorded run cannot contain one.
    InputAfterGameOver { seq: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_turn: u64,
    pub game_over: bool,
    pub final_snapshot_hash: u64,
}

pub fn replay_to_end(journal: &CommandJournal) -> Result<ReplayResult, ReplayError> {
    replay_with_config(journal, GameConfig::default())
}

pub fn replay_with_config(
    journal: &CommandJournal,
    config: GameConfig,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::with_config(journal.seed, config);
    for record in &journal.inputs {
        if game.is_over() {
            return Err(ReplayError::InputAfterGameOver { seq: record.seq });
        }
        game.apply(record.command);
    }
    Ok(ReplayResult {
        final_turn: game.current_turn(),
        game_over: game.is_over(),
        final_snapshot_hash: game.snapshot_hash(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Command;

    #[test]
    fn an_empty_journal_replays_to_the_freshly_built_world() {
        let journal = CommandJournal::new(321);
        let result = replay_to_end(&journal).expect("replay");

        assert_eq!(result.final_turn, 0);
        assert!(!result.game_over);
        assert_eq!(result.final_snapshot_hash, Game::new(321).snapshot_hash());
    }

    #[test]
    fn commands_recorded_after_the_run_ended_are_a_journal_defect() {
        // With zero hit points the first resolved command ends the run;
        // `Attack` always resolves, so the second record can never apply.
        let config = GameConfig { max_hp: 0, ..GameConfig::default() };
        let mut journal = CommandJournal::new(11);
        journal.append_command(Command::Attack, 0);
        journal.append_command(Command::Attack, 1);

        let error = replay_with_config(&journal, config).expect_err("second input is dead");
        assert_eq!(error, ReplayError::InputAfterGameOver { seq: 1 });
    }

    #[test]
    fn a_journal_ending_exactly_at_game_over_is_valid() {
        let config = GameConfig { max_hp: 0, ..GameConfig::default() };
        let mut journal = CommandJournal::new(11);
        journal.append_command(Command::Attack, 0);

        let result = replay_with_config(&journal, config).expect("replay");
        assert!(result.game_over);
        assert_eq!(result.final_turn, 1);
    }
}
