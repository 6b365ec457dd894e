use core::journal::CommandJournal;
use core::replay::replay_to_end;
use core::{Command, Direction, Game};

// A fixed command script that wanders and swings; rejected moves are fine,
// they are part of the deterministic record.
fn scripted_commands() -> Vec<Command> {
    let pattern = [
        Command::Move(Direction::Left),
        Command::Move(Direction::Up),
        Command::Attack,
        Command::Move(Direction::Right),
        Command::Move(Direction::Down),
        Command::Move(Direction::Down),
        Command::Attack,
        Command::Move(Direction::Left),
    ];
    pattern.iter().copied().cycle().take(80).collect()
}

fn run_script(seed: u64) -> Game {
    let mut game = Game::new(seed);
    for command in scripted_commands() {
        if game.is_over() {
            break;
        }
        game.apply(command);
    }
    game
}

#[test]
fn identical_seeds_and_scripts_produce_identical_runs() {
    let left = run_script(12_345);
    let right = run_script(12_345);

    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
    assert_eq!(left.current_turn(), right.current_turn());
    assert_eq!(left.log(), right.log());
}

#[test]
fn different_seeds_diverge() {
    let left = run_script(123);
    let right = run_script(456);
    assert_ne!(left.snapshot_hash(), right.snapshot_hash());
}

#[test]
fn a_recorded_journal_replays_to_the_live_run() {
    let seed = 777;
    let mut game = Game::new(seed);
    let mut journal = CommandJournal::new(seed);

    let mut seq = 0;
    for command in scripted_commands() {
        if game.is_over() {
            break;
        }
        game.apply(command);
        journal.append_command(command, seq);
        seq += 1;
    }

    let replayed = replay_to_end(&journal).expect("journal replays cleanly");
    assert_eq!(replayed.final_snapshot_hash, game.snapshot_hash());
    assert_eq!(replayed.final_turn, game.current_turn());
    assert_eq!(replayed.game_over, game.is_over());
}
