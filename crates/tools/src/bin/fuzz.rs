use std::collections::BTreeSet;

use anyhow::Result;
use clap::Parser;
use game_core::{Command, Direction, Game, GameState, TurnOutcome};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn assert_invariants(state: &GameState) {
    assert!(state.map.is_walkable(state.player.pos), "Invariant failed: player inside wall");
    assert!(
        state.player.hp <= state.player.max_hp,
        "Invariant failed: HP above the cap"
    );

    let mut occupied = BTreeSet::from([state.player.pos]);
    for (_, enemy) in &state.enemies {
        assert!(state.map.is_walkable(enemy.pos), "Invariant failed: enemy inside wall");
        assert!(enemy.hp > 0, "Invariant failed: dead enemy still listed");
        assert!(occupied.insert(enemy.pos), "Invariant failed: actors overlap");
    }
    for (_, item) in state.potions.iter().chain(state.weapons.iter()) {
        assert!(state.map.is_walkable(item.pos), "Invariant failed: item inside wall");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let mut game = Game::new(args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let commands = [
        Command::Move(Direction::Up),
        Command::Move(Direction::Down),
        Command::Move(Direction::Left),
        Command::Move(Direction::Right),
        Command::Attack,
    ];

    let mut issued = 0;
    while issued < args.turns {
        let command = choose(&mut rng, &commands);
        let outcome = game.apply(command);
        issued += 1;

        assert_invariants(game.state());

        if outcome == TurnOutcome::GameOver {
            println!("Run ended on turn {} after {} commands", game.current_turn(), issued);
            break;
        }
    }

    println!(
        "Fuzzing completed successfully: {} commands, {} turns, {} enemies left, hash {}.",
        issued,
        game.current_turn(),
        game.state().enemies.len(),
        game.snapshot_hash()
    );
    Ok(())
}
