use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{CommandJournal, ReplayResult, replay::replay_to_end};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal = CommandJournal::from_json(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay_to_end(&journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {e:?}"))?;

    println!("Replay complete.");
    println!("Final Turn: {}", result.final_turn);
    println!("Game Over: {}", result.game_over);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
