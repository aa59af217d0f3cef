use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use warrens_core::{GameConfig, InputJournal, ReplayResult, replay_to_end};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
    /// Optional game config JSON overriding the built-in defaults
    #[arg(short, long)]
    config: Option<String>,
    /// Input-free simulation time appended after the last command, in ms
    #[arg(short, long, default_value_t = 10_000)]
    settle_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let config: GameConfig = match &args.config {
        Some(path) => {
            let config_data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            serde_json::from_str(&config_data)
                .with_context(|| "Failed to deserialize config JSON")?
        }
        None => GameConfig::default(),
    };

    let result: ReplayResult = replay_to_end(&config, &journal, args.settle_ms)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {:?}", e))?;

    println!("Replay complete.");
    println!("Final Clock: {} ms", result.final_clock_ms);
    println!("Final Phase: {:?}", result.final_phase);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
