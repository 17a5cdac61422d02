use anyhow::{Context, Result};
use clap::Parser;
use duo_cards::export::{CsvLogger, DEFAULT_CSV_PATH};
use duo_cards::DuoGameBuilder;
use std::path::PathBuf;
use tracing::info;

/// Simulate a game of Duo between computer players.
#[derive(Parser, Debug)]
#[command(name = "duo", version)]
struct Args {
    /// Seed for the game (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of players (2-10; 2-4 chosen at random when omitted).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: Option<u8>,

    /// Cumulative score that wins the game.
    #[arg(long, default_value_t = 500)]
    win_score: u32,

    /// Cards dealt to each player per round.
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=10))]
    hand_size: u8,

    /// Where to write the per-round score log.
    #[arg(short, long, default_value = DEFAULT_CSV_PATH)]
    output: PathBuf,

    /// Skip writing the score log.
    #[arg(long)]
    no_log: bool,

    /// Log every play and draw.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");

    let mut builder = DuoGameBuilder::new()
        .win_score(args.win_score)
        .hand_size(usize::from(args.hand_size));
    if let Some(players) = args.players {
        builder = builder.player_count(usize::from(players));
    }
    if !args.no_log {
        builder = builder.sink(CsvLogger::new(&args.output));
    }

    let mut game = builder.build(seed);
    let result = game
        .play_to_completion()
        .context("game aborted")?;

    println!(
        "{} wins with {} points after {} rounds (seed {seed})",
        result.winner_name, result.score, result.rounds
    );
    if !args.no_log {
        println!("Score log written to {}", args.output.display());
    }
    Ok(())
}
