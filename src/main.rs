//! Morris-Rust: Nine Men's Morris for the terminal.
//!
//! ## Usage
//!
//! - `morris-rust` - Play a two-player game in the terminal
//! - `morris-rust protocol` - Start the text protocol server on stdin/stdout
//! - `morris-rust demo` - Play a scripted opening

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use morris_rust::board::{BoardView, banner, point_name};
use morris_rust::position::{Outcome, Position, activate};
use morris_rust::protocol::MorrisEngine;

/// Morris-Rust: Nine Men's Morris engine
#[derive(Parser)]
#[command(name = "morris-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a two-player game in the terminal
    Play,
    /// Start the text protocol server for use with GUIs and scripts
    Protocol,
    /// Play a scripted opening and print each step
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Protocol) => {
            let mut engine = MorrisEngine::new();
            engine.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Demo) => run_demo(),
        Some(Commands::Play) | None => {
            morris_rust::play::run(io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}

/// Log to stderr so protocol responses on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,morris_rust=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_demo() {
    println!("Morris-Rust: Nine Men's Morris\n");

    // Both players drop their nine pieces in turn.
    let placements = [
        0, 1, 2, 4, 9, 3, 14, 5, 21, 7, 23, 11, 15, 12, 16, 13, 17, 20,
    ];
    let mut pos = Position::new();
    info!(count = placements.len(), "demo placing pieces");
    for pt in placements {
        activate(&mut pos, pt);
    }
    println!("=== After placing ===");
    println!("{}\n{}\n", BoardView(&pos), banner(&pos));

    // Player one picks up a4 and slides it to b4.
    for pt in [9, 10] {
        let outcome = activate(&mut pos, pt);
        if let Outcome::Moved { from, to } = outcome {
            println!("Moved {} -> {}", point_name(from), point_name(to));
        }
    }
    println!("=== After first move ===");
    println!("{}\n{}", BoardView(&pos), banner(&pos));
}
