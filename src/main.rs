//! Braincode - CLI
//!
//! Code-breaking puzzle with TUI and plain text modes.

use anyhow::{Context, Result};
use braincode::{
    commands::{SimpleConfig, analyze_guess, run_simple, score_guess},
    game::{ColorSource, RandomColors},
    output::{print_analysis_result, print_score_result},
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const TUI_LOG_FILE: &str = "braincode_tui.log";

#[derive(Parser)]
#[command(
    name = "braincode",
    about = "Crack a secret code of four colors using black/white feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the secret generator (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Allow revealing the secret during play
    #[arg(long, global = true)]
    reveal: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text prompts without TUI)
    Simple,

    /// Score a guess against a known secret
    Score {
        /// The secret code, e.g. "bgro" or "blue,green,red,orange"
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Analyze how a guess splits the code space
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

/// Log to stderr, or to a file while the TUI owns the terminal
fn init_logging(verbose: bool, tui: bool) -> Result<()> {
    if tui {
        if !verbose && std::env::var_os("RUST_LOG").is_none() {
            return Ok(());
        }
        let log_file = File::create(TUI_LOG_FILE)
            .with_context(|| format!("Failed to create log file '{TUI_LOG_FILE}'"))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

fn color_source(seed: Option<u64>) -> Box<dyn ColorSource> {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded secrets");
            Box::new(RandomColors::seeded(seed))
        }
        None => Box::new(RandomColors::from_entropy()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(cli.seed, cli.reveal),
        Commands::Simple => {
            let mut source = color_source(cli.seed);
            run_simple(source.as_mut(), SimpleConfig { reveal: cli.reveal })
        }
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(seed: Option<u64>, reveal: bool) -> Result<()> {
    use braincode::interactive::{App, run_tui};

    let app = App::new(color_source(seed), reveal);
    run_tui(app)
}
