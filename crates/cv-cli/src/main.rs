//! CLI frontend for the Cavern text adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "cavern",
    about = "Cavern: play classic room-and-exit text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine events at debug level to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure on the terminal
    Play {
        /// Adventure name, or a .json bundle (asked for when omitted)
        adventure: Option<String>,

        /// Directory containing the adventure files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Answer that confirms QUIT
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Load an adventure and summarize its rooms
    Check {
        /// Adventure name, or a .json bundle
        adventure: String,

        /// Directory containing the adventure files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Write an adventure as a single JSON bundle
    Export {
        /// Adventure name, or a .json bundle
        adventure: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory containing the adventure files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            adventure,
            dir,
            confirm,
        } => commands::play::run(&dir, adventure.as_deref(), confirm.as_deref()),
        Commands::Check { adventure, dir } => commands::check::run(&dir, &adventure),
        Commands::Export {
            adventure,
            output,
            dir,
        } => commands::export::run(&dir, &adventure, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
