//! CLI frontend for the Lonely Lodge text adventure.

mod commands;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "lodge",
    about = "Lonely Lodge: play a Detective or a Murderer on a night at the lodge",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print the session journal when the game ends
    #[arg(long, value_enum, global = true)]
    recap: Option<RecapFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game on stdin/stdout (default)
    Play,

    /// Show the rooms of the lodge and what can be found in them
    Map,
}

/// Output format for the end-of-session journal.
#[derive(Clone, Copy, ValueEnum)]
pub enum RecapFormat {
    /// One line per event.
    Text,
    /// Pretty-printed JSON array of events.
    Json,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::run(cli.recap),
        Commands::Map => commands::map::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
