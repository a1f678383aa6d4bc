//! Hangman - CLI
//!
//! Terminal hangman with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    audio::{AudioAssets, AudioFeedback, open_backend},
    commands::{list_words, run_simple},
    core::CategoryFilter,
    logging,
    store::SqliteWordStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman with categories, a virtual keyboard and sound",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// SQLite word database (created and seeded if missing)
    #[arg(long, global = true, default_value = "words.db")]
    db: PathBuf,

    /// Category: All (default), Programming, Animals, Countries
    #[arg(short, long, global = true, default_value = "All")]
    category: CategoryFilter,

    /// Directory holding the sound files
    #[arg(long, global = true, default_value = ".")]
    assets: PathBuf,

    /// Start with background music muted
    #[arg(long, global = true)]
    no_music: bool,

    /// Disable all sound
    #[arg(long, global = true)]
    no_audio: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI, no sound)
    Simple,

    /// List the stored words
    Words,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // Keep stderr quiet under the TUI unless logging to a file
    let default_filter = match (&command, &cli.log_file) {
        (Commands::Play, None) => "off",
        (_, Some(_)) => "info",
        _ => "warn",
    };
    logging::init(cli.log_file.as_deref(), default_filter)?;

    let store = SqliteWordStore::new(cli.db.clone());

    match command {
        Commands::Play => run_play_command(&cli, &store),
        Commands::Simple => run_simple(&store, cli.category),
        Commands::Words => list_words(&store, cli.category),
    }
}

fn run_play_command(cli: &Cli, store: &SqliteWordStore) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let (backend, warning) = open_backend(AudioAssets::in_dir(&cli.assets), !cli.no_audio);
    let audio = AudioFeedback::new(backend, !cli.no_music);

    let mut app = App::new(store, audio, cli.category);
    if let Some(reason) = warning {
        app.sound_unavailable(&reason);
    }
    run_tui(app)
}
