use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use song_store::frontend::{render_listing, render_lookup, render_matches, run_search};
use song_store::{export, matcher, Config, SongStore};

#[derive(Parser)]
#[command(name = "song-store")]
#[command(about = "Load songs from a CSV file and look them up by id")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// CSV file to load (or set SONG_STORE_DATA env var)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Treat the first line of the file as data instead of a header
    #[arg(long, global = true)]
    no_header: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every loaded song
    List,

    /// Show one song by id
    Show {
        /// Song id to look up
        id: String,

        /// Print the song as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up songs interactively by id
    Search,

    /// Find songs whose title or id resembles the query
    Find {
        /// Title or id to search for
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Export all songs as JSON
    Export {
        /// Output file (defaults to exports/songs_<timestamp>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = Config::from_env().context("Failed to load configuration")?;
    let data_path = cli.data.unwrap_or(config.data_path);
    let has_header = config.has_header && !cli.no_header;

    let store = load_store(&data_path, has_header)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List => {
            writeln!(out, "{}", "Loaded Songs".cyan().bold())?;
            writeln!(out, "{}", "=".repeat(50))?;
            render_listing(&store, &mut out)?;
        }
        Commands::Show { id, json } => {
            show_song(&store, &id, json, &mut out)?;
        }
        Commands::Search => {
            let stdin = io::stdin();
            let answered = run_search(&store, stdin.lock(), &mut out)?;
            tracing::debug!("Answered {} queries", answered);
        }
        Commands::Find { query, limit } => {
            let matches = matcher::find_similar(&store, &query, limit);
            if matches.is_empty() {
                writeln!(out, "{}", format!("No songs resemble '{}'", query).yellow())?;
            } else {
                render_matches(&matches, &mut out)?;
            }
        }
        Commands::Export { output } => {
            let path = export::write_json(&store, output.as_deref())
                .context("Failed to export songs")?;
            writeln!(
                out,
                "{}",
                format!("Exported {} songs to {}", store.len(), path.display()).green()
            )?;
        }
    }

    Ok(())
}

fn load_store(path: &Path, has_header: bool) -> Result<SongStore> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Loading {}", path.display()));

    let mut store = SongStore::new();
    let result = store.load_with(path, has_header);
    spinner.finish_and_clear();

    let count =
        result.with_context(|| format!("Failed to load songs from {}", path.display()))?;
    if count == 0 {
        println!("{}", "The data file contains no songs".yellow());
    }

    Ok(store)
}

fn show_song(store: &SongStore, id: &str, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        match store.get(id) {
            Some(song) => writeln!(out, "{}", serde_json::to_string_pretty(song)?)?,
            None => {
                eprintln!("{}", format!("Song with ID {} not found.", id).red());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    if !render_lookup(store, id, out)? {
        std::process::exit(1);
    }

    Ok(())
}
