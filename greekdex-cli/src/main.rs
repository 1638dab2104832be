//! greekdex CLI
//!
//! Command-line interface for importing scraped Greek-life directory data
//! and matching chapters to contacts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

mod commands;
mod error;

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "greekdex")]
#[command(about = "Import and deduplicate Greek-life directory data", long_about = None)]
struct Cli {
    /// Path to the directory database (defaults to greekdex.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import scraped batch files into the directory
    Import {
        /// Batch JSON files, in order
        files: Vec<PathBuf>,

        /// Preview all creates and skips without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Source label recorded in the import log
        #[arg(long)]
        source: Option<String>,
    },

    /// Match a chapter-lookup request against the directory
    MatchContacts {
        /// Request JSON file
        request: PathBuf,

        /// Write the response JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a pasted CSV officer roster for one chapter
    Roster {
        /// Chapter id the roster belongs to
        #[arg(long)]
        chapter: String,

        /// Roster CSV file (header: name,email,phone,member_type,position)
        file: PathBuf,
    },

    /// Show directory statistics
    Stats,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(commands::default_db_path);

    let result = match cli.command {
        Commands::Import {
            files,
            dry_run,
            source,
        } => commands::import::run_import(&db_path, &files, dry_run, source),
        Commands::MatchContacts { request, output } => {
            commands::match_contacts::run_match_contacts(&db_path, &request, output.as_deref())
        }
        Commands::Roster { chapter, file } => {
            commands::roster::run_roster(&db_path, &chapter, &file)
        }
        Commands::Stats => commands::stats::run_stats(&db_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
            ExitCode::FAILURE
        }
    }
}
