//! archive-curator CLI
//!
//! Batch utilities for curating a large archival dataset: report
//! generation from the local release database, remote collection
//! listing, file-list matching, file categorization, and video
//! integrity verification. Each subcommand is an independent,
//! strictly sequential batch job.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Batch utilities for archival dataset curation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the multi-sheet release report from the local database
    Report {
        /// Path to the release database (defaults to the user data dir)
        #[arg(long, env = "CURATOR_DB_PATH")]
        db_path: Option<PathBuf>,

        /// Output spreadsheet path (overwritten if present)
        #[arg(long, default_value = "report.xlsx")]
        output: PathBuf,
    },

    /// Print the list of releases
    Ls {
        /// Path to the release database (defaults to the user data dir)
        #[arg(long, env = "CURATOR_DB_PATH")]
        db_path: Option<PathBuf>,
    },

    /// List every item in a remote collection as url,size lines
    #[clap(name = "list-collection")]
    ListCollection {
        /// Collection identifier on the archive
        collection: String,

        /// Results per search page
        #[arg(long, default_value_t = 50)]
        page_size: u32,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<u32>,

        /// Output file, one "url,size" line per item
        #[arg(long)]
        output: PathBuf,
    },

    /// Match two "path (size)" listings by basename and size
    #[clap(name = "match-lists")]
    MatchLists {
        /// First listing; every entry is matched against the second
        file1: PathBuf,

        /// Second listing
        file2: PathBuf,

        /// Output file for matched `"path" => "path"` pairs
        #[arg(long)]
        output: PathBuf,
    },

    /// Match a "path (size)" listing against a url,size CSV
    #[clap(name = "match-csv")]
    MatchCsv {
        /// The "path (size)" listing
        listing: PathBuf,

        /// The url,size CSV
        csv: PathBuf,

        /// Match on size alone instead of basename + size
        #[arg(long)]
        by_size: bool,
    },

    /// Categorize every file under a directory and write a summary
    /// spreadsheet named after the directory
    Summarise {
        /// Directory to walk
        directory: PathBuf,
    },

    /// Check that video files decode cleanly, caching verified names
    #[clap(name = "verify-videos")]
    VerifyVideos {
        /// Directory to walk
        directory: PathBuf,

        /// Verification cache file (defaults to the user data dir)
        #[arg(long)]
        cache_path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report { db_path, output } => commands::report::run_report(db_path, &output),
        Commands::Ls { db_path } => commands::ls::run_ls(db_path),
        Commands::ListCollection {
            collection,
            page_size,
            max_pages,
            output,
        } => commands::list_collection::run_list_collection(
            &collection,
            page_size,
            max_pages,
            &output,
        ),
        Commands::MatchLists {
            file1,
            file2,
            output,
        } => commands::match_lists::run_match_lists(&file1, &file2, &output),
        Commands::MatchCsv {
            listing,
            csv,
            by_size,
        } => commands::match_csv::run_match_csv(&listing, &csv, by_size),
        Commands::Summarise { directory } => commands::summarise::run_summarise(&directory),
        Commands::VerifyVideos {
            directory,
            cache_path,
        } => commands::verify::run_verify_videos(&directory, cache_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
