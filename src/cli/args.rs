//! Command line argument parsing for the tessera CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tessera - content-addressed string analysis and query engine
#[derive(Parser, Debug, Clone)]
#[command(name = "tessera")]
#[command(about = "Analyze strings, store them under their content digest, and query them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Tessera Contributors")]
#[command(long_about = None)]
pub struct TesseraArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TesseraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a string and store it under its content digest
    Add(AddArgs),

    /// Fetch a stored record by its value
    Get(GetArgs),

    /// Delete a stored record by its value
    Delete(DeleteArgs),

    /// List stored records, optionally filtered
    List(ListArgs),

    /// Run a natural-language query over the stored records
    Query(QueryArgs),
}

/// Arguments for adding a record
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Path to the store directory
    #[arg(value_name = "STORE_PATH")]
    pub store_path: PathBuf,

    /// The string to analyze and store
    #[arg(
        value_name = "VALUE",
        required_unless_present = "file",
        conflicts_with = "file"
    )]
    pub value: Option<String>,

    /// Read JSON payloads (one {"value": ...} object per line) from a file
    #[arg(short = 'F', long, value_name = "PAYLOAD_FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for fetching a record
#[derive(Parser, Debug, Clone)]
pub struct GetArgs {
    /// Path to the store directory
    #[arg(value_name = "STORE_PATH")]
    pub store_path: PathBuf,

    /// The string whose record to fetch
    #[arg(value_name = "VALUE")]
    pub value: String,
}

/// Arguments for deleting a record
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// Path to the store directory
    #[arg(value_name = "STORE_PATH")]
    pub store_path: PathBuf,

    /// The string whose record to delete
    #[arg(value_name = "VALUE")]
    pub value: String,
}

/// Arguments for listing records
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Path to the store directory
    #[arg(value_name = "STORE_PATH")]
    pub store_path: PathBuf,

    /// Keep only records whose palindrome property equals this value
    #[arg(long, value_name = "BOOL")]
    pub palindrome: Option<bool>,

    /// Keep only records at least this many characters long
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Keep only records at most this many characters long
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Keep only records with exactly this many words
    #[arg(long, value_name = "N")]
    pub word_count: Option<usize>,

    /// Keep only records whose stored value contains this character
    #[arg(long, value_name = "CHAR")]
    pub contains: Option<char>,
}

/// Arguments for natural-language queries
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Path to the store directory
    #[arg(value_name = "STORE_PATH")]
    pub store_path: PathBuf,

    /// The natural-language query
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
