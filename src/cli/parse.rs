//! CLI parse: clap types for rigkit. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rigkit CLI - parts catalog and build-compatibility toolkit
#[derive(Parser)]
#[command(name = "rigkit")]
#[command(about = "PC parts catalog and build-compatibility toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default workspace configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Show unified status (catalog, build, total, compatibility)
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Catalog commands (list, import, export, seed, clear)
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Build commands (add, remove, show, check, clear, export)
    Build {
        #[command(subcommand)]
        command: BuildCommands,
    },
    /// Compare parts of one category side by side
    Compare {
        /// Category to compare within
        #[arg(long)]
        category: String,
        /// Part ids to compare
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u32>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Mock cart commands (show, checkout)
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List parts with optional filter, search, and sort
    List {
        /// Filter by category ("All" or omit for every category)
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive substring match on part name
        #[arg(long)]
        search: Option<String>,
        /// Sort key (unsorted, price, name, category)
        #[arg(long, default_value = "unsorted")]
        sort: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Replace the catalog with a JSON parts file
    Import {
        /// Path to a JSON array of parts
        file: PathBuf,
    },
    /// Export the catalog to a JSON file
    Export {
        /// Destination path
        file: PathBuf,
    },
    /// Restore the built-in sample part set
    Seed,
    /// Empty the catalog
    Clear {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum BuildCommands {
    /// Add a catalog part to the build (one part per category)
    Add {
        /// Part id from the catalog
        part_id: u32,
    },
    /// Remove a slot from the build
    Remove {
        /// Slot name (e.g. CPU, GPU, RAM)
        slot: String,
    },
    /// Show the build with totals and compatibility
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Run the compatibility checks only
    Check {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Empty the build
    Clear {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Export the build to a JSON file
    Export {
        /// Destination path
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show cart lines derived from the build
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Mock checkout: print a receipt, charge nothing
    Checkout,
}
