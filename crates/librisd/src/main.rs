//! Command line interface for the libris catalog.
//!
//! This crate provides a CLI tool for managing a catalog of authors and
//! books using the `libris` library. It supports operations like:
//! - Database initialization and cleanup
//! - Author and book registration
//! - Listing and filtering the catalog
//! - Printing the greeting and info display lines
//!
//! # Usage
//!
//! ```bash
//! # Initialize a new database
//! libris init
//!
//! # Register an author and one of their books
//! libris add author "Haruki Murakami"
//! libris add book 1 --title "Hitsuji Wo Meguru Bouken" --pages 200
//!
//! # Display lines
//! libris greet 1
//! libris info 1
//!
//! # Browse the catalog
//! libris list books --author Murakami
//!
//! # Remove records, or the whole database
//! libris remove book 1
//! libris clean
//! ```
//!
//! The CLI provides colored output and interactive confirmations for
//! destructive operations. It also supports various verbosity levels for
//! debugging through the `-v` flag.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::{builder::ArgAction, Parser, Subcommand, ValueEnum};
use console::style;
use dialoguer::Confirm;
use libris::{
  catalog::{NewAuthor, NewBook},
  database::{Add, Database, OrderField, Query, Remove},
  prelude::*,
};
use tracing::trace;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;

use crate::{commands::*, error::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
static WARNING_PREFIX: &str = "⚠ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";
/// Branch character for list output
static TREE_BRANCH: &str = "├";
/// Leaf character for list output (end of branch)
static TREE_LEAF: &str = "└";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "CLI for the libris book catalog")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the database file. This is where the database will be created or
  /// referenced from. If not specified, uses the default platform-specific
  /// data directory.
  #[arg(long, short, global = true)]
  path: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used (0-3)
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Opens the catalog database from the `--path` flag or the default location.
async fn open_database(cli: &Cli) -> Result<Database> {
  let path = cli.path.clone().unwrap_or_else(Database::default_path);
  trace!("Using database at: {}", path.display());
  Ok(Database::open(&path).await?)
}

/// Dispatches the parsed command line onto the command implementations.
async fn run(cli: Cli) -> Result<()> {
  match cli.command.clone() {
    Commands::Init => init(&cli).await,
    Commands::Add { record } => add(&cli, record).await,
    Commands::List { target } => list(&cli, target).await,
    Commands::Greet { id } => greet(&cli, id).await,
    Commands::Info { id } => info(&cli, id).await,
    Commands::Remove { target } => remove(&cli, target).await,
    Commands::Clean => clean(&cli).await,
  }
}

/// Entry point for the libris CLI application
///
/// Handles command line argument parsing, sets up logging, and executes the
/// requested command. Failures are reported on stderr with a non-zero exit
/// code rather than a debug-printed panic.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  if let Err(e) = run(cli).await {
    eprintln!("{} {e}", style(ERROR_PREFIX).red());
    std::process::exit(1);
  }
}
