//! Author and book catalog management library.
//!
//! `libris` is a small library for keeping a catalog of authors and the books
//! they wrote, providing:
//!
//! - Persistent storage of authors and books in a local SQLite database
//! - A one-to-many relationship between authors and their books
//! - Human-readable display lines for both entities
//! - Type-safe, composable database operations
//!
//! # Getting Started
//!
//! ```no_run
//! use libris::{
//!   catalog::{NewAuthor, NewBook},
//!   database::{Add, Database, Query},
//!   prelude::*,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   // Create or open a database
//!   let mut db = Database::open(Database::default_path()).await?;
//!
//!   // Register an author and one of their books
//!   let author = Add::author(NewAuthor::new("Haruki Murakami", None)?).execute(&mut db).await?;
//!   let book = Add::book(NewBook::new(author.id).title("Hitsuji Wo Meguru Bouken").pages(200))
//!     .execute(&mut db)
//!     .await?;
//!
//!   // Display lines
//!   println!("{}", author.greet());
//!   if let Some(line) = book.info(&mut db).await? {
//!     println!("{line}");
//!   }
//!
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`catalog`]: Core author and book types and their display rules
//! - [`database`]: Database operations and storage management
//! - [`error`]: Error types for the whole crate
//! - [`prelude`]: Common traits and types for ergonomic imports
//!
//! # Design Philosophy
//!
//! This library emphasizes:
//! - Validation at creation time, surfaced as values rather than panics
//! - Optional fields modeled as `Option`, never as sentinel values
//! - Type-safe database operations behind a composable instruction trait
//! - Clear error handling and propagation

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod catalog;
pub mod database;
pub mod error;

use crate::error::*;

/// Common traits and types for ergonomic imports.
///
/// This module provides a convenient way to import frequently used traits
/// and types with a single glob import.
///
/// # Usage
///
/// ```no_run
/// use libris::{
///   catalog::NewAuthor,
///   database::{Add, Database},
///   prelude::*,
/// };
///
/// async fn example() -> Result<(), LibrisError> {
///   // Now you can use both `DatabaseInstruction` and our `LibrisError` type
///   let mut db = Database::open(Database::default_path()).await?;
///   Add::author(NewAuthor::new("Haruki Murakami", Some(37))?).execute(&mut db).await?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{database::DatabaseInstruction, error::LibrisError};
}
