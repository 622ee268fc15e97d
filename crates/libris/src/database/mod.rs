//! Local SQLite database management for the catalog.
//!
//! This module provides functionality to persist authors and books in a local
//! SQLite database. It supports:
//! - Author and book storage and retrieval
//! - Relationship lookups in both directions (an author's books, a book's
//!   author)
//! - Partial-match queries on names and titles
//!
//! The database schema is automatically initialized when opening a database.
//! All operations go through the [`DatabaseInstruction`] trait and execute
//! inside a single transaction each, so every call observes a consistent
//! snapshot of the catalog.
//!
//! # Examples
//!
//! ```no_run
//! use libris::{
//!   catalog::NewAuthor,
//!   database::{Add, Database, Query},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open or create a database
//! let mut db = Database::open("catalog.db").await?;
//!
//! // Store an author and list everyone back out
//! Add::author(NewAuthor::new("Haruki Murakami", None)?).execute(&mut db).await?;
//! for author in Query::authors().execute(&mut db).await? {
//!   println!("{}", author.greet());
//! }
//! # Ok(())
//! # }
//! ```

use tokio_rusqlite::Connection;

use super::*;
use crate::catalog::{Author, Book, NewAuthor, NewBook};

pub mod instruction;
pub mod models;

pub use self::instruction::*;
use self::models::{AuthorRow, BookRow};

/// Handle for interacting with the catalog database.
///
/// This struct manages an async connection to a SQLite database. The schema
/// is applied when the database is opened; if the database file doesn't
/// exist, it will be created.
pub struct Database {
  /// Async SQLite connection handle
  conn: Connection,
}

impl Database {
  /// Opens an existing database or creates a new one at the specified path.
  ///
  /// This method will:
  /// 1. Create the database file if it doesn't exist
  /// 2. Initialize the schema using migrations
  ///
  /// # Arguments
  ///
  /// * `path` - Path where the database file should be created or opened
  ///
  /// # Returns
  ///
  /// Returns a [`Result`] containing either:
  /// - A [`Database`] handle for database operations
  /// - A [`LibrisError`] if database creation or initialization fails
  ///
  /// # Examples
  ///
  /// ```no_run
  /// # use libris::database::Database;
  /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
  /// // Open in a specific location
  /// let db = Database::open("catalog.db").await?;
  ///
  /// // Or use the default location
  /// let db = Database::open(Database::default_path()).await?;
  /// # Ok(())
  /// # }
  /// ```
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    debug!("Opening catalog database at {:?}", path.as_ref());
    let conn = Connection::open(path.as_ref()).await?;

    // Initialize schema
    conn
      .call(|conn| {
        conn.execute_batch(include_str!(concat!(
          env!("CARGO_MANIFEST_DIR"),
          "/migrations/init.sql"
        )))?;
        Ok(())
      })
      .await?;

    Ok(Self { conn })
  }

  /// Returns the default path for the database file.
  ///
  /// The path is constructed as follows:
  /// - On Unix: `~/.local/share/libris/libris.db`
  /// - On macOS: `~/Library/Application Support/libris/libris.db`
  /// - On Windows: `%APPDATA%\libris\libris.db`
  /// - Fallback: `./libris.db` in the current directory
  ///
  /// # Examples
  ///
  /// ```no_run
  /// let path = libris::database::Database::default_path();
  /// println!("Database will be stored at: {}", path.display());
  /// ```
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("libris").join("libris.db")
  }
}
