//! Error types for the libris library.
//!
//! This module provides a single error type that encompasses all possible
//! failure modes when working with the catalog, including:
//! - Entity validation
//! - Relationship resolution
//! - Database operations
//! - File system access
//!
//! # Examples
//!
//! ```
//! use libris::{catalog::NewAuthor, error::LibrisError};
//! // or `use libris::prelude::*` to bring in the error type
//!
//! match NewAuthor::new("", None) {
//!   Err(LibrisError::MissingAuthorName) => println!("Authors need a name"),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(_) => println!("Success!"),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`libris`](crate) crate.
pub type Result<T> = core::result::Result<T, LibrisError>;

/// Errors that can occur when working with the libris library.
///
/// This enum provides the error cases that can occur when:
/// - Creating authors and books
/// - Resolving the author a book belongs to
/// - Working with the local database
/// - Handling file system operations
#[derive(Error, Debug)]
pub enum LibrisError {
  /// An author was created without a usable name.
  ///
  /// Author names are mandatory. This is returned by
  /// [`NewAuthor::new`](crate::catalog::NewAuthor::new) when the given name
  /// is empty or consists only of whitespace, so an invalid author is
  /// rejected before it can reach the database.
  #[error("Author name must be present")]
  MissingAuthorName,

  /// A book's author reference could not be resolved.
  ///
  /// This occurs when a book's `author_id` does not match any author in the
  /// catalog, typically because the author was removed after the book was
  /// added. The id parameter is the dangling reference.
  #[error("No author with id {0} exists in the catalog")]
  AuthorNotFound(i64),

  /// A SQLite operation failed.
  ///
  /// This wraps errors from the `rusqlite` crate, covering:
  /// - SQL syntax errors
  /// - Constraint violations
  /// - Type conversion errors
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// An async SQLite operation failed.
  ///
  /// This wraps errors from the `tokio-rusqlite` crate, covering
  /// async-specific failures in database operations.
  #[error(transparent)]
  AsyncSqlite(#[from] tokio_rusqlite::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - Creating the database file fails
  /// - Permission errors occur
  #[error(transparent)]
  Path(#[from] std::io::Error),
}
