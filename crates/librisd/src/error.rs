//! Error types for the libris CLI.

use libris::error::LibrisError;
use thiserror::Error;

/// Error type alias used for the CLI.
pub type Result<T> = core::result::Result<T, LibrisdError>;

/// Errors that can occur when running CLI commands.
#[derive(Error, Debug)]
pub enum LibrisdError {
  /// Errors bubbled up from the libris library itself.
  #[error(transparent)]
  Libris(#[from] LibrisError),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// An interactive prompt failed.
  #[error(transparent)]
  Interaction(#[from] dialoguer::Error),

  /// JSON output could not be produced.
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
