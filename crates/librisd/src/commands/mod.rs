//! Command implementations for the libris CLI, one module per subcommand.

use super::*;

pub mod add;
pub mod clean;
pub mod init;
pub mod list;
pub mod remove;
pub mod show;

pub use add::add;
pub use clean::clean;
pub use init::init;
pub use list::list;
pub use remove::remove;
pub use show::{greet, info};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Initialize a new catalog database
  Init,

  /// Add an author or a book to the catalog
  Add {
    /// What to add
    #[command(subcommand)]
    record: AddCommands,
  },

  /// List authors or books in the catalog
  List {
    /// What to list
    #[command(subcommand)]
    target: ListCommands,
  },

  /// Print an author's greeting line
  Greet {
    /// Database id of the author
    id: i64,
  },

  /// Print a book's info line
  Info {
    /// Database id of the book
    id: i64,
  },

  /// Remove an author or a book from the catalog
  Remove {
    /// What to remove
    #[command(subcommand)]
    target: RemoveCommands,
  },

  /// Removes the entire database after confirmation
  Clean,
}

/// Records that can be added to the catalog
#[derive(Subcommand, Clone)]
pub enum AddCommands {
  /// Add an author by name
  Author {
    /// The author's name
    name: String,

    /// The author's age in years
    #[arg(long)]
    age: Option<u32>,
  },

  /// Add a book for an already-registered author
  Book {
    /// Database id of the author this book belongs to
    author_id: i64,

    /// The book's title
    #[arg(long)]
    title: Option<String>,

    /// The book's page count
    #[arg(long)]
    pages: Option<u32>,
  },
}

/// Catalog listings available to the CLI
#[derive(Subcommand, Clone)]
pub enum ListCommands {
  /// List authors
  Authors {
    /// Filter by name (partial matches supported)
    #[arg(long)]
    name: Option<String>,

    /// Print the raw records as JSON
    #[arg(long)]
    json: bool,
  },

  /// List books
  Books {
    /// Filter by the author's name (partial matches supported)
    #[arg(long)]
    author: Option<String>,

    /// Filter by title (partial matches supported)
    #[arg(long)]
    title: Option<String>,

    /// Field to sort by
    #[arg(long, value_enum)]
    sort: Option<SortField>,

    /// Reverse the sort order
    #[arg(long)]
    descending: bool,

    /// Print the raw records as JSON
    #[arg(long)]
    json: bool,
  },
}

/// Sort keys accepted by `list books`
#[derive(ValueEnum, Clone, Copy)]
pub enum SortField {
  /// By title
  Title,
  /// By page count
  Pages,
  /// By insertion time
  Created,
}

impl From<SortField> for OrderField {
  fn from(field: SortField) -> Self {
    match field {
      SortField::Title => OrderField::Title,
      SortField::Pages => OrderField::Pages,
      SortField::Created => OrderField::Created,
    }
  }
}

/// Records that can be removed from the catalog
#[derive(Subcommand, Clone)]
pub enum RemoveCommands {
  /// Remove an author by id (their books stay behind)
  Author {
    /// Database id of the author
    id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    force: bool,
  },

  /// Remove a book by id
  Book {
    /// Database id of the book
    id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    force: bool,
  },
}
