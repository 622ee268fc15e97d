//! Remove instruction implementation for deleting catalog records.
//!
//! A removal is built from a [`Query`] identifying the records to delete, so
//! anything you can look up you can also remove. The implementation supports:
//!
//! - Query-based removal of authors or books
//! - Dry run simulation
//! - Atomic transactions
//!
//! Removal never cascades. Deleting a book leaves its author untouched, and
//! deleting an author leaves their books in place — such books then report
//! [`AuthorNotFound`](crate::error::LibrisError::AuthorNotFound) when asked
//! for their info line.
//!
//! # Examples
//!
//! ```no_run
//! use libris::{
//!   database::{Database, Remove},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("catalog.db").await?;
//!
//! // Remove a specific book
//! Remove::book_by_id(42).execute(&mut db).await?;
//!
//! // Preview deletion with a dry run
//! let authors = Remove::authors_by_name("Murakami").dry_run().execute(&mut db).await?;
//! println!("Would remove {} author(s)", authors.len());
//! # Ok(())
//! # }
//! ```

use super::*;

/// Configuration options for removal operations.
#[derive(Default)]
pub struct RemoveOptions {
  /// When true, simulates the removal operation without modifying the
  /// database.
  ///
  /// This is useful for:
  /// - Previewing which records would be removed
  /// - Testing removal logic safely
  pub dry_run: bool,
}

/// Instruction for removing records from the catalog.
///
/// The type parameter is the criteria of the underlying [`Query`], which
/// determines whether authors or books are removed and what the instruction
/// returns.
pub struct Remove<C> {
  /// The query identifying records to remove
  query:   Query<C>,
  /// Configuration options for the removal
  options: RemoveOptions,
}

impl<C> Remove<C> {
  /// Creates a remove instruction from an existing query.
  ///
  /// This allows any query to be converted into a removal, providing maximum
  /// flexibility in identifying records to remove.
  pub fn from_query(query: Query<C>) -> Self { Self { query, options: RemoveOptions::default() } }

  /// Enables dry run mode for the remove operation.
  ///
  /// In dry run mode, the operation will:
  /// - Query the records that would be removed
  /// - Return them
  /// - Not modify the database
  pub fn dry_run(mut self) -> Self {
    self.options.dry_run = true;
    self
  }
}

impl<'a> Remove<AuthorCriteria<'a>> {
  /// Creates a remove instruction for a single author by id.
  pub fn author_by_id(id: i64) -> Self { Self::from_query(Query::author_by_id(id)) }

  /// Creates a remove instruction for all authors matching a name.
  pub fn authors_by_name(name: &'a str) -> Self {
    Self::from_query(Query::authors_by_name(name))
  }
}

impl<'a> Remove<BookCriteria<'a>> {
  /// Creates a remove instruction for a single book by id.
  pub fn book_by_id(id: i64) -> Self { Self::from_query(Query::book_by_id(id)) }

  /// Creates a remove instruction for all books matching a title.
  pub fn books_by_title(title: &'a str) -> Self { Self::from_query(Query::books_by_title(title)) }

  /// Creates a remove instruction for all of an author's books.
  pub fn books_of(author: &Author) -> Self { Self::from_query(Query::books_of(author)) }
}

/// Builds a DELETE statement for the given table and row ids.
///
/// The ids come from the database itself, so embedding them directly keeps
/// the statement free of parameters.
fn build_remove_sql(table: &str, ids: &[i64]) -> String {
  let ids_str = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
  format!("DELETE FROM {table} WHERE id IN ({ids_str})")
}

/// Deletes the given row ids from a table inside one transaction.
async fn execute_remove(db: &mut Database, table: &str, ids: Vec<i64>) -> Result<()> {
  let remove_sql = build_remove_sql(table, &ids);

  db.conn
    .call(move |conn| {
      let tx = conn.transaction()?;
      tx.execute_batch(&remove_sql)?;
      tx.commit()?;
      Ok(())
    })
    .await?;

  debug!("Removed {} record(s) from {table}", ids.len());
  Ok(())
}

#[async_trait]
impl DatabaseInstruction for Remove<AuthorCriteria<'_>> {
  type Output = Vec<Author>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let authors = self.query.execute(db).await?;

    if !self.options.dry_run && !authors.is_empty() {
      let ids = authors.iter().map(|author| author.id).collect();
      execute_remove(db, "authors", ids).await?;
    }

    Ok(authors)
  }
}

#[async_trait]
impl DatabaseInstruction for Remove<BookCriteria<'_>> {
  type Output = Vec<Book>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let books = self.query.execute(db).await?;

    if !self.options.dry_run && !books.is_empty() {
      let ids = books.iter().map(|book| book.id).collect();
      execute_remove(db, "books", ids).await?;
    }

    Ok(books)
  }
}
