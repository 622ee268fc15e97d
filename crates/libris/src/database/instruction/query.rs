//! Query instruction implementations for retrieving catalog records.
//!
//! Queries are typed by a criteria enum: [`AuthorCriteria`] yields authors,
//! [`BookCriteria`] yields books. Execution happens in two phases inside one
//! transaction — the criteria select matching row ids, then each row is
//! fetched and converted through the [`models`](crate::database::models)
//! layer — so results are a consistent snapshot of the catalog.
//!
//! Name and title matches are partial and case-insensitive in the usual
//! SQLite `LIKE` sense. Results come back in insertion (id) order unless a
//! book query asks for [`order_by`](Query::order_by).
//!
//! # Examples
//!
//! ```no_run
//! use libris::{
//!   database::{Database, OrderField, Query},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("catalog.db").await?;
//!
//! // Everything by authors whose name contains "Murakami", longest first
//! for book in
//!   Query::books_by_author("Murakami").order_by(OrderField::Pages).descending().execute(&mut db).await?
//! {
//!   println!("{:?}", book.title);
//! }
//! # Ok(())
//! # }
//! ```

use super::*;

/// Represents different ways to look up authors.
#[derive(Debug)]
pub enum AuthorCriteria<'a> {
  /// Retrieve all authors
  All,
  /// Look up a single author by database id
  Id(i64),
  /// Search by name (partial matches supported)
  Name(&'a str),
}

/// Represents different ways to look up books.
#[derive(Debug)]
pub enum BookCriteria<'a> {
  /// Retrieve all books
  All,
  /// Look up a single book by database id
  Id(i64),
  /// Search by title (partial matches supported)
  Title(&'a str),
  /// All books referencing the given author id
  AuthorId(i64),
  /// All books whose author's name matches (partial matches supported)
  AuthorName(&'a str),
}

/// Available fields for ordering book query results.
#[derive(Debug, Clone, Copy)]
pub enum OrderField {
  /// Order by title
  Title,
  /// Order by page count
  Pages,
  /// Order by insertion time
  Created,
}

/// A query for retrieving authors or books from the database.
#[derive(Debug)]
pub struct Query<C> {
  /// What to match
  criteria:   C,
  /// Optional ordering applied to book results
  order_by:   Option<OrderField>,
  /// Whether the ordering is reversed
  descending: bool,
}

impl<C> Query<C> {
  /// Creates a new query with the given criteria.
  fn with_criteria(criteria: C) -> Self { Self { criteria, order_by: None, descending: false } }
}

impl<'a> Query<AuthorCriteria<'a>> {
  /// Creates a query that returns all authors.
  pub fn authors() -> Self { Self::with_criteria(AuthorCriteria::All) }

  /// Creates a query for a single author by id.
  pub fn author_by_id(id: i64) -> Self { Self::with_criteria(AuthorCriteria::Id(id)) }

  /// Creates a query for authors by name.
  pub fn authors_by_name(name: &'a str) -> Self { Self::with_criteria(AuthorCriteria::Name(name)) }

  /// Creates a query resolving the author a book refers to.
  pub fn author_of(book: &Book) -> Self { Self::author_by_id(book.author_id) }

  /// Builds SQL selecting the ids of matching authors.
  fn build_criteria_sql(&self) -> (String, Vec<String>) {
    match self.criteria {
      AuthorCriteria::All => ("SELECT id FROM authors ORDER BY id".into(), Vec::new()),
      AuthorCriteria::Id(id) => (format!("SELECT id FROM authors WHERE id = {id}"), Vec::new()),
      AuthorCriteria::Name(name) => (
        "SELECT id FROM authors WHERE name LIKE ?1 ORDER BY id".into(),
        vec![format!("%{name}%")],
      ),
    }
  }
}

impl<'a> Query<BookCriteria<'a>> {
  /// Creates a query that returns all books.
  pub fn books() -> Self { Self::with_criteria(BookCriteria::All) }

  /// Creates a query for a single book by id.
  pub fn book_by_id(id: i64) -> Self { Self::with_criteria(BookCriteria::Id(id)) }

  /// Creates a query for books by title.
  pub fn books_by_title(title: &'a str) -> Self {
    Self::with_criteria(BookCriteria::Title(title))
  }

  /// Creates a query for an author's books, in insertion order.
  pub fn books_of(author: &Author) -> Self {
    Self::with_criteria(BookCriteria::AuthorId(author.id))
  }

  /// Creates a query for books by their author's name.
  pub fn books_by_author(name: &'a str) -> Self {
    Self::with_criteria(BookCriteria::AuthorName(name))
  }

  /// Sets the field to order results by.
  pub fn order_by(mut self, field: OrderField) -> Self {
    self.order_by = Some(field);
    self
  }

  /// Sets the order to descending (default is ascending).
  pub fn descending(mut self) -> Self {
    self.descending = true;
    self
  }

  /// Builds SQL selecting the ids of matching books.
  fn build_criteria_sql(&self) -> (String, Vec<String>) {
    match self.criteria {
      BookCriteria::All => ("SELECT id FROM books ORDER BY id".into(), Vec::new()),
      BookCriteria::Id(id) => (format!("SELECT id FROM books WHERE id = {id}"), Vec::new()),
      BookCriteria::Title(title) => (
        "SELECT id FROM books WHERE title LIKE ?1 ORDER BY id".into(),
        vec![format!("%{title}%")],
      ),
      BookCriteria::AuthorId(id) =>
        (format!("SELECT id FROM books WHERE author_id = {id} ORDER BY id"), Vec::new()),
      BookCriteria::AuthorName(name) => (
        "SELECT b.id FROM books b
                 JOIN authors a ON b.author_id = a.id
                 WHERE a.name LIKE ?1
                 ORDER BY b.id"
          .into(),
        vec![format!("%{name}%")],
      ),
    }
  }
}

/// Collects the ids produced by a criteria statement.
fn collect_ids(
  tx: &rusqlite::Transaction<'_>,
  criteria_sql: &str,
  params: Vec<String>,
) -> rusqlite::Result<Vec<i64>> {
  let mut stmt = tx.prepare_cached(criteria_sql)?;
  let mut rows = stmt.query(params_from_iter(params))?;
  let mut ids = Vec::new();
  while let Some(row) = rows.next()? {
    ids.push(row.get::<_, i64>(0)?);
  }
  Ok(ids)
}

#[async_trait]
impl DatabaseInstruction for Query<AuthorCriteria<'_>> {
  type Output = Vec<Author>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let (criteria_sql, params) = self.build_criteria_sql();

    let authors = db
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let ids = collect_ids(&tx, &criteria_sql, params)?;

        let mut authors = Vec::new();
        for id in ids {
          let mut stmt =
            tx.prepare_cached("SELECT id, name, age, created_at FROM authors WHERE id = ?1")?;
          authors.push(stmt.query_row([id], |row| AuthorRow::from_row(row))?.into_author());
        }

        Ok(authors)
      })
      .await?;

    trace!("Query matched {} author(s)", authors.len());
    Ok(authors)
  }
}

#[async_trait]
impl DatabaseInstruction for Query<BookCriteria<'_>> {
  type Output = Vec<Book>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let (criteria_sql, params) = self.build_criteria_sql();
    let order_by = self.order_by;
    let descending = self.descending;

    let mut books = db
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let ids = collect_ids(&tx, &criteria_sql, params)?;

        let mut books = Vec::new();
        for id in ids {
          let mut stmt = tx.prepare_cached(
            "SELECT id, author_id, title, pages, created_at FROM books WHERE id = ?1",
          )?;
          books.push(stmt.query_row([id], |row| BookRow::from_row(row))?.into_book());
        }

        Ok(books)
      })
      .await?;

    trace!("Query matched {} book(s)", books.len());

    // Sort if needed
    if let Some(order_field) = order_by {
      books.sort_by(|a, b| {
        let cmp = match order_field {
          OrderField::Title => a.title.cmp(&b.title),
          OrderField::Pages => a.pages.cmp(&b.pages),
          OrderField::Created => a.created_at.cmp(&b.created_at),
        };
        if descending {
          cmp.reverse()
        } else {
          cmp
        }
      });
    }

    Ok(books)
  }
}
