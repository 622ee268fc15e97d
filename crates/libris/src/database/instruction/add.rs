//! Add instruction implementation for inserting catalog records.
//!
//! The instruction is typed by the draft it carries: [`Add::author`] stages a
//! [`NewAuthor`] and yields the stored [`Author`], [`Add::book`] stages a
//! [`NewBook`] and yields the stored [`Book`]. Each insertion runs inside its
//! own transaction and reads back the assigned row id.
//!
//! # Examples
//!
//! ```no_run
//! use libris::{
//!   catalog::{NewAuthor, NewBook},
//!   database::{Add, Database},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("catalog.db").await?;
//!
//! let author = Add::author(NewAuthor::new("Haruki Murakami", None)?).execute(&mut db).await?;
//! Add::book(NewBook::new(author.id).title("Hitsuji Wo Meguru Bouken")).execute(&mut db).await?;
//! # Ok(())
//! # }
//! ```

use super::*;

/// Instruction for inserting a drafted record into the catalog.
///
/// The type parameter is the draft being inserted, which determines the
/// stored entity the instruction returns.
pub struct Add<R> {
  /// The draft to insert
  record: R,
}

impl Add<NewAuthor> {
  /// Stages a drafted author for insertion.
  ///
  /// The draft has already passed name validation in
  /// [`NewAuthor::new`](crate::catalog::NewAuthor::new).
  pub fn author(author: NewAuthor) -> Self { Self { record: author } }
}

impl Add<NewBook> {
  /// Stages a drafted book for insertion.
  ///
  /// The author reference is stored as given; it is not checked against the
  /// catalog (see [`NewBook::new`](crate::catalog::NewBook::new)).
  pub fn book(book: NewBook) -> Self { Self { record: book } }
}

#[async_trait]
impl DatabaseInstruction for Add<NewAuthor> {
  type Output = Author;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let record = self.record.clone();
    let created_at = Utc::now();

    let author = db
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let id = {
          let mut stmt = tx.prepare_cached(
            "INSERT INTO authors (name, age, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING id",
          )?;

          stmt
            .query_row(params![record.name, record.age, created_at, created_at], |row| row.get(0))?
        };

        tx.commit()?;
        Ok(Author { id, name: record.name, age: record.age, created_at })
      })
      .await?;

    debug!("Added author {} to the catalog", author.id);
    Ok(author)
  }
}

#[async_trait]
impl DatabaseInstruction for Add<NewBook> {
  type Output = Book;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let record = self.record.clone();
    let created_at = Utc::now();

    let book = db
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let id = {
          let mut stmt = tx.prepare_cached(
            "INSERT INTO books (author_id, title, pages, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     RETURNING id",
          )?;

          stmt.query_row(
            params![record.author_id, record.title, record.pages, created_at, created_at],
            |row| row.get(0),
          )?
        };

        tx.commit()?;
        Ok(Book {
          id,
          author_id: record.author_id,
          title: record.title,
          pages: record.pages,
          created_at,
        })
      })
      .await?;

    debug!("Added book {} to the catalog", book.id);
    Ok(book)
  }
}
