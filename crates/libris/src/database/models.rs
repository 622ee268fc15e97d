//! Database models and type conversions.
//!
//! This module provides the intermediate representations for database rows
//! and their conversions into domain types.

use rusqlite::Row;

use super::*;

/// Represents an author row from the database.
#[derive(Debug)]
pub struct AuthorRow {
  /// Row id
  pub id:         i64,
  /// Author name
  pub name:       String,
  /// Optional age
  pub age:        Option<u32>,
  /// Insertion timestamp
  pub created_at: DateTime<Utc>,
}

impl AuthorRow {
  /// Creates a new AuthorRow from a database row.
  ///
  /// Expects the columns `id, name, age, created_at` in that order.
  pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      age:        row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  /// Converts this row into an Author domain object.
  pub fn into_author(self) -> Author {
    Author { id: self.id, name: self.name, age: self.age, created_at: self.created_at }
  }
}

/// Represents a book row from the database.
#[derive(Debug)]
pub struct BookRow {
  /// Row id
  pub id:         i64,
  /// Referenced author id
  pub author_id:  i64,
  /// Optional title
  pub title:      Option<String>,
  /// Optional page count
  pub pages:      Option<u32>,
  /// Insertion timestamp
  pub created_at: DateTime<Utc>,
}

impl BookRow {
  /// Creates a new BookRow from a database row.
  ///
  /// Expects the columns `id, author_id, title, pages, created_at` in that
  /// order.
  pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      author_id:  row.get(1)?,
      title:      row.get(2)?,
      pages:      row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  /// Converts this row into a Book domain object.
  pub fn into_book(self) -> Book {
    Book {
      id:         self.id,
      author_id:  self.author_id,
      title:      self.title,
      pages:      self.pages,
      created_at: self.created_at,
    }
  }
}
