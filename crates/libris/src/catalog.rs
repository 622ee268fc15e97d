//! Core author and book types and their display rules.
//!
//! This module provides the fundamental types for working with the catalog:
//!
//! - [`Author`] and [`Book`], the stored entities
//! - [`NewAuthor`] and [`NewBook`], the drafts used to create them
//! - The display lines [`Author::greet`] and [`Book::info`]
//!
//! Authors own zero or more books; every book refers to exactly one author
//! through its `author_id`. The reference is relational, not owning: removing
//! a book never removes its author, and removing an author leaves their books
//! behind with a dangling reference.
//!
//! # Examples
//!
//! Drafting entities and formatting their display lines:
//!
//! ```
//! use libris::catalog::{Author, Book, NewAuthor};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Drafts are validated up front; a nameless author is rejected here.
//! let draft = NewAuthor::new("Haruki Murakami", Some(37))?;
//! assert_eq!(draft.age, Some(37));
//! assert!(NewAuthor::new("  ", None).is_err());
//! # Ok(())
//! # }
//! ```

use super::*;
use crate::database::{Database, DatabaseInstruction, Query};

/// A stored author, uniquely identified within one catalog database.
///
/// Instances are produced by the database layer: adding a [`NewAuthor`]
/// through [`Add`](crate::database::Add) assigns the id, and queries return
/// fully populated values. The `name` field is guaranteed non-empty because
/// every author passes through [`NewAuthor::new`] before insertion.
///
/// # Examples
///
/// ```no_run
/// use libris::{
///   catalog::NewAuthor,
///   database::{Add, Database},
///   prelude::*,
/// };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut db = Database::open("catalog.db").await?;
/// let author = Add::author(NewAuthor::new("Haruki Murakami", None)?).execute(&mut db).await?;
/// println!("{}", author.greet());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
  /// Database id, assigned at insertion
  pub id:         i64,
  /// The author's name, always present
  pub name:       String,
  /// Optional age in years
  pub age:        Option<u32>,
  /// When this author was added to the catalog
  pub created_at: DateTime<Utc>,
}

/// A stored book, belonging to exactly one author.
///
/// The `title` is optional despite being semantically central; a book without
/// one is a valid state whose [`info`](Book::info) line is simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
  /// Database id, assigned at insertion
  pub id:         i64,
  /// Reference to the owning author's id
  pub author_id:  i64,
  /// Optional title
  pub title:      Option<String>,
  /// Optional page count
  pub pages:      Option<u32>,
  /// When this book was added to the catalog
  pub created_at: DateTime<Utc>,
}

/// A draft author, validated and ready for insertion.
///
/// Construction goes through [`NewAuthor::new`], which rejects empty and
/// whitespace-only names with
/// [`LibrisError::MissingAuthorName`](crate::error::LibrisError), so
/// validation failures surface as values at creation time instead of
/// somewhere inside the database layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAuthor {
  /// The author's name, checked for presence
  pub name: String,
  /// Optional age in years
  pub age:  Option<u32>,
}

/// A draft book for an existing author.
///
/// Only the author reference is required; title and page count are filled in
/// through the builder methods.
///
/// # Examples
///
/// ```
/// use libris::catalog::NewBook;
///
/// let draft = NewBook::new(1).title("Hitsuji Wo Meguru Bouken").pages(200);
/// assert_eq!(draft.pages, Some(200));
///
/// // An untitled draft is fine too
/// let untitled = NewBook::new(1);
/// assert!(untitled.title.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
  /// Id of the author this book belongs to
  pub author_id: i64,
  /// Optional title
  pub title:     Option<String>,
  /// Optional page count
  pub pages:     Option<u32>,
}

impl Author {
  /// Returns this author's greeting line.
  ///
  /// The line mentions the age only when one is recorded:
  ///
  /// - with an age: `"Hi, my name is {name} and I am {age} years old."`
  /// - without one: `"Hi, my name is {name}."`
  ///
  /// This is a pure read of the current field state.
  ///
  /// # Examples
  ///
  /// ```
  /// use chrono::Utc;
  /// use libris::catalog::Author;
  ///
  /// let author =
  ///   Author { id: 1, name: "Haruki Murakami".into(), age: None, created_at: Utc::now() };
  /// assert_eq!(author.greet(), "Hi, my name is Haruki Murakami.");
  /// ```
  pub fn greet(&self) -> String {
    match self.age {
      Some(age) => format!("Hi, my name is {} and I am {} years old.", self.name, age),
      None => format!("Hi, my name is {}.", self.name),
    }
  }

  /// Fetches this author's books from the catalog, ordered by insertion.
  ///
  /// Shorthand for executing [`Query::books_of`] against `db`.
  pub async fn books(&self, db: &mut Database) -> Result<Vec<Book>> {
    Query::books_of(self).execute(db).await
  }
}

impl Book {
  /// Formats this book's info line against an already-resolved author.
  ///
  /// Returns `None` when the title is unset or empty; formatting is skipped
  /// entirely rather than producing a line for a nameless book. Otherwise the
  /// line is:
  ///
  /// - with a page count: `"{title}: {pages} pages by {author.name}"`
  /// - without one: `"{title}: by {author.name}"`
  ///
  /// # Examples
  ///
  /// ```
  /// use chrono::Utc;
  /// use libris::catalog::{Author, Book};
  ///
  /// let author =
  ///   Author { id: 1, name: "Haruki Murakami".into(), age: None, created_at: Utc::now() };
  /// let book = Book {
  ///   id:         1,
  ///   author_id:  1,
  ///   title:      Some("Hitsuji Wo Meguru Bouken".into()),
  ///   pages:      None,
  ///   created_at: Utc::now(),
  /// };
  /// assert_eq!(book.info_with(&author).as_deref(), Some("Hitsuji Wo Meguru Bouken: by Haruki Murakami"));
  /// ```
  pub fn info_with(&self, author: &Author) -> Option<String> {
    let title = self.title.as_deref().filter(|title| !title.is_empty())?;
    Some(match self.pages {
      Some(pages) => format!("{title}: {pages} pages by {}", author.name),
      None => format!("{title}: by {}", author.name),
    })
  }

  /// Resolves this book's author in `db` and formats the info line.
  ///
  /// # Errors
  ///
  /// Fails with [`LibrisError::AuthorNotFound`] when `author_id` no longer
  /// matches any author in the catalog — a dangling reference is fatal for
  /// this call, while a missing title is not (it yields `Ok(None)`).
  pub async fn info(&self, db: &mut Database) -> Result<Option<String>> {
    let author = Query::author_of(self)
      .execute(db)
      .await?
      .into_iter()
      .next()
      .ok_or(LibrisError::AuthorNotFound(self.author_id))?;
    Ok(self.info_with(&author))
  }
}

impl NewAuthor {
  /// Drafts a new author, validating that the name is present.
  ///
  /// # Errors
  ///
  /// Returns [`LibrisError::MissingAuthorName`] when `name` is empty or
  /// whitespace-only.
  ///
  /// # Examples
  ///
  /// ```
  /// use libris::catalog::NewAuthor;
  ///
  /// assert!(NewAuthor::new("Haruki Murakami", Some(37)).is_ok());
  /// assert!(NewAuthor::new("", None).is_err());
  /// ```
  pub fn new(name: impl Into<String>, age: Option<u32>) -> Result<Self> {
    let name = name.into();
    if name.trim().is_empty() {
      return Err(LibrisError::MissingAuthorName);
    }
    Ok(Self { name, age })
  }
}

impl NewBook {
  /// Drafts a new book for the author with the given id.
  ///
  /// The reference is not checked against the catalog here; a book whose
  /// author has since disappeared reports that when its info line is
  /// requested.
  pub fn new(author_id: i64) -> Self { Self { author_id, title: None, pages: None } }

  /// Sets the title.
  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  /// Sets the page count.
  pub fn pages(mut self, pages: u32) -> Self {
    self.pages = Some(pages);
    self
  }
}
