//! End-to-end tests for the display lines, resolved through the database.

use libris::{
  catalog::NewBook,
  database::{Add, Query, Remove},
  error::LibrisError,
  prelude::*,
};

use super::setup_test_db;
use crate::{create_second_test_author, create_test_author, create_test_book, traced_test, TestResult};

#[traced_test]
#[tokio::test]
async fn test_info_without_pages() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  let author = Add::author(create_test_author()).execute(&mut db).await?;
  let book =
    Add::book(NewBook::new(author.id).title("Hitsuji Wo Meguru Bouken")).execute(&mut db).await?;

  let line = book.info(&mut db).await?;
  assert_eq!(line.as_deref(), Some("Hitsuji Wo Meguru Bouken: by Haruki Murakami"));

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_info_with_pages() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  let author = Add::author(create_test_author()).execute(&mut db).await?;
  let book = Add::book(NewBook::new(author.id).title("Hitsuji Wo Meguru Bouken").pages(150))
    .execute(&mut db)
    .await?;

  let line = book.info(&mut db).await?;
  assert_eq!(line.as_deref(), Some("Hitsuji Wo Meguru Bouken: 150 pages by Haruki Murakami"));

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_info_with_factory_defaults() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  let author = Add::author(create_test_author()).execute(&mut db).await?;
  let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;

  let line = book.info(&mut db).await?;
  assert_eq!(line.as_deref(), Some("Hitsuji Wo Meguru Bouken: 200 pages by Haruki Murakami"));

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_info_with_empty_title() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  let author = Add::author(create_test_author()).execute(&mut db).await?;
  let book = Add::book(NewBook::new(author.id).title("").pages(150)).execute(&mut db).await?;

  // No title, no line; the pages don't matter
  assert_eq!(book.info(&mut db).await?, None);

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_info_with_unset_title() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  let author = Add::author(create_test_author()).execute(&mut db).await?;
  let book = Add::book(NewBook::new(author.id)).execute(&mut db).await?;

  assert_eq!(book.info(&mut db).await?, None);

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_info_with_dangling_author() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  let author = Add::author(create_test_author()).execute(&mut db).await?;
  let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;
  Remove::author_by_id(author.id).execute(&mut db).await?;

  let err = book.info(&mut db).await.unwrap_err();
  assert!(matches!(err, LibrisError::AuthorNotFound(id) if id == author.id));

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_info_is_idempotent() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  let author = Add::author(create_test_author()).execute(&mut db).await?;
  let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;

  assert_eq!(book.info(&mut db).await?, book.info(&mut db).await?);

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_greet_round_trips_through_storage() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  Add::author(create_test_author()).execute(&mut db).await?;
  Add::author(create_second_test_author()).execute(&mut db).await?;

  let stored = Query::authors().execute(&mut db).await?;
  assert_eq!(stored[0].greet(), "Hi, my name is Haruki Murakami.");

  let greeting = stored[1].greet();
  assert!(greeting.contains("37"));
  assert!(greeting.ends_with("years old."));

  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_author_books_accessor() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db().await;

  let author = Add::author(create_test_author()).execute(&mut db).await?;
  let first = Add::book(NewBook::new(author.id).title("Kaze No Uta Wo Kike")).execute(&mut db).await?;
  let second = Add::book(create_test_book(author.id)).execute(&mut db).await?;

  let shelf = author.books(&mut db).await?;
  assert_eq!(shelf, vec![first, second]);

  Ok(())
}
