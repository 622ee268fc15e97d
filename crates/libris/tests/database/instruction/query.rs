use libris::{
  catalog::NewBook,
  database::{Add, OrderField, Query},
  prelude::*,
};

use super::setup_test_db;
use crate::{create_second_test_author, create_test_author, create_test_book, traced_test, TestResult};

/// Author lookup functionality
mod author_queries {

  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_query_all_authors() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    assert!(Query::authors().execute(&mut db).await?.is_empty());

    let first = Add::author(create_test_author()).execute(&mut db).await?;
    let second = Add::author(create_second_test_author()).execute(&mut db).await?;

    let stored = Query::authors().execute(&mut db).await?;
    assert_eq!(stored, vec![first, second]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_authors_by_name_partial_match() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    Add::author(create_second_test_author()).execute(&mut db).await?;

    let stored = Query::authors_by_name("Murakami").execute(&mut db).await?;
    assert_eq!(stored, vec![author]);

    // SQLite LIKE is case-insensitive for ASCII
    let stored = Query::authors_by_name("haruki").execute(&mut db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_author_of_book() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;

    let resolved = Query::author_of(&book).execute(&mut db).await?;
    assert_eq!(resolved, vec![author]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_author_by_id_missing() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let stored = Query::author_by_id(42).execute(&mut db).await?;
    assert!(stored.is_empty());

    Ok(())
  }
}

/// Book lookup functionality
mod book_queries {

  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_books_of_author_in_insertion_order() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let first = Add::book(NewBook::new(author.id).title("Kaze No Uta Wo Kike")).execute(&mut db).await?;
    let second = Add::book(create_test_book(author.id)).execute(&mut db).await?;
    let third = Add::book(NewBook::new(author.id)).execute(&mut db).await?;

    let shelf = Query::books_of(&author).execute(&mut db).await?;
    assert_eq!(shelf, vec![first, second, third]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_books_of_author_is_scoped() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let other = Add::author(create_second_test_author()).execute(&mut db).await?;
    let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;
    Add::book(NewBook::new(other.id).title("Kitchen")).execute(&mut db).await?;

    let shelf = Query::books_of(&author).execute(&mut db).await?;
    assert_eq!(shelf, vec![book]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_books_by_author_name() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let other = Add::author(create_second_test_author()).execute(&mut db).await?;
    let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;
    Add::book(NewBook::new(other.id).title("Kitchen")).execute(&mut db).await?;

    let stored = Query::books_by_author("Murakami").execute(&mut db).await?;
    assert_eq!(stored, vec![book]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_books_by_title_partial_match() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;
    Add::book(NewBook::new(author.id).title("Kaze No Uta Wo Kike")).execute(&mut db).await?;

    let stored = Query::books_by_title("Meguru").execute(&mut db).await?;
    assert_eq!(stored, vec![book]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_order_by_title() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let wind = Add::book(NewBook::new(author.id).title("Kaze No Uta Wo Kike")).execute(&mut db).await?;
    let sheep = Add::book(create_test_book(author.id)).execute(&mut db).await?;

    // "Hitsuji ..." sorts ahead of "Kaze ..." even though it was added later
    let stored = Query::books().order_by(OrderField::Title).execute(&mut db).await?;
    assert_eq!(stored, vec![sheep, wind]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_order_by_pages_descending() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let short = Add::book(NewBook::new(author.id).title("Kaze No Uta Wo Kike").pages(130))
      .execute(&mut db)
      .await?;
    let long = Add::book(create_test_book(author.id)).execute(&mut db).await?;
    let unknown = Add::book(NewBook::new(author.id).title("Untracked")).execute(&mut db).await?;

    // Books without a page count sort below any counted ones
    let stored =
      Query::books().order_by(OrderField::Pages).descending().execute(&mut db).await?;
    assert_eq!(stored, vec![long, short, unknown]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_book_by_id_missing() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let stored = Query::book_by_id(42).execute(&mut db).await?;
    assert!(stored.is_empty());

    Ok(())
  }
}
