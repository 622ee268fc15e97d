use libris::{
  catalog::NewBook,
  database::{Add, Query, Remove},
  prelude::*,
};

use super::setup_test_db;
use crate::{create_second_test_author, create_test_author, create_test_book, traced_test, TestResult};

/// Book removal
mod remove_books {

  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_remove_book_by_id() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;

    let removed = Remove::book_by_id(book.id).execute(&mut db).await?;
    assert_eq!(removed, vec![book.clone()]);
    assert!(Query::book_by_id(book.id).execute(&mut db).await?.is_empty());

    // The author is untouched
    let stored = Query::author_by_id(author.id).execute(&mut db).await?;
    assert_eq!(stored, vec![author]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_remove_books_by_title() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    Add::book(create_test_book(author.id)).execute(&mut db).await?;
    Add::book(create_test_book(author.id)).execute(&mut db).await?;
    let kept = Add::book(NewBook::new(author.id).title("Kaze No Uta Wo Kike")).execute(&mut db).await?;

    let removed = Remove::books_by_title("Hitsuji").execute(&mut db).await?;
    assert_eq!(removed.len(), 2);

    let stored = Query::books().execute(&mut db).await?;
    assert_eq!(stored, vec![kept]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_dry_run_removes_nothing() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;

    let preview = Remove::books_of(&author).dry_run().execute(&mut db).await?;
    assert_eq!(preview, vec![book.clone()]);

    // Still there
    let stored = Query::book_by_id(book.id).execute(&mut db).await?;
    assert_eq!(stored, vec![book]);

    Ok(())
  }
}

/// Author removal
mod remove_authors {

  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_remove_author_leaves_books_behind() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let author = Add::author(create_test_author()).execute(&mut db).await?;
    let book = Add::book(create_test_book(author.id)).execute(&mut db).await?;

    let removed = Remove::author_by_id(author.id).execute(&mut db).await?;
    assert_eq!(removed, vec![author.clone()]);
    assert!(Query::author_by_id(author.id).execute(&mut db).await?.is_empty());

    // No cascade: the book stays, its reference now dangling
    let stored = Query::books_of(&author).execute(&mut db).await?;
    assert_eq!(stored, vec![book]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_remove_authors_by_name_is_scoped() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    Add::author(create_test_author()).execute(&mut db).await?;
    let kept = Add::author(create_second_test_author()).execute(&mut db).await?;

    let removed = Remove::authors_by_name("Murakami").execute(&mut db).await?;
    assert_eq!(removed.len(), 1);

    let stored = Query::authors().execute(&mut db).await?;
    assert_eq!(stored, vec![kept]);

    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_remove_missing_author_is_a_noop() -> TestResult<()> {
    let (mut db, _dir) = setup_test_db().await;

    let removed = Remove::author_by_id(42).execute(&mut db).await?;
    assert!(removed.is_empty());

    Ok(())
  }
}
