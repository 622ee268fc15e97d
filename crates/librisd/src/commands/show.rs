//! Display lines for single records: the greet and info commands.

use super::*;

/// Function for the [`Commands::Greet`] in the CLI.
pub async fn greet(cli: &Cli, id: i64) -> Result<()> {
  let mut db = open_database(cli).await?;

  match Query::author_by_id(id).execute(&mut db).await?.into_iter().next() {
    Some(author) => println!("{}", author.greet()),
    None => println!("{} No author with id {id}", style(WARNING_PREFIX).yellow()),
  }

  Ok(())
}

/// Function for the [`Commands::Info`] in the CLI.
pub async fn info(cli: &Cli, id: i64) -> Result<()> {
  let mut db = open_database(cli).await?;

  let Some(book) = Query::book_by_id(id).execute(&mut db).await?.into_iter().next() else {
    println!("{} No book with id {id}", style(WARNING_PREFIX).yellow());
    return Ok(());
  };

  match book.info(&mut db).await? {
    Some(line) => println!("{line}"),
    None => println!("{} This book has no title", style(INFO_PREFIX).cyan()),
  }

  Ok(())
}
