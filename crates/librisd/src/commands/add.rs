//! Module for abstracting the "add" functionality to the [`libris`] database.

use super::*;

/// Function for the [`Commands::Add`] in the CLI.
pub async fn add(cli: &Cli, record: AddCommands) -> Result<()> {
  let mut db = open_database(cli).await?;

  match record {
    AddCommands::Author { name, age } => {
      let author = Add::author(NewAuthor::new(name, age)?).execute(&mut db).await?;
      println!("{} Added author #{}: {}", style(SUCCESS_PREFIX).green(), author.id, author.name);
    },
    AddCommands::Book { author_id, title, pages } => {
      if Query::author_by_id(author_id).execute(&mut db).await?.is_empty() {
        println!(
          "{} No author with id {} yet; the book will hold a dangling reference",
          style(WARNING_PREFIX).yellow(),
          author_id
        );
      }

      let mut draft = NewBook::new(author_id);
      if let Some(title) = title {
        draft = draft.title(title);
      }
      if let Some(pages) = pages {
        draft = draft.pages(pages);
      }

      let book = Add::book(draft).execute(&mut db).await?;
      println!(
        "{} Added book #{}: {}",
        style(SUCCESS_PREFIX).green(),
        book.id,
        book.title.as_deref().unwrap_or("(untitled)")
      );
    },
  }

  Ok(())
}
