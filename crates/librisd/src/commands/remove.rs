//! Module for abstracting the "remove" functionality to the [`libris`] database.

use super::*;

/// Confirms a destructive operation unless defaults are accepted or forced.
fn confirmed(cli: &Cli, force: bool, prompt: &str) -> Result<bool> {
  if force || cli.accept_defaults {
    return Ok(true);
  }
  Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Function for the [`Commands::Remove`] in the CLI.
pub async fn remove(cli: &Cli, target: RemoveCommands) -> Result<()> {
  let mut db = open_database(cli).await?;

  match target {
    RemoveCommands::Author { id, force } => {
      let Some(author) = Query::author_by_id(id).execute(&mut db).await?.into_iter().next() else {
        println!("{} No author with id {id}", style(WARNING_PREFIX).yellow());
        return Ok(());
      };

      if !confirmed(cli, force, &format!("Remove author \"{}\"?", author.name))? {
        return Ok(());
      }

      Remove::author_by_id(id).execute(&mut db).await?;
      println!("{} Removed author #{id}: {}", style(SUCCESS_PREFIX).green(), author.name);

      let orphaned = Query::books_of(&author).execute(&mut db).await?;
      if !orphaned.is_empty() {
        println!(
          "{} {} book(s) still reference this author",
          style(WARNING_PREFIX).yellow(),
          orphaned.len()
        );
      }
    },
    RemoveCommands::Book { id, force } => {
      let Some(book) = Query::book_by_id(id).execute(&mut db).await?.into_iter().next() else {
        println!("{} No book with id {id}", style(WARNING_PREFIX).yellow());
        return Ok(());
      };

      let label =
        book.title.as_deref().filter(|title| !title.is_empty()).unwrap_or("(untitled)").to_string();
      if !confirmed(cli, force, &format!("Remove book \"{label}\"?"))? {
        return Ok(());
      }

      Remove::book_by_id(id).execute(&mut db).await?;
      println!("{} Removed book #{id}: {label}", style(SUCCESS_PREFIX).green());
    },
  }

  Ok(())
}
