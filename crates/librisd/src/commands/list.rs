//! Module for abstracting the "list" functionality to the [`libris`] database.

use super::*;

/// Function for the [`Commands::List`] in the CLI.
pub async fn list(cli: &Cli, target: ListCommands) -> Result<()> {
  let mut db = open_database(cli).await?;

  match target {
    ListCommands::Authors { name, json } => {
      let authors = match &name {
        Some(name) => Query::authors_by_name(name).execute(&mut db).await?,
        None => Query::authors().execute(&mut db).await?,
      };

      if json {
        println!("{}", serde_json::to_string_pretty(&authors)?);
        return Ok(());
      }

      if authors.is_empty() {
        println!("{} No authors found", style(INFO_PREFIX).cyan());
        return Ok(());
      }

      println!("{} Authors:", style(INFO_PREFIX).cyan());
      for (position, author) in authors.iter().enumerate() {
        let prefix = if position + 1 == authors.len() { TREE_LEAF } else { TREE_BRANCH };
        match author.age {
          Some(age) =>
            println!("{prefix} #{} {} (age {age})", author.id, style(&author.name).cyan()),
          None => println!("{prefix} #{} {}", author.id, style(&author.name).cyan()),
        }
      }
    },
    ListCommands::Books { author, title, sort, descending, json } => {
      let mut query = match (&author, &title) {
        (Some(author), _) => Query::books_by_author(author),
        (None, Some(title)) => Query::books_by_title(title),
        (None, None) => Query::books(),
      };
      if let Some(field) = sort {
        query = query.order_by(field.into());
      }
      if descending {
        query = query.descending();
      }

      let mut books = query.execute(&mut db).await?;

      // A title filter on top of an author filter is applied in memory
      if let (Some(_), Some(title)) = (&author, &title) {
        let needle = title.to_lowercase();
        books
          .retain(|book| book.title.as_deref().is_some_and(|t| t.to_lowercase().contains(&needle)));
      }

      if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
      }

      if books.is_empty() {
        println!("{} No books found", style(INFO_PREFIX).cyan());
        return Ok(());
      }

      println!("{} Books:", style(INFO_PREFIX).cyan());
      for (position, book) in books.iter().enumerate() {
        let prefix = if position + 1 == books.len() { TREE_LEAF } else { TREE_BRANCH };
        let title = book.title.as_deref().filter(|title| !title.is_empty()).unwrap_or("(untitled)");
        match book.pages {
          Some(pages) => println!("{prefix} #{} {} ({pages} pages)", book.id, style(title).cyan()),
          None => println!("{prefix} #{} {}", book.id, style(title).cyan()),
        }
      }
    },
  }

  Ok(())
}
