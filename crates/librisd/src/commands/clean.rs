//! Module for removing the catalog database entirely.

use super::*;

/// Function for the [`Commands::Clean`] in the CLI.
pub async fn clean(cli: &Cli) -> Result<()> {
  let path = cli.path.clone().unwrap_or_else(Database::default_path);

  if !path.exists() {
    println!("{} No database at {}", style(INFO_PREFIX).cyan(), path.display());
    return Ok(());
  }

  if !cli.accept_defaults
    && !Confirm::new()
      .with_prompt(format!("Remove the database at {}?", path.display()))
      .default(false)
      .interact()?
  {
    return Ok(());
  }

  std::fs::remove_file(&path)?;
  println!("{} Database files cleaned", style(SUCCESS_PREFIX).green());
  Ok(())
}
