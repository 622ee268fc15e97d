//! Module for setting up a fresh catalog database.

use super::*;

/// Function for the [`Commands::Init`] in the CLI.
pub async fn init(cli: &Cli) -> Result<()> {
  let path = cli.path.clone().unwrap_or_else(Database::default_path);

  if path.exists()
    && !cli.accept_defaults
    && !Confirm::new()
      .with_prompt(format!("A database already exists at {}, open it anyway?", path.display()))
      .default(false)
      .interact()?
  {
    println!("{} Choose a different location with --path", style(INFO_PREFIX).cyan());
    return Ok(());
  }

  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }

  Database::open(&path).await?;
  println!(
    "{} Catalog initialized successfully at {}",
    style(SUCCESS_PREFIX).green(),
    path.display()
  );
  Ok(())
}
