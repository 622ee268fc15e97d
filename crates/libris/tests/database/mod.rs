use libris::database::Database;
use tempfile::tempdir;

pub mod info;
pub mod instruction;

/// Helper function to set up a test database
pub async fn setup_test_db() -> (Database, tempfile::TempDir) {
  let dir = tempdir().unwrap();
  let db = Database::open(dir.path().join("test.db")).await.unwrap();
  (db, dir)
}
