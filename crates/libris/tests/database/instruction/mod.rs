pub use super::setup_test_db;

mod query;
mod remove;
