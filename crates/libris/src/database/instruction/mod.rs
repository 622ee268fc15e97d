//! Database instruction implementations for catalog management.
//!
//! This module provides a trait-based abstraction for database operations,
//! allowing for type-safe and composable queries and modifications. Each
//! instruction type implements a specific operation while maintaining proper
//! borrowing semantics and async safety:
//!
//! - [`Add`]: insert a drafted author or book
//! - [`Query`]: retrieve authors or books by various criteria
//! - [`Remove`]: delete the entities matched by a query

use rusqlite::{params, params_from_iter};

use super::*;

pub mod add;
pub mod query;
pub mod remove;

pub use self::{
  add::Add,
  query::{AuthorCriteria, BookCriteria, OrderField, Query},
  remove::{Remove, RemoveOptions},
};

/// A single executable operation against the catalog [`Database`].
#[async_trait]
pub trait DatabaseInstruction {
  /// The value this instruction produces when executed.
  type Output;

  // Take &mut reference to avoid taking ownership and allow multiple operations
  /// Runs the instruction against the given database.
  async fn execute(&self, db: &mut Database) -> Result<Self::Output>;
}
