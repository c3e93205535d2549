//! Error types for `rollbook-core`.

use thiserror::Error;

use crate::record::Category;

#[derive(Debug, Error)]
pub enum Error {
  /// An add was rejected because the category already holds the ID.
  #[error("{} with ID {id} is already registered", .category.noun())]
  DuplicateId { category: Category, id: String },

  /// A removal targeted an ID the category does not hold.
  #[error("{} with ID {id} not found", .category.noun())]
  NotFound { category: Category, id: String },

  /// The snapshot store failed to load or save.
  #[error("storage unavailable: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
