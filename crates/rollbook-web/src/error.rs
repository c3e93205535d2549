//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

#[derive(Debug, Error)]
pub enum Error {
  /// The category already holds a record with the submitted ID.
  #[error("{0}")]
  Conflict(String),
  /// No record in the category carries the requested ID.
  #[error("{0}")]
  NotFound(String),
  #[error("storage unavailable: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<rollbook_core::Error> for Error {
  fn from(err: rollbook_core::Error) -> Self {
    match err {
      err @ rollbook_core::Error::DuplicateId { .. } => Error::Conflict(err.to_string()),
      err @ rollbook_core::Error::NotFound { .. } => Error::NotFound(err.to_string()),
      rollbook_core::Error::Storage(source) => Error::Storage(source),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::Conflict(_) => StatusCode::CONFLICT,
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, render::message_page(&self.to_string())).into_response()
  }
}
