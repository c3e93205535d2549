//! Error type for `rollbook-store-csv`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A non-empty snapshot file did not start with the expected header row.
  #[error("{file}: malformed header: expected {expected:?}, found {found:?}")]
  Header {
    file:     String,
    expected: String,
    found:    String,
  },

  /// A data row could not be parsed; the whole category load is abandoned.
  #[error("{file} line {line}: {problem}")]
  MalformedRow {
    file:    String,
    line:    usize,
    problem: String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
