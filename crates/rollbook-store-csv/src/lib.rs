//! CSV snapshot backend for the Rollbook registry.
//!
//! One comma-delimited file per category; every save overwrites the previous
//! snapshot wholesale through a temp-file rename.

mod codec;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::CsvStore;
