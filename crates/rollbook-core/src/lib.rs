//! Core types and trait definitions for the Rollbook registry.
//!
//! This crate is deliberately free of HTTP and file-format dependencies.
//! All other crates depend on it; it depends on nothing heavier than `serde`
//! and `tracing`.

pub mod error;
pub mod record;
pub mod registry;
pub mod school;
pub mod store;

pub use error::{Error, Result};
