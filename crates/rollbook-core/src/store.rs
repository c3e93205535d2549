//! The `SnapshotStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rollbook-store-csv`).
//! Higher layers (`rollbook-web`, `rollbook-cli`) depend on this abstraction,
//! not on any concrete backend.

use crate::registry::Registry;

/// Abstraction over durable snapshot storage for the registry.
///
/// The model is wholesale: `save_all` replaces every category's stored
/// snapshot from the current collections, and `load_all` rebuilds a complete
/// registry. There is no per-record persistence.
pub trait SnapshotStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Write a snapshot of every category, overwriting previous snapshots.
  fn save_all(&self, registry: &Registry) -> Result<(), Self::Error>;

  /// Rebuild a registry from the stored snapshots. A category without a
  /// stored snapshot loads empty.
  fn load_all(&self) -> Result<Registry, Self::Error>;
}
