//! The `School` service: a registry paired with its snapshot store.
//!
//! Both presentation shells hold one of these. Every successful mutation is
//! followed by a wholesale snapshot save and one activity-log line.

use crate::{
  error::{Error, Result},
  record::{Category, NewRecord, Record},
  registry::{Registry, SearchCriterion},
  store::SnapshotStore,
};

pub struct School<S> {
  registry: Registry,
  store:    S,
}

impl<S: SnapshotStore> School<S> {
  /// Load the stored snapshots and keep `store` for later saves.
  ///
  /// An unreadable or malformed snapshot fails the open; the process should
  /// not start on silently partial data.
  pub fn open(store: S) -> Result<Self> {
    let registry =
      store.load_all().map_err(|e| Error::Storage(Box::new(e)))?;
    Ok(Self { registry, store })
  }

  /// Register a new record, persist every collection, and log the addition.
  ///
  /// A duplicate ID mutates and saves nothing. If the save itself fails the
  /// in-memory registry keeps the new record and the storage error is
  /// returned; there is no rollback.
  pub fn register(&mut self, input: NewRecord) -> Result<Record> {
    let record = self.registry.add(input)?;
    self.save()?;
    tracing::info!("Added {}: {}", record.category().noun(), record);
    Ok(record)
  }

  /// Remove the record with `id` from `category`, persist, and log.
  pub fn deregister(&mut self, category: Category, id: &str) -> Result<Record> {
    let record = self.registry.remove(category, id)?;
    self.save()?;
    tracing::info!("Removed {}: {}", category.noun(), record);
    Ok(record)
  }

  pub fn search(
    &self,
    category: Category,
    criterion: &SearchCriterion,
  ) -> Vec<Record> {
    self.registry.search(category, criterion)
  }

  /// Read access for the list views.
  pub fn registry(&self) -> &Registry {
    &self.registry
  }

  /// Write the current snapshots without mutating anything.
  pub fn save(&self) -> Result<()> {
    self
      .store
      .save_all(&self.registry)
      .map_err(|e| Error::Storage(Box::new(e)))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
