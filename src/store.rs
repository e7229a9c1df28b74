//! Storage seam for the metrics snapshot.
//!
//! The dashboard never reaches into ambient storage: it is handed a
//! [`MetricsStore`] and works on values. [`crate::db::Database`] persists to
//! SQLite; [`MemoryStore`] keeps everything in process for tests.

use std::cell::RefCell;

use anyhow::Result;

use crate::models::{ActivityEntry, Snapshot};

/// Fixed key the serialized snapshot is stored under.
pub const STORAGE_KEY: &str = "titan_dashboard_data";

pub trait MetricsStore {
    /// Read the last saved snapshot. `None` when nothing was ever saved; a
    /// corrupt blob decodes to defaults rather than failing.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Overwrite the stored snapshot. Last write wins.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Every activity ever recorded, newest first. Stores without a separate
    /// history only know the capped list inside the snapshot.
    fn activity_history(&self) -> Result<Vec<ActivityEntry>> {
        Ok(self.load()?.map(|s| s.activities).unwrap_or_default())
    }

    /// Load, or start from defaults.
    fn load_or_default(&self) -> Result<Snapshot> {
        Ok(self.load()?.unwrap_or_default())
    }
}

/// Holds the serialized blob in memory so round trips go through the same
/// encoding as the on-disk store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw blob, as if an older client had written it.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl MetricsStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.blob.borrow().as_deref().map(Snapshot::from_json))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        *self.blob.borrow_mut() = Some(snapshot.to_json()?);
        Ok(())
    }
}
