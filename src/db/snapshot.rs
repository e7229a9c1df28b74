use anyhow::Result;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

use crate::models::{ActivityEntry, Snapshot};
use crate::store::{MetricsStore, STORAGE_KEY};

use super::Database;

impl Database {
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl MetricsStore for Database {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.get_raw(STORAGE_KEY)?.as_deref().map(Snapshot::from_json))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let blob = snapshot.to_json()?;
        let tx = self.conn.unchecked_transaction()?;
        self.put_raw(STORAGE_KEY, &blob)?;
        let added = self.insert_activities(&snapshot.activities)?;
        tx.commit()?;
        tracing::info!(
            workouts = snapshot.workout_count,
            new_activities = added,
            "snapshot saved"
        );
        Ok(())
    }

    fn activity_history(&self) -> Result<Vec<ActivityEntry>> {
        self.all_activities()
    }
}
