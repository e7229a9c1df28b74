use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::models::{ActivityCategory, ActivityEntry};

use super::Database;

struct ActivityRow {
    id: i64,
    name: String,
    timestamp: String,
    category: String,
}

/// `None` for a row whose type is not a known category.
fn row_to_activity(r: ActivityRow) -> Result<Option<ActivityEntry>> {
    let Some(category) = ActivityCategory::parse(&r.category) else {
        tracing::warn!(id = r.id, category = %r.category, "unknown activity type, skipping row");
        return Ok(None);
    };
    let occurred_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.timestamp)?.with_timezone(&Utc);
    Ok(Some(ActivityEntry {
        id: r.id,
        description: r.name,
        occurred_at,
        category,
    }))
}

impl Database {
    /// Append entries not seen before. Returns how many were new.
    pub fn insert_activities(&self, entries: &[ActivityEntry]) -> Result<usize> {
        let mut stmt = self.conn.prepare(
            "INSERT OR IGNORE INTO activity_log (id, name, timestamp, type)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        let mut added = 0;
        for e in entries {
            added += stmt.execute(params![
                e.id,
                e.description,
                e.occurred_at.to_rfc3339(),
                e.category.to_string(),
            ])?;
        }
        Ok(added)
    }

    /// Full activity history, newest first.
    pub fn all_activities(&self) -> Result<Vec<ActivityEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, timestamp, type FROM activity_log
             ORDER BY timestamp DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ActivityRow {
                id: row.get(0)?,
                name: row.get(1)?,
                timestamp: row.get(2)?,
                category: row.get(3)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            if let Some(entry) = row_to_activity(row?)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}
