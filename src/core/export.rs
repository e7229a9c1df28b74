use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Snapshot;

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    #[serde(flatten)]
    pub snapshot: &'a Snapshot,
    pub streak: u32,
}

/// Default backup file name for `date`.
pub fn file_name(date: NaiveDate) -> String {
    format!("titanx-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Pretty JSON of the snapshot plus the derived streak.
pub fn to_json(snapshot: &Snapshot, streak: u32) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ExportDocument { snapshot, streak })?)
}
