pub mod completions;
pub mod config;
pub mod export;
pub mod goal;
pub mod init;
pub mod log;
pub mod status;
pub mod suggest;
pub mod workout;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use titanx::db::Database;
use titanx::models::config::Config;

pub(crate) fn open_db() -> Result<Database> {
    Database::open(&Config::db_path())
}

/// Now, or local noon on the overridden date.
pub(crate) fn timestamp_for(date: Option<NaiveDate>) -> DateTime<Utc> {
    date.and_then(|d| d.and_hms_opt(12, 0, 0))
        .and_then(|dt| Local.from_local_datetime(&dt).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}
