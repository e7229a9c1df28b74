#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tempfile::TempDir;
use titanx::db::Database;
use titanx::models::{ActivityCategory, ActivityEntry, Snapshot};

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// UTC instant on `date` at `hour:00`.
pub fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
}

/// An activity at `hour:00` UTC on `date`.
pub fn activity(date: NaiveDate, hour: u32, category: ActivityCategory) -> ActivityEntry {
    ActivityEntry::at(format!("{} at {}", category, hour), category, at(date, hour))
}

pub fn workout_on(date: NaiveDate) -> ActivityEntry {
    activity(date, 12, ActivityCategory::Workout)
}

/// A snapshot with the given headline numbers and everything else default.
pub fn snapshot(workouts: u32, calories: u32, water: f64, sleep: f64, weight: f64) -> Snapshot {
    Snapshot {
        weight,
        calories_logged: calories,
        water_liters: water,
        sleep_hours: sleep,
        workout_count: workouts,
        ..Snapshot::default()
    }
}
