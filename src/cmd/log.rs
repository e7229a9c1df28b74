use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use titanx::core::tracking::{self, MetricKind};
use titanx::output;
use titanx::output::human;

pub fn run(kind: &str, value: Option<&str>, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let kind: MetricKind = kind.parse()?;
    let db = super::open_db()?;
    let (snapshot, entry) =
        tracking::log_metric(&db, kind, value, super::timestamp_for(date))?;

    if human_flag {
        println!("Logged: {}", human::format_activity(&entry));
    } else {
        let out = output::success(
            "log",
            json!({
                "entry": entry,
                "metrics": {
                    "weight": snapshot.weight,
                    "calories": snapshot.calories_logged,
                    "water": snapshot.water_liters,
                    "sleep": snapshot.sleep_hours,
                    "workouts": snapshot.workout_count,
                }
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
