use anyhow::Result;
use chrono::{Local, NaiveDate};

use titanx::core::export;
use titanx::core::tracking;
use titanx::models::{ActivityCategory, ActivityEntry};
use titanx::output;
use titanx::store::MetricsStore;

pub fn run(
    output_path: Option<&str>,
    to_stdout: bool,
    date: Option<NaiveDate>,
    human: bool,
) -> Result<()> {
    let db = super::open_db()?;
    let mut snapshot = db.load_or_default()?;
    let streak = super::status::current_streak(&db)?;
    let content = export::to_json(&snapshot, streak)?;

    if to_stdout {
        println!("{}", content);
        return Ok(());
    }

    let today = date.unwrap_or_else(|| Local::now().date_naive());
    let path = output_path
        .map(str::to_string)
        .unwrap_or_else(|| export::file_name(today));
    std::fs::write(&path, &content)?;

    tracking::push_unique(
        &mut snapshot,
        ActivityEntry::new("Data Exported", ActivityCategory::Workout),
    );
    db.save(&snapshot)?;

    if human {
        println!("Exported to {}", path);
    } else {
        let out = output::success(
            "export",
            serde_json::json!({"path": path, "streak": streak}),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
