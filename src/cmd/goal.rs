use anyhow::Result;
use serde_json::json;

use titanx::core::status::goal_progress;
use titanx::core::tracking::{self, GoalKind};
use titanx::output;
use titanx::store::MetricsStore;

pub fn run_show(human_flag: bool) -> Result<()> {
    let db = super::open_db()?;
    let snapshot = db.load_or_default()?;
    let progress = goal_progress(&snapshot);

    if human_flag {
        for g in &progress {
            println!(
                "{:<9} {} / {} ({:.0}%)",
                g.name, g.current, g.target, g.percentage
            );
        }
    } else {
        let out = output::success(
            "goal",
            json!({ "goals": snapshot.goals, "progress": progress }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(kind: &str, value: &str, human_flag: bool) -> Result<()> {
    let kind: GoalKind = kind.parse()?;
    let db = super::open_db()?;
    let goals = tracking::set_goal(&db, kind, value)?;

    if human_flag {
        println!(
            "Goals: {} kcal, {} L water, {} h sleep, {} workouts/week",
            goals.calories, goals.water_liters, goals.sleep_hours, goals.workouts_per_week
        );
    } else {
        let out = output::success("goal", json!({ "goals": goals }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
