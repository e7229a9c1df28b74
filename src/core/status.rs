use anyhow::Result;
use chrono::{Local, NaiveDate, Timelike};
use serde::Serialize;

use crate::core::{achievements, leveling, motivation, streak};
use crate::models::Snapshot;
use crate::models::achievement::{Achievement, AchievementStats};
use crate::models::level::Level;
use crate::store::MetricsStore;

#[derive(Debug, Serialize)]
pub struct DashboardStatus {
    pub date: NaiveDate,
    pub greeting: String,
    pub quote: &'static str,
    pub metrics: Snapshot,
    pub streak: u32,
    pub xp: u64,
    pub level: &'static Level,
    pub next_level: Option<&'static Level>,
    pub progress: leveling::LevelProgress,
    pub achievements: Vec<Achievement>,
    pub unlocked: usize,
    pub goals: Vec<GoalProgress>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GoalProgress {
    pub name: &'static str,
    pub current: f64,
    pub target: f64,
    pub percentage: f64,
}

/// Everything the dashboard shows, derived from the stored snapshot.
pub fn compute(store: &impl MetricsStore) -> Result<DashboardStatus> {
    let now = Local::now();
    let snapshot = store.load_or_default()?;
    let history = store.activity_history()?;
    let streak = streak::compute_streak(&history);
    Ok(derive(snapshot, streak, now.date_naive(), now.hour()))
}

/// Pure part of [`compute`].
pub fn derive(snapshot: Snapshot, streak: u32, date: NaiveDate, hour: u32) -> DashboardStatus {
    let stats = AchievementStats::from_snapshot(&snapshot, streak);
    let achievements = achievements::evaluate_achievements(&stats);
    let xp = leveling::compute_xp(&stats);
    let level = leveling::level_for(xp);

    let greeting = if snapshot.display_name.is_empty() {
        motivation::greeting(hour).to_string()
    } else {
        format!("{}, {}", motivation::greeting(hour), snapshot.display_name)
    };

    DashboardStatus {
        date,
        greeting,
        quote: motivation::daily_quote(date),
        streak,
        xp,
        level,
        next_level: leveling::next_level(level.rank),
        progress: leveling::progress(xp),
        unlocked: achievements::unlocked_count(&achievements),
        achievements,
        goals: goal_progress(&snapshot),
        metrics: snapshot,
    }
}

pub fn goal_progress(s: &Snapshot) -> Vec<GoalProgress> {
    let row = |name: &'static str, current: f64, target: f64| GoalProgress {
        name,
        current,
        target,
        percentage: (current / target * 100.0).clamp(0.0, 100.0),
    };
    vec![
        row("calories", f64::from(s.calories_logged), s.goals.calories),
        row("water", s.water_liters, s.goals.water_liters),
        row("sleep", s.sleep_hours, s.goals.sleep_hours),
        row(
            "workouts",
            f64::from(s.workout_count),
            s.goals.workouts_per_week,
        ),
    ]
}
