use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::session::WorkoutOutcome;
use crate::models::{ActivityCategory, ActivityEntry, Goals, Snapshot};
use crate::store::MetricsStore;

/// Liters added per glass of water.
pub const GLASS_LITERS: f64 = 0.25;
/// Daily water is capped here.
pub const WATER_CAP_LITERS: f64 = 5.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Weight,
    Calories,
    Sleep,
    Water,
    Workout,
}

impl FromStr for MetricKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "weight" | "w" => Ok(Self::Weight),
            "calories" | "cal" | "kcal" => Ok(Self::Calories),
            "sleep" | "sl" => Ok(Self::Sleep),
            "water" | "wa" => Ok(Self::Water),
            "workout" | "wo" => Ok(Self::Workout),
            _ => anyhow::bail!(
                "unknown metric: {} (expected weight/calories/sleep/water/workout)",
                s
            ),
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weight => write!(f, "weight"),
            Self::Calories => write!(f, "calories"),
            Self::Sleep => write!(f, "sleep"),
            Self::Water => write!(f, "water"),
            Self::Workout => write!(f, "workout"),
        }
    }
}

/// Parse user input for `kind`. Rejects anything non-numeric, negative or out
/// of range; the caller keeps its previous value.
pub fn parse_value(kind: MetricKind, raw: Option<&str>) -> Result<f64> {
    let Some(raw) = raw else {
        return match kind {
            MetricKind::Water | MetricKind::Workout => Ok(1.0),
            _ => anyhow::bail!("a value is required for {}", kind),
        };
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid value: {}", raw))?;
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("invalid value: {} (must be a non-negative number)", raw);
    }
    match kind {
        MetricKind::Sleep if value > 24.0 => {
            anyhow::bail!("invalid value: {} (sleep is at most 24 hours)", raw)
        }
        MetricKind::Calories | MetricKind::Water | MetricKind::Workout
            if value.fract() != 0.0 =>
        {
            anyhow::bail!("invalid value: {} (must be a whole number)", raw)
        }
        MetricKind::Calories | MetricKind::Water | MetricKind::Workout if value == 0.0 => {
            anyhow::bail!("invalid value: {} (must be at least 1)", raw)
        }
        _ => Ok(value),
    }
}

/// Apply one logged value to the snapshot and prepend the matching activity.
///
/// Weight and sleep replace the current value, calories accumulate, water adds
/// `value` glasses up to the cap and workouts add `value` sessions.
pub fn apply(
    snapshot: &mut Snapshot,
    kind: MetricKind,
    value: f64,
    at: DateTime<Utc>,
) -> ActivityEntry {
    let (description, category) = match kind {
        MetricKind::Weight => {
            snapshot.weight = value;
            (format!("Weight Update: {}lbs", value), ActivityCategory::Workout)
        }
        MetricKind::Calories => {
            let kcal = value as u32;
            snapshot.calories_logged = snapshot.calories_logged.saturating_add(kcal);
            (format!("Nutrition +{}kcal", kcal), ActivityCategory::Nutrition)
        }
        MetricKind::Sleep => {
            snapshot.sleep_hours = value;
            (format!("Sleep Logged: {}hrs", value), ActivityCategory::Sleep)
        }
        MetricKind::Water => {
            let added = value * GLASS_LITERS;
            let total = (snapshot.water_liters + added).min(WATER_CAP_LITERS);
            snapshot.water_liters = round2(total);
            (
                format!("Hydration +{}ml", (added * 1000.0).round()),
                ActivityCategory::Water,
            )
        }
        MetricKind::Workout => {
            snapshot.workout_count = snapshot.workout_count.saturating_add(value as u32);
            ("Workout Complete".to_string(), ActivityCategory::Workout)
        }
    };
    push_unique(snapshot, ActivityEntry::at(description, category, at))
}

/// Add `entry` to the snapshot, nudging its id forward past any entry it
/// collides with. Ids at the top of the range are kept as they are.
pub fn push_unique(snapshot: &mut Snapshot, mut entry: ActivityEntry) -> ActivityEntry {
    while snapshot.activities.iter().any(|a| a.id == entry.id) {
        match entry.id.checked_add(1) {
            Some(next) => entry.id = next,
            None => {
                tracing::warn!(id = entry.id, "activity id out of range, keeping duplicate");
                break;
            }
        }
    }
    snapshot.push_activity(entry.clone());
    entry
}

/// Load, apply, save. Nothing is written when the input is rejected.
pub fn log_metric(
    store: &impl MetricsStore,
    kind: MetricKind,
    raw_value: Option<&str>,
    at: DateTime<Utc>,
) -> Result<(Snapshot, ActivityEntry)> {
    let value = parse_value(kind, raw_value)?;
    let mut snapshot = store.load_or_default()?;
    let entry = apply(&mut snapshot, kind, value, at);
    store.save(&snapshot)?;
    tracing::debug!(%kind, value, "metric logged");
    Ok((snapshot, entry))
}

/// Report a finished workout back to the metrics: one more workout and a
/// "Workout Complete" activity. Unfinished sessions are not recorded.
pub fn record_workout(
    store: &impl MetricsStore,
    outcome: &WorkoutOutcome,
    at: DateTime<Utc>,
) -> Result<Option<Snapshot>> {
    if !outcome.completed {
        tracing::debug!(plan = outcome.plan, "workout not finished, nothing recorded");
        return Ok(None);
    }
    let mut snapshot = store.load_or_default()?;
    apply(&mut snapshot, MetricKind::Workout, 1.0, at);
    store.save(&snapshot)?;
    tracing::info!(
        plan = outcome.plan,
        sets = outcome.sets_completed,
        workouts = snapshot.workout_count,
        "workout recorded"
    );
    Ok(Some(snapshot))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    Calories,
    Water,
    Sleep,
    Workouts,
}

impl FromStr for GoalKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "calories" => Ok(Self::Calories),
            "water" => Ok(Self::Water),
            "sleep" => Ok(Self::Sleep),
            "workouts" => Ok(Self::Workouts),
            _ => anyhow::bail!(
                "unknown goal: {} (expected calories/water/sleep/workouts)",
                s
            ),
        }
    }
}

/// Replace one goal. Goals must be positive.
pub fn set_goal(store: &impl MetricsStore, kind: GoalKind, raw_value: &str) -> Result<Goals> {
    let value: f64 = raw_value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid value: {}", raw_value))?;
    if !value.is_finite() || value <= 0.0 {
        anyhow::bail!("invalid value: {} (goals must be positive)", raw_value);
    }
    let mut snapshot = store.load_or_default()?;
    match kind {
        GoalKind::Calories => snapshot.goals.calories = value,
        GoalKind::Water => snapshot.goals.water_liters = value,
        GoalKind::Sleep => snapshot.goals.sleep_hours = value,
        GoalKind::Workouts => snapshot.goals.workouts_per_week = value,
    }
    store.save(&snapshot)?;
    Ok(snapshot.goals)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
