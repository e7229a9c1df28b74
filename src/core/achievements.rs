use crate::models::Snapshot;
use crate::models::achievement::{Achievement, AchievementStats, CATALOG};

impl AchievementStats {
    pub fn from_snapshot(snapshot: &Snapshot, streak: u32) -> Self {
        Self {
            workout_count: snapshot.workout_count,
            weight: snapshot.weight,
            calories_logged: snapshot.calories_logged,
            water_liters: snapshot.water_liters,
            sleep_hours: snapshot.sleep_hours,
            streak,
        }
    }
}

/// Recompute every achievement from scratch. Always the full catalog, in
/// catalog order.
pub fn evaluate_achievements(stats: &AchievementStats) -> Vec<Achievement> {
    CATALOG.iter().map(|def| def.evaluate(stats)).collect()
}

pub fn unlocked_count(achievements: &[Achievement]) -> usize {
    achievements.iter().filter(|a| a.unlocked).count()
}
