use serde::Serialize;

use crate::models::achievement::AchievementStats;
use crate::models::level::{LEVELS, Level};

pub const XP_PER_WORKOUT: u64 = 50;
pub const XP_PER_STREAK_DAY: u64 = 30;
pub const XP_WEIGHT_BONUS: u64 = 5;

/// Experience earned from the current metrics.
///
/// workouts x50, one per 100 kcal, ten per liter of water, twenty per hour of
/// sleep, thirty per streak day, plus five once a weight is recorded.
pub fn compute_xp(stats: &AchievementStats) -> u64 {
    let mut xp = u64::from(stats.workout_count).saturating_mul(XP_PER_WORKOUT);
    xp = xp.saturating_add(u64::from(stats.calories_logged / 100));
    xp = xp.saturating_add(floor_non_negative(stats.water_liters * 10.0));
    xp = xp.saturating_add(floor_non_negative(stats.sleep_hours * 20.0));
    xp = xp.saturating_add(u64::from(stats.streak).saturating_mul(XP_PER_STREAK_DAY));
    if stats.weight > 0.0 {
        xp = xp.saturating_add(XP_WEIGHT_BONUS);
    }
    xp
}

fn floor_non_negative(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 {
        v.floor() as u64
    } else {
        0
    }
}

/// Highest level whose threshold has been reached.
pub fn level_for(xp: u64) -> &'static Level {
    LEVELS
        .iter()
        .rev()
        .find(|l| xp >= l.xp_required)
        .unwrap_or(&LEVELS[0])
}

/// The level after `rank`, or `None` past the top of the table.
pub fn next_level(rank: u32) -> Option<&'static Level> {
    LEVELS.get(rank as usize)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LevelProgress {
    pub xp_into_level: u64,
    pub xp_span_of_level: u64,
    pub percentage: f64,
}

/// Progress through the current level. At the top rank the span is the xp
/// itself and the bar is full.
pub fn progress(xp: u64) -> LevelProgress {
    let current = level_for(xp);
    let Some(next) = next_level(current.rank) else {
        return LevelProgress {
            xp_into_level: xp,
            xp_span_of_level: xp,
            percentage: 100.0,
        };
    };

    let into = xp - current.xp_required;
    let span = next.xp_required - current.xp_required;
    let percentage = (into as f64 / span as f64 * 100.0).clamp(0.0, 100.0);
    LevelProgress {
        xp_into_level: into,
        xp_span_of_level: span,
        percentage,
    }
}
