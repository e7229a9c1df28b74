use std::collections::HashSet;

use chrono::{Local, NaiveDate, TimeZone};

use crate::models::{ActivityCategory, ActivityEntry};

/// Number of distinct local calendar days with at least one activity.
///
/// Days need not be consecutive: a gap does not reset the count.
pub fn compute_streak(log: &[ActivityEntry]) -> u32 {
    compute_streak_in(log, &Local)
}

/// [`compute_streak`] with an explicit time zone for the calendar-day cut.
pub fn compute_streak_in<Tz: TimeZone>(log: &[ActivityEntry], tz: &Tz) -> u32 {
    let days: HashSet<NaiveDate> = log
        .iter()
        .map(|e| e.occurred_at.with_timezone(tz).date_naive())
        .collect();
    days.len() as u32
}

/// Whether any workout activity falls on the day before `today`.
pub fn worked_out_on_day_before<Tz: TimeZone>(
    log: &[ActivityEntry],
    today: NaiveDate,
    tz: &Tz,
) -> bool {
    let Some(yesterday) = today.pred_opt() else {
        return false;
    };
    log.iter().any(|e| {
        e.category == ActivityCategory::Workout
            && e.occurred_at.with_timezone(tz).date_naive() == yesterday
    })
}
