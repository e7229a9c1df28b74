use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::core::session::{Phase, SessionView};
use crate::core::status::DashboardStatus;
use crate::models::ActivityEntry;
use crate::models::achievement::Achievement;
use crate::models::coach::Suggestion;
use crate::models::level::Level;
use crate::models::plan::{Plan, WorkoutStep};

/// `m:ss`, as shown on the workout timer.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Level title painted in the level's color token.
pub fn level_badge(level: &Level) -> ColoredString {
    let label = format!("Lv.{} {}", level.rank, level.title);
    match hex_rgb(level.color) {
        Some((r, g, b)) => label.truecolor(r, g, b).bold(),
        None => label.bold(),
    }
}

fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn format_activity(a: &ActivityEntry) -> String {
    let ts = a
        .occurred_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M");
    format!("{} | {:<9} | {}", ts, a.category, a.description)
}

/// Pretty-print the dashboard.
pub fn format_status(s: &DashboardStatus) -> String {
    let m = &s.metrics;
    let mut out = format!("=== TitanX Dashboard | {} ===\n", s.date);
    out.push_str(&format!("{}\n\"{}\"\n\n", s.greeting, s.quote));

    out.push_str(&format!(
        "{} | {} XP | {}-day streak\n",
        level_badge(s.level),
        s.xp,
        s.streak
    ));
    match s.next_level {
        Some(next) => out.push_str(&format!(
            "{} {:.0}% ({}/{} XP to {})\n",
            progress_bar(s.progress.percentage, 20),
            s.progress.percentage,
            s.progress.xp_into_level,
            s.progress.xp_span_of_level,
            next.title
        )),
        None => out.push_str(&format!("{} MAX LEVEL\n", progress_bar(100.0, 20))),
    }

    out.push('\n');
    if m.weight > 0.0 {
        out.push_str(&format!("Weight:   {} lbs\n", m.weight));
    }
    for g in &s.goals {
        out.push_str(&format!(
            "{:<9} {} / {} ({:.0}%)\n",
            format!("{}:", capitalize(g.name)),
            g.current,
            g.target,
            g.percentage
        ));
    }

    out.push_str(&format!(
        "\nAchievements: {}/{} unlocked",
        s.unlocked,
        s.achievements.len()
    ));
    for a in s.achievements.iter().filter(|a| a.unlocked) {
        out.push_str(&format!("\n  {} {}", a.icon, a.title));
    }

    if !m.activities.is_empty() {
        out.push_str("\n\nRecent activity:");
        for a in &m.activities {
            out.push_str(&format!("\n  {}", format_activity(a)));
        }
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn format_achievements(achievements: &[Achievement]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["", "Achievement", "Description", "Status"]);
    for a in achievements {
        table.add_row(vec![
            a.icon.to_string(),
            a.title.to_string(),
            a.description.to_string(),
            if a.unlocked { "unlocked" } else { "locked" }.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_levels(levels: &[Level], current_rank: u32) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["", "Rank", "Title", "XP", "Rewards"]);
    for l in levels {
        table.add_row(vec![
            if l.rank == current_rank { ">" } else { "" }.to_string(),
            l.rank.to_string(),
            l.title.to_string(),
            l.xp_required.to_string(),
            l.rewards.join(", "),
        ]);
    }
    table.to_string()
}

pub fn format_suggestion(s: &Suggestion) -> String {
    format!(
        "[{}] {}\nSuggested: {}",
        s.category.to_string().bold(),
        s.message,
        s.action
    )
}

fn step_summary(step: &WorkoutStep) -> String {
    let mut parts = Vec::new();
    if let Some(sets) = step.set_count {
        parts.push(format!("{} sets", sets));
    }
    match (step.duration_seconds, step.rep_range) {
        (Some(d), _) => parts.push(format_time(d)),
        (None, Some(reps)) => parts.push(format!("{} reps", reps)),
        (None, None) => {}
    }
    if let Some(rest) = step.rest_seconds {
        parts.push(format!("rest {}s", rest));
    }
    parts.join(", ")
}

pub fn format_plan(plan: &Plan) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["#", "Step", "Kind", "Prescription", "Cues"]);
    for (i, step) in plan.steps.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            step.title.to_string(),
            step.kind.to_string(),
            step_summary(step),
            step.cues.join("; "),
        ]);
    }
    format!("{}\n{}", plan.name.bold(), table)
}

/// One screen of the workout player.
pub fn format_session_view(v: &SessionView) -> String {
    match v.phase {
        Phase::Complete => format!("{}\nWORKOUT UNLOCKED", "✔".green().bold()),
        Phase::Rest => {
            let remaining = v.remaining_seconds.unwrap_or(0);
            format!(
                "Systems Regenerating  {}\nUp next: {}\n[Enter] skip rest  [q] quit",
                format_time(remaining).cyan().bold(),
                v.up_next.as_deref().unwrap_or("Cooldown")
            )
        }
        Phase::Preview | Phase::Active => {
            let Some(step) = v.step else {
                return String::new();
            };
            let mut out = format!(
                "[{}/{}] {} ({})\n",
                v.step_index + 1,
                v.total_steps,
                step.title.bold(),
                step.kind
            );
            if let Some(sets) = step.set_count {
                out.push_str(&format!("Set {}/{}  ", v.set_number, sets));
            }
            match (step.duration_seconds, v.remaining_seconds) {
                (Some(_), Some(left)) => {
                    let state = if v.timer_running { "" } else { " (paused)" };
                    out.push_str(&format!("{}{}", format_time(left), state));
                }
                (Some(d), None) => out.push_str(&format_time(d)),
                (None, _) => out.push_str(&format!("{} reps", step.rep_range.unwrap_or("?"))),
            }
            for cue in step.cues {
                out.push_str(&format!("\n  - {}", cue));
            }
            let keys = if v.phase == Phase::Preview {
                "[Enter] start  [q] quit"
            } else if step.is_duration_based() {
                "[Enter] done  [p] pause/resume  [q] quit"
            } else {
                "[Enter] done  [q] quit"
            };
            out.push_str(&format!("\n{}", keys));
            out
        }
    }
}
