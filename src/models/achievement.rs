use serde::Serialize;

/// Quantities an achievement criterion can look at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AchievementStats {
    pub workout_count: u32,
    pub weight: f64,
    pub calories_logged: u32,
    pub water_liters: f64,
    pub sleep_hours: f64,
    pub streak: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// Static catalog entry: display fields plus the unlock predicate.
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub criterion: fn(&AchievementStats) -> bool,
}

impl AchievementDef {
    pub fn evaluate(&self, stats: &AchievementStats) -> Achievement {
        Achievement {
            id: self.id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            unlocked: (self.criterion)(stats),
        }
    }
}

pub const CATALOG: [AchievementDef; 8] = [
    AchievementDef {
        id: "first_workout",
        title: "First Steps",
        description: "Complete your first workout",
        icon: "🎯",
        criterion: |s| s.workout_count >= 1,
    },
    AchievementDef {
        id: "week_warrior",
        title: "Week Warrior",
        description: "Complete 5 workouts in a week",
        icon: "💪",
        criterion: |s| s.workout_count >= 5,
    },
    AchievementDef {
        id: "hydration_hero",
        title: "Hydration Hero",
        description: "Reach 3L of water in a day",
        icon: "💧",
        criterion: |s| s.water_liters >= 3.0,
    },
    AchievementDef {
        id: "calorie_champion",
        title: "Calorie Champion",
        description: "Log 2500+ calories",
        icon: "🔥",
        criterion: |s| s.calories_logged >= 2500,
    },
    AchievementDef {
        id: "sleep_master",
        title: "Sleep Master",
        description: "Log 8+ hours of sleep",
        icon: "😴",
        criterion: |s| s.sleep_hours >= 8.0,
    },
    AchievementDef {
        id: "streak_3",
        title: "3-Day Streak",
        description: "Maintain a 3-day activity streak",
        icon: "⚡",
        criterion: |s| s.streak >= 3,
    },
    AchievementDef {
        id: "streak_7",
        title: "Week Dominator",
        description: "Achieve a 7-day streak",
        icon: "🏆",
        criterion: |s| s.streak >= 7,
    },
    AchievementDef {
        id: "titan_status",
        title: "Titan Status",
        description: "Complete 20 total workouts",
        icon: "👑",
        criterion: |s| s.workout_count >= 20,
    },
];
