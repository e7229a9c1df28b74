use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Level {
    pub rank: u32,
    pub title: &'static str,
    pub xp_required: u64,
    pub rewards: &'static [&'static str],
    pub color: &'static str,
}

/// Ordered by rank; `xp_required` is strictly increasing and rank 1 starts at 0.
pub const LEVELS: [Level; 10] = [
    Level {
        rank: 1,
        title: "Novice",
        xp_required: 0,
        rewards: &["Dashboard Access"],
        color: "#808080",
    },
    Level {
        rank: 2,
        title: "Apprentice",
        xp_required: 100,
        rewards: &["Basic Trackers"],
        color: "#a0a0a0",
    },
    Level {
        rank: 3,
        title: "Warrior",
        xp_required: 250,
        rewards: &["AI Coach Unlocked"],
        color: "#00a8ff",
    },
    Level {
        rank: 4,
        title: "Guardian",
        xp_required: 500,
        rewards: &["Advanced Stats"],
        color: "#00d9ff",
    },
    Level {
        rank: 5,
        title: "Champion",
        xp_required: 1000,
        rewards: &["Premium Workouts"],
        color: "#00f0ff",
    },
    Level {
        rank: 6,
        title: "Elite",
        xp_required: 2000,
        rewards: &["Custom Meal Plans"],
        color: "#ff9d00",
    },
    Level {
        rank: 7,
        title: "Master",
        xp_required: 4000,
        rewards: &["Progress Analytics"],
        color: "#ffd700",
    },
    Level {
        rank: 8,
        title: "Legend",
        xp_required: 7000,
        rewards: &["Exclusive Badges"],
        color: "#ff6400",
    },
    Level {
        rank: 9,
        title: "Titan",
        xp_required: 12000,
        rewards: &["Titan Status"],
        color: "#7000ff",
    },
    Level {
        rank: 10,
        title: "God Mode",
        xp_required: 20000,
        rewards: &["Ultimate Power"],
        color: "#ff00ff",
    },
];
