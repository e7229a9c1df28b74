use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of activities kept in the snapshot, newest first.
pub const ACTIVITY_CAP: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Workout,
    Nutrition,
    Sleep,
    Water,
}

impl ActivityCategory {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "workout" => Some(Self::Workout),
            "nutrition" => Some(Self::Nutrition),
            "sleep" => Some(Self::Sleep),
            "water" => Some(Self::Water),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Workout => write!(f, "workout"),
            Self::Nutrition => write!(f, "nutrition"),
            Self::Sleep => write!(f, "sleep"),
            Self::Water => write!(f, "water"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    /// Creation time in milliseconds since the epoch; unique per entry.
    pub id: i64,
    #[serde(rename = "name")]
    pub description: String,
    #[serde(rename = "timestamp")]
    pub occurred_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub category: ActivityCategory,
}

impl ActivityEntry {
    pub fn new(description: impl Into<String>, category: ActivityCategory) -> Self {
        Self::at(description, category, Utc::now())
    }

    pub fn at(
        description: impl Into<String>,
        category: ActivityCategory,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: occurred_at.timestamp_millis(),
            description: description.into(),
            occurred_at,
            category,
        }
    }

    /// Lenient decode of one stored entry. A missing or unparsable timestamp falls
    /// back to the id, which is the creation time.
    fn from_value(v: &Value) -> Option<Self> {
        let id = v["id"].as_i64()?;
        let category = v["type"].as_str().and_then(ActivityCategory::parse)?;
        let occurred_at = v["timestamp"]
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|| Utc.timestamp_millis_opt(id).single())?;
        Some(Self {
            id,
            description: v["name"].as_str().unwrap_or_default().to_string(),
            occurred_at,
            category,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goals {
    pub calories: f64,
    #[serde(rename = "water")]
    pub water_liters: f64,
    #[serde(rename = "sleep")]
    pub sleep_hours: f64,
    #[serde(rename = "workouts")]
    pub workouts_per_week: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: 2500.0,
            water_liters: 3.5,
            sleep_hours: 8.0,
            workouts_per_week: 5.0,
        }
    }
}

impl Goals {
    fn from_value(v: &Value) -> Self {
        let d = Self::default();
        Self {
            calories: positive(&v["calories"]).unwrap_or(d.calories),
            water_liters: positive(&v["water"]).unwrap_or(d.water_liters),
            sleep_hours: positive(&v["sleep"]).unwrap_or(d.sleep_hours),
            workouts_per_week: positive(&v["workouts"]).unwrap_or(d.workouts_per_week),
        }
    }
}

/// Full state of a user's tracked metrics. Field names on the wire match the
/// dashboard's stored blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub weight: f64,
    #[serde(rename = "calories")]
    pub calories_logged: u32,
    #[serde(rename = "water")]
    pub water_liters: f64,
    #[serde(rename = "sleep")]
    pub sleep_hours: f64,
    #[serde(rename = "workouts")]
    pub workout_count: u32,
    pub activities: Vec<ActivityEntry>,
    pub goals: Goals,
    #[serde(rename = "userName")]
    pub display_name: String,
}

impl Snapshot {
    /// Decode a stored blob. Never fails: anything missing, negative or of the
    /// wrong type falls back to its default.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(v) if v.is_object() => Self::from_value(&v),
            Ok(_) => {
                tracing::warn!("stored snapshot is not an object, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored snapshot is not valid JSON, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_value(v: &Value) -> Self {
        let mut activities: Vec<ActivityEntry> = v["activities"]
            .as_array()
            .map(|items| items.iter().filter_map(ActivityEntry::from_value).collect())
            .unwrap_or_default();
        activities.truncate(ACTIVITY_CAP);

        Self {
            weight: non_negative(&v["weight"]).unwrap_or(0.0),
            calories_logged: count(&v["calories"]),
            water_liters: non_negative(&v["water"]).unwrap_or(0.0),
            sleep_hours: non_negative(&v["sleep"]).unwrap_or(0.0),
            workout_count: count(&v["workouts"]),
            activities,
            goals: Goals::from_value(&v["goals"]),
            display_name: v["userName"].as_str().unwrap_or_default().to_string(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Insert an activity in newest-first order by time, keeping only the newest
    /// entries. Ties go in front of existing entries.
    pub fn push_activity(&mut self, entry: ActivityEntry) {
        let at = self
            .activities
            .iter()
            .position(|a| a.occurred_at <= entry.occurred_at)
            .unwrap_or(self.activities.len());
        self.activities.insert(at, entry);
        self.activities.truncate(ACTIVITY_CAP);
    }
}

fn non_negative(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite() && *n >= 0.0)
}

fn positive(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite() && *n > 0.0)
}

fn count(v: &Value) -> u32 {
    if let Some(n) = v.as_u64() {
        return u32::try_from(n).unwrap_or(u32::MAX);
    }
    // Older blobs may carry fractional counts.
    non_negative(v).map(|n| n.floor() as u32).unwrap_or(0)
}
