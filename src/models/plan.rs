use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Warmup,
    Exercise,
    Cooldown,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warmup => write!(f, "warmup"),
            Self::Exercise => write!(f, "exercise"),
            Self::Cooldown => write!(f, "cooldown"),
        }
    }
}

/// Presentation hint only; the session never looks at it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisualStyle {
    Stretch,
    Push,
    Pull,
    Legs,
    Cardio,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutStep {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: StepKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_range: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    pub cues: &'static [&'static str],
    pub visual: VisualStyle,
}

impl WorkoutStep {
    pub fn is_duration_based(&self) -> bool {
        self.duration_seconds.is_some()
    }

    /// Sets to perform; a step without sets runs once.
    pub fn total_sets(&self) -> u32 {
        self.set_count.unwrap_or(1).max(1)
    }

    fn is_well_formed(&self) -> bool {
        let timed_or_counted = self.duration_seconds.is_some() || self.rep_range.is_some();
        timed_or_counted && self.set_count != Some(0)
    }
}

/// An immutable ordered sequence of steps.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub steps: &'static [WorkoutStep],
}

impl Plan {
    pub fn standard() -> Self {
        Self {
            name: "Titan Foundations",
            steps: &STANDARD_STEPS,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static WorkoutStep> {
        self.steps.get(index)
    }

    /// Every step is either timed or has a rep range, and no step has zero sets.
    pub fn validate(&self) -> anyhow::Result<()> {
        for step in self.steps {
            if !step.is_well_formed() {
                anyhow::bail!(
                    "step '{}' needs a duration or a rep range and at least one set",
                    step.id
                );
            }
        }
        Ok(())
    }
}

static STANDARD_STEPS: [WorkoutStep; 8] = [
    WorkoutStep {
        id: "w1",
        title: "Neck Rotations",
        kind: StepKind::Warmup,
        duration_seconds: Some(30),
        rep_range: None,
        set_count: None,
        rest_seconds: None,
        cues: &["Slow, controlled circles", "Breathing deep"],
        visual: VisualStyle::Stretch,
    },
    WorkoutStep {
        id: "w2",
        title: "Arm Circles",
        kind: StepKind::Warmup,
        duration_seconds: Some(45),
        rep_range: None,
        set_count: None,
        rest_seconds: None,
        cues: &["Start small, get bigger", "Keep shoulders down"],
        visual: VisualStyle::Stretch,
    },
    WorkoutStep {
        id: "w3",
        title: "Hip Openers",
        kind: StepKind::Warmup,
        duration_seconds: Some(60),
        rep_range: None,
        set_count: None,
        rest_seconds: None,
        cues: &["Lift knee high", "Rotate outward"],
        visual: VisualStyle::Legs,
    },
    WorkoutStep {
        id: "e1",
        title: "Push-Ups",
        kind: StepKind::Exercise,
        duration_seconds: None,
        rep_range: Some("12-15"),
        set_count: Some(3),
        rest_seconds: Some(60),
        cues: &["Core tight", "Chest to floor", "Elbows at 45 degrees"],
        visual: VisualStyle::Push,
    },
    WorkoutStep {
        id: "e2",
        title: "Squats",
        kind: StepKind::Exercise,
        duration_seconds: None,
        rep_range: Some("15-20"),
        set_count: Some(3),
        rest_seconds: Some(60),
        cues: &["Knees out", "Chest up", "Weight on heels"],
        visual: VisualStyle::Legs,
    },
    WorkoutStep {
        id: "e3",
        title: "Plank Hold",
        kind: StepKind::Exercise,
        duration_seconds: Some(45),
        rep_range: None,
        set_count: Some(3),
        rest_seconds: Some(45),
        cues: &["Straight line", "Squeeze glutes", "Push floor away"],
        visual: VisualStyle::Stretch,
    },
    WorkoutStep {
        id: "c1",
        title: "Child's Pose",
        kind: StepKind::Cooldown,
        duration_seconds: Some(60),
        rep_range: None,
        set_count: None,
        rest_seconds: None,
        cues: &["Reach arms forward", "Sink hips back"],
        visual: VisualStyle::Stretch,
    },
    WorkoutStep {
        id: "c2",
        title: "Deep Breathing",
        kind: StepKind::Cooldown,
        duration_seconds: Some(60),
        rep_range: None,
        set_count: None,
        rest_seconds: None,
        cues: &["Inhale 4s", "Hold 4s", "Exhale 4s"],
        visual: VisualStyle::Cardio,
    },
];
