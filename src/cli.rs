use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "titanx",
    version,
    about = "Gamified fitness tracker: metrics, levels, achievements and guided workouts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config and data directory
    Init {
        /// Display name shown on the dashboard
        #[arg(long)]
        name: Option<String>,
    },

    /// Log a metric (weight, calories, sleep, water, workout)
    Log {
        /// Metric kind or alias
        kind: String,

        /// Value; glasses for water and sessions for workout default to 1
        value: Option<String>,
    },

    /// Dashboard overview: level, streak, goals, achievements
    Status,

    /// List every achievement and whether it is unlocked
    Achievements,

    /// Show the level table and current progress
    Level,

    /// Ask the coach what to do today
    Suggest {
        /// Energy level (low/mid/high)
        #[arg(long)]
        energy: Option<String>,

        /// Sleep quality (bad/ok/good); derived from logged sleep when omitted
        #[arg(long)]
        sleep: Option<String>,

        /// Minutes available (5/10/20/30/45/60)
        #[arg(long)]
        time: Option<String>,

        /// Whether you worked out yesterday; derived from activity when omitted
        #[arg(long)]
        yesterday: Option<bool>,

        /// Streak override; computed from activity when omitted
        #[arg(long)]
        streak: Option<u32>,

        /// Seed the message choice for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Guided workout
    Workout {
        #[command(subcommand)]
        action: WorkoutAction,
    },

    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Export the dashboard snapshot as JSON
    Export {
        /// Output path (default: titanx-backup-YYYY-MM-DD.json)
        #[arg(long, short)]
        output: Option<String>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Show the workout plan
    Plan,
    /// Run the guided workout in the terminal
    Run {
        /// Do not record the workout when it completes
        #[arg(long)]
        no_record: bool,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Show goals and progress
    Show,
    /// Set a goal (calories, water, sleep, workouts)
    Set { kind: String, value: String },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. profile.display_name, coach.energy, workout.default_set_rest)
        key: String,
        /// Config value
        value: String,
    },
}
