mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, GoalAction, WorkoutAction};
use std::process;
use tracing_subscriber::EnvFilter;

use titanx::output;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TITANX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let (name, result) = match cli.command {
        Commands::Init { name } => ("init", cmd::init::run(name.as_deref())),
        Commands::Log { kind, value } => (
            "log",
            cmd::log::run(&kind, value.as_deref(), cli.date, cli.human),
        ),
        Commands::Status => ("status", cmd::status::run(cli.human)),
        Commands::Achievements => ("achievements", cmd::status::run_achievements(cli.human)),
        Commands::Level => ("level", cmd::status::run_level(cli.human)),
        Commands::Suggest {
            energy,
            sleep,
            time,
            yesterday,
            streak,
            seed,
        } => (
            "suggest",
            cmd::suggest::run(
                cmd::suggest::SuggestArgs {
                    energy: energy.as_deref(),
                    sleep: sleep.as_deref(),
                    time: time.as_deref(),
                    yesterday,
                    streak,
                    seed,
                },
                cli.date,
                cli.human,
            ),
        ),
        Commands::Workout { action } => match action {
            WorkoutAction::Plan => ("workout", cmd::workout::run_plan(cli.human)),
            WorkoutAction::Run { no_record } => {
                ("workout", cmd::workout::run_session(!no_record, cli.human))
            }
        },
        Commands::Goal { action } => match action {
            GoalAction::Show => ("goal", cmd::goal::run_show(cli.human)),
            GoalAction::Set { kind, value } => ("goal", cmd::goal::run_set(&kind, &value, cli.human)),
        },
        Commands::Export { output, stdout } => (
            "export",
            cmd::export::run(output.as_deref(), stdout, cli.date, cli.human),
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show => ("config", cmd::config::run_show(cli.human)),
            ConfigAction::Set { key, value } => ("config", cmd::config::run_set(&key, &value)),
        },
        Commands::Completions { shell } => ("completions", cmd::completions::run(shell)),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let err = output::error(name, "general_error", &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
