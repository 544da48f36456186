mod cli;
mod config;
mod dispatch;
mod error;
mod grading;
mod report;
mod session;
mod store;
mod theme;
mod types;

use crate::error::GradeError;
use crate::grading::roster::Roster;
use crate::grading::Computation;
use crate::session::{parse_assignment, Session};
use crate::store::autosave::Autosave;
use crate::store::persistence::Persistence;
use crate::store::FileStore;
use crate::types::config::{GradeConfig, OutputFormatSetting};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) | (false, 0) => "error",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_persistence(cli: &cli::Cli, cfg: &GradeConfig) -> Persistence {
    if cli.no_store || !cfg.storage.enabled {
        tracing::info!("storage disabled");
        return Persistence::disabled();
    }
    let store = FileStore::new(config::store_path(&cli.dir, cfg));
    tracing::debug!(path = %store.path().display(), "using file store");
    Persistence::new(Box::new(store))
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: &GradeConfig) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match cfg.output.format {
            OutputFormatSetting::Json => report::OutputFormat::Json,
            OutputFormatSetting::Md => report::OutputFormat::Md,
        },
    }
}

fn parse_assignments(raw: &[String]) -> Result<Vec<(String, String)>, GradeError> {
    raw.iter().map(|text| parse_assignment(text)).collect()
}

fn print_report(
    computation: &Computation,
    persistence: &Persistence,
    format: report::OutputFormat,
) -> Result<i32, GradeError> {
    let rendered = report::render(computation, persistence.load_theme(), format)?;
    println!("{rendered}");
    if computation.has_invalid() {
        Ok(exit_code::INVALID_INPUT)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run() -> Result<i32, GradeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cfg = config::load_config(&cli.dir)?;
    let mut persistence = open_persistence(&cli, &cfg);
    let roster = Roster::default();

    match &cli.command {
        cli::Commands::Compute(cmd) => {
            let edits = parse_assignments(&cmd.assignments)?;
            let mut session = Session::new(roster);
            session.apply_edits(&edits)?;
            print_report(
                session.computation(),
                &persistence,
                output_format(cmd.format, &cfg),
            )
        }
        cli::Commands::Set(cmd) => {
            let edits = parse_assignments(&cmd.assignments)?;
            let restored = persistence.restore_inputs(&roster);
            let mut session = Session::with_inputs(roster, restored);
            session.apply_edits(&edits)?;
            persistence.save_inputs(session.inputs());
            print_report(
                session.computation(),
                &persistence,
                output_format(cmd.format, &cfg),
            )
        }
        cli::Commands::Show(cmd) => {
            let restored = persistence.restore_inputs(&roster);
            let session = Session::with_inputs(roster, restored);
            print_report(
                session.computation(),
                &persistence,
                output_format(cmd.format, &cfg),
            )
        }
        cli::Commands::Reset(cmd) => {
            persistence.clear_inputs();
            let session = Session::new(roster);
            tracing::info!("saved inputs cleared");
            print_report(
                session.computation(),
                &persistence,
                output_format(cmd.format, &cfg),
            )
        }
        cli::Commands::Theme(cmd) => {
            let current = persistence.load_theme();
            let theme = match cmd.action {
                Some(action) => {
                    let next = action.apply(current);
                    persistence.save_theme(next);
                    next
                }
                None => current,
            };
            println!("theme: {theme}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Session => {
            let restored = persistence.restore_inputs(&roster);
            let mut session = Session::with_inputs(roster, restored);
            let mut autosave =
                Autosave::new(Duration::from_millis(cfg.storage.autosave_delay_ms));
            let stdin = std::io::BufReader::new(std::io::stdin());
            let mut stdout = std::io::stdout();
            dispatch::run_session(
                stdin,
                &mut stdout,
                &mut session,
                &mut persistence,
                &mut autosave,
            )?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
