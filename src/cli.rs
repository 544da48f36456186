use crate::theme::Theme;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gradecalc",
    version,
    about = "Weighted module and overall grade average calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Working directory holding gradecalc.toml and the saved inputs
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Neither read nor write saved inputs and preferences
    #[arg(long, global = true)]
    pub no_store: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute grades from the given fields only, without saved inputs
    Compute(ComputeCommand),
    /// Edit saved inputs and print the recomputed grades
    Set(SetCommand),
    /// Print grades for the saved inputs
    Show(ShowCommand),
    /// Clear all saved inputs
    Reset(ShowCommand),
    /// Show or change the display theme
    Theme(ThemeCommand),
    /// Read FIELD=VALUE edits from stdin, recomputing after each one
    Session,
}

#[derive(Args)]
pub struct ComputeCommand {
    /// Field assignment such as tql-controle=15
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub assignments: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct SetCommand {
    /// Field assignments such as tql-controle=15 (an empty value clears)
    #[arg(required = true, value_name = "FIELD=VALUE")]
    pub assignments: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ShowCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ThemeCommand {
    #[arg(value_enum)]
    pub action: Option<ThemeAction>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl ThemeAction {
    pub fn apply(self, current: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::Toggle => current.toggle(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
