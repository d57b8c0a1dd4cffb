use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scaffold-audit")]
#[command(author, version, about = "Build, validate and audit a project scaffold")]
#[command(long_about = "Checks directory structure, required files, dependency declarations, \
    YAML syntax, Python syntax and script permissions, then writes audit_report.txt and \
    audit_report.json to the project root.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - One or more checks failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Project root to audit
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file (default: <ROOT>/.scaffold-audit.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Do not run external validators (docker compose)
    #[arg(long)]
    pub no_external: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Default `tracing` filter for the chosen verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
