//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "countdown")]
#[command(about = "Birthday and event countdowns from a CSV of dates", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// CSV data file (columns: name,date[,location])
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Fetch the CSV feed from a URL instead of a local file
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) url: Option<String>,

    /// Reference date for countdowns (YYYYMMDD or YYYY-MM-DD, default today)
    #[arg(short, long, global = true, value_name = "DATE")]
    pub(crate) date: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Render the upcoming list as a table
    #[arg(short, long, global = true)]
    pub(crate) table: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.table && config.table {
            self.table = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(ref color) = config.color
            && self.color == ColorMode::Auto
        {
            match color.to_lowercase().as_str() {
                "always" => self.color = ColorMode::Always,
                "never" => self.color = ColorMode::Never,
                _ => {}
            }
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["countdown"])
    }

    #[test]
    fn config_table_applies_when_cli_unset() {
        let config = Config {
            table: true,
            ..Config::default()
        };
        let cli = bare_cli().with_config(&config);
        assert!(cli.table);
    }

    #[test]
    fn config_color_never_disables_color() {
        let config = Config {
            color: Some("never".to_string()),
            ..Config::default()
        };
        let cli = bare_cli().with_config(&config);
        assert!(!cli.use_color());
    }

    #[test]
    fn cli_color_wins_over_config() {
        let config = Config {
            color: Some("never".to_string()),
            ..Config::default()
        };
        let cli = Cli::parse_from(["countdown", "--color", "always"]).with_config(&config);
        assert!(cli.use_color());
    }

    #[test]
    fn no_color_flag_overrides_always() {
        let cli = Cli::parse_from(["countdown", "--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }
}
