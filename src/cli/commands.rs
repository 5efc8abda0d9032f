//! CLI subcommand definitions
//!
//! Birthday commands live at the top level; event commands are nested
//! under `events`. Both normalize to the same `Action`.

use clap::Subcommand;

use crate::consts::MAX_COUNT;
use crate::core::Mode;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the closest upcoming birthdays (default)
    Upcoming {
        /// Number of entries to list (1-20)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT as i64))]
        count: Option<u32>,
    },
    /// Look up one person's birthday by name
    Show {
        /// Exact name as it appears in the data file
        name: String,
    },
    /// Event countdowns
    Events {
        #[command(subcommand)]
        command: Option<EventCommands>,
    },
}

/// Event-specific subcommands
#[derive(Subcommand)]
pub(crate) enum EventCommands {
    /// List the closest upcoming events (default)
    Upcoming {
        /// Number of entries to list (1-20)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT as i64))]
        count: Option<u32>,
    },
    /// Look up one event by name
    Show {
        /// Exact name as it appears in the data file
        name: String,
    },
}

/// Normalized request that works for both modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Upcoming { count: Option<u32> },
    Show { name: String },
}

/// Parse CLI command into (`Mode`, `Action`)
pub(crate) fn parse_command(cmd: &Option<Commands>) -> (Mode, Action) {
    match cmd {
        Some(Commands::Upcoming { count }) => (Mode::Birthday, Action::Upcoming { count: *count }),
        Some(Commands::Show { name }) => (Mode::Birthday, Action::Show { name: name.clone() }),
        Some(Commands::Events { command }) => (Mode::Event, Action::from(command)),
        None => (Mode::Birthday, Action::Upcoming { count: None }),
    }
}

impl From<&Option<EventCommands>> for Action {
    fn from(cmd: &Option<EventCommands>) -> Self {
        match cmd {
            Some(EventCommands::Upcoming { count }) => Action::Upcoming { count: *count },
            Some(EventCommands::Show { name }) => Action::Show { name: name.clone() },
            None => Action::Upcoming { count: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_defaults_to_birthday_upcoming() {
        let (mode, action) = parse_command(&None);
        assert_eq!(mode, Mode::Birthday);
        assert_eq!(action, Action::Upcoming { count: None });
    }

    #[test]
    fn events_without_subcommand_defaults_to_upcoming() {
        let (mode, action) = parse_command(&Some(Commands::Events { command: None }));
        assert_eq!(mode, Mode::Event);
        assert_eq!(action, Action::Upcoming { count: None });
    }

    #[test]
    fn events_show_carries_the_name() {
        let cmd = Commands::Events {
            command: Some(EventCommands::Show {
                name: "Launch".to_string(),
            }),
        };
        let (mode, action) = parse_command(&Some(cmd));
        assert_eq!(mode, Mode::Event);
        assert_eq!(
            action,
            Action::Show {
                name: "Launch".to_string()
            }
        );
    }

    #[test]
    fn upcoming_count_is_passed_through() {
        let (_, action) = parse_command(&Some(Commands::Upcoming { count: Some(3) }));
        assert_eq!(action, Action::Upcoming { count: Some(3) });
    }
}
