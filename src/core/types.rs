//! Core data types for the countdown calculator
//!
//! Records are loaded once per invocation and treated as read-only;
//! ranked entries are derived per request and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether dates recur yearly (birthdays) or happen once (events)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Birthday,
    Event,
}

impl Mode {
    /// Recurring dates roll forward to the next yearly occurrence
    pub(crate) fn is_recurring(self) -> bool {
        matches!(self, Mode::Birthday)
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            Mode::Birthday => "birthday",
            Mode::Event => "event",
        }
    }
}

/// One row of the loaded data set; `name` is the unique key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Record {
    pub(crate) name: String,
    pub(crate) date: NaiveDate,
    pub(crate) location: Option<String>,
}

/// Countdown entry derived from a record relative to a reference date
#[derive(Debug, Clone)]
pub(crate) struct RankedEntry {
    pub(crate) name: String,
    /// The record's original date (birth date or event date)
    pub(crate) date: NaiveDate,
    /// Date the day offset was computed against, after any year rollover
    pub(crate) effective_date: NaiveDate,
    pub(crate) days_remaining: i64,
    /// Age at the next occurrence; birthdays only
    pub(crate) age: Option<i32>,
    pub(crate) location: Option<String>,
}
