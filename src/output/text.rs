//! Plain-text rendering: one-line summaries and lookup sentences

use chrono::NaiveDate;

use crate::core::{Mode, RankedEntry};

/// Long-form date, e.g. "March 04, 1990"
pub(crate) fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

fn location_of(entry: &RankedEntry) -> &str {
    entry.location.as_deref().unwrap_or("location TBD")
}

/// One-line summary for the upcoming list
pub(crate) fn ranked_line(entry: &RankedEntry, mode: Mode) -> String {
    let fmt_date = format_long_date(entry.date);
    match mode {
        Mode::Birthday => format!(
            "{} will be {} years old in {} days ({}).",
            entry.name,
            entry.age.unwrap_or_default(),
            entry.days_remaining,
            fmt_date
        ),
        Mode::Event => format!(
            "{} will be in {} days at {} ({}).",
            entry.name,
            entry.days_remaining,
            location_of(entry),
            fmt_date
        ),
    }
}

pub(crate) fn ranked_lines(entries: &[RankedEntry], mode: Mode) -> String {
    entries
        .iter()
        .map(|entry| ranked_line(entry, mode))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lookup sentence, classified by the sign of the day offset
pub(crate) fn lookup_message(entry: &RankedEntry, mode: Mode) -> String {
    match mode {
        Mode::Birthday => birthday_message(entry),
        Mode::Event => event_message(entry),
    }
}

fn birthday_message(entry: &RankedEntry) -> String {
    let days = entry.days_remaining;
    let mut message = format!(
        "There are {} days remaining until {}'s birthday. {} was born on {} and will be {} years old this year.",
        days,
        entry.name,
        entry.name,
        format_long_date(entry.date),
        entry.age.unwrap_or_default()
    );
    if days == 0 {
        message = format!("Happy birthday to {}! {}", entry.name, message);
    }
    if days < 0 {
        message = format!("Happy belated birthday to {}! {}", entry.name, message);
    }
    message
}

fn event_message(entry: &RankedEntry) -> String {
    let days = entry.days_remaining;
    let fmt_date = format_long_date(entry.date);
    let location = location_of(entry);
    if days == 0 {
        format!("{} is today at {}!", entry.name, location)
    } else if days < 0 {
        format!(
            "{} already passed! {} was on {} at {}.",
            entry.name, entry.name, fmt_date, location
        )
    } else {
        format!(
            "There are {} days remaining until {}. {} is on {} at {}.",
            days, entry.name, entry.name, fmt_date, location
        )
    }
}
