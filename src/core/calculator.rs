//! Countdown computation: day offsets, year rollover, age, ranking

use chrono::{Datelike, NaiveDate};

use crate::core::types::{Mode, RankedEntry, Record};
use crate::error::AppError;

/// Stateless calculator over an immutable record set
pub(crate) struct Calculator {
    records: Vec<Record>,
    mode: Mode,
}

impl Calculator {
    pub(crate) fn new(records: Vec<Record>, mode: Mode) -> Self {
        Self { records, mode }
    }

    /// Countdown entries for every record, sorted ascending by days
    /// remaining and truncated to `limit`. Ties keep input order.
    pub(crate) fn rank(&self, now: NaiveDate, limit: usize) -> Vec<RankedEntry> {
        let mut entries: Vec<RankedEntry> = self
            .records
            .iter()
            .map(|record| self.entry_for(record, now))
            .collect();
        // Vec::sort_by_key is stable
        entries.sort_by_key(|entry| entry.days_remaining);
        entries.truncate(limit);
        entries
    }

    /// Countdown entry for one record, matched by exact name
    pub(crate) fn lookup(&self, name: &str, now: NaiveDate) -> Result<RankedEntry, AppError> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .map(|record| self.entry_for(record, now))
            .ok_or_else(|| AppError::NameNotFound {
                name: name.to_string(),
            })
    }

    fn entry_for(&self, record: &Record, now: NaiveDate) -> RankedEntry {
        let (effective_date, days_remaining, age) = if self.mode.is_recurring() {
            let mut effective = with_year(record.date, now.year());
            let mut days = day_difference(now, effective);
            let mut age = age_at(record.date, now);
            // This year's occurrence is more than a day in the past:
            // roll forward to next year
            if days < -1 {
                effective = with_year(record.date, now.year() + 1);
                days = day_difference(now, effective);
                age += 1;
            }
            (effective, days, Some(age))
        } else {
            (record.date, day_difference(now, record.date), None)
        };

        RankedEntry {
            name: record.name.clone(),
            date: record.date,
            effective_date,
            days_remaining,
            age,
            location: record.location.clone(),
        }
    }
}

/// Whole days from `start` to `end`, negative when `end` is in the past
fn day_difference(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Age turned (or to be turned) at the birthday occurring in `now`'s year
pub(crate) fn age_at(birth: NaiveDate, now: NaiveDate) -> i32 {
    let mut age = now.year() - birth.year();
    if (now.month(), now.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Move a date to another year. Feb 29 clamps to Feb 28 in common years.
fn with_year(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
    })
}
