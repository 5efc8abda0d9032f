//! Record loading from CSV files and HTTP feeds
//!
//! Expected columns: `name,date[,location]` with dates as YYYY-MM-DD.
//! Loading fails fast on the first malformed record; the record set is
//! immutable for the rest of the invocation.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::cli::Cli;
use crate::config::Config;
use crate::consts::DATE_FORMAT;
use crate::core::{Mode, Record};
use crate::error::AppError;

/// Where the record set comes from
#[derive(Debug, Clone)]
pub(crate) enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Human-readable origin used in error messages
    pub(crate) fn origin(&self) -> String {
        match self {
            DataSource::File(path) => path.display().to_string(),
            DataSource::Url(url) => url.clone(),
        }
    }
}

/// Pick the data source: CLI args win, then the config entry for the
/// mode, then a conventional file in the working directory.
pub(crate) fn resolve_source(cli: &Cli, config: &Config, mode: Mode) -> DataSource {
    if let Some(path) = &cli.file {
        return DataSource::File(path.clone());
    }
    if let Some(url) = &cli.url {
        return DataSource::Url(url.clone());
    }
    let (file, url, default_name) = match mode {
        Mode::Birthday => (&config.file, &config.url, "birthdates.csv"),
        Mode::Event => (&config.events_file, &config.events_url, "events.csv"),
    };
    if let Some(path) = file {
        return DataSource::File(PathBuf::from(path));
    }
    if let Some(url) = url {
        return DataSource::Url(url.clone());
    }
    DataSource::File(PathBuf::from(default_name))
}

/// CSV row before validation
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    date: String,
    #[serde(default)]
    location: Option<String>,
}

pub(crate) fn load_records(source: &DataSource) -> Result<Vec<Record>, AppError> {
    let origin = source.origin();
    match source {
        DataSource::File(path) => {
            let file = File::open(path).map_err(|e| AppError::Read {
                origin: origin.clone(),
                source: e,
            })?;
            parse_records(file, &origin)
        }
        DataSource::Url(url) => {
            let response = ureq::get(url).call().map_err(|e| AppError::Fetch {
                url: url.clone(),
                source: Box::new(e),
            })?;
            let mut body = response.into_body();
            parse_records(body.as_reader(), &origin)
        }
    }
}

fn parse_records<R: Read>(reader: R, origin: &str) -> Result<Vec<Record>, AppError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let record_no = index + 1;
        let raw = row.map_err(|e| AppError::Csv {
            origin: origin.to_string(),
            source: e,
        })?;

        if raw.name.is_empty() {
            return Err(AppError::BlankName {
                origin: origin.to_string(),
                record: record_no,
            });
        }
        if !seen.insert(raw.name.clone()) {
            return Err(AppError::DuplicateName {
                origin: origin.to_string(),
                name: raw.name,
            });
        }

        let date =
            NaiveDate::parse_from_str(&raw.date, DATE_FORMAT).map_err(|_| AppError::RecordDate {
                origin: origin.to_string(),
                record: record_no,
                input: raw.date.clone(),
            })?;

        records.push(Record {
            name: raw.name,
            date,
            location: raw.location.filter(|l| !l.is_empty()),
        });
    }

    Ok(records)
}
