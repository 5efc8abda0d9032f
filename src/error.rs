use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Record {record} in {origin}: invalid date \"{input}\" (expected YYYY-MM-DD)")]
    RecordDate {
        origin: String,
        record: usize,
        input: String,
    },

    #[error("Record {record} in {origin}: blank name")]
    BlankName { origin: String, record: usize },

    #[error("Duplicate name \"{name}\" in {origin} (names must be unique)")]
    DuplicateName { origin: String, name: String },

    #[error("No entry named \"{name}\" was found")]
    NameNotFound { name: String },

    #[error("Failed to read {origin}: {source}")]
    Read {
        origin: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {source}")]
    Csv { origin: String, source: csv::Error },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        source: Box<ureq::Error>,
    },
}
