/// Standard date format for record dates and CLI input: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default number of entries listed by the upcoming command
pub(crate) const DEFAULT_COUNT: u32 = 5;

/// Upper bound on the upcoming list size
pub(crate) const MAX_COUNT: u32 = 20;
