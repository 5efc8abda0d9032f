pub(crate) mod loader;

pub(crate) use loader::{DataSource, load_records, resolve_source};
