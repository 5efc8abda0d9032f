mod json;
mod table;
mod text;

pub(crate) use json::{lookup_json, ranked_json};
pub(crate) use table::print_ranked_table;
pub(crate) use text::{lookup_message, ranked_lines};
