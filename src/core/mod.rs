//! Core module - countdown types and computation

mod calculator;
mod types;

pub(crate) use calculator::Calculator;
pub(crate) use types::{Mode, Record, RankedEntry};
