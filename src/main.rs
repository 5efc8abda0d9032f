mod cli;
mod config;
mod consts;
mod core;
mod data;
mod error;
mod output;
mod utils;

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::cli::{Action, Cli, parse_command};
use crate::config::Config;
use crate::consts::{DEFAULT_COUNT, MAX_COUNT};
use crate::core::Calculator;
use crate::data::{load_records, resolve_source};
use crate::error::AppError;
use crate::output::{lookup_json, lookup_message, print_ranked_table, ranked_json, ranked_lines};
use crate::utils::parse_date;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let (mode, action) = parse_command(&cli.command);

    let now: NaiveDate = match &cli.date {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let source = resolve_source(cli, config, mode);
    let records = load_records(&source)?;
    let calculator = Calculator::new(records, mode);

    match action {
        Action::Upcoming { count } => {
            let limit = count
                .or(config.count)
                .unwrap_or(DEFAULT_COUNT)
                .clamp(1, MAX_COUNT) as usize;
            let entries = calculator.rank(now, limit);
            if entries.is_empty() {
                println!("No {} records found.", mode.display_name());
                return Ok(());
            }
            if cli.json {
                println!("{}", ranked_json(&entries, mode));
            } else if cli.table {
                print_ranked_table(&entries, mode, cli.use_color());
            } else {
                println!("{}", ranked_lines(&entries, mode));
            }
        }
        Action::Show { name } => {
            let entry = calculator.lookup(&name, now)?;
            if cli.json {
                println!("{}", lookup_json(&entry, mode));
            } else {
                println!("{}", lookup_message(&entry, mode));
            }
        }
    }

    Ok(())
}
