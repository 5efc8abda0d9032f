use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::DATE_FORMAT;
use crate::core::{Mode, RankedEntry};

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

fn build_ranked_table(entries: &[RankedEntry], mode: Mode, use_color: bool) -> Table {
    let mut table = create_styled_table();

    let last_header = match mode {
        Mode::Birthday => "Age",
        Mode::Event => "Location",
    };
    table.set_header(vec![
        header_cell("Name", use_color),
        header_cell("Date", use_color),
        header_cell("Days", use_color),
        header_cell(last_header, use_color),
    ]);

    for entry in entries {
        let last = match mode {
            Mode::Birthday => entry.age.unwrap_or_default().to_string(),
            Mode::Event => entry.location.clone().unwrap_or_else(|| "-".to_string()),
        };
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.date.format(DATE_FORMAT).to_string()),
            right_cell(&entry.days_remaining.to_string()),
            Cell::new(last),
        ]);
    }

    table
}

pub(crate) fn print_ranked_table(entries: &[RankedEntry], mode: Mode, use_color: bool) {
    let title = match mode {
        Mode::Birthday => "Upcoming Birthdays",
        Mode::Event => "Upcoming Events",
    };
    println!("\n  {}\n", title);
    println!("{}", build_ranked_table(entries, mode, use_color));
}
