use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use devsim_core::UNKNOWN;

use crate::commands::GenerateOutcome;

pub fn print_summary(outcome: &GenerateOutcome) {
    let generation = &outcome.generation;
    println!("Seed: {}", generation.seed);
    print_path("Identities", outcome.identities_path.as_deref());
    print_path("Directives", outcome.commands_path.as_deref());
    if generation.identities.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Model"),
        header_cell("IMEI"),
        header_cell("IMSI"),
        header_cell("Region"),
        header_cell("Carrier"),
        header_cell("Phone"),
        header_cell("Directives"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for (index, (identity, directives)) in generation
        .identities
        .iter()
        .zip(&generation.scripts)
        .enumerate()
    {
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(&identity.model),
            Cell::new(&identity.imei),
            Cell::new(&identity.imsi),
            Cell::new(&identity.region),
            carrier_cell(&identity.carrier),
            Cell::new(&identity.phone_number),
            Cell::new(directives.len()),
        ]);
    }
    println!("{table}");
}

fn print_path(label: &str, path: Option<&Path>) {
    if let Some(path) = path {
        println!("{label}: {}", path.display());
    }
}

fn carrier_cell(carrier: &str) -> Cell {
    if carrier == UNKNOWN {
        Cell::new(carrier).fg(Color::Yellow)
    } else {
        Cell::new(carrier)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
