use std::path::Path;

use clue_core::EntityKind;
use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Suspects", "Weapons", "Locations"]);

    let rows = EntityKind::ALL
        .iter()
        .map(|k| catalog.entries(*k).len())
        .max()
        .unwrap_or(0);

    for i in 0..rows {
        let row: Vec<&str> = EntityKind::ALL
            .iter()
            .map(|k| catalog.entries(*k).get(i).map_or("", String::as_str))
            .collect();
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!(
        "  {} suspects, {} weapons, {} locations",
        catalog.suspects().len(),
        catalog.weapons().len(),
        catalog.locations().len()
    );

    Ok(())
}
