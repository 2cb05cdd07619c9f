use std::path::Path;

use clue_case::{Case, generate_seeded};
use clue_core::Catalog;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

/// Everything needed to reproduce and audit a case.
#[derive(Serialize)]
struct CaseDump<'a> {
    seed: u64,
    catalog: &'a Catalog,
    case: &'a Case,
}

pub fn run(catalog: Option<&Path>, seed: u64, varied: bool, format: &str) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let case = generate_seeded(&catalog, super::density(varied), seed);

    match format.to_lowercase().as_str() {
        "json" => {
            let dump = CaseDump {
                seed,
                catalog: &catalog,
                case: &case,
            };
            let json = serde_json::to_string_pretty(&dump).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        "table" => print_table(seed, &case),
        other => {
            return Err(format!("unsupported format '{other}', use: table, json"));
        }
    }

    Ok(())
}

fn print_table(seed: u64, case: &Case) {
    println!("  {} (seed {seed})", "Case file".bold());
    println!("  Solution: {}", case.solution.to_string().red());
    println!(
        "  Backstory: movement near the {}, during {}",
        case.backstory.secondary_location, case.backstory.conditions
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Location", "#", "Family", "Truth", "Clue"]);

    for (location, clues) in case.distribution.iter() {
        if clues.is_empty() {
            table.add_row(vec![location, "-", "", "", "(no clues)"]);
            continue;
        }
        for (i, clue) in clues.iter().enumerate() {
            let position = (i + 1).to_string();
            let family = clue.family.to_string();
            let truth = if clue.is_true { "true" } else { "false" };
            table.add_row(vec![location, &position, &family, truth, &clue.text]);
        }
    }

    println!("{table}");
    println!();
    println!(
        "  {} clues, {} true",
        case.distribution.total(),
        case.distribution.true_count()
    );
}
