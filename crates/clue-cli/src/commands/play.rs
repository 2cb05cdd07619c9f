use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use clue_case::CaseSession;

use crate::console::Console;

use super::{Rules, load_catalog};

pub fn run(catalog: Option<&Path>, rules: Rules) -> Result<(), String> {
    let catalog = load_catalog(catalog)?;
    let session = CaseSession::new(catalog, rules.into_config())
        .map_err(|e| format!("failed to start case: {e}"))?;
    let mut console = Console::new(session);

    println!("  {} Clue: Night City Protocol", "Starting".bold());
    println!(
        "  Turns: {} | Seed: {}",
        console.session().turn_limit(),
        console.session().seed()
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", console.intro());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match console.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    tracing::debug!(
        seed = console.session().seed(),
        turns_used = console.session().turns_used(),
        "console closed"
    );
    Ok(())
}

fn is_quit(input: &str) -> bool {
    ["quit", "q", "exit"]
        .iter()
        .any(|cmd| input.eq_ignore_ascii_case(cmd))
}
