// File: crates/demo/src/session.rs
// Summary: Interactive loop: one selection per stdin line, PNG rewritten after each draw.

use anyhow::{Context, Result};
use figure_core::{Dispatch, Dispatcher, Selection, SkiaSurface};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

pub fn run(
    dispatcher: &mut Dispatcher,
    surface: &mut SkiaSurface,
    out: &Path,
    input: &mut impl BufRead,
) -> Result<()> {
    // Initial load draws the default selection.
    dispatcher.start(surface);
    present(surface, out)?;
    print_menu();

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        if matches!(value, "q" | "quit" | "exit") {
            break;
        }

        match dispatcher.select_value(value, surface) {
            Dispatch::Drawn => present(surface, out)?,
            Dispatch::NeedsParameters(request) => {
                let voltage = prompt(input, "voltage")?;
                let resistance = prompt(input, "resistance")?;
                match dispatcher.resume(request, &voltage, &resistance, surface) {
                    Ok(Dispatch::Drawn) => present(surface, out)?,
                    Ok(_) => {}
                    Err(err) => eprintln!("Invalid input. {err}"),
                }
            }
            Dispatch::Ignored => eprintln!("Unknown selection '{value}'."),
        }
    }
    info!("session ended");
    Ok(())
}

/// Ask for one value. End of input counts as a dismissed prompt (empty answer).
pub fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter {label}: ")?;
    stdout.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer).with_context(|| format!("reading {label}"))?;
    Ok(answer.trim().to_string())
}

fn present(surface: &mut SkiaSurface, out: &Path) -> Result<()> {
    surface
        .write_png(out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn print_menu() {
    let names: Vec<&str> = Selection::ALL.iter().map(|s| s.short_name()).collect();
    println!("Select a calculator ({}), or 'quit':", names.join(", "));
}
