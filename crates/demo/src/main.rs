// File: crates/demo/src/main.rs
// Summary: Renders a unit-conversion figure to PNG, either once or as an interactive selection session.

mod session;

use anyhow::{Context, Result};
use clap::Parser;
use figure_core::types::{HEIGHT, WIDTH};
use figure_core::{theme, Dispatch, Dispatcher, RenderOptions, Selection, SkiaSurface};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "unit-figure")]
#[command(about = "Plot unit-conversion formulas to a PNG", long_about = None)]
struct Args {
    /// Calculator to plot: length, speed or current. Omit for an interactive session.
    #[arg(short, long)]
    calculator: Option<String>,

    /// Voltage for the current calculator (prompted when missing)
    #[arg(long)]
    voltage: Option<String>,

    /// Resistance for the current calculator (prompted when missing)
    #[arg(long)]
    resistance: Option<String>,

    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Color theme: light, dark or high-contrast-dark
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output PNG, rewritten after every draw
    #[arg(short, long, default_value = "target/out/unit_figure.png")]
    out: PathBuf,

    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        theme: theme::find(&args.theme),
        ..RenderOptions::default()
    };
    let mut surface = SkiaSurface::from_options(&opts)
        .with_context(|| format!("creating {}x{} surface", args.width, args.height))?;
    let mut dispatcher = Dispatcher::new(opts);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    match args.calculator.as_deref() {
        Some(value) => run_once(&args, value, &mut dispatcher, &mut surface, &mut input),
        None => session::run(&mut dispatcher, &mut surface, &args.out, &mut input),
    }
}

fn run_once(
    args: &Args,
    value: &str,
    dispatcher: &mut Dispatcher,
    surface: &mut SkiaSurface,
    input: &mut impl BufRead,
) -> Result<()> {
    let Some(selection) = Selection::parse(value) else {
        eprintln!("Unknown calculator '{value}'; nothing drawn.");
        return Ok(());
    };

    if let Dispatch::NeedsParameters(request) = dispatcher.select(selection, surface) {
        let voltage = match &args.voltage {
            Some(v) => v.clone(),
            None => session::prompt(input, "voltage")?,
        };
        let resistance = match &args.resistance {
            Some(r) => r.clone(),
            None => session::prompt(input, "resistance")?,
        };
        dispatcher.resume(request, &voltage, &resistance, surface)?;
    }

    surface
        .write_png(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
