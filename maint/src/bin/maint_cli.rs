//! Demonstration CLI: `maint-cli <input_path>` (SPEC_FULL.md §6.5). Output is written next to
//! the input with a `.csv` extension. All parsing/formatting lives in `maint::io`; this binary
//! is thin glue.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use maint::{io, MaintConfig};

#[derive(Parser, Debug)]
#[command(name = "maint-cli")]
struct Args {
    /// Path to a MAINT instance file (SPEC_FULL.md §6.1).
    input_path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input_path)
        .with_context(|| format!("reading {}", args.input_path.display()))?;
    let instance = io::parse_instance(&text)?;
    let solution = maint::solve(&instance, &MaintConfig::default())?;
    let rendered = io::format_solution(&instance, &solution);

    let output_path = args.input_path.with_extension("csv");
    std::fs::write(&output_path, rendered)
        .with_context(|| format!("writing {}", output_path.display()))?;
    Ok(())
}
