//! Demonstration CLI: `taxi-cli <map_path> <heuristic>` (SPEC_FULL.md §6.5). `heuristic` is
//! `1` for Manhattan or `2` for the precomputed shortest-path table. Writes `<map_path>` with
//! `-<heuristic>.output` and `-<heuristic>.stat` extensions alongside the input.
//! All parsing/formatting lives in `taxi::io`; this binary is thin glue.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use taxi::{astar, config::TaxiConfig, heuristic::HeuristicKind, io, DistanceTable, Heuristic};

#[derive(Parser, Debug)]
#[command(name = "taxi-cli")]
struct Args {
    /// Path to a TAXI instance file (SPEC_FULL.md §6.3).
    map_path: PathBuf,
    /// Heuristic selector: 1 = Manhattan, 2 = shortest-path table.
    heuristic: u8,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let kind = match args.heuristic {
        1 => HeuristicKind::Manhattan,
        2 => HeuristicKind::ShortestPath,
        other => bail!("heuristic must be 1 or 2, got {other}"),
    };

    let text = std::fs::read_to_string(&args.map_path)
        .with_context(|| format!("reading {}", args.map_path.display()))?;
    let (map, agents) = io::parse_instance(&text)?;

    let goals: Vec<_> = agents.iter().map(|a| a.goal).collect();
    let start: taxi::JointState = agents.iter().map(|a| a.start).collect();
    let table;
    let evaluator = match kind {
        HeuristicKind::Manhattan => Heuristic::Manhattan,
        HeuristicKind::ShortestPath => {
            table = DistanceTable::build(&map);
            Heuristic::ShortestPath(&table)
        }
    };
    let initial_heuristic = evaluator.estimate(&start, &goals).unwrap_or(0);

    let config = TaxiConfig { heuristic: kind };
    let started = Instant::now();
    let plan = astar::solve(&map, &agents, &config)?;
    let elapsed = started.elapsed();

    let Some(plan) = plan else {
        bail!("no feasible joint plan exists for {}", args.map_path.display());
    };

    let stem = args.map_path.with_extension("");
    let output_path = append_suffix(&stem, &format!("-{}.output", args.heuristic));
    let stat_path = append_suffix(&stem, &format!("-{}.stat", args.heuristic));

    std::fs::write(&output_path, io::format_output(&plan, agents.len()))
        .with_context(|| format!("writing {}", output_path.display()))?;
    std::fs::write(&stat_path, io::format_stat(elapsed, &plan, initial_heuristic))
        .with_context(|| format!("writing {}", stat_path.display()))?;
    Ok(())
}

fn append_suffix(stem: &PathBuf, suffix: &str) -> PathBuf {
    let mut name = stem.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    stem.with_file_name(name)
}
