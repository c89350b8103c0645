//! File-format adapters for the `taxi-cli` demonstration binary (SPEC_FULL.md §6.3-§6.4).
//!
//! As in `maint::io`, this module is the only place that touches text; `map`/`astar`/`path`
//! stay pure and unit-testable without a filesystem.

use std::time::Duration;

use crate::agent::Agent;
use crate::map::{Cell, CellKind, Map};
use crate::path::Plan;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("expected at least 2 lines, got {0}")]
    TooFewLines(usize),
    #[error("malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error("map rows have inconsistent column counts")]
    RaggedMap,
}

fn parse_cell_pair(text: &str, line: usize) -> Result<(Cell, Cell), CliError> {
    let mut tokens = text.split_whitespace();
    let start = parse_cell(tokens.next().ok_or_else(|| CliError::MalformedLine {
        line,
        reason: "missing start cell".into(),
    })?, line)?;
    let goal = parse_cell(tokens.next().ok_or_else(|| CliError::MalformedLine {
        line,
        reason: "missing goal cell".into(),
    })?, line)?;
    Ok((start, goal))
}

fn parse_cell(tok: &str, line: usize) -> Result<Cell, CliError> {
    let tok = tok.trim_start_matches('(').trim_end_matches(')');
    let (r, c) = tok.split_once(',').ok_or_else(|| CliError::MalformedLine {
        line,
        reason: format!("expected '(r,c)', got '{tok}'"),
    })?;
    let row: u32 = r.trim().parse().map_err(|_| CliError::MalformedLine {
        line,
        reason: format!("bad row in '{tok}'"),
    })?;
    let col: u32 = c.trim().parse().map_err(|_| CliError::MalformedLine {
        line,
        reason: format!("bad col in '{tok}'"),
    })?;
    Ok(Cell::new(row, col))
}

fn cell_kind(symbol: &str) -> CellKind {
    match symbol.trim() {
        "B" | "G" => CellKind::Blocked,
        "A" => CellKind::Yellow,
        _ => CellKind::Open,
    }
}

/// Parses the TAXI input file format described in SPEC_FULL.md §6.3.
pub fn parse_instance(text: &str) -> Result<(Map, Vec<Agent>), CliError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return Err(CliError::TooFewLines(lines.len()));
    }
    let n: usize = lines[0].trim().parse().map_err(|_| CliError::MalformedLine {
        line: 1,
        reason: "expected an integer agent count".into(),
    })?;
    if lines.len() < 1 + n {
        return Err(CliError::TooFewLines(lines.len()));
    }
    let mut agents = Vec::with_capacity(n);
    for i in 0..n {
        let (start, goal) = parse_cell_pair(lines[1 + i], 2 + i)?;
        agents.push(Agent { start, goal });
    }

    let map_lines = &lines[1 + n..];
    let mut rows = Vec::new();
    let mut cols = None;
    for (i, line) in map_lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<CellKind> = line.split(';').map(cell_kind).collect();
        if *cols.get_or_insert(cells.len()) != cells.len() {
            return Err(CliError::RaggedMap);
        }
        let _ = i;
        rows.push(cells);
    }
    let cols = cols.unwrap_or(0);
    let rows_count = rows.len();
    let cells: Vec<CellKind> = rows.into_iter().flatten().collect();
    let map = Map::new(rows_count as u32, cols as u32, cells);

    Ok((map, agents))
}

/// Renders the `<map>-<heuristic>.output` format (SPEC_FULL.md §6.4): one line per agent,
/// `(r,c) <dir>` tokens whitespace-separated, last token lacking a direction.
pub fn format_output(plan: &Plan, agent_count: usize) -> String {
    let mut out = String::new();
    for agent in 0..agent_count {
        let directions = plan.directions_for(agent);
        let mut tokens = Vec::new();
        for (step, state) in plan.states.iter().enumerate() {
            let cell = state[agent];
            if step < directions.len() {
                tokens.push(format!("({},{}) {}", cell.row, cell.col, directions[step].symbol()));
            } else {
                tokens.push(format!("({},{})", cell.row, cell.col));
            }
        }
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }
    out
}

/// Renders the `<map>-<heuristic>.stat` format (SPEC_FULL.md §6.4).
pub fn format_stat(elapsed: Duration, plan: &Plan, initial_heuristic: u32) -> String {
    format!(
        "time={:.6}s makespan={} initial_h={} nodes_expanded={}\n",
        elapsed.as_secs_f64(),
        plan.makespan(),
        initial_heuristic,
        plan.nodes_expanded,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_small_instance() {
        let text = "1\n(0,0) (0,2)\nO;O;O\n";
        let (map, agents) = parse_instance(text).unwrap();
        assert_eq!(map.rows(), 1);
        assert_eq!(map.cols(), 3);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].start, Cell::new(0, 0));
        assert_eq!(agents[0].goal, Cell::new(0, 2));
    }

    #[test]
    fn recognizes_blocked_and_yellow_symbols() {
        let text = "0\nB;A;G;O\n";
        let (map, _) = parse_instance(text).unwrap();
        assert_eq!(map.kind(Cell::new(0, 0)), Some(CellKind::Blocked));
        assert_eq!(map.kind(Cell::new(0, 1)), Some(CellKind::Yellow));
        assert_eq!(map.kind(Cell::new(0, 2)), Some(CellKind::Blocked));
        assert_eq!(map.kind(Cell::new(0, 3)), Some(CellKind::Open));
    }
}
