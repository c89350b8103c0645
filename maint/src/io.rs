//! File-format adapters for the `maint-cli` demonstration binary (SPEC_FULL.md §6.1-§6.2).
//!
//! This module is deliberately separate from the solving core: `parse_instance` and
//! `format_solution` are the only places that touch text, so `domain`/`search`/`dedup` stay
//! pure and unit-testable without a filesystem.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::domain::{Aircraft, AircraftId, AircraftKind, Cell, Instance, Position, PositionKind};
use crate::search::Solution;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("expected at least 6 lines, got {0}")]
    TooFewLines(usize),
    #[error("malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error("invalid MAINT instance: {0}")]
    Instance(#[from] crate::error::MaintError),
}

fn parse_cells(rest: &str, line: usize) -> Result<BTreeSet<Cell>, CliError> {
    let mut cells = BTreeSet::new();
    for tok in rest.split_whitespace() {
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
        cells.insert(Cell::new(row, col));
    }
    Ok(cells)
}

fn positions_line(line_text: &str, line: usize) -> Result<BTreeSet<Cell>, CliError> {
    let rest = match line_text.split_once(':') {
        Some((_, rest)) => rest,
        None => line_text,
    };
    parse_cells(rest, line)
}

/// Parses the MAINT input file format described in SPEC_FULL.md §6.1.
pub fn parse_instance(text: &str) -> Result<Instance, CliError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 5 {
        return Err(CliError::TooFewLines(lines.len()));
    }
    let time_slots: u32 = lines[0].trim().parse().map_err(|_| CliError::MalformedLine {
        line: 1,
        reason: "expected an integer time_slots".into(),
    })?;
    // Line 2 (grid dimensions) is informational only; not needed to build the Instance.
    let std = positions_line(lines[2], 3)?;
    let spc = positions_line(lines[3], 4)?;
    let prk = positions_line(lines[4], 5)?;

    let mut aircraft = Vec::new();
    for (i, line) in lines.iter().enumerate().skip(5) {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.trim().split('-').collect();
        if fields.len() != 5 {
            return Err(CliError::MalformedLine {
                line: line_no,
                reason: format!("expected 5 hyphen-separated fields, got {}", fields.len()),
            });
        }
        let id: u32 = fields[0].parse().map_err(|_| CliError::MalformedLine {
            line: line_no,
            reason: "bad aircraft id".into(),
        })?;
        let kind = match fields[1] {
            "STD" => AircraftKind::Std,
            "JMB" => AircraftKind::Jmb,
            other => {
                return Err(CliError::MalformedLine {
                    line: line_no,
                    reason: format!("unknown aircraft kind '{other}'"),
                })
            }
        };
        let strict_order = match fields[2] {
            "T" => true,
            "F" => false,
            other => {
                return Err(CliError::MalformedLine {
                    line: line_no,
                    reason: format!("unknown order flag '{other}'"),
                })
            }
        };
        let t1_count: u32 = fields[3].parse().map_err(|_| CliError::MalformedLine {
            line: line_no,
            reason: "bad t1 count".into(),
        })?;
        let t2_count: u32 = fields[4].parse().map_err(|_| CliError::MalformedLine {
            line: line_no,
            reason: "bad t2 count".into(),
        })?;
        aircraft.push(Aircraft {
            id: AircraftId(id),
            kind,
            strict_order,
            t1_count,
            t2_count,
        });
    }

    Ok(Instance::new(time_slots, std, spc, prk, aircraft)?)
}

fn position_kind_label(kind: PositionKind) -> &'static str {
    match kind {
        PositionKind::Std => "STD",
        PositionKind::Spc => "SPC",
        PositionKind::Prk => "PRK",
    }
}

fn render_position(p: Position) -> String {
    format!("{}({},{})", position_kind_label(p.kind), p.cell.row, p.cell.col)
}

fn aircraft_kind_label(kind: AircraftKind) -> &'static str {
    match kind {
        AircraftKind::Std => "STD",
        AircraftKind::Jmb => "JMB",
    }
}

/// Renders a `Solution` in the CSV-like text format described in SPEC_FULL.md §6.2.
pub fn format_solution(instance: &Instance, solution: &Solution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "N. Sol: {}", solution.total_count);
    for (i, assignment) in solution.solutions.iter().enumerate() {
        let _ = writeln!(out, "Solución {}:", i + 1);
        for aircraft in &instance.aircraft {
            let order_flag = if aircraft.strict_order { "T" } else { "F" };
            let header = format!(
                "{}-{}-{}-{}-{}",
                aircraft.id.0,
                aircraft_kind_label(aircraft.kind),
                order_flag,
                aircraft.t1_count,
                aircraft.t2_count,
            );
            let positions = assignment
                .positions_for(aircraft.id)
                .unwrap_or(&[])
                .iter()
                .map(|&p| render_position(p))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "{header}: {positions}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MaintConfig;

    #[test]
    fn round_trips_a_small_instance() {
        let text = "2\n3x3\nSTD: (0,0)\nSPC: (0,1)\nPRK: (1,0)\n1-STD-F-0-0\n";
        let instance = parse_instance(text).unwrap();
        assert_eq!(instance.time_slots, 2);
        assert_eq!(instance.aircraft.len(), 1);
        let solution = crate::search::solve(&instance, &MaintConfig::default()).unwrap();
        let rendered = format_solution(&instance, &solution);
        assert!(rendered.starts_with("N. Sol: 9"));
    }

    #[test]
    fn rejects_malformed_aircraft_line() {
        let text = "1\n1x1\nSTD: (0,0)\nSPC:\nPRK:\nnot-an-aircraft-line\n";
        let err = parse_instance(text).unwrap_err();
        assert!(matches!(err, CliError::MalformedLine { .. }));
    }
}
