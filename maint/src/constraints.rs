//! Per-slot global constraints, modeled as a small closed family of tagged variants with a
//! uniform `check` entry point (rather than closures built inside loops, which the source
//! material shows capturing loop variables incorrectly).

use itertools::Itertools;

use crate::domain::{AircraftId, AircraftKind, Cell, Position};

/// One aircraft's placement within a single slot, the unit the global constraints reason over.
#[derive(Debug, Clone, Copy)]
pub struct SlotPlacement {
    pub aircraft: AircraftId,
    pub kind: AircraftKind,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalConstraint {
    /// At most 2 aircraft per position, at most 1 JMB, never a JMB+JMB pair.
    Capacity,
    /// Every occupied position has at least one unoccupied 4-neighbor.
    Maneuverability,
    /// No two JMB aircraft at 4-adjacent cells.
    JumboSeparation,
    /// No two aircraft at all (regardless of kind) at 4-adjacent cells. Configurable: see
    /// `MaintConfig::allow_non_jmb_adjacency` in SPEC_FULL.md §4.1 note 4.
    GeneralAdjacency,
}

impl GlobalConstraint {
    /// Checks this constraint against every placement made within one slot.
    pub fn check(&self, placements: &[SlotPlacement]) -> bool {
        match self {
            GlobalConstraint::Capacity => check_capacity(placements),
            GlobalConstraint::Maneuverability => check_maneuverability(placements),
            GlobalConstraint::JumboSeparation => check_adjacency(placements, true),
            GlobalConstraint::GeneralAdjacency => check_adjacency(placements, false),
        }
    }

    /// Incremental capacity-only precheck usable while a slot is still partially filled:
    /// capacity violations are monotonic (more placements never undo one), so this can prune
    /// before every aircraft in the slot has been assigned.
    pub fn check_partial_capacity(placements: &[SlotPlacement]) -> bool {
        check_capacity(placements)
    }
}

fn check_capacity(placements: &[SlotPlacement]) -> bool {
    for p in placements {
        let occupants: Vec<&SlotPlacement> = placements
            .iter()
            .filter(|q| q.position == p.position)
            .collect();
        if occupants.len() > 2 {
            return false;
        }
        let jmb_count = occupants.iter().filter(|q| q.kind == AircraftKind::Jmb).count();
        if jmb_count > 1 {
            return false;
        }
    }
    true
}

fn check_maneuverability(placements: &[SlotPlacement]) -> bool {
    let occupied: Vec<Cell> = placements.iter().map(|q| q.position.cell).collect();
    for p in placements {
        let c = p.position.cell;
        let neighbors = [
            (c.row.checked_sub(1), Some(c.col)),
            (Some(c.row + 1), Some(c.col)),
            (Some(c.row), c.col.checked_sub(1)),
            (Some(c.row), Some(c.col + 1)),
        ];
        let any_free = neighbors.iter().any(|&(r, co)| match (r, co) {
            (Some(row), Some(col)) => !occupied.contains(&Cell { row, col }),
            _ => true, // off-grid neighbor counts as unoccupied
        });
        if !any_free {
            return false;
        }
    }
    true
}

fn check_adjacency(placements: &[SlotPlacement], jmb_only: bool) -> bool {
    placements
        .iter()
        .filter(|p| !jmb_only || p.kind == AircraftKind::Jmb)
        .tuple_combinations()
        .all(|(p, q)| !p.position.cell.is_adjacent(q.position.cell))
}

/// Returns the constraints active for a given configuration.
pub fn active_constraints(allow_non_jmb_adjacency: bool) -> Vec<GlobalConstraint> {
    let mut v = vec![
        GlobalConstraint::Capacity,
        GlobalConstraint::Maneuverability,
        GlobalConstraint::JumboSeparation,
    ];
    if !allow_non_jmb_adjacency {
        v.push(GlobalConstraint::GeneralAdjacency);
    }
    v
}
