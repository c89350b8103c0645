use crate::apsp::DistanceTable;
use crate::map::Cell;
use crate::state::JointState;

/// Which admissible heuristic to evaluate with (SPEC_FULL.md §4.2).
#[derive(Debug, Clone, Copy)]
pub enum HeuristicKind {
    /// H1: sum of Manhattan distances.
    Manhattan,
    /// H2: sum of true shortest-path distances on the traversable subgraph.
    ShortestPath,
}

/// A bound admissible heuristic. Both variants are the sum of per-agent lower bounds: each
/// agent incurs at least its individual shortest-path cost ignoring other agents, and each
/// joint step advances every agent by at most one grid step, so the sum stays admissible and
/// consistent (SPEC_FULL.md §4.2).
#[derive(Clone, Copy)]
pub enum Heuristic<'a> {
    Manhattan,
    ShortestPath(&'a DistanceTable),
}

impl<'a> Heuristic<'a> {
    /// Lower bound on the remaining cost from `state` to `goals`. `None` means at least one
    /// agent can never reach its goal (H2 only; H1 is always finite on a bounded grid).
    pub fn estimate(&self, state: &JointState, goals: &[Cell]) -> Option<u32> {
        match self {
            Heuristic::Manhattan => Some(
                state
                    .iter()
                    .zip(goals)
                    .map(|(s, g)| manhattan(*s, *g))
                    .sum(),
            ),
            Heuristic::ShortestPath(table) => {
                let mut total = 0u32;
                for (s, g) in state.iter().zip(goals) {
                    total += table.distance(*s, *g)?;
                }
                Some(total)
            }
        }
    }
}

fn manhattan(a: Cell, b: Cell) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apsp::DistanceTable;
    use crate::map::{CellKind, Map};
    use smallvec::smallvec;

    #[test]
    fn h1_never_exceeds_h2() {
        // A grid with a detour: H2 (true shortest path) must be >= H1 (Manhattan) everywhere.
        let cells = vec![
            CellKind::Open,
            CellKind::Blocked,
            CellKind::Open,
            CellKind::Open,
            CellKind::Blocked,
            CellKind::Open,
            CellKind::Open,
            CellKind::Open,
            CellKind::Open,
        ];
        let map = Map::new(3, 3, cells);
        let table = DistanceTable::build(&map);
        let state: JointState = smallvec![Cell::new(0, 0)];
        let goals = vec![Cell::new(2, 2)];
        let h1 = Heuristic::Manhattan.estimate(&state, &goals).unwrap();
        let h2 = Heuristic::ShortestPath(&table).estimate(&state, &goals).unwrap();
        assert!(h1 <= h2);
    }
}
