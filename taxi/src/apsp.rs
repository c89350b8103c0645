//! All-pairs shortest-path precomputation on the traversable subgraph (SPEC_FULL.md §4.3).
//!
//! Built via iterated single-source search from every traversable cell, using the same
//! `pathfinding` crate family the reference workspace uses for its own graph-distance helper
//! (there: `dijkstra_reach`/`dijkstra_partial` over a weighted adjacency map; here: `dijkstra_all`
//! over the unit-weight 4-connected grid, which degenerates to plain BFS since every edge costs 1
//! but keeps the same well-tested traversal code path).

use hashbrown::HashMap;
use pathfinding::directed::dijkstra::dijkstra_all;

use crate::map::{Cell, Map};

/// `dist(u, v)` for every pair of traversable cells. Immutable once built; safe to share
/// read-only (`Send + Sync`) across heuristic evaluations, including across threads.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    index: HashMap<Cell, usize>,
    dist: Vec<Vec<Option<u32>>>,
}

impl DistanceTable {
    pub fn build(map: &Map) -> Self {
        let cells: Vec<Cell> = map.traversable_cells().collect();
        let index: HashMap<Cell, usize> = cells.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        let n = cells.len();
        let mut dist = vec![vec![None; n]; n];
        for (i, &start) in cells.iter().enumerate() {
            dist[i][i] = Some(0);
            let reach = dijkstra_all(&start, |&c| map.neighbors(c).map(|n| (n, 1u32)));
            for (node, (_, cost)) in reach {
                if let Some(&j) = index.get(&node) {
                    dist[i][j] = Some(cost);
                }
            }
        }
        DistanceTable { index, dist }
    }

    /// Shortest-path distance from `a` to `b`, or `None` if `b` is unreachable from `a`
    /// (signals infeasibility to the heuristic, SPEC_FULL.md §4.2).
    pub fn distance(&self, a: Cell, b: Cell) -> Option<u32> {
        let i = *self.index.get(&a)?;
        let j = *self.index.get(&b)?;
        self.dist[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::CellKind;

    #[test]
    fn distances_on_an_open_row() {
        let map = Map::new(1, 5, vec![CellKind::Open; 5]);
        let table = DistanceTable::build(&map);
        assert_eq!(table.distance(Cell::new(0, 0), Cell::new(0, 4)), Some(4));
        assert_eq!(table.distance(Cell::new(0, 2), Cell::new(0, 0)), Some(2));
    }

    #[test]
    fn unreachable_pairs_are_none() {
        let mut cells = vec![CellKind::Open; 6];
        // wall splitting a 2x3 grid down the middle column
        cells[1] = CellKind::Blocked;
        cells[4] = CellKind::Blocked;
        let map = Map::new(2, 3, cells);
        let table = DistanceTable::build(&map);
        assert_eq!(table.distance(Cell::new(0, 0), Cell::new(0, 2)), None);
    }
}
