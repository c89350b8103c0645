//! Joint move expansion with collision/swap/wait-on-yellow filtering (SPEC_FULL.md §4.2).
//!
//! The full joint move alphabet is the Cartesian product over agents of `{N,S,E,W,Wait}`, which
//! is exponential in the agent count; rather than materializing it up front we generate one
//! agent at a time and reject a partial assignment as soon as it conflicts with an
//! already-chosen target, the same incremental-pruning shape `maint::search` uses for its own
//! backtracking.

use smallvec::{smallvec, SmallVec};

use crate::map::Map;
use crate::state::{Direction, JointMove, JointState};

/// Per-agent candidate: the direction taken and the resulting cell.
struct Candidate {
    direction: Direction,
    target: crate::map::Cell,
}

fn candidates_for_agent(map: &Map, state: &JointState, goals: &[crate::map::Cell], agent: usize) -> SmallVec<[Candidate; 5]> {
    let here = state[agent];
    if here == goals[agent] {
        // Parked at goal: mandatory stay, pre-empts every other rule (including wait-on-yellow).
        return smallvec![Candidate {
            direction: Direction::Wait,
            target: here,
        }];
    }
    let mut out = SmallVec::new();
    for &dir in &Direction::ALL {
        let (dr, dc) = dir.delta();
        let row = here.row as i64 + dr as i64;
        let col = here.col as i64 + dc as i64;
        if row < 0 || col < 0 {
            continue;
        }
        let target = crate::map::Cell::new(row as u32, col as u32);
        if map.is_blocked(target) {
            continue;
        }
        if dir == Direction::Wait && map.is_yellow(target) {
            continue; // wait-on-yellow restriction
        }
        out.push(Candidate { direction: dir, target });
    }
    out
}

/// Generates every valid joint move out of `state`, given `goals` (the per-agent goal cells,
/// parallel to `state`).
pub fn joint_successors(map: &Map, state: &JointState, goals: &[crate::map::Cell]) -> Vec<(JointMove, JointState)> {
    let n = state.len();
    let per_agent: Vec<SmallVec<[Candidate; 5]>> = (0..n).map(|i| candidates_for_agent(map, state, goals, i)).collect();

    let mut moves = Vec::new();
    let mut directions: JointMove = smallvec![Direction::Wait; n];
    let mut targets: JointState = state.clone();
    generate(&per_agent, state, 0, &mut directions, &mut targets, &mut moves);

    let has_progress = moves.iter().any(|(dirs, _)| dirs.iter().any(|&d| d != Direction::Wait));
    if has_progress {
        moves.retain(|(dirs, _)| dirs.iter().any(|&d| d != Direction::Wait));
    }
    // If no progress move exists at all, `moves` contains only the (collision-checked) all-wait
    // combination, which is kept as the degenerate fallback (SPEC_FULL.md §4.2).
    moves
}

fn generate(
    per_agent: &[SmallVec<[Candidate; 5]>],
    state: &JointState,
    agent: usize,
    directions: &mut JointMove,
    targets: &mut JointState,
    out: &mut Vec<(JointMove, JointState)>,
) {
    if agent == per_agent.len() {
        out.push((directions.clone(), targets.clone()));
        return;
    }
    for candidate in &per_agent[agent] {
        // Vertex conflict: no earlier agent already claimed this target cell.
        if targets[..agent].contains(&candidate.target) {
            continue;
        }
        // Edge conflict (swap): no earlier agent j has state[j] == candidate.target while this
        // agent's target equals state[j]'s prior cell and they're trading places.
        let mut swap = false;
        for j in 0..agent {
            if candidate.target == state[j] && targets[j] == state[agent] {
                swap = true;
                break;
            }
        }
        if swap {
            continue;
        }
        directions[agent] = candidate.direction;
        targets[agent] = candidate.target;
        generate(per_agent, state, agent + 1, directions, targets, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Cell, CellKind};

    #[test]
    fn swap_is_rejected_on_a_three_cell_row() {
        // SPEC_FULL.md §8 scenario 5: (0,0) <-> (0,2) across open (0,1).
        let map = Map::new(1, 3, vec![CellKind::Open; 3]);
        let state: JointState = smallvec![Cell::new(0, 0), Cell::new(0, 2)];
        let goals = vec![Cell::new(0, 2), Cell::new(0, 0)];
        let next = joint_successors(&map, &state, &goals);
        for (_, s) in &next {
            let swapped = s[0] == goals[0] && s[1] == goals[1];
            assert!(!swapped, "direct swap must never be generated in a single step");
        }
    }

    #[test]
    fn parked_agent_never_leaves_goal() {
        let map = Map::new(1, 3, vec![CellKind::Open; 3]);
        let state: JointState = smallvec![Cell::new(0, 1), Cell::new(0, 2)];
        let goals = vec![Cell::new(0, 1), Cell::new(0, 0)];
        let next = joint_successors(&map, &state, &goals);
        assert!(!next.is_empty());
        for (_, s) in &next {
            assert_eq!(s[0], Cell::new(0, 1));
        }
    }
}
