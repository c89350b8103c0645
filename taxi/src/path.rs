//! Path extraction: turns the search arena into the returned `Plan` (SPEC_FULL.md §4.2, "Output").

use crate::state::{Direction, JointMove, JointState};

/// One node in the search arena. `parent`/`incoming_move` are `None` only for the start node.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) state: JointState,
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) parent: Option<usize>,
    pub(crate) incoming_move: Option<JointMove>,
}

/// The reconstructed solution: the sequence of joint states from start to goal, plus the joint
/// move taken at each step (length = makespan).
#[derive(Debug, Clone)]
pub struct Plan {
    pub states: Vec<JointState>,
    pub moves: Vec<JointMove>,
    pub nodes_expanded: usize,
}

impl Plan {
    pub fn makespan(&self) -> usize {
        self.moves.len()
    }

    /// Per-agent direction sequence, one entry per step (length `makespan()`).
    pub fn directions_for(&self, agent: usize) -> Vec<Direction> {
        self.moves.iter().map(|m| m[agent]).collect()
    }
}

/// Walks the arena's parent chain from `goal_index` back to the root and reverses it into a
/// start-to-goal `Plan`.
pub(crate) fn reconstruct(arena: &[SearchNode], goal_index: usize, nodes_expanded: usize) -> Plan {
    let mut states = Vec::new();
    let mut moves = Vec::new();
    let mut cursor = goal_index;
    loop {
        states.push(arena[cursor].state.clone());
        match (arena[cursor].parent, &arena[cursor].incoming_move) {
            (Some(parent), Some(mv)) => {
                moves.push(mv.clone());
                cursor = parent;
            }
            _ => break,
        }
    }
    states.reverse();
    moves.reverse();
    Plan {
        states,
        moves,
        nodes_expanded,
    }
}
