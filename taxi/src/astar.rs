//! Best-first search over the joint configuration space (SPEC_FULL.md §4.2).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;
use tracing::{debug, instrument, trace};

use crate::agent::Agent;
use crate::apsp::DistanceTable;
use crate::config::TaxiConfig;
use crate::error::TaxiError;
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::map::{Cell, Map};
use crate::path::{self, Plan, SearchNode};
use crate::state::{JointMove, JointState};
use crate::successors::joint_successors;

/// Frontier ordering: `f` ascending; ties broken by lower `h` (prefer deeper nodes); further
/// ties broken deterministically by insertion order (SPEC_FULL.md §4.2).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct HeapEntry {
    f: u32,
    h: u32,
    seq: u64,
    node_index: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn validate(map: &Map, agents: &[Agent]) -> Result<(), TaxiError> {
    if agents.is_empty() {
        return Err(TaxiError::NoAgents);
    }
    for (index, agent) in agents.iter().enumerate() {
        if map.is_blocked(agent.start) {
            return Err(TaxiError::InvalidStart {
                index,
                cell: agent.start,
            });
        }
        if map.is_blocked(agent.goal) {
            return Err(TaxiError::InvalidGoal {
                index,
                cell: agent.goal,
            });
        }
    }
    Ok(())
}

/// Solves for the optimal (minimum-makespan) joint plan, building an H2 distance table first
/// if `config.heuristic` requests it.
#[instrument(skip(map, agents, config))]
pub fn solve(map: &Map, agents: &[Agent], config: &TaxiConfig) -> Result<Option<Plan>, TaxiError> {
    validate(map, agents)?;
    let table;
    let heuristic = match config.heuristic {
        HeuristicKind::Manhattan => Heuristic::Manhattan,
        HeuristicKind::ShortestPath => {
            table = DistanceTable::build(map);
            Heuristic::ShortestPath(&table)
        }
    };
    Ok(solve_with_heuristic(map, agents, heuristic))
}

/// Lower-level entry point taking an already-constructed heuristic (lets a caller reuse one
/// `DistanceTable` across several `solve` calls, per SPEC_FULL.md §5).
pub fn solve_with_heuristic(map: &Map, agents: &[Agent], heuristic: Heuristic<'_>) -> Option<Plan> {
    let goals: Vec<Cell> = agents.iter().map(|a| a.goal).collect();
    let start: JointState = agents.iter().map(|a| a.start).collect();

    let Some(h0) = heuristic.estimate(&start, &goals) else {
        debug!("start state has an unreachable agent under H2; infeasible");
        return None;
    };

    let mut arena = vec![SearchNode {
        state: start.clone(),
        g: 0,
        h: h0,
        parent: None,
        incoming_move: None,
    }];
    let mut best_g: HashMap<JointState, u32> = HashMap::new();
    best_g.insert(start.clone(), 0);

    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    open.push(HeapEntry {
        f: h0,
        h: h0,
        seq,
        node_index: 0,
    });
    seq += 1;

    let mut nodes_expanded = 0usize;
    let goal_state: JointState = goals.iter().copied().collect();

    while let Some(entry) = open.pop() {
        let node_index = entry.node_index;
        // Stale entry: a strictly better g for this state was already found and expanded.
        if arena[node_index].g > *best_g.get(&arena[node_index].state).unwrap_or(&u32::MAX) {
            continue;
        }
        nodes_expanded += 1;
        if arena[node_index].state == goal_state {
            let plan = path::reconstruct(&arena, node_index, nodes_expanded);
            debug!(makespan = plan.makespan(), nodes_expanded, "solution found");
            return Some(plan);
        }

        let (state, g) = (arena[node_index].state.clone(), arena[node_index].g);
        for (joint_move, next_state) in joint_successors(map, &state, &goals) {
            let next_g = g + 1;
            let improves = best_g
                .get(&next_state)
                .map(|&known| next_g < known)
                .unwrap_or(true);
            if !improves {
                continue;
            }
            let Some(h) = heuristic.estimate(&next_state, &goals) else {
                continue; // an agent can never reach its goal from here under H2
            };
            best_g.insert(next_state.clone(), next_g);
            arena.push(SearchNode {
                state: next_state.clone(),
                g: next_g,
                h,
                parent: Some(node_index),
                incoming_move: Some(joint_move),
            });
            let new_index = arena.len() - 1;
            trace!(next_g, h, "expanding successor");
            open.push(HeapEntry {
                f: next_g + h,
                h,
                seq,
                node_index: new_index,
            });
            seq += 1;
        }
    }
    debug!(nodes_expanded, "frontier exhausted; infeasible");
    None
}

