//! Backtracking search engine for MAINT.
//!
//! Variable ordering is lexicographic by `(aircraft_index, slot)`: for aircraft 0 we pick a
//! value for every slot, then aircraft 1, and so on. Because the per-slot global constraints
//! (§4.1) only depend on the positions chosen for that slot across *all* aircraft, a slot can be
//! fully checked as soon as the last aircraft in the roster has been given a value for it —
//! which happens without waiting for a leaf of the search tree, giving genuine forward checking
//! rather than a leaf-only accept/reject.

use tracing::{debug, instrument, trace};

use crate::assignment::Assignment;
use crate::config::MaintConfig;
use crate::constraints::{active_constraints, GlobalConstraint, SlotPlacement};
use crate::dedup::canonicalize;
use crate::domain::{Aircraft, AircraftKind, Instance, Position, PositionKind};
use crate::error::MaintError;

/// Result of a solve: the untruncated distinct-solution count and a capped, deduplicated
/// vector of solutions (first occurrence wins; see `dedup`).
#[derive(Debug, Clone)]
pub struct Solution {
    pub total_count: usize,
    pub solutions: Vec<Assignment>,
}

/// Per-variable domain: the set of positions allowed by the aircraft's unary task-placement
/// constraint for that slot (§4.1). The first `t2_count` slots are pinned to SPC and the next
/// `t1_count` to STD under both interpretations of `strict_order` (DESIGN.md OQ-1). What happens
/// after that prefix depends on `strict_order`: `true` pins the remainder to PRK; `false` only
/// requires the prefix counts to be met, so the remaining slots keep the full STD/SPC/PRK domain.
fn build_domain(instance: &Instance, aircraft: &Aircraft, slot: u32) -> Vec<Position> {
    let k2 = aircraft.t2_count;
    let k1 = aircraft.t1_count;
    if slot < k2 {
        instance.positions_of(PositionKind::Spc).collect()
    } else if slot < k2 + k1 {
        instance.positions_of(PositionKind::Std).collect()
    } else if aircraft.strict_order {
        instance.positions_of(PositionKind::Prk).collect()
    } else {
        instance.all_positions()
    }
}

struct Search<'a> {
    instance: &'a Instance,
    constraints: Vec<GlobalConstraint>,
    domains: Vec<Vec<Vec<Position>>>, // [aircraft_index][slot] -> candidate positions
    current: Vec<Vec<Position>>,      // [aircraft_index][slot], only [0..=ai][..] meaningful
    slot_placements: Vec<Vec<SlotPlacement>>, // [slot] -> placements made so far, in aircraft order
    distinct: Vec<Assignment>,
    seen: hashbrown::HashSet<crate::dedup::CanonicalForm>,
    cap: usize,
}

impl<'a> Search<'a> {
    fn new(instance: &'a Instance, config: &MaintConfig) -> Result<Option<Self>, MaintError> {
        let constraints = active_constraints(config.allow_non_jmb_adjacency);
        let mut domains = Vec::with_capacity(instance.aircraft.len());
        for aircraft in &instance.aircraft {
            let mut per_slot = Vec::with_capacity(instance.time_slots as usize);
            for slot in 0..instance.time_slots {
                let domain = build_domain(instance, aircraft, slot);
                if domain.is_empty() {
                    // Empty unary domain: infeasible, zero solutions (not an error).
                    return Ok(None);
                }
                per_slot.push(domain);
            }
            domains.push(per_slot);
        }
        Ok(Some(Search {
            instance,
            constraints,
            domains,
            current: vec![Vec::new(); instance.aircraft.len()],
            slot_placements: vec![Vec::new(); instance.time_slots as usize],
            distinct: Vec::new(),
            seen: hashbrown::HashSet::new(),
            cap: config.solution_cap,
        }))
    }

    #[instrument(skip(self))]
    fn assign_aircraft(&mut self, aircraft_index: usize) {
        if aircraft_index == self.instance.aircraft.len() {
            self.emit_solution();
            return;
        }
        self.assign_slot(aircraft_index, 0);
    }

    fn assign_slot(&mut self, aircraft_index: usize, slot: u32) {
        if slot == self.instance.time_slots {
            self.assign_aircraft(aircraft_index + 1);
            return;
        }
        let aircraft = &self.instance.aircraft[aircraft_index];
        let kind = aircraft.kind;
        let id = aircraft.id;
        let candidates = self.domains[aircraft_index][slot as usize].clone();
        let is_last_aircraft = aircraft_index + 1 == self.instance.aircraft.len();

        for position in candidates {
            let placement = SlotPlacement {
                aircraft: id,
                kind,
                position,
            };
            self.current[aircraft_index].push(position);
            self.slot_placements[slot as usize].push(placement);

            let partial_ok = GlobalConstraint::check_partial_capacity(&self.slot_placements[slot as usize]);
            let full_ok = if partial_ok && is_last_aircraft {
                self.constraints
                    .iter()
                    .all(|c| c.check(&self.slot_placements[slot as usize]))
            } else {
                true
            };

            if partial_ok && full_ok {
                trace!(aircraft_index, slot, ?position, "placed");
                self.assign_slot(aircraft_index, slot + 1);
            }

            self.current[aircraft_index].pop();
            self.slot_placements[slot as usize].pop();
        }
    }

    fn emit_solution(&mut self) {
        let mut assignment = Assignment::new(self.instance);
        for (ai, slots) in self.current.iter().enumerate() {
            assignment.positions[ai] = slots.clone();
        }
        let canonical = canonicalize(&assignment);
        if self.seen.insert(canonical) {
            // All distinct solutions are retained here; `into_solution` truncates the
            // returned vector to `cap` while `total_count` stays untruncated.
            self.distinct.push(assignment);
        }
    }

    fn into_solution(self) -> Solution {
        let total_count = self.distinct.len();
        let mut solutions = self.distinct;
        solutions.truncate(self.cap);
        Solution {
            total_count,
            solutions,
        }
    }
}

/// Enumerates every feasible assignment for `instance` under `config`, deduplicates by the
/// multiset-of-positions-per-aircraft equivalence (see `dedup`), and returns the (untruncated)
/// total count alongside a capped vector of solutions.
#[instrument(skip(instance, config))]
pub fn solve(instance: &Instance, config: &MaintConfig) -> Result<Solution, MaintError> {
    let search = match Search::new(instance, config)? {
        None => {
            debug!("instance infeasible: an aircraft's unary domain is empty");
            return Ok(Solution {
                total_count: 0,
                solutions: Vec::new(),
            });
        }
        Some(search) => search,
    };
    let mut search = search;
    search.assign_aircraft(0);
    let solution = search.into_solution();
    debug!(total = solution.total_count, returned = solution.solutions.len(), "solve finished");
    Ok(solution)
}
