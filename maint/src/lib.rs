//! MAINT: a constraint-satisfaction planner that assigns every aircraft, for every slot of a
//! planning horizon, to exactly one apron position (standard workshop, specialist workshop, or
//! parking stand), and enumerates **all** feasible assignments. See `SPEC_FULL.md` §4.1.

pub mod assignment;
pub mod config;
pub mod constraints;
pub mod dedup;
pub mod domain;
pub mod error;
pub mod io;
pub mod search;

pub use assignment::Assignment;
pub use config::MaintConfig;
pub use domain::{Aircraft, AircraftId, AircraftKind, Cell, Instance, Position, PositionKind};
pub use error::MaintError;
pub use search::{solve, Solution};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn single_std_aircraft(id: u32, strict_order: bool, t1: u32, t2: u32) -> Aircraft {
        Aircraft {
            id: AircraftId(id),
            kind: AircraftKind::Std,
            strict_order,
            t1_count: t1,
            t2_count: t2,
        }
    }

    /// SPEC_FULL.md §8 scenario 1: one aircraft, no tasks, 2 slots, one position of each kind.
    /// Every combination of the 3 positions across 2 slots is legal (adjacency-escape holds
    /// trivially with a single aircraft), so the count is 3*3 = 9.
    #[test]
    fn scenario_1_single_aircraft_free_choice() {
        let std: BTreeSet<Cell> = [Cell::new(0, 0)].into_iter().collect();
        let spc: BTreeSet<Cell> = [Cell::new(0, 1)].into_iter().collect();
        let prk: BTreeSet<Cell> = [Cell::new(1, 0)].into_iter().collect();
        let aircraft = vec![single_std_aircraft(1, false, 0, 0)];
        let instance = Instance::new(2, std, spc, prk, aircraft).unwrap();
        let solution = solve(&instance, &MaintConfig::default()).unwrap();
        assert_eq!(solution.total_count, 9);
    }

    /// SPEC_FULL.md §8 scenario 2: two JMB aircraft forced to the same single position in one
    /// slot. JMB+JMB co-location is forbidden, so there are zero solutions.
    #[test]
    fn scenario_2_jmb_colocation_forbidden() {
        let std: BTreeSet<Cell> = [Cell::new(0, 0)].into_iter().collect();
        let spc = BTreeSet::new();
        let prk = BTreeSet::new();
        let aircraft = vec![
            Aircraft {
                id: AircraftId(1),
                kind: AircraftKind::Jmb,
                strict_order: false,
                t1_count: 1,
                t2_count: 0,
            },
            Aircraft {
                id: AircraftId(2),
                kind: AircraftKind::Jmb,
                strict_order: false,
                t1_count: 1,
                t2_count: 0,
            },
        ];
        let instance = Instance::new(1, std, spc, prk, aircraft).unwrap();
        let solution = solve(&instance, &MaintConfig::default()).unwrap();
        assert_eq!(solution.total_count, 0);
    }

    /// SPEC_FULL.md §8 scenario 3: strict task-prefix ordering places every aircraft in SPC
    /// during slot 0, then STD during slot 1.
    #[test]
    fn scenario_3_strict_prefix_ordering() {
        let std: BTreeSet<Cell> = [Cell::new(0, 0), Cell::new(0, 1)].into_iter().collect();
        let spc: BTreeSet<Cell> = [Cell::new(1, 0), Cell::new(1, 1)].into_iter().collect();
        let prk = BTreeSet::new();
        let aircraft = vec![single_std_aircraft(1, true, 1, 1), single_std_aircraft(2, true, 1, 1)];
        let instance = Instance::new(2, std, spc, prk, aircraft).unwrap();
        let solution = solve(&instance, &MaintConfig::default()).unwrap();
        assert!(solution.total_count > 0);
        for assignment in &solution.solutions {
            for id in [AircraftId(1), AircraftId(2)] {
                assert_eq!(assignment.position_of(id, 0).unwrap().kind, PositionKind::Spc);
                assert_eq!(assignment.position_of(id, 1).unwrap().kind, PositionKind::Std);
            }
        }
    }

    #[test]
    fn overlapping_position_sets_are_rejected() {
        let std: BTreeSet<Cell> = [Cell::new(0, 0)].into_iter().collect();
        let spc: BTreeSet<Cell> = [Cell::new(0, 0)].into_iter().collect();
        let err = Instance::new(1, std, spc, BTreeSet::new(), vec![]).unwrap_err();
        assert_eq!(err, MaintError::OverlappingPositions { cell: Cell::new(0, 0) });
    }

    #[test]
    fn task_counts_exceeding_horizon_are_rejected() {
        let std: BTreeSet<Cell> = [Cell::new(0, 0)].into_iter().collect();
        let aircraft = vec![single_std_aircraft(1, false, 2, 2)];
        let err = Instance::new(2, std, BTreeSet::new(), BTreeSet::new(), aircraft).unwrap_err();
        assert_eq!(
            err,
            MaintError::TaskCountExceedsHorizon {
                id: AircraftId(1),
                total: 4,
                time_slots: 2
            }
        );
    }

    /// Enumeration completeness: on a tiny instance, cross-check the solver's output against an
    /// independent brute-force enumerator.
    #[test]
    fn enumeration_completeness_against_brute_force() {
        let std: BTreeSet<Cell> = [Cell::new(0, 0)].into_iter().collect();
        let spc: BTreeSet<Cell> = [Cell::new(0, 1)].into_iter().collect();
        let prk: BTreeSet<Cell> = [Cell::new(1, 0), Cell::new(1, 1)].into_iter().collect();
        let aircraft = vec![single_std_aircraft(1, false, 0, 0), single_std_aircraft(2, false, 0, 0)];
        let instance = Instance::new(2, std.clone(), spc.clone(), prk.clone(), aircraft.clone()).unwrap();
        let solution = solve(&instance, &MaintConfig::default()).unwrap();

        let positions = instance.all_positions();
        let config = crate::constraints::active_constraints(MaintConfig::default().allow_non_jmb_adjacency);
        let mut brute_force = std::collections::HashSet::new();
        // Brute force over all (position choice per aircraft per slot) combinations.
        let n = positions.len();
        let total_vars = aircraft.len() * instance.time_slots as usize;
        let mut combo = vec![0usize; total_vars];
        loop {
            let mut assignment = crate::assignment::Assignment::new(&instance);
            for ai in 0..aircraft.len() {
                for slot in 0..instance.time_slots as usize {
                    let var = ai * instance.time_slots as usize + slot;
                    assignment.positions[ai].push(positions[combo[var]]);
                }
            }
            let mut ok = true;
            for slot in 0..instance.time_slots as usize {
                let placements: Vec<_> = aircraft
                    .iter()
                    .map(|a| crate::constraints::SlotPlacement {
                        aircraft: a.id,
                        kind: a.kind,
                        position: assignment.position_of(a.id, slot as u32).unwrap(),
                    })
                    .collect();
                if !config.iter().all(|c| c.check(&placements)) {
                    ok = false;
                    break;
                }
            }
            if ok {
                brute_force.insert(crate::dedup::canonicalize(&assignment));
            }

            // increment combo (mixed-radix counter base n)
            let mut i = 0;
            loop {
                if i == total_vars {
                    break;
                }
                combo[i] += 1;
                if combo[i] < n {
                    break;
                }
                combo[i] = 0;
                i += 1;
            }
            if i == total_vars {
                break;
            }
        }

        let solver_set: std::collections::HashSet<_> =
            solution.solutions.iter().map(crate::dedup::canonicalize).collect();
        assert_eq!(solution.total_count, brute_force.len());
        assert_eq!(solver_set, brute_force);
    }
}
