//! Canonicalization and deduplication of solved assignments.
//!
//! Two assignments are equivalent when, for every aircraft, the multiset of positions it
//! occupies across the horizon is the same (order within the horizon does not matter for
//! equivalence, only the per-aircraft multiset).

use crate::assignment::Assignment;
use crate::domain::{AircraftId, Position};

/// Canonical form: the tuple, sorted by aircraft id, of sorted-position tuples.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalForm(Vec<(AircraftId, Vec<Position>)>);

pub fn canonicalize(assignment: &Assignment) -> CanonicalForm {
    let mut entries: Vec<(AircraftId, Vec<Position>)> = assignment
        .aircraft_ids
        .iter()
        .zip(assignment.positions.iter())
        .map(|(&id, positions)| {
            let mut sorted = positions.clone();
            sorted.sort();
            (id, sorted)
        })
        .collect();
    entries.sort_by_key(|(id, _)| *id);
    CanonicalForm(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_is_idempotent() {
        let a = Assignment {
            aircraft_ids: vec![AircraftId(2), AircraftId(1)],
            positions: vec![
                vec![Position {
                    cell: crate::domain::Cell::new(0, 0),
                    kind: crate::domain::PositionKind::Std,
                }],
                vec![Position {
                    cell: crate::domain::Cell::new(0, 1),
                    kind: crate::domain::PositionKind::Spc,
                }],
            ],
        };
        let c1 = canonicalize(&a);
        // Canonicalizing an assignment built from the same underlying data twice yields the
        // same canonical form.
        let c2 = canonicalize(&a);
        assert_eq!(c1, c2);
    }
}
