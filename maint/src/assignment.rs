use crate::domain::{AircraftId, Instance, Position};

/// A total mapping `(aircraft, slot) -> Position` for one solved instance.
///
/// Internally stored row-major (`positions[aircraft_index][slot]`) in the same aircraft order
/// as the originating `Instance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub(crate) aircraft_ids: Vec<AircraftId>,
    pub(crate) positions: Vec<Vec<Position>>,
}

impl Assignment {
    pub(crate) fn new(instance: &Instance) -> Self {
        Assignment {
            aircraft_ids: instance.aircraft.iter().map(|a| a.id).collect(),
            positions: vec![Vec::with_capacity(instance.time_slots as usize); instance.aircraft.len()],
        }
    }

    pub fn position_of(&self, id: AircraftId, slot: u32) -> Option<Position> {
        let idx = self.aircraft_ids.iter().position(|&a| a == id)?;
        self.positions[idx].get(slot as usize).copied()
    }

    pub fn positions_for(&self, id: AircraftId) -> Option<&[Position]> {
        let idx = self.aircraft_ids.iter().position(|&a| a == id)?;
        Some(&self.positions[idx])
    }

    pub fn aircraft_ids(&self) -> &[AircraftId] {
        &self.aircraft_ids
    }
}
