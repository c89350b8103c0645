use crate::domain::{AircraftId, Cell};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MaintError {
    #[error("time_slots must be at least 1")]
    ZeroHorizon,
    #[error("STD/SPC/PRK position sets overlap at cell {cell:?}")]
    OverlappingPositions { cell: Cell },
    #[error("aircraft {id:?} appears more than once in the roster")]
    DuplicateAircraftId { id: AircraftId },
    #[error("aircraft {id:?} has t1+t2 ({total}) exceeding time_slots ({time_slots})")]
    TaskCountExceedsHorizon {
        id: AircraftId,
        total: u32,
        time_slots: u32,
    },
}
