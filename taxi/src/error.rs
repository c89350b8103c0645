use crate::map::Cell;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxiError {
    #[error("agent {index} start cell {cell:?} is out of bounds or blocked")]
    InvalidStart { index: usize, cell: Cell },
    #[error("agent {index} goal cell {cell:?} is out of bounds or blocked")]
    InvalidGoal { index: usize, cell: Cell },
    #[error("no agents given")]
    NoAgents,
}
