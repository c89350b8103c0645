use smallvec::SmallVec;

use crate::map::Cell;

/// The tuple of current cells for every agent. This tuple *is* the search-state key; the
/// current time step is deliberately not part of it (SPEC_FULL.md §4.2).
pub type JointState = SmallVec<[Cell; 8]>;

/// One cardinal-or-wait move per agent, in agent-index order.
pub type JointMove = SmallVec<[Direction; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Wait,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::Wait => (0, 0),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::North => '↑',
            Direction::South => '↓',
            Direction::East => '→',
            Direction::West => '←',
            Direction::Wait => 'w',
        }
    }

    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Wait,
    ];
}
