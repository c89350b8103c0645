/// A grid coordinate on the airfield map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub fn new(row: u32, col: u32) -> Self {
        Cell { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Open,
    /// Traversable, but may not be used as a wait cell (§4.2 wait-on-yellow restriction).
    Yellow,
    Blocked,
}

/// A 4-connected grid of `rows x cols` cells.
#[derive(Debug, Clone)]
pub struct Map {
    rows: u32,
    cols: u32,
    cells: Vec<CellKind>,
}

impl Map {
    pub fn new(rows: u32, cols: u32, cells: Vec<CellKind>) -> Self {
        assert_eq!(cells.len(), (rows * cols) as usize, "cell grid size mismatch");
        Map { rows, cols, cells }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.row * self.cols + cell.col) as usize
    }

    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        if self.in_bounds(cell) {
            Some(self.cells[self.index(cell)])
        } else {
            None
        }
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        matches!(self.kind(cell), None | Some(CellKind::Blocked))
    }

    pub fn is_yellow(&self, cell: Cell) -> bool {
        matches!(self.kind(cell), Some(CellKind::Yellow))
    }

    /// The 4-connected neighbors of `cell` that are within bounds and not blocked.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let west = cell.col.checked_sub(1).map(|c| Cell::new(cell.row, c));
        let east = Some(Cell::new(cell.row, cell.col + 1));
        let north = cell.row.checked_sub(1).map(|r| Cell::new(r, cell.col));
        let south = Some(Cell::new(cell.row + 1, cell.col));
        [north, south, west, east]
            .into_iter()
            .flatten()
            .filter(move |&c| !self.is_blocked(c))
    }

    /// All traversable (non-blocked) cells in row-major order.
    pub fn traversable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Cell::new(r, c)))
            .filter(move |&c| !self.is_blocked(c))
    }
}
