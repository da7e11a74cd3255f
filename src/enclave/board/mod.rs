pub(crate) mod board_cell;
pub(crate) mod groups;
pub(crate) mod indexing;
pub(crate) mod inspect;
pub(crate) mod placement;
pub(crate) mod pretty;

use super::prelude::*;

use board_cell::BoardCell;
pub use board_cell::Cell;

/// The grid of cells on an Enclave board; every row has the same length as the number of rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid(Vec<Vec<BoardCell>>);

impl Grid {
    /// An empty square grid.
    pub fn empty(size: usize) -> Grid {
        Grid(vec![vec![BoardCell::default(); size]; size])
    }

    /// Three characters per cell (colour, pattern, owner seat) or `...` when empty; rows joined by `|`.
    pub fn notate(&self) -> String {
        self.0.iter().map(|row| {
            row.iter().map(|cell| {
                cell.cell().map_or("...".into(), |c| format!("{}{}{}", c.color.notate(), c.pattern.notate(), c.owner))
            }).collect::<String>()
        }).collect::<Vec<String>>().join("|")
    }
}

/// A square board that pieces are placed onto. Cells are only ever filled, never cleared,
/// except by restoring an earlier board wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The side length of the grid.
    size: usize,

    /// A grid of squares on the board, each either empty or covered by part of a piece.
    cells: Grid,

    /// The number of covered squares, kept so fill ratio queries do not rescan the grid.
    occupied: usize,
}

impl Board {
    /// Returns a new empty board with the given side length.
    pub fn new(size: usize) -> Board {
        Board { size, cells: Grid::empty(size), occupied: 0 }
    }

    /// The side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The board notation; see `Grid::notate`.
    pub fn notate(&self) -> String {
        self.cells.notate()
    }

    /// Determines the contents of the cell at a given row and column on the board.
    pub fn cell(&self, coord: &Coord) -> Result<Option<Cell>> {
        self.get(coord).map(|v| v.cell())
    }

    /// Sets the cell at a given row and column on the board, keeping the occupancy count in step.
    pub fn set_cell(&mut self, coord: &Coord, cell: Option<Cell>) -> Result<&mut Self> {
        let r = self.get_mut(coord)?;
        let was_occupied = r.occupied();
        *r = r.with_cell(cell);
        match (was_occupied, cell.is_some()) {
            (false, true) => self.occupied += 1,
            (true, false) => self.occupied -= 1,
            _             => {}
        }
        Ok(self)
    }

    /// The number of covered cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// The fraction of cells that are covered, from 0 to 1.
    pub fn fill_ratio(&self) -> f64 {
        self.occupied as f64 / (self.size * self.size) as f64
    }

    /// Determines whether no piece has been placed.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Every coordinate on the board in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Writes the filled cells of a shape onto the board with no checks; engine use only.
    pub(crate) fn place_unchecked(&mut self, shape: &Shape, origin: Coord, cell: Cell) -> Vec<Coord> {
        let covered = shape.cells_at(origin).map(|c| c.coerce()).collect::<Vec<_>>();
        for coord in covered.iter() {
            let r = self.get_mut_unchecked(coord);
            debug_assert!(!r.occupied(), "placing over occupied cell {coord}");
            *r = r.with_cell(Some(cell));
        }
        self.occupied += covered.len();
        covered
    }
}
