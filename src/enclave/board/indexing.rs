use super::BoardCell;
use crate::enclave::prelude::*;

impl Board {
    /// Gets the board cell at a given coordinate.
    pub(super) fn get(&self, coord: &Coord) -> Result<BoardCell> {
        if coord.in_bounds(self.size) {
            Ok(self.cells.0[coord.row][coord.col])
        } else {
            Err(self.out_of_range(coord))
        }
    }

    /// Gets a mutable reference to the board cell at a given coordinate.
    pub(super) fn get_mut(&mut self, coord: &Coord) -> Result<&mut BoardCell> {
        if coord.in_bounds(self.size) {
            Ok(&mut self.cells.0[coord.row][coord.col])
        } else {
            Err(self.out_of_range(coord))
        }
    }

    fn out_of_range(&self, coord: &Coord) -> Error {
        anyhow!("coordinate ({}) is outside the {}x{} board", coord.notate(), self.size, self.size)
    }
}

impl Board {
    /// Unchecked cell in the grid; engine use only. Panics off the board.
    pub(crate) fn cell_unchecked(&self, coord: &Coord) -> Option<Cell> {
        self.get_unchecked(coord).cell()
    }

    /// Unchecked occupancy of a cell in the grid; engine use only.
    pub(crate) fn occupied_unchecked(&self, coord: &Coord) -> bool {
        self.get_unchecked(coord).occupied()
    }

    /// Unchecked accessor into the grid; engine use only.
    pub(super) fn get_unchecked(&self, coord: &Coord) -> &BoardCell {
        &self.cells.0[coord.row][coord.col]
    }

    /// Unchecked mutable reference into the grid; engine use only.
    pub(super) fn get_mut_unchecked(&mut self, coord: &Coord) -> &mut BoardCell {
        &mut self.cells.0[coord.row][coord.col]
    }
}
