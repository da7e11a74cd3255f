use crate::enclave::prelude::*;

/// The attributes of an occupied cell. Immutable once placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub color: Color,
    pub pattern: Pattern,
    pub owner: PlayerId,
}

impl Cell {
    /// Constructs a new cell.
    pub fn new(color: Color, pattern: Pattern, owner: PlayerId) -> Cell {
        Cell { color, pattern, owner }
    }
}

/// A cell on an Enclave board.
/// bits:
///     [00, 01]: colour
///     [02, 03]: pattern
///     [04, 11]: owner
///     [12, 12]: occupied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardCell(u16);

impl BoardCell {
    const COLOR_OFFSET: usize = 0x00;
    const COLOR_EXTENT: usize = 0b11; // B R Y
    const PATTERN_OFFSET: usize = 0x02;
    const PATTERN_EXTENT: usize = 0b11; // dots boxes diagonals
    const OWNER_OFFSET: usize = 0x04;
    const OWNER_EXTENT: usize = 0xff;
    const PRESENCE_OFFSET: usize = 0x0c;
    const PRESENCE_EXTENT: usize = 0b01; // Some None

    /// Packs an optional cell.
    pub fn from_cell(cell: Option<Cell>) -> BoardCell {
        BoardCell::default().with_cell(cell)
    }

    /// Determines whether or not a piece covers this cell.
    pub fn occupied(&self) -> bool {
        self._extract(BoardCell::PRESENCE_OFFSET, BoardCell::PRESENCE_EXTENT) == 1
    }

    /// Unpacks the cell, if occupied.
    pub fn cell(&self) -> Option<Cell> {
        if !self.occupied() {
            return None;
        }
        Some(Cell {
            color: Color::from(self._extract(BoardCell::COLOR_OFFSET, BoardCell::COLOR_EXTENT) as u8),
            pattern: Pattern::from(self._extract(BoardCell::PATTERN_OFFSET, BoardCell::PATTERN_EXTENT) as u8),
            owner: self._extract(BoardCell::OWNER_OFFSET, BoardCell::OWNER_EXTENT) as PlayerId,
        })
    }

    /// Produces a new board cell holding the given cell, or an empty one.
    pub fn with_cell(&self, cell: Option<Cell>) -> BoardCell {
        match cell {
            Some(Cell { color, pattern, owner }) => {
                self._with(BoardCell::PRESENCE_OFFSET, BoardCell::PRESENCE_EXTENT, 1)
                    ._with(BoardCell::COLOR_OFFSET, BoardCell::COLOR_EXTENT, color as u16)
                    ._with(BoardCell::PATTERN_OFFSET, BoardCell::PATTERN_EXTENT, pattern as u16)
                    ._with(BoardCell::OWNER_OFFSET, BoardCell::OWNER_EXTENT, owner as u16)
            }
            None => BoardCell::default(),
        }
    }

    /// Produces the value stored in the bits corresponding to a given offset and extent.
    fn _extract(&self, offset: usize, extent: usize) -> u16 {
        (self.0 >> offset) & extent as u16
    }

    /// Produces a new BoardCell with the given value placed into the bits corresponding to the given offset and extent.
    fn _with(&self, offset: usize, extent: usize, value: u16) -> BoardCell {
        let mask: u16 = (extent << offset) as u16;
        let antimask = !mask;
        let v = (value << offset) & mask;
        BoardCell((self.0 & antimask) | v) // mask out the value being replaced, then include the shifted bits of the new value
    }
}

impl std::fmt::Display for BoardCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell() {
            Some(cell) => write!(f, "{}", cell.color.notate()),
            None       => write!(f, "."),
        }
    }
}
