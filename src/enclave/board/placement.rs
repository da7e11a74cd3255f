use crate::enclave::prelude::*;

impl Board {
    /// Decides whether an already-oriented shape can be placed with its top-left corner on `origin`:
    /// 1. every filled cell lands on the board,
    /// 2. no filled cell lands on a covered cell, and
    /// 3. unless this is the first placement of the game, some filled cell borders a covered cell.
    ///
    /// Pure; the board is never touched.
    pub fn can_place(&self, shape: &Shape, origin: Coord, first_move: bool) -> bool {
        if origin.row.saturating_add(shape.rows()) > self.size || origin.col.saturating_add(shape.cols()) > self.size {
            return false;
        }

        let mut touches = first_move;
        for oc in shape.cells_at(origin) {
            let coord = oc.coerce();
            if self.occupied_unchecked(&coord) {
                return false;
            }
            touches = touches || coord.neighbours(self.size).any(|n| self.occupied_unchecked(&n));
        }
        touches
    }

    /// The on-board cells a shape would cover at `origin`, dropping any that fall off the edge.
    /// An origin off the board covers nothing.
    pub fn footprint(&self, shape: &Shape, origin: Coord) -> Vec<Coord> {
        if !origin.in_bounds(self.size) {
            return vec![];
        }
        shape.cells_at(origin)
            .filter(|oc| oc.in_bounds_signed(self.size))
            .map(|oc| oc.coerce())
            .collect()
    }

    /// Determines whether the shape fits anywhere on the board in any of its 8 orientations.
    pub fn fits_anywhere(&self, shape: &Shape, first_move: bool) -> bool {
        Transform::all().iter().any(|transform| {
            let oriented = transform.apply(shape);
            self.coords().any(|origin| self.can_place(&oriented, origin, first_move))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::enclave::prelude::*;

    fn shape(s: &str) -> Shape {
        s.parse::<Shape>().unwrap()
    }

    fn red(owner: PlayerId) -> Cell {
        Cell::new(Color::Red, Pattern::Boxes, owner)
    }

    #[test]
    fn first_move_goes_anywhere_in_bounds() {
        let board = Board::new(12);
        let l = shape("111/100");
        assert!(board.can_place(&l, Coord::new(0, 0), true));
        assert!(board.can_place(&l, Coord::new(10, 9), true));
        assert!(!board.can_place(&l, Coord::new(11, 0), true));
        assert!(!board.can_place(&l, Coord::new(0, 10), true));
    }

    #[test]
    fn rejects_overlap() {
        let mut board = Board::new(12);
        board.set_cell(&Coord::new(5, 5), Some(red(0))).unwrap();
        let square = shape("11/11");
        assert!(!board.can_place(&square, Coord::new(4, 4), true));
        assert!(!board.can_place(&square, Coord::new(5, 5), false));
    }

    #[test]
    fn empty_shape_cells_may_overlap() {
        let mut board = Board::new(6);
        board.set_cell(&Coord::new(1, 0), Some(red(0))).unwrap();
        // the hole in the bottom-left of the J sits on the covered cell
        assert!(board.can_place(&shape("111/001"), Coord::new(0, 0), false));
    }

    #[test]
    fn later_moves_must_touch() {
        let mut board = Board::new(12);
        board.place_unchecked(&shape("11/11"), Coord::new(0, 0), red(0));
        let bar = shape("111");
        assert!(board.can_place(&bar, Coord::new(2, 0), false));
        assert!(board.can_place(&bar, Coord::new(0, 2), false));
        assert!(!board.can_place(&bar, Coord::new(3, 0), false));
        // diagonal contact does not count
        assert!(!board.can_place(&bar, Coord::new(2, 2), false));
    }

    #[test]
    fn footprint_clips_to_the_board() {
        let board = Board::new(4);
        let cells = board.footprint(&shape("111"), Coord::new(3, 2));
        assert_eq!(cells, vec![Coord::new(3, 2), Coord::new(3, 3)]);
    }

    #[test]
    fn far_off_origins_cover_nothing() {
        let board = Board::new(4);
        let bar = shape("1/1");
        let origin = Coord::new(isize::MAX as usize, 0);
        assert!(board.footprint(&bar, origin).is_empty());
        assert!(board.footprint(&bar, Coord::new(usize::MAX, usize::MAX)).is_empty());
        assert!(!board.can_place(&bar, origin, true));
    }

    #[test]
    fn full_board_fits_nothing() {
        let mut board = Board::new(4);
        for coord in board.coords().collect::<Vec<_>>() {
            board.set_cell(&coord, Some(red(1))).unwrap();
        }
        assert!(!board.fits_anywhere(&shape("1"), false));
    }
}
