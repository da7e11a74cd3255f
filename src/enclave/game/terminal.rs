use itertools::Itertools;

use super::*;

impl GameState {
    /// Determines whether any marketplace piece fits anywhere on the board in any orientation.
    ///
    /// An exhaustive search over pieces, the 8 orientations and every origin; returns on the
    /// first legal placement found.
    pub fn can_any_piece_be_placed(&self) -> bool {
        let first_move = !self.first_piece_placed;
        self.marketplace.iter().any(|piece| self.board.fits_anywhere(&piece.shape, first_move))
    }
}

/// The seat with the strictly highest score; among tied seats, the earliest in turn order.
pub fn winner(players: &[Player]) -> Option<usize> {
    players.iter().position_min_by_key(|p| std::cmp::Reverse(p.score))
}
