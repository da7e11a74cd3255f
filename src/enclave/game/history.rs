use super::*;

/// Everything a move can change, captured just before the move is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub players: Vec<Player>,
    pub marketplace: Vec<Piece>,
    pub current_player: usize,
    pub first_piece_placed: bool,
}

impl GameState {
    /// Captures the position for undo.
    pub(super) fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            players: self.players.clone(),
            marketplace: self.marketplace.clone(),
            current_player: self.current_player,
            first_piece_placed: self.first_piece_placed,
        }
    }

    /// Takes back the last move, restoring the board, scores, marketplace and turn exactly.
    ///
    /// Does nothing, and returns false, when there is no move to take back or the game is over.
    pub fn undo(&mut self) -> bool {
        if self.is_game_over() {
            log::debug!("undo ignored; the game is over");
            return false;
        }
        let Some(snapshot) = self.history.pop() else {
            log::debug!("undo ignored; no moves to take back");
            return false;
        };

        let Snapshot { board, players, marketplace, current_player, first_piece_placed } = snapshot;
        self.board = board;
        self.players = players;
        self.marketplace = marketplace;
        self.current_player = current_player;
        self.first_piece_placed = first_piece_placed;
        self.selection = None;
        self.phase = Phase::AwaitingSelection;

        log::debug!("undid a move; player {} to move", self.current_player);
        self.observer.on_undo();
        true
    }
}
