pub mod config;
pub mod history;
pub mod observer;
pub mod player;
pub mod terminal;
pub mod turn;

#[cfg(test)]
mod tests;

use super::prelude::*;

pub use config::GameConfig;
pub use history::Snapshot;
pub use observer::{CaptureKind, GameObserver, NullObserver};
pub use player::Player;
pub use terminal::winner;
pub use turn::{MoveOutcome, Preview, newly_captured};

/// Where a game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The current player has not picked a piece yet.
    AwaitingSelection,
    /// A piece is selected and may be oriented and placed.
    AwaitingPlacement,
    /// A placement is being committed and scored.
    Resolving,
    /// No marketplace piece fits anywhere.
    GameOver,
}

/// The piece the current player is holding, and how it is turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub piece: PieceId,
    pub transform: Transform,
}

/// The full state of one game. This is the only owner of the board and the players;
/// everything else reads them through it.
pub struct GameState {
    config: GameConfig,
    board: Board,
    players: Vec<Player>,

    /// Index into `players` of whoever moves next, round-robin.
    current_player: usize,

    /// The pieces on offer; a placed piece's slot is refilled in place.
    marketplace: Vec<Piece>,
    selection: Option<Selection>,
    phase: Phase,

    /// Until a piece is on the board, placements need not touch anything.
    first_piece_placed: bool,
    winner: Option<usize>,

    /// Pre-move snapshots, most recent last.
    history: Vec<Snapshot>,
    generator: PieceGenerator,
    observer: Box<dyn GameObserver>,
}

impl GameState {
    /// Starts a game: empty grid, scores at zero, marketplace dealt to capacity.
    pub fn new(config: GameConfig) -> Result<GameState> {
        config.validate()?;

        let mut generator = PieceGenerator::new(config.seed);
        let board = Board::new(config.grid_size);
        let marketplace = (0..config.marketplace_size)
            .map(|_| generator.generate(board.fill_ratio()))
            .collect::<Vec<_>>();

        log::info!(
            "new game: {} players on a {}x{} board, {} pieces on offer",
            config.player_count, config.grid_size, config.grid_size, config.marketplace_size
        );

        Ok(GameState {
            players: (0..config.player_count).map(Player::seated).collect(),
            config,
            board,
            current_player: 0,
            marketplace,
            selection: None,
            phase: Phase::AwaitingSelection,
            first_piece_placed: false,
            winner: None,
            history: vec![],
            generator,
            observer: Box::new(NullObserver),
        })
    }

    /// Starts a game from a prepared position: a pre-filled board and/or a stocked marketplace.
    ///
    /// A non-empty board counts as having had its first piece placed.
    pub fn from_setup(config: GameConfig, board: Option<Board>, marketplace: Option<Vec<Piece>>) -> Result<GameState> {
        let mut state = GameState::new(config)?;

        if let Some(board) = board {
            if board.size() != state.config.grid_size {
                return Err(anyhow!(
                    "setup board is {}x{}, expected {}x{}",
                    board.size(), board.size(), state.config.grid_size, state.config.grid_size
                ));
            }
            state.first_piece_placed = !board.is_empty();
            state.board = board;
        }

        if let Some(pieces) = marketplace {
            if pieces.len() != state.config.marketplace_size {
                return Err(anyhow!(
                    "setup marketplace has {} pieces, expected {}", pieces.len(), state.config.marketplace_size
                ));
            }
            let ids = pieces.iter().map(|p| p.id).collect::<HashSet<_>>();
            if ids.len() != pieces.len() {
                return Err(anyhow!("setup marketplace repeats a piece id"));
            }
            if let Some(highest) = ids.iter().max() {
                state.generator.reserve_through(*highest)?;
            }
            state.marketplace = pieces;
        }
        Ok(state)
    }

    /// Replaces this game with a fresh one for the given table and grid, keeping the
    /// marketplace size, seed and observer.
    pub fn new_game(&mut self, player_count: usize, grid_size: usize) -> Result<()> {
        let config = self.config.clone().with_players(player_count).with_grid_size(grid_size);
        let fresh = GameState::new(config)?;
        let observer = std::mem::replace(&mut self.observer, Box::new(NullObserver));
        *self = GameState { observer, ..fresh };
        Ok(())
    }

    /// Routes notifications to the given observer from now on.
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = observer;
    }

    // selection

    /// Picks up a marketplace piece. Picking up the piece already held keeps its orientation;
    /// picking up a different one resets it.
    pub fn select_piece(&mut self, id: PieceId) -> Result<()> {
        self.ensure_running()?;
        if self.piece(id).is_none() {
            return Err(anyhow!("no piece #{id} in the marketplace"));
        }
        let transform = match self.selection {
            Some(s) if s.piece == id => s.transform,
            _                        => Transform::Identity__,
        };
        self.selection = Some(Selection { piece: id, transform });
        self.phase = Phase::AwaitingPlacement;
        Ok(())
    }

    /// Sets the number of clockwise quarter turns (modulo 4) on the held piece.
    pub fn set_rotation(&mut self, rotation: u8) -> Result<()> {
        self.reorient(|t| t.with_rotation(rotation))
    }

    /// Sets whether the held piece is mirrored.
    pub fn set_flip(&mut self, flipped: bool) -> Result<()> {
        self.reorient(|t| t.with_flip(flipped))
    }

    /// Turns the held piece another quarter turn clockwise.
    pub fn rotate(&mut self) -> Result<()> {
        self.reorient(|t| t.rotate())
    }

    /// Toggles the mirroring of the held piece.
    pub fn flip(&mut self) -> Result<()> {
        self.reorient(|t| t.reflect())
    }

    fn reorient(&mut self, f: impl FnOnce(&Transform) -> Transform) -> Result<()> {
        self.ensure_running()?;
        let Some(selection) = self.selection.as_mut() else {
            return Err(anyhow!("no piece selected"));
        };
        selection.transform = f(&selection.transform);
        Ok(())
    }

    // queries

    /// The contents of a cell; errors off the board.
    pub fn cell(&self, row: usize, col: usize) -> Result<Option<Cell>> {
        self.board.cell(&Coord::new(row, col))
    }

    /// Inspects the colour and pattern groups through an occupied cell.
    pub fn group_at(&self, row: usize, col: usize) -> Result<Option<GroupInspection>> {
        self.board.inspect(&Coord::new(row, col))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn marketplace(&self) -> &[Piece] {
        &self.marketplace
    }

    /// A marketplace piece by id.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.marketplace.iter().find(|p| p.id == id)
    }

    /// The index of the player to move.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The held piece's shape in its current orientation.
    pub fn selected_shape(&self) -> Option<Shape> {
        let selection = self.selection?;
        self.piece(selection.piece).map(|p| p.oriented(selection.transform))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The winning seat once the game is over.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Whether no piece has been placed yet, so the next placement need not touch anything.
    pub fn is_first_move(&self) -> bool {
        !self.first_piece_placed
    }

    /// The number of moves that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_game_over() {
            Err(anyhow!("the game is over"))
        } else {
            Ok(())
        }
    }
}
