use crate::enclave::prelude::*;

/// How many groups one move captured, for presentation layers that stage them differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureKind {
    Single,
    Multiple,
}

impl CaptureKind {
    /// The kind for a capture of `count` groups, if any were captured.
    pub fn of(count: usize) -> Option<CaptureKind> {
        match count {
            0 => None,
            1 => Some(CaptureKind::Single),
            _ => Some(CaptureKind::Multiple),
        }
    }
}

/// Receives notifications after the engine has committed a state change.
///
/// Notifications are fire-and-forget: the engine never waits on an observer and never
/// reads anything back from one.
pub trait GameObserver {
    /// One or more groups became enclosed on `player`'s move.
    fn on_capture(&mut self, _player: usize, _kind: CaptureKind, _groups: &[Vec<Coord>]) {}

    /// `player`'s score grew by `delta`, to `total`.
    fn on_score(&mut self, _player: usize, _delta: u32, _total: u32) {}

    /// No marketplace piece fits anywhere; the game is over.
    fn on_game_over(&mut self, _winner: Option<usize>, _players: &[Player]) {}

    /// The last move was taken back.
    fn on_undo(&mut self) {}
}

/// An observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
