/*
 *  A tile-laying enclosure game: players take turns placing coloured, patterned pieces on a shared
 *  grid, and score every colour or pattern group their placement walls in.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub(crate) mod game;
pub mod notation;
pub(crate) mod piece;
pub mod sets;
pub(crate) mod shape;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{
            Board, Cell, Grid,
            groups::{Attribute, AttributeValue, ByColor, ByPattern, GroupExtremes, GroupKey, GroupStatus, GroupsStatus},
            inspect::{GroupInspection, InspectedGroup},
        },
        consts::*,
        coords::{self, *},
        game::{
            CaptureKind, GameConfig, GameObserver, GameState, MoveOutcome, NullObserver, Phase, Player, Preview,
            Selection, Snapshot, newly_captured, winner,
        },
        notation::*,
        piece::{Piece, PieceGenerator, PieceId},
        sets::*,
        shape::{Shape, Transform, catalog},
    };

    pub use super::sets::SetOps;
}
