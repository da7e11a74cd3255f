pub mod generator;

use super::prelude::*;

pub use generator::PieceGenerator;

/// Unique identity of a dealt piece for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u64);

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PieceId {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let id = s.trim_start_matches('#').parse::<u64>().with_context(|| format!("invalid piece id {s}"))?;
        Ok(PieceId(id))
    }
}

/// A piece in the marketplace. Its shape is the base orientation; pieces are never mutated,
/// and orientations are produced on demand from the base shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub shape: Shape,
    pub color: Color,
    pub pattern: Pattern,
}

impl Piece {
    /// Constructs a new piece.
    pub fn new(id: PieceId, shape: Shape, color: Color, pattern: Pattern) -> Piece {
        Piece { id, shape, color, pattern }
    }

    /// The piece's shape in the given orientation.
    pub fn oriented(&self, transform: Transform) -> Shape {
        transform.apply(&self.shape)
    }

    /// The canonical notation for the piece, e.g. `#12:Bo[11/11]` for a blue dotted square.
    pub fn notate(&self) -> String {
        format!("#{}:{}{}[{}]", self.id, self.color.notate(), self.pattern.notate(), self.shape.notate())
    }
}
