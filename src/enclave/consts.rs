use crate::utils::prelude::*;

pub const DEFAULT_GRID_SIZE: usize = 12;
pub const MIN_GRID_SIZE: usize = 4;
pub const MAX_GRID_SIZE: usize = 32;
pub const MARKETPLACE_SIZE: usize = 7;
pub const MAX_PLAYERS: usize = 8;

/// Largest piece id a hand-stocked marketplace may use; everything above is left for dealing.
pub const MAX_STOCKED_PIECE_ID: u64 = u32::MAX as u64;

/// Fill ratio at and above which only tiny pieces (at most 3 cells) are dealt.
pub const CROWDED_FILL_RATIO: f64 = 0.85;

/// Fill ratio at and above which large pieces (5+ cells) stop being dealt.
pub const BUSY_FILL_RATIO: f64 = 0.60;

/// Index of a seat at the table, in turn order.
pub type PlayerId = u8;

// A piece colour.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Blue = 0,
    Red = 1,
    Yellow = 2,
}

impl Color {
    /// Gets the colours in palette order.
    pub fn all() -> [Color; 3] {
        [Color::Blue, Color::Red, Color::Yellow]
    }

    /// Notates the colour as a single letter.
    pub fn notate(&self) -> String {
        match self {
            Color::Blue   => "B",
            Color::Red    => "R",
            Color::Yellow => "Y"
        }.into()
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        match value {
            0 => Color::Blue,
            1 => Color::Red,
            2 => Color::Yellow,
            _ => panic!("expected Color of 0-2, received {value}"),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "B" | "b" | "blue"   => Ok(Color::Blue),
            "R" | "r" | "red"    => Ok(Color::Red),
            "Y" | "y" | "yellow" => Ok(Color::Yellow),
            _                    => Err(anyhow!("invalid notation {s} for Color"))
        }
    }
}

// A piece fill pattern.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pattern {
    Dots = 0,
    Boxes = 1,
    Diagonals = 2,
}

impl Pattern {
    /// Gets the patterns in palette order.
    pub fn all() -> [Pattern; 3] {
        [Pattern::Dots, Pattern::Boxes, Pattern::Diagonals]
    }

    /// Notates the pattern as a single glyph.
    pub fn notate(&self) -> String {
        match self {
            Pattern::Dots      => "o",
            Pattern::Boxes     => "#",
            Pattern::Diagonals => "/"
        }.into()
    }
}

impl From<u8> for Pattern {
    fn from(value: u8) -> Self {
        match value {
            0 => Pattern::Dots,
            1 => Pattern::Boxes,
            2 => Pattern::Diagonals,
            _ => panic!("expected Pattern of 0-2, received {value}"),
        }
    }
}

impl std::str::FromStr for Pattern {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "o" | "dots"          => Ok(Pattern::Dots),
            "#" | "boxes"         => Ok(Pattern::Boxes),
            "/" | "diagonals"     => Ok(Pattern::Diagonals),
            _                     => Err(anyhow!("invalid notation {s} for Pattern"))
        }
    }
}
