use crate::enclave::prelude::*;

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,

    /// Points from captured groups; only ever grows, except when a move is undone.
    pub score: u32,

    /// The colour the presentation layer shows this player in.
    pub display_color: Color,
}

impl Player {
    /// The player in the given seat, named and coloured by seat.
    pub fn seated(seat: usize) -> Player {
        let palette = Color::all();
        Player {
            name: format!("Player {}", seat + 1),
            score: 0,
            display_color: palette[seat % palette.len()],
        }
    }

    pub fn notate(&self) -> String {
        format!("{} ({}) {}", self.name, self.display_color.notate(), self.score)
    }
}
