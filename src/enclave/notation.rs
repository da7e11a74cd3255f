use regex::Regex;

use crate::enclave::prelude::*;

impl std::str::FromStr for Piece {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new(r"^#(?<id>[0-9]+):(?<color>[BRY])(?<pattern>[o#/])\[(?<shape>[01]+(/[01]+)*)\]$")?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("could not parse piece {s}"));
        };

        let [id, color, fill, shape] = ["id", "color", "pattern", "shape"]
            .map(|name| matches.name(name).map_or("", |m| m.as_str()));

        Ok(Piece::new(id.parse()?, shape.parse()?, color.parse()?, fill.parse()?))
    }
}

/// Parses one three-character cell: colour, pattern, owner seat; `...` is empty.
fn _parse_cell(s: &str) -> std::result::Result<Option<Cell>, Error> {
    if s == "..." {
        return Ok(None);
    }
    let chars = s.chars().collect::<Vec<char>>();
    let [color, fill, owner] = chars[..] else {
        return Err(anyhow!("expected three characters for a cell, received {s}"));
    };
    let owner = owner.to_digit(10).ok_or_else(|| anyhow!("invalid owner {owner} in cell {s}"))?;
    Ok(Some(Cell::new(color.to_string().parse()?, fill.to_string().parse()?, owner as PlayerId)))
}

impl std::str::FromStr for Board {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let rows = s.split('|').collect::<Vec<&str>>();
        let size = rows.len();
        let mut board = Board::new(size);

        for (r, row) in rows.iter().enumerate() {
            let chars = row.chars().collect::<Vec<char>>();
            if chars.len() != size * 3 {
                return Err(anyhow!("row {r} of a {size}x{size} board must hold {size} cells: {row}"));
            }
            for (c, cell) in chars.chunks(3).enumerate() {
                let cell = _parse_cell(&cell.iter().collect::<String>())?;
                board.set_cell(&Coord::new(r, c), cell)?;
            }
        }
        Ok(board)
    }
}

/// A prepared starting position: an optional board and an optional marketplace.
///
/// Written as `<board>;<piece> <piece> ...`, where either side may be `-` to leave it to the engine.
#[derive(Clone, Debug)]
pub struct SetupString {
    pub repr: String,
    pub board: Option<Board>,
    pub marketplace: Option<Vec<Piece>>,
}

impl std::str::FromStr for SetupString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((board_str, market_str)) = s.split_once(';') else {
            return Err(anyhow!("setup string needs a board and a marketplace separated by ';': {s}"));
        };

        let board = match board_str.trim() {
            "-" | "" => None,
            b        => Some(b.parse::<Board>()?),
        };
        let marketplace = match market_str.trim() {
            "-" | "" => None,
            m        => Some(m.split_whitespace().map(|p| p.parse::<Piece>()).collect::<Result<Vec<_>>>()?),
        };

        Ok(SetupString { repr: s.to_owned(), board, marketplace })
    }
}
