use itertools::Itertools;

use crate::enclave::prelude::*;

impl Board {
    /// Pretty-prints the board by colour.
    pub fn pretty(&self) -> String {
        self.cells.0.iter().map(|row| {
            row.iter().map(|cell| format!("{}", cell)).join("")
        }).join("\n")
    }

    /// Pretty-prints the board by pattern.
    pub fn pretty_patterns(&self) -> String {
        self.cells.0.iter().map(|row| {
            row.iter().map(|cell| cell.cell().map_or(".".into(), |c| c.pattern.notate())).join("")
        }).join("\n")
    }
}
