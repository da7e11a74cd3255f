use std::{cell::RefCell, rc::Rc};

use itertools::Itertools;

use crate::prelude::*;

/// Collects engine notifications as protocol lines, to be flushed with the next response.
#[derive(Clone, Debug, Default)]
pub struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    /// Takes every line recorded so far.
    pub fn drain(&self) -> Vec<String> {
        self.0.borrow_mut().drain(..).collect()
    }

    fn push(&self, line: String) {
        self.0.borrow_mut().push(line);
    }
}

impl GameObserver for EventLog {
    fn on_capture(&mut self, player: usize, kind: CaptureKind, groups: &[Vec<Coord>]) {
        let kind = match kind {
            CaptureKind::Single   => "single",
            CaptureKind::Multiple => "multiple",
        };
        for group in groups {
            self.push(format!("capture {kind} {player} {} {}", group.len(), group.iter().map(|c| c.notate()).join(" ")));
        }
    }

    fn on_score(&mut self, player: usize, delta: u32, total: u32) {
        self.push(format!("score {player} +{delta} {total}"));
    }

    fn on_game_over(&mut self, winner: Option<usize>, players: &[Player]) {
        let name = winner.and_then(|w| players.get(w)).map_or("nobody".to_owned(), |p| p.name.clone());
        self.push(format!("gameover {name}"));
    }

    fn on_undo(&mut self) {
        self.push("undone".into());
    }
}
