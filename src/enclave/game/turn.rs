use super::*;

/// What happened when a placement was attempted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the placement was legal and committed. A rejected placement changes nothing.
    pub accepted: bool,

    /// The seat that made the move.
    pub player: usize,

    /// The cells the piece now covers.
    pub placed: Vec<Coord>,

    /// Points credited to `player` by this move.
    pub score_delta: u32,

    /// The cells of every group this move enclosed, colour groups before pattern groups.
    pub captured_groups: Vec<Vec<Coord>>,

    pub game_over: bool,
    pub winner: Option<usize>,
}

impl MoveOutcome {
    fn rejected(player: usize) -> MoveOutcome {
        MoveOutcome { player, ..MoveOutcome::default() }
    }

    /// Whether this move captured one group or several.
    pub fn capture_kind(&self) -> Option<CaptureKind> {
        CaptureKind::of(self.captured_groups.len())
    }
}

/// Where the held piece would land at some origin, and whether it may go there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    /// The on-board cells the oriented piece would cover.
    pub cells: Vec<Coord>,
    pub legal: bool,
}

/// The groups that are enclosed in `after` but were absent from, or open in, `before`.
///
/// A group whose membership changed has a new key, so a group that grew (or two open groups
/// that merged) and became enclosed is captured once, at its full size.
pub fn newly_captured<'a>(before: &GroupsStatus, after: &'a GroupsStatus) -> Vec<&'a GroupStatus> {
    after.iter().filter(|(key, group)| {
        group.enclosed && !before.get(*key).is_some_and(|g| g.enclosed)
    }).map(|(_, group)| group).collect()
}

impl GameState {
    /// Shows where the held piece would land with its top-left corner at (row, col).
    pub fn preview(&self, row: usize, col: usize) -> Result<Preview> {
        let Some(shape) = self.selected_shape() else {
            return Err(anyhow!("no piece selected"));
        };
        let origin = Coord::new(row, col);
        Ok(Preview {
            cells: self.board.footprint(&shape, origin),
            legal: !self.is_game_over() && self.board.can_place(&shape, origin, !self.first_piece_placed),
        })
    }

    /// Places the held piece with its top-left corner at (row, col) and resolves the move:
    /// 1. validate the placement; an illegal one is rejected with nothing changed,
    /// 2. remember the position for undo,
    /// 3. write the piece onto the board for the current player,
    /// 4. diff the group snapshots from before and after, and credit every newly enclosed group,
    /// 5. refill the marketplace slot, pass the turn, and check whether anything still fits.
    pub fn attempt_placement(&mut self, row: usize, col: usize) -> Result<MoveOutcome> {
        self.ensure_running()?;
        let Some(selection) = self.selection else {
            return Err(anyhow!("no piece selected"));
        };
        let Some(slot) = self.marketplace.iter().position(|p| p.id == selection.piece) else {
            return Err(anyhow!("selected piece #{} is no longer in the marketplace", selection.piece));
        };

        let piece = self.marketplace[slot].clone();
        let shape = piece.oriented(selection.transform);
        let origin = Coord::new(row, col);
        let player = self.current_player;

        if !self.board.can_place(&shape, origin, !self.first_piece_placed) {
            log::debug!("rejected {} at {} for player {}", piece.notate(), origin, player);
            return Ok(MoveOutcome::rejected(player));
        }

        self.phase = Phase::Resolving;
        let before = self.board.groups_status();
        let snapshot = self.snapshot();
        self.history.push(snapshot);

        let cell = Cell::new(piece.color, piece.pattern, player as PlayerId);
        let placed = self.board.place_unchecked(&shape, origin, cell);
        self.first_piece_placed = true;

        let after = self.board.groups_status();
        let captured = newly_captured(&before, &after);
        let score_delta = captured.iter().map(|g| g.size as u32).sum::<u32>();
        let captured_groups = captured.iter().map(|g| g.cells.clone()).collect::<Vec<_>>();
        for group in captured.iter() {
            log::debug!("captured {} group of {} for player {}", group.attribute.notate(), group.size, player);
        }
        self.players[player].score += score_delta;

        self.marketplace[slot] = self.generator.generate(self.board.fill_ratio());
        self.current_player = (self.current_player + 1) % self.players.len();
        self.selection = None;

        let game_over = !self.can_any_piece_be_placed();
        if game_over {
            self.phase = Phase::GameOver;
            self.winner = winner(&self.players);
            log::info!("game over; winner: {:?}", self.winner.map(|w| &self.players[w].name));
        } else {
            self.phase = Phase::AwaitingSelection;
        }

        log::debug!(
            "player {} placed {} at {} for {} points",
            player, piece.notate(), origin, score_delta
        );

        let outcome = MoveOutcome {
            accepted: true,
            player,
            placed,
            score_delta,
            captured_groups,
            game_over,
            winner: self.winner,
        };
        self.notify(&outcome);
        Ok(outcome)
    }

    fn notify(&mut self, outcome: &MoveOutcome) {
        if let Some(kind) = outcome.capture_kind() {
            self.observer.on_capture(outcome.player, kind, &outcome.captured_groups);
        }
        if outcome.score_delta > 0 {
            let total = self.players[outcome.player].score;
            self.observer.on_score(outcome.player, outcome.score_delta, total);
        }
        if outcome.game_over {
            self.observer.on_game_over(outcome.winner, &self.players);
        }
    }
}
