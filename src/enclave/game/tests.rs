use std::{cell::RefCell, rc::Rc};

use super::*;

fn piece(id: u64, shape: &str, color: Color, pattern: Pattern) -> Piece {
    Piece::new(PieceId(id), shape.parse().unwrap(), color, pattern)
}

fn fill(board: &mut Board, coords: impl IntoIterator<Item = (usize, usize)>, cell: Cell) {
    for (row, col) in coords {
        board.set_cell(&Coord::new(row, col), Some(cell)).unwrap();
    }
}

fn play(game: &mut GameState, id: u64, row: usize, col: usize) -> MoveOutcome {
    game.select_piece(PieceId(id)).unwrap();
    game.attempt_placement(row, col).unwrap()
}

/// A red wall down column 4 and along row 4, leaving a 4x4 pocket in the top-left corner,
/// and four blue 2x2 squares on offer.
fn pocket_game() -> GameState {
    let mut board = Board::new(DEFAULT_GRID_SIZE);
    let wall = Cell::new(Color::Red, Pattern::Dots, 0);
    fill(&mut board, (0..=4).map(|r| (r, 4)), wall);
    fill(&mut board, (0..4).map(|c| (4, c)), wall);

    let config = GameConfig::new().with_marketplace_size(4).with_seed(7);
    let squares = (0..4).map(|id| piece(id, "11/11", Color::Blue, Pattern::Dots)).collect();
    GameState::from_setup(config, Some(board), Some(squares)).unwrap()
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl GameObserver for Recorder {
    fn on_capture(&mut self, player: usize, kind: CaptureKind, groups: &[Vec<Coord>]) {
        self.0.borrow_mut().push(format!("capture {player} {kind:?} {}", groups.len()));
    }

    fn on_score(&mut self, player: usize, delta: u32, total: u32) {
        self.0.borrow_mut().push(format!("score {player} {delta} {total}"));
    }

    fn on_game_over(&mut self, winner: Option<usize>, _players: &[Player]) {
        self.0.borrow_mut().push(format!("gameover {winner:?}"));
    }

    fn on_undo(&mut self) {
        self.0.borrow_mut().push("undo".into());
    }
}

#[test]
fn new_game_deals_a_full_marketplace() {
    let game = GameState::new(GameConfig::new().with_seed(3)).unwrap();
    assert_eq!(game.marketplace().len(), MARKETPLACE_SIZE);
    assert_eq!(game.players().len(), 2);
    assert!(game.players().iter().all(|p| p.score == 0));
    assert_eq!(game.players()[1].name, "Player 2");
    assert!(game.board().is_empty());
    assert!(game.is_first_move());
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.current_player(), 0);
}

#[test]
fn seeded_games_deal_the_same_pieces() {
    let a = GameState::new(GameConfig::new().with_seed(99)).unwrap();
    let b = GameState::new(GameConfig::new().with_seed(99)).unwrap();
    assert_eq!(a.marketplace(), b.marketplace());
}

#[test]
fn refuses_bad_configurations() {
    assert!(GameState::new(GameConfig::new().with_players(0)).is_err());
    assert!(GameState::new(GameConfig::new().with_players(MAX_PLAYERS + 1)).is_err());
    assert!(GameState::new(GameConfig::new().with_grid_size(MIN_GRID_SIZE - 1)).is_err());
    assert!(GameState::new(GameConfig::new().with_grid_size(MAX_GRID_SIZE + 1)).is_err());
    assert!(GameState::new(GameConfig::new().with_marketplace_size(0)).is_err());

    let mut game = GameState::new(GameConfig::new().with_seed(1)).unwrap();
    assert!(game.new_game(9, 12).is_err());
    assert_eq!(game.players().len(), 2);
    game.new_game(4, 8).unwrap();
    assert_eq!(game.players().len(), 4);
    assert_eq!(game.board().size(), 8);
}

#[test]
fn cells_off_the_board_are_errors() {
    let game = GameState::new(GameConfig::new().with_seed(1)).unwrap();
    assert!(game.cell(12, 0).is_err());
    assert!(game.cell(0, 12).is_err());
    assert_eq!(game.cell(11, 11).unwrap(), None);
    assert!(game.group_at(12, 12).is_err());
    assert_eq!(game.group_at(0, 0).unwrap(), None);
}

#[test]
fn selection_keeps_orientation_only_for_the_same_piece() {
    let market = (0..3).map(|id| piece(id, "111/100", Color::Yellow, Pattern::Boxes)).collect();
    let config = GameConfig::new().with_marketplace_size(3).with_seed(5);
    let mut game = GameState::from_setup(config, None, Some(market)).unwrap();

    assert!(game.rotate().is_err());
    assert!(game.select_piece(PieceId(40)).is_err());

    game.select_piece(PieceId(0)).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingPlacement);
    game.rotate().unwrap();
    game.flip().unwrap();
    let turned = game.selection().unwrap().transform;
    assert_eq!(turned.rotation(), 1);
    assert!(turned.flipped());

    game.select_piece(PieceId(0)).unwrap();
    assert_eq!(game.selection().unwrap().transform, turned);

    game.select_piece(PieceId(1)).unwrap();
    assert_eq!(game.selection().unwrap().transform, Transform::Identity__);

    game.set_rotation(6).unwrap();
    game.set_flip(false).unwrap();
    assert_eq!(game.selection().unwrap().transform.rotation(), 2);
    assert_eq!(game.selected_shape().unwrap().notate(), "001/111");
}

#[test]
fn first_move_goes_anywhere_then_moves_must_touch() {
    let market = (0..2).map(|id| piece(id, "11/11", Color::Blue, Pattern::Boxes)).collect();
    let config = GameConfig::new().with_marketplace_size(2).with_seed(5);
    let mut game = GameState::from_setup(config, None, Some(market)).unwrap();

    assert!(!play(&mut game, 0, 11, 11).accepted);
    let outcome = play(&mut game, 0, 5, 5);
    assert!(outcome.accepted);
    assert_eq!(outcome.placed.len(), 4);
    assert!(!game.is_first_move());
    assert_eq!(game.current_player(), 1);

    // a freshly dealt piece took the placed one's slot
    assert!(game.piece(PieceId(0)).is_none());
    assert_eq!(game.marketplace().len(), 2);

    let before = (game.board().clone(), game.marketplace().to_vec(), game.history_len());
    assert!(!play(&mut game, 1, 0, 0).accepted);
    assert!(!play(&mut game, 1, 6, 6).accepted);
    assert_eq!((game.board().clone(), game.marketplace().to_vec(), game.history_len()), before);
    assert_eq!(game.current_player(), 1);

    assert!(play(&mut game, 1, 7, 5).accepted);
    assert_eq!(game.cell(7, 5).unwrap().map(|c| c.owner), Some(1));
}

#[test]
fn oversized_stocked_ids_are_refused() {
    let config = GameConfig::new().with_marketplace_size(2).with_seed(5);
    let market = vec![piece(u64::MAX, "1", Color::Blue, Pattern::Dots), piece(1, "1", Color::Red, Pattern::Dots)];
    assert!(GameState::from_setup(config.clone(), None, Some(market)).is_err());

    let market = vec![piece(MAX_STOCKED_PIECE_ID, "1", Color::Blue, Pattern::Dots), piece(1, "1", Color::Red, Pattern::Dots)];
    let mut game = GameState::from_setup(config, None, Some(market)).unwrap();
    let outcome = play(&mut game, 1, 0, 0);
    assert!(outcome.accepted);
    assert!(game.piece(PieceId(MAX_STOCKED_PIECE_ID + 1)).is_some());
}

#[test]
fn placing_requires_a_selection() {
    let mut game = GameState::new(GameConfig::new().with_seed(2)).unwrap();
    assert!(game.attempt_placement(0, 0).is_err());
    assert!(game.preview(0, 0).is_err());
}

#[test]
fn preview_clips_and_judges() {
    let market = vec![piece(0, "111", Color::Red, Pattern::Dots)];
    let config = GameConfig::new().with_marketplace_size(1).with_seed(5);
    let mut game = GameState::from_setup(config, None, Some(market)).unwrap();
    game.select_piece(PieceId(0)).unwrap();

    let preview = game.preview(0, 10).unwrap();
    assert_eq!(preview.cells, vec![Coord::new(0, 10), Coord::new(0, 11)]);
    assert!(!preview.legal);

    let preview = game.preview(usize::MAX / 2, 0).unwrap();
    assert!(preview.cells.is_empty());
    assert!(!preview.legal);

    let preview = game.preview(4, 4).unwrap();
    assert_eq!(preview.cells.len(), 3);
    assert!(preview.legal);
    assert!(game.board().is_empty());
}

#[test]
fn filling_a_walled_pocket_captures_sixteen() {
    // the red wall closes the two sides the board edge leaves open; without it the 4x4 block
    // would border empty cells and never be enclosed
    let mut game = pocket_game();
    let recorder = Recorder::default();
    game.set_observer(Box::new(recorder.clone()));

    for (id, row, col) in [(0, 2, 2), (1, 0, 2), (2, 2, 0)] {
        let outcome = play(&mut game, id, row, col);
        assert!(outcome.accepted);
        assert!(outcome.captured_groups.is_empty());
        assert_eq!(outcome.score_delta, 0);
    }
    assert!(recorder.0.borrow().is_empty());

    let outcome = play(&mut game, 3, 0, 0);
    assert!(outcome.accepted);
    assert_eq!(outcome.player, 1);
    assert_eq!(outcome.captured_groups.len(), 1);
    assert_eq!(outcome.captured_groups[0].len(), 16);
    assert_eq!(outcome.score_delta, 16);
    assert_eq!(outcome.capture_kind(), Some(CaptureKind::Single));
    assert_eq!(game.players()[1].score, 16);
    assert_eq!(game.players()[0].score, 0);

    let events = recorder.0.borrow();
    assert_eq!(events[0], "capture 1 Single 1");
    assert_eq!(events[1], "score 1 16 16");
}

#[test]
fn merged_groups_score_once_at_full_size() {
    let mut board = Board::new(4);
    let wall = Cell::new(Color::Red, Pattern::Dots, 1);
    fill(&mut board, [(0, 3), (1, 0), (1, 1), (1, 2)], wall);
    fill(&mut board, [(0, 0), (0, 2)], Cell::new(Color::Blue, Pattern::Dots, 1));

    let config = GameConfig::new().with_grid_size(4).with_marketplace_size(1).with_seed(5);
    let market = vec![piece(0, "1", Color::Blue, Pattern::Dots)];
    let mut game = GameState::from_setup(config, Some(board), Some(market)).unwrap();

    let outcome = play(&mut game, 0, 0, 1);
    assert_eq!(outcome.captured_groups, vec![vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]]);
    assert_eq!(outcome.score_delta, 3);
}

#[test]
fn walled_in_cell_is_enclosed_and_ends_the_game() {
    let mut board = Board::new(12);
    let filler = Cell::new(Color::Red, Pattern::Boxes, 1);
    let rest = board.coords().filter(|c| *c != Coord::new(5, 5)).map(|c| (c.row, c.col)).collect::<Vec<_>>();
    fill(&mut board, rest, filler);

    let config = GameConfig::new().with_marketplace_size(1).with_seed(5);
    let market = vec![piece(0, "1", Color::Blue, Pattern::Dots)];
    let mut game = GameState::from_setup(config, Some(board), Some(market)).unwrap();
    let recorder = Recorder::default();
    game.set_observer(Box::new(recorder.clone()));

    let outcome = play(&mut game, 0, 5, 5);
    assert!(outcome.accepted);

    let inspection = game.group_at(5, 5).unwrap().unwrap();
    assert_eq!(inspection.color.cells, vec![Coord::new(5, 5)]);
    assert!(inspection.color.enclosed);
    assert!(inspection.coincide());

    // the single cell, and the filler it walls in, in both colour and pattern
    assert_eq!(outcome.captured_groups[0], vec![Coord::new(5, 5)]);
    assert_eq!(outcome.captured_groups.len(), 4);
    assert_eq!(outcome.score_delta, 2 * 143 + 2);
    assert_eq!(outcome.capture_kind(), Some(CaptureKind::Multiple));

    assert!(outcome.game_over);
    assert_eq!(outcome.winner, Some(0));
    assert!(game.is_game_over());
    assert_eq!(recorder.0.borrow().last().map(String::as_str), Some("gameover Some(0)"));

    assert!(game.select_piece(game.marketplace()[0].id).is_err());
    assert!(!game.undo());
    assert_eq!(game.players()[0].score, 288);
}

#[test]
fn game_ends_only_when_nothing_fits_anywhere() {
    // empty cells only at the two corners on the main diagonal
    let mut board = Board::new(4);
    let filler = Cell::new(Color::Yellow, Pattern::Diagonals, 0);
    let holes = [Coord::new(0, 0), Coord::new(3, 3)];
    let rest = board.coords().filter(|c| !holes.contains(c)).map(|c| (c.row, c.col)).collect::<Vec<_>>();
    fill(&mut board, rest, filler);

    let config = GameConfig::new().with_grid_size(4).with_marketplace_size(2).with_seed(5);
    let dominoes = vec![piece(0, "11", Color::Blue, Pattern::Dots), piece(1, "1/1", Color::Red, Pattern::Dots)];
    let game = GameState::from_setup(config.clone(), Some(board.clone()), Some(dominoes)).unwrap();
    assert!(!game.can_any_piece_be_placed());

    let with_monomino = vec![piece(0, "11", Color::Blue, Pattern::Dots), piece(1, "1", Color::Red, Pattern::Dots)];
    let game = GameState::from_setup(config, Some(board), Some(with_monomino)).unwrap();
    assert!(game.can_any_piece_be_placed());
}

#[test]
fn undo_restores_the_position_before_a_capture() {
    let mut game = pocket_game();
    let recorder = Recorder::default();
    game.set_observer(Box::new(recorder.clone()));
    assert!(!game.undo());

    for (id, row, col) in [(0, 2, 2), (1, 0, 2), (2, 2, 0)] {
        assert!(play(&mut game, id, row, col).accepted);
    }
    let board = game.board().clone();
    let marketplace = game.marketplace().to_vec();
    let players = game.players().to_vec();

    assert_eq!(play(&mut game, 3, 0, 0).score_delta, 16);
    assert_eq!(game.history_len(), 4);

    assert!(game.undo());
    assert_eq!(game.board(), &board);
    assert_eq!(game.marketplace(), &marketplace[..]);
    assert_eq!(game.players(), &players[..]);
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.selection(), None);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.history_len(), 3);
    assert_eq!(recorder.0.borrow().last().map(String::as_str), Some("undo"));

    for _ in 0..3 {
        assert!(game.undo());
    }
    assert!(!game.is_first_move());
    assert_eq!(game.board().occupied_count(), 9);
    assert!(!game.undo());

    // the same capture can be made again
    assert_eq!(play(&mut game, 0, 2, 2).score_delta, 0);
}

#[test]
fn random_playout_keeps_invariants() {
    let config = GameConfig::new().with_grid_size(8).with_players(3).with_seed(2024);
    let mut game = GameState::new(config).unwrap();
    let mut placed = 0;
    let mut scores = vec![0u32; 3];

    while !game.is_game_over() {
        let first_move = game.is_first_move();
        let candidate = game.marketplace().iter().find_map(|piece| {
            Transform::all().into_iter().find_map(|transform| {
                let shape = piece.oriented(transform);
                game.board().coords()
                    .find(|origin| game.board().can_place(&shape, *origin, first_move))
                    .map(|origin| (piece.id, transform, origin))
            })
        });
        let Some((id, transform, origin)) = candidate else {
            panic!("game should have ended when nothing fits");
        };

        game.select_piece(id).unwrap();
        game.set_rotation(transform.rotation()).unwrap();
        game.set_flip(transform.flipped()).unwrap();
        let outcome = game.attempt_placement(origin.row, origin.col).unwrap();
        assert!(outcome.accepted);
        placed += outcome.placed.len();

        assert_eq!(game.board().occupied_count(), placed);
        for (seat, player) in game.players().iter().enumerate() {
            assert!(player.score >= scores[seat]);
            scores[seat] = player.score;
        }
    }

    assert!(game.winner().is_some());
    assert_eq!(game.winner(), winner(game.players()));
}
