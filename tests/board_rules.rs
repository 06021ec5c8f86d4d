use amazons::{AmazonsError, Board, Color, Move, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

#[test]
fn opening_moves_and_undo() {
    let mut board = Board::new();
    // Neither blocker is a queen move from its amazon, so only the unchecked path applies them
    let m1 = mv("d1-d5(h6)");
    let m2 = mv("a7-c7(a10)");

    board.make_move_unchecked(m1);
    assert_eq!(board.last_move(), Some(m1));
    assert_eq!(board.turn(), Color::Black);
    board.make_move_unchecked(m2);
    assert_eq!(board.last_move(), Some(m2));

    assert_eq!(board.num_moves(), 2);
    assert_eq!(board.get(sq("d1")), Piece::Empty);
    assert_eq!(board.get(sq("d5")), Piece::White);
    assert_eq!(board.get(sq("h6")), Piece::Blocker);
    assert_eq!(board.get(sq("a7")), Piece::Empty);
    assert_eq!(board.get(sq("c7")), Piece::Black);
    assert_eq!(board.get(sq("a10")), Piece::Blocker);

    board.undo();
    assert_eq!(board.num_moves(), 1);
    assert_eq!(board.last_move(), Some(m1));
    assert_eq!(board.get(sq("a7")), Piece::Black);
    assert_eq!(board.get(sq("c7")), Piece::Empty);
    assert_eq!(board.get(sq("a10")), Piece::Empty);
    assert_eq!(board.turn(), Color::Black);

    board.undo();
    assert_eq!(board, Board::new());
    board.undo();
    assert_eq!(board, Board::new());
}

#[test]
fn checked_make_move_rejects_bad_blockers() {
    let mut board = Board::new();
    let m1 = mv("d1-d5(h6)");
    assert_eq!(board.make_move(m1), Err(AmazonsError::IllegalMove(m1)));
    assert_eq!(board, Board::new());

    board.make_move(mv("d1-d5(h9)")).unwrap();
    assert_eq!(board.get(sq("h9")), Piece::Blocker);
    assert_eq!(board.turn(), Color::Black);
}

#[test]
fn checked_make_move_requires_the_side_to_move() {
    let mut board = Board::new();
    // Geometrically legal for the black amazon on a7, but White is to move
    let m = mv("a7-a8(a9)");
    assert!(board.is_legal_move(m));
    assert_eq!(board.make_move(m), Err(AmazonsError::IllegalMove(m)));
    assert_eq!(board, Board::new());
    assert_eq!(board.pieces(Color::White).count(), 4);
    assert_eq!(board.pieces(Color::Black).count(), 4);

    board.make_move(mv("d1-d5(h9)")).unwrap();
    let m = mv("d5-d6(d7)");
    assert_eq!(board.make_move(m), Err(AmazonsError::IllegalMove(m)));
    board.make_move(mv("a7-a8(a9)")).unwrap();
    assert_eq!(board.get(sq("a8")), Piece::Black);
}

#[test]
fn make_then_undo_restores_every_legal_move() {
    let mut board = Board::new();
    board.make_move(mv("d1-d5(h9)")).unwrap();
    let before = board.clone();
    let moves: Vec<Move> = board.legal_moves().collect();
    for m in moves {
        board.make_move(m).unwrap();
        board.undo();
        assert_eq!(board, before, "undo of {} did not restore the position", m);
    }
}

#[test]
fn blocker_on_vacated_origin_undoes_cleanly() {
    let mut board = Board::new();
    let before = board.clone();
    board.make_move(mv("d1-d5(d1)")).unwrap();
    assert_eq!(board.get(sq("d1")), Piece::Blocker);
    assert_eq!(board.get(sq("d5")), Piece::White);
    board.undo();
    assert_eq!(board, before);
}

#[test]
fn immobilized_side_loses() {
    let mut board = Board::clear();
    board.put(Piece::Blocker, sq("a9"));
    board.put(Piece::Blocker, sq("b10"));
    board.put(Piece::Black, sq("a10"));
    board.put(Piece::White, sq("j1"));

    let m = mv("j1-i2(b9)");
    board.make_move(m).unwrap();
    assert_eq!(board.winner(), Some(Color::White));
    assert_eq!(board.legal_moves().next(), None);

    // Further moves are ignored once the game is decided
    board.make_move(mv("c1-c2(c3)")).unwrap();
    board.make_move(mv("j2-j5(j6)")).unwrap();
    assert_eq!(board.last_move(), Some(m));
    assert_eq!(board.num_moves(), 1);
    assert_eq!(board.get(sq("j5")), Piece::Empty);

    // Taking the winning move back reopens the game
    board.undo();
    assert_eq!(board.winner(), None);
    assert_eq!(board.get(sq("j1")), Piece::White);
    assert_eq!(board.get(sq("i2")), Piece::Empty);
    assert_eq!(board.get(sq("b9")), Piece::Empty);
}

#[test]
fn moving_side_can_win_by_moving_into_the_gap() {
    let mut board = Board::clear();
    board.put(Piece::Blocker, sq("a9"));
    board.put(Piece::Blocker, sq("b10"));
    board.put(Piece::Black, sq("a10"));
    board.put(Piece::White, sq("j1"));

    board.make_move(mv("j1-b9(c10)")).unwrap();
    assert_eq!(board.winner(), Some(Color::White));
}

#[test]
fn winner_is_detected_on_the_opponents_turn_only() {
    let mut board = Board::clear();
    board.put(Piece::White, sq("a1"));
    for s in ["a2", "b2", "c2", "c1"] {
        board.put(Piece::Blocker, sq(s));
    }
    board.put(Piece::Black, sq("j10"));

    // White's only move walls in its own amazon, but Black is the side to move
    let only: Vec<Move> = board.legal_moves().collect();
    assert_eq!(only, vec![mv("a1-b1(a1)")]);
    board.make_move(only[0]).unwrap();
    assert_eq!(board.winner(), None);
    assert!(!board.has_legal_moves(Color::White));

    board.make_move(mv("j10-j9(j10)")).unwrap();
    assert_eq!(board.winner(), Some(Color::Black));
    assert_eq!(board.legal_moves().next(), None);
}

#[test]
fn illegal_moves_are_rejected_without_mutation() {
    let mut board = Board::new();
    let before = board.clone();
    for text in [
        "d1-d10(d9)", // lands on a black amazon
        "d2-d5(d6)",  // empty origin
        "d1-e3(e4)",  // not a queen move
        "d1-d5(d5)",  // blocker on the destination
        "d1-d5(e7)",  // blocker not a queen move away
        "a4-j4(j5)",  // destination holds another white amazon
    ] {
        let m = mv(text);
        assert_eq!(board.make_move(m), Err(AmazonsError::IllegalMove(m)), "{}", text);
        assert_eq!(board, before);
    }
}

#[test]
fn put_reopens_decided_game() {
    let text = "   B S - - - - - - - -
   S S - - - - - - - -
   - - - - - - - - - -
   - - - - - - - - - -
   - - - - - - - - - -
   - - - - - - - - - -
   - - - - - - - - - -
   - - - - - - - - - -
   - - - - - - - - - -
   - - - - - - - - - W
";
    let mut board = Board::from_diagram(text, Color::Black).unwrap();
    assert_eq!(board.winner(), Some(Color::White));
    board.put(Piece::Empty, sq("b10"));
    assert_eq!(board.winner(), None);
    assert!(board.has_legal_moves(Color::Black));
}

#[test]
fn legality_ignores_turn_but_requires_an_amazon() {
    let board = Board::new();
    assert!(board.is_legal_origin(sq("a7")));
    assert!(board.is_legal_step(sq("a7"), sq("a8")));
    assert!(!board.is_legal_origin(sq("e5")));
    let mut with_blocker = Board::new();
    with_blocker.put(Piece::Blocker, sq("e5"));
    assert!(!with_blocker.is_legal_origin(sq("e5")));
    assert!(!with_blocker.is_legal(sq("e5"), sq("e6"), sq("e7")));
}
