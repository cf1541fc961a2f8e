use draughts_engine::core::board::Board;
use draughts_engine::core::coord::Coord;
use draughts_engine::draughts::apply::apply_move;
use draughts_engine::draughts::movegen::{Jump, Move};
use draughts_engine::draughts::piece::{Color, Piece};
use draughts_engine::draughts::rules::{ChainPolicy, Rules};

fn squares_differing(a: &Board, b: &Board) -> Vec<Coord> {
    let n = a.dimension() as i32;
    let mut out = Vec::new();
    for y in 0..n {
        for x in 0..n {
            let c = Coord::new(x, y);
            if a.square(c) != b.square(c) {
                out.push(c);
            }
        }
    }
    out
}

#[test]
fn slide_moves_the_piece_and_nothing_else() {
    let mut board = Board::from_diagram(
        "\
        .b.b\n\
        ....\n\
        ....\n\
        w.w.\n",
    )
    .unwrap();
    let before = board.clone();
    let from = Coord::new(1, 0);
    let mv = Move::Slide {
        to: Coord::new(0, 1),
    };

    let outcome = apply_move(&mut board, from, &mv, &Rules::default());

    assert_eq!(board.square(from), None);
    assert_eq!(board.square(Coord::new(0, 1)), Some(Piece::BLACK_MAN));
    assert_eq!(
        squares_differing(&before, &board),
        vec![from, Coord::new(0, 1)]
    );
    assert_eq!(outcome.to, Coord::new(0, 1));
    assert!(outcome.captured.is_empty());
    assert!(!outcome.promoted);
}

#[test]
fn chain_removes_every_captured_piece_and_lands_on_the_last_square() {
    let mut board = Board::empty(10);
    let from = Coord::new(1, 0);
    board.place(from, Piece::BLACK_MAN);
    board.place(Coord::new(2, 1), Piece::WHITE_MAN);
    board.place(Coord::new(4, 3), Piece::WHITE_KING);
    board.place(Coord::new(8, 8), Piece::WHITE_MAN);

    let rules = Rules::default().with_chain_policy(ChainPolicy::MaximalOnly);
    let mv = rules
        .legal_moves(&board, from)
        .into_iter()
        .find(|m| m.capture_count() == 2)
        .unwrap();

    let white_before = board.count(Color::White);
    let outcome = apply_move(&mut board, from, &mv, &rules);

    assert_eq!(board.count(Color::White), white_before - 2);
    assert_eq!(board.square(from), None);
    assert_eq!(board.square(Coord::new(2, 1)), None);
    assert_eq!(board.square(Coord::new(4, 3)), None);
    // Intermediate landing stays empty.
    assert_eq!(board.square(Coord::new(3, 2)), None);
    assert_eq!(board.square(Coord::new(5, 4)), Some(Piece::BLACK_MAN));
    assert_eq!(board.square(Coord::new(8, 8)), Some(Piece::WHITE_MAN));
    assert_eq!(
        outcome.captured,
        vec![
            (Coord::new(2, 1), Piece::WHITE_MAN),
            (Coord::new(4, 3), Piece::WHITE_KING)
        ]
    );
}

#[test]
fn men_stay_men_on_the_far_rank_without_promotion() {
    let mut board = Board::empty(10);
    board.place(Coord::new(1, 8), Piece::BLACK_MAN);
    let mv = Move::Slide {
        to: Coord::new(0, 9),
    };
    let outcome = apply_move(&mut board, Coord::new(1, 8), &mv, &Rules::default());
    assert!(!outcome.promoted);
    assert_eq!(board.square(Coord::new(0, 9)), Some(Piece::BLACK_MAN));
}

#[test]
fn promotion_crowns_men_reaching_the_far_rank() {
    let rules = Rules::default().with_promotion(true);

    let mut board = Board::empty(10);
    board.place(Coord::new(1, 8), Piece::BLACK_MAN);
    let outcome = apply_move(
        &mut board,
        Coord::new(1, 8),
        &Move::Slide {
            to: Coord::new(0, 9),
        },
        &rules,
    );
    assert!(outcome.promoted);
    assert_eq!(board.square(Coord::new(0, 9)), Some(Piece::BLACK_KING));

    let mut board = Board::empty(10);
    board.place(Coord::new(4, 2), Piece::WHITE_MAN);
    board.place(Coord::new(3, 1), Piece::BLACK_MAN);
    let mv = Move::Jump {
        chain: vec![Jump {
            capture: Coord::new(3, 1),
            landing: Coord::new(2, 0),
        }],
    };
    let outcome = apply_move(&mut board, Coord::new(4, 2), &mv, &rules);
    assert!(outcome.promoted);
    assert_eq!(board.square(Coord::new(2, 0)), Some(Piece::WHITE_KING));
    assert_eq!(board.count(Color::Black), 0);
}

#[test]
fn kings_are_not_promoted_again() {
    let rules = Rules::default().with_promotion(true);
    let mut board = Board::empty(10);
    board.place(Coord::new(1, 1), Piece::WHITE_KING);
    let outcome = apply_move(
        &mut board,
        Coord::new(1, 1),
        &Move::Slide {
            to: Coord::new(0, 0),
        },
        &rules,
    );
    assert!(!outcome.promoted);
    assert_eq!(board.square(Coord::new(0, 0)), Some(Piece::WHITE_KING));
}
