//! Win and tie detection across every line.

use match_tictactoe::{Board, Cell, Coord, Player, winner};

fn board_with(own: &[(usize, usize)], other: &[(usize, usize)], player: Player) -> Board {
    let mut board = Board::new();
    for &(row, col) in own {
        board.place(Coord::new(row, col), player).unwrap();
    }
    for &(row, col) in other {
        board.place(Coord::new(row, col), player.opponent()).unwrap();
    }
    board
}

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[test]
fn every_line_wins_for_either_player() {
    for player in [Player::First, Player::Second] {
        for line in LINES {
            let board = board_with(&line, &[], player);
            assert_eq!(winner(&board), Some(player), "line {line:?}");
        }
    }
}

#[test]
fn empty_board_has_no_winner() {
    let board = Board::new();
    assert_eq!(winner(&board), None);
    assert!(!board.is_full());
}

#[test]
fn no_line_with_open_cells_is_undecided() {
    let board = board_with(&[(0, 0), (1, 1)], &[(0, 1)], Player::First);
    assert_eq!(winner(&board), None);
    assert!(!board.is_full());
    assert_eq!(
        board.cell(Coord::new(0, 0)),
        Cell::Occupied(Player::First)
    );
    assert_eq!(board.cell(Coord::new(2, 2)), Cell::Empty);
}

#[test]
fn full_board_without_line_has_no_winner() {
    let first = [(0, 0), (0, 2), (1, 2), (2, 0), (2, 1)];
    let second = [(0, 1), (1, 0), (1, 1), (2, 2)];
    let board = board_with(&first, &second, Player::First);

    assert_eq!(winner(&board), None);
    assert!(board.is_full());
}

#[test]
fn reset_clears_every_cell() {
    let mut board = board_with(&[(0, 0), (1, 1), (2, 2)], &[], Player::Second);
    board.reset();

    assert!(!board.is_full());
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(board.cell(Coord::new(row, col)), Cell::Empty);
        }
    }
}
