//! Exhaustive checks of win detection over every board filling.

use timeline_tictactoe::rules::{LINES, evaluate};
use timeline_tictactoe::{Board, Mark, Position, Square};

const FILLS: [Square; 3] = [
    Square::Empty,
    Square::Occupied(Mark::X),
    Square::Occupied(Mark::O),
];

fn board_from(squares: &[Square; 9]) -> Board {
    Position::ALL
        .iter()
        .zip(squares)
        .fold(Board::new(), |board, (pos, square)| match square {
            Square::Empty => board,
            Square::Occupied(mark) => board.with_mark(*pos, *mark),
        })
}

fn complete(squares: &[Square; 9], line: &[Position; 3]) -> bool {
    let [a, b, c] = line.map(|p| squares[p.to_index()]);
    a != Square::Empty && a == b && b == c
}

/// Every assignment of the six cells outside `line`.
fn fillings_around(line: &[Position; 3]) -> impl Iterator<Item = [Square; 9]> + '_ {
    let others: Vec<usize> = (0..9)
        .filter(|i| !line.iter().any(|p| p.to_index() == *i))
        .collect();
    (0..3usize.pow(6)).map(move |mut code| {
        let mut squares = [Square::Empty; 9];
        for index in &others {
            squares[*index] = FILLS[code % 3];
            code /= 3;
        }
        squares
    })
}

#[test]
fn test_each_line_reported_exactly() {
    for line in &LINES {
        for mark in [Mark::X, Mark::O] {
            let mut checked = 0;
            for mut squares in fillings_around(line) {
                for pos in line {
                    squares[pos.to_index()] = Square::Occupied(mark);
                }
                if LINES.iter().filter(|l| complete(&squares, l)).count() != 1 {
                    continue;
                }

                let win = evaluate(&board_from(&squares)).expect("line is complete");
                assert_eq!(win.winner, mark);
                assert_eq!(&win.line, line);
                checked += 1;
            }
            assert!(checked > 0, "no isolated board for {line:?}");
        }
    }
}

#[test]
fn test_first_complete_line_wins_when_several() {
    for code in 0..3usize.pow(9) {
        let mut squares = [Square::Empty; 9];
        let mut rest = code;
        for square in squares.iter_mut() {
            *square = FILLS[rest % 3];
            rest /= 3;
        }

        let expected = LINES.iter().find(|l| complete(&squares, l));
        let actual = evaluate(&board_from(&squares));
        match (expected, actual) {
            (None, None) => {}
            (Some(line), Some(win)) => {
                assert_eq!(&win.line, line);
                assert_eq!(Square::Occupied(win.winner), squares[line[0].to_index()]);
            }
            (expected, actual) => {
                panic!("board {squares:?}: expected {expected:?}, got {actual:?}")
            }
        }
    }
}

#[test]
fn test_full_board_without_line_has_no_winner() {
    // X O X / X O O / O X X
    #[rustfmt::skip]
    let marks = [
        Mark::X, Mark::O, Mark::X,
        Mark::X, Mark::O, Mark::O,
        Mark::O, Mark::X, Mark::X,
    ];
    let squares = marks.map(Square::Occupied);

    assert_eq!(evaluate(&board_from(&squares)), None);
}
