use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const fn p(row: usize, col: usize) -> Position {
    Position { row, col }
}

pub const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

pub fn find_winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .find(|line| {
            line.iter()
                .all(|pos| board.get(pos.row, pos.col) == Some(mark))
        })
        .map(|&cells| WinningLine::new(mark, cells))
}

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    find_winning_line(board, mark).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Mark::O);
            }
            assert!(is_winner(&board, Mark::O), "line {:?} should win", line);
            assert!(!is_winner(&board, Mark::X));
            assert_eq!(find_winning_line(&board, Mark::O).map(|l| l.cells), Some(line));
        }
    }

    #[test]
    fn test_empty_never_wins() {
        let board = Board::new();
        assert!(!is_winner(&board, Mark::Empty));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = Board::from_rows(["..X", ".X.", "X.."]);
        let line = find_winning_line(&board, Mark::X).unwrap();
        assert!(line.contains(Position::new(1, 1)));
        assert!(line.contains(Position::new(2, 0)));
    }

    #[test]
    fn test_win_matches_line_ownership_for_all_boards() {
        for code in 0..3u32.pow(9) {
            let mut board = Board::new();
            let mut rest = code;
            for idx in 0..9 {
                let mark = match rest % 3 {
                    1 => Mark::X,
                    2 => Mark::O,
                    _ => Mark::Empty,
                };
                rest /= 3;
                board.set(Position::new(idx / 3, idx % 3), mark);
            }

            for mark in [Mark::X, Mark::O] {
                let cells = board.rows();
                let owns_line = (0..3).any(|i| {
                    (0..3).all(|j| cells[i][j] == mark) || (0..3).all(|j| cells[j][i] == mark)
                }) || (0..3).all(|i| cells[i][i] == mark)
                    || (0..3).all(|i| cells[i][2 - i] == mark);
                assert_eq!(is_winner(&board, mark), owns_line, "board {:?}", board);
            }
        }
    }
}
