use super::board::is_board_full;
use super::types::{Board, GameStatus, Line, Mark, Outcome, WinningLine};

/// Rows, then columns, then diagonals. When several lines are complete at
/// once the earliest one in this order is reported.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> Outcome {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            return Outcome::Winner(WinningLine::new(mark, line));
        }
    }
    Outcome::NoWinner
}

pub fn check_win(board: &Board) -> Option<Mark> {
    evaluate(board).winner()
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    match evaluate(board) {
        Outcome::Winner(winning_line) => Some(winning_line),
        Outcome::NoWinner => None,
    }
}

pub fn game_status(board: &Board) -> GameStatus {
    match check_win(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        Some(Mark::Empty) => unreachable!(),
        None if is_board_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
