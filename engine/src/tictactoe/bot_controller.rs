use crate::session_rng::SessionRng;
use super::board::{CENTER, CORNERS, EDGES, get_available_moves, is_board_full};
use super::game_state::TicTacToeGameState;
use super::types::{Board, CELL_COUNT, Difficulty, Mark};
use super::win_detector::check_win;

/// Returned by [`select_move`] when the board has no empty cell.
pub const NO_MOVE: i32 = -1;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.bot_mark,
        }
    }
}

/// Picks the cell the bot should take, or `None` on a full board.
///
/// The caller's board is never touched: every lookahead works on a local
/// copy and restores each probed cell before moving on.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;

    let chosen = match difficulty {
        Difficulty::Easy => calculate_easy_move(&mut board, opponent_mark, &available_moves, rng),
        Difficulty::Medium => {
            calculate_medium_move(&mut board, bot_mark, opponent_mark, &available_moves, rng)
        }
        Difficulty::Hard => {
            calculate_minimax_move(&mut board, bot_mark, opponent_mark, &available_moves)
        }
    };

    debug_assert!(chosen.is_none_or(|index| input.board[index] == Mark::Empty));
    chosen
}

/// Integer form of [`calculate_move`]: a cell index in `0..=8`, or
/// [`NO_MOVE`] when no empty cell is left.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> i32 {
    match calculate_move(difficulty, BotInput::new(*board, bot_mark), rng) {
        Some(index) => index as i32,
        None => NO_MOVE,
    }
}

// Blocks only; never looks for its own win.
fn calculate_easy_move(
    board: &mut Board,
    opponent_mark: Mark,
    moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    if let Some(index) = find_winning_move(board, opponent_mark, moves) {
        return Some(index);
    }

    rng.choose(moves)
}

fn calculate_medium_move(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    if let Some(index) = find_winning_move(board, bot_mark, moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, opponent_mark, moves) {
        return Some(index);
    }

    if board[CENTER] == Mark::Empty {
        return Some(CENTER);
    }

    let corners = empty_cells_among(board, &CORNERS);
    if let Some(index) = rng.choose(&corners) {
        return Some(index);
    }

    let edges = empty_cells_among(board, &EDGES);
    if let Some(index) = rng.choose(&edges) {
        return Some(index);
    }

    moves.first().copied()
}

fn calculate_minimax_move(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    moves: &[usize],
) -> Option<usize> {
    if let Some(index) = find_winning_move(board, bot_mark, moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, opponent_mark, moves) {
        return Some(index);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &index in moves {
        place(board, index, bot_mark);

        let score = minimax(
            board,
            0,
            false,
            bot_mark,
            opponent_mark,
            i32::MIN,
            i32::MAX,
        );

        place(board, index, Mark::Empty);

        // Strict comparison keeps the lowest index among equal scores.
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// First cell in `moves` (ascending) that completes a line for `mark`.
fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        place(board, index, mark);
        let winner = check_win(board);
        place(board, index, Mark::Empty);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

fn empty_cells_among(board: &Board, cells: &[usize]) -> Vec<usize> {
    cells
        .iter()
        .copied()
        .filter(|&index| board[index] == Mark::Empty)
        .collect()
}

#[inline(always)]
fn place(board: &mut Board, index: usize, mark: Mark) {
    debug_assert!(index < CELL_COUNT, "cell index {} out of range", index);
    board[index] = mark;
}

/// Exhaustive search scored from `bot_mark`'s side: `10 - depth` for a bot
/// win, `depth - 10` for a loss, `0` for a draw. Each subtree is entered with
/// a full window, so alpha-beta cutoffs never change the returned score.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if is_board_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if board[index] != Mark::Empty {
                continue;
            }

            place(board, index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark, alpha, beta);
            place(board, index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if board[index] != Mark::Empty {
                continue;
            }

            place(board, index, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark, alpha, beta);
            place(board, index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
