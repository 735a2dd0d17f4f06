use crate::session_rng::SessionRng;
use super::board::{empty_board, is_board_full};
use super::types::{Board, CELL_COUNT, FirstPlayerMode, GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// One game between the human and the bot. X always moves first; whoever
/// opens plays X.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub bot_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let human_first = match first_player_mode {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Bot => false,
            FirstPlayerMode::Random => rng.random_bool(),
        };

        let (human_mark, bot_mark) = if human_first {
            (Mark::X, Mark::O)
        } else {
            (Mark::O, Mark::X)
        };

        Self {
            board: empty_board(),
            human_mark,
            bot_mark,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.bot_mark
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.human_mark
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if self.board[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[index] = mark;
        self.last_move = Position::from_index(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winning_line) = check_win_with_line(&self.board) {
            self.status = match winning_line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            self.winning_line = Some(winning_line);
            return;
        }

        if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn human_won(&self) -> bool {
        self.status.winner() == Some(self.human_mark)
    }

    pub fn bot_won(&self) -> bool {
        self.status.winner() == Some(self.bot_mark)
    }
}
