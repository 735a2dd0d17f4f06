mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{
    CENTER, CORNERS, EDGES, empty_board, format_board, get_available_moves, is_board_full,
    is_valid_move, parse_board,
};
pub use bot_controller::{BotInput, NO_MOVE, calculate_move, select_move};
pub use game_state::TicTacToeGameState;
pub use session::{MatchScore, TicTacToeSession};
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BOARD_SIZE, Board, CELL_COUNT, Difficulty, FirstPlayerMode, GameStatus, Line, Mark, Outcome,
    Position, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate, game_status};
