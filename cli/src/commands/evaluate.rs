use tictactoe_engine::tictactoe::{Board, Outcome, evaluate, is_board_full, parse_board};

pub fn run_evaluate(board_text: &str) -> Result<String, String> {
    let board = parse_board(board_text)?;
    Ok(describe_outcome(&board))
}

pub fn describe_outcome(board: &Board) -> String {
    match evaluate(board) {
        Outcome::Winner(winning_line) => format!(
            "winner: {} line: {:?}",
            winning_line.mark.to_char(),
            winning_line.line
        ),
        Outcome::NoWinner if is_board_full(board) => "winner: none\ndraw".to_string(),
        Outcome::NoWinner => "winner: none".to_string(),
    }
}
