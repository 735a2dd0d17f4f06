use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{Difficulty, Mark, parse_board, select_move};

pub fn run_select(
    board_text: &str,
    difficulty: Difficulty,
    bot_mark: Mark,
    seed: Option<u64>,
) -> Result<i32, String> {
    let board = parse_board(board_text)?;
    let mut rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    Ok(select_move(&board, difficulty, bot_mark, &mut rng))
}
