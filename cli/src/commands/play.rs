use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{GameStatus, MatchScore, TicTacToeSession, format_board};

const PROMPT: &str = "Your move (0-8), n = new game, r = reset match, q = quit: ";

/// Drives a match on a line-based terminal until `q` or end of input.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    bot_delay: Duration,
    input: R,
    output: &mut W,
) -> Result<MatchScore, String> {
    let mut lines = input.lines();

    loop {
        if session.game_state.is_bot_turn() {
            if !bot_delay.is_zero() {
                thread::sleep(bot_delay);
            }
            let index = session.bot_move()?;
            write_line(output, &format!("Bot ({}) plays {}", session.settings.difficulty, index))?;
            report_if_finished(session, output)?;
            continue;
        }

        write_line(output, &format_board(&session.game_state.board))?;
        write!(output, "{}", PROMPT).map_err(|e| e.to_string())?;
        output.flush().map_err(|e| e.to_string())?;

        let line = match lines.next() {
            Some(line) => line.map_err(|e| format!("Failed to read input: {}", e))?,
            None => break,
        };

        match line.trim() {
            "q" => break,
            "n" => {
                session.new_game();
                write_line(output, "New game")?;
            }
            "r" => {
                session.reset_match();
                write_line(output, "Match reset")?;
            }
            command => match command.parse::<usize>() {
                Ok(index) => match session.human_move(index) {
                    Ok(_) => report_if_finished(session, output)?,
                    Err(err) => write_line(output, &err)?,
                },
                Err(_) => write_line(output, &format!("Unknown command '{}'", command))?,
            },
        }
    }

    Ok(session.score)
}

fn report_if_finished<W: Write>(session: &TicTacToeSession, output: &mut W) -> Result<(), String> {
    let game_state = &session.game_state;
    let verdict = match game_state.status {
        GameStatus::InProgress => return Ok(()),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::XWon | GameStatus::OWon if game_state.human_won() => "You win!".to_string(),
        GameStatus::XWon | GameStatus::OWon => "Bot wins!".to_string(),
    };

    log!("Game over: {:?}", game_state.status);

    write_line(output, &format_board(&game_state.board))?;
    if let Some(winning_line) = game_state.winning_line {
        write_line(output, &format!("Winning line: {:?}", winning_line.line))?;
    }
    write_line(output, &verdict)?;
    write_line(
        output,
        &format!(
            "Score: you {} - bot {} (draws {})",
            session.score.human_wins, session.score.bot_wins, session.score.draws
        ),
    )
}

fn write_line<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    writeln!(output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
}
