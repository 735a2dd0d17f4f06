use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{
    BotInput, Difficulty, GameStatus, Mark, calculate_move, empty_board, game_status,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

/// Plays `games` bot-vs-bot games, X moving first in each.
pub fn run_simulation(
    games: u32,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<SimulationTally, String> {
    let mut tally = SimulationTally::default();

    for _ in 0..games {
        match play_one_game(x_difficulty, o_difficulty, rng)? {
            GameStatus::XWon => tally.x_wins += 1,
            GameStatus::OWon => tally.o_wins += 1,
            GameStatus::Draw => tally.draws += 1,
            GameStatus::InProgress => unreachable!(),
        }
    }

    Ok(tally)
}

fn play_one_game(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<GameStatus, String> {
    let mut board = empty_board();
    let mut mover = Mark::X;

    loop {
        let status = game_status(&board);
        if status.is_finished() {
            return Ok(status);
        }

        let difficulty = if mover == Mark::X { x_difficulty } else { o_difficulty };
        let index = calculate_move(difficulty, BotInput::new(board, mover), rng)
            .ok_or_else(|| "Bot found no move on a live board".to_string())?;

        board[index] = mover;
        mover = mover.opponent().ok_or_else(|| "Mover lost its mark".to_string())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_against_hard_always_draws() {
        let mut rng = SessionRng::new(0);
        let tally = run_simulation(3, Difficulty::Hard, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(tally, SimulationTally { x_wins: 0, o_wins: 0, draws: 3 });
    }

    #[test]
    fn test_hard_never_loses_to_easy() {
        let mut rng = SessionRng::new(21);
        let tally = run_simulation(20, Difficulty::Easy, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(tally.x_wins, 0);
        assert_eq!(tally.x_wins + tally.o_wins + tally.draws, 20);
    }

    #[test]
    fn test_zero_games_is_an_empty_tally() {
        let mut rng = SessionRng::new(0);
        let tally = run_simulation(0, Difficulty::Easy, Difficulty::Easy, &mut rng).unwrap();
        assert_eq!(tally, SimulationTally::default());
    }
}
