use crate::session_rng::SessionRng;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GameStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub human_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
}

impl MatchScore {
    pub fn games_played(&self) -> u32 {
        self.human_wins + self.bot_wins + self.draws
    }
}

/// A match of consecutive games against the bot, with a running score.
/// The difficulty can change between moves; it is read on every bot turn.
pub struct TicTacToeSession {
    pub settings: TicTacToeSessionSettings,
    pub game_state: TicTacToeGameState,
    pub score: MatchScore,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, mut rng: SessionRng) -> Self {
        let game_state = TicTacToeGameState::new(settings.first_player_mode, &mut rng);
        Self {
            settings,
            game_state,
            score: MatchScore::default(),
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    pub fn human_move(&mut self, index: usize) -> Result<GameStatus, String> {
        if !self.game_state.is_human_turn() && !self.game_state.status.is_finished() {
            return Err("Not your turn".to_string());
        }

        let mark = self.game_state.human_mark;
        self.game_state.place_mark(mark, index)?;
        self.record_if_finished();
        Ok(self.game_state.status)
    }

    /// Plays the bot's turn and returns the cell it took.
    pub fn bot_move(&mut self) -> Result<usize, String> {
        if self.game_state.status.is_finished() {
            return Err("Game is already over".to_string());
        }

        if !self.game_state.is_bot_turn() {
            return Err("Not the bot's turn".to_string());
        }

        let input = BotInput::from_game_state(&self.game_state);
        let index = calculate_move(self.settings.difficulty, input, &mut self.rng)
            .ok_or_else(|| "No move available".to_string())?;

        let mark = self.game_state.bot_mark;
        self.game_state.place_mark(mark, index)?;
        self.record_if_finished();
        Ok(index)
    }

    /// Starts a fresh board and keeps the score.
    pub fn new_game(&mut self) {
        self.game_state = TicTacToeGameState::new(self.settings.first_player_mode, &mut self.rng);
    }

    /// Starts a fresh board and zeroes the score.
    pub fn reset_match(&mut self) {
        self.new_game();
        self.score = MatchScore::default();
    }

    fn record_if_finished(&mut self) {
        match self.game_state.status {
            GameStatus::InProgress => {}
            GameStatus::Draw => self.score.draws += 1,
            GameStatus::XWon | GameStatus::OWon => {
                if self.game_state.human_won() {
                    self.score.human_wins += 1;
                } else {
                    self.score.bot_wins += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::types::{FirstPlayerMode, Mark};

    fn session(difficulty: Difficulty, first_player_mode: FirstPlayerMode) -> TicTacToeSession {
        TicTacToeSession::new(
            TicTacToeSessionSettings {
                difficulty,
                first_player_mode,
            },
            SessionRng::new(5),
        )
    }

    #[test]
    fn test_bot_move_is_rejected_on_human_turn() {
        let mut session = session(Difficulty::Hard, FirstPlayerMode::Human);
        assert_eq!(session.bot_move(), Err("Not the bot's turn".to_string()));
    }

    #[test]
    fn test_human_move_is_rejected_on_bot_turn() {
        let mut session = session(Difficulty::Hard, FirstPlayerMode::Bot);
        assert_eq!(session.human_move(0), Err("Not your turn".to_string()));
    }

    #[test]
    fn test_hard_bot_blocks_and_wins_a_match_game() {
        let mut session = session(Difficulty::Hard, FirstPlayerMode::Human);

        session.human_move(0).unwrap();
        assert_eq!(session.bot_move(), Ok(4));

        session.human_move(8).unwrap();
        let reply = session.bot_move().unwrap();
        assert!([1, 3, 5, 7].contains(&reply));

        // Keep feeding the first free cell; the hard bot must never lose.
        while !session.game_state.status.is_finished() {
            if session.game_state.is_human_turn() {
                let index = session.game_state.board.iter().position(|&c| c == Mark::Empty).unwrap();
                session.human_move(index).unwrap();
            } else {
                session.bot_move().unwrap();
            }
        }

        assert_eq!(session.score.human_wins, 0);
        assert_eq!(session.score.games_played(), 1);
    }

    #[test]
    fn test_human_win_is_scored() {
        let mut session = session(Difficulty::Easy, FirstPlayerMode::Human);
        session.game_state.board = [
            Mark::X, Mark::X, Mark::Empty,
            Mark::O, Mark::O, Mark::Empty,
            Mark::Empty, Mark::Empty, Mark::Empty,
        ];

        assert_eq!(session.human_move(2), Ok(GameStatus::XWon));
        assert_eq!(session.score, MatchScore { human_wins: 1, bot_wins: 0, draws: 0 });
    }

    #[test]
    fn test_bot_win_is_scored() {
        let mut session = session(Difficulty::Medium, FirstPlayerMode::Human);
        session.game_state.board = [
            Mark::X, Mark::X, Mark::Empty,
            Mark::O, Mark::O, Mark::Empty,
            Mark::X, Mark::Empty, Mark::Empty,
        ];
        session.game_state.current_mark = Mark::O;

        assert_eq!(session.bot_move(), Ok(5));
        assert_eq!(session.game_state.status, GameStatus::OWon);
        assert_eq!(session.score.bot_wins, 1);
        assert_eq!(session.bot_move(), Err("Game is already over".to_string()));
    }

    #[test]
    fn test_new_game_keeps_score_and_reset_match_clears_it() {
        let mut session = session(Difficulty::Medium, FirstPlayerMode::Human);
        session.score = MatchScore { human_wins: 2, bot_wins: 3, draws: 1 };
        session.human_move(4).unwrap();

        session.new_game();
        assert!(session.game_state.board.iter().all(|&c| c == Mark::Empty));
        assert_eq!(session.score.games_played(), 6);

        session.reset_match();
        assert_eq!(session.score, MatchScore::default());
    }

    #[test]
    fn test_difficulty_change_applies_to_next_bot_move() {
        let mut session = session(Difficulty::Easy, FirstPlayerMode::Human);
        session.set_difficulty(Difficulty::Medium);
        session.human_move(0).unwrap();
        assert_eq!(session.bot_move(), Ok(4));
    }
}
