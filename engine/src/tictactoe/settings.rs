use serde::{Deserialize, Serialize};

use super::types::{Difficulty, FirstPlayerMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    pub first_player_mode: FirstPlayerMode,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            first_player_mode: FirstPlayerMode::Human,
        }
    }
}
