use std::time::Duration;

use crate::config::{GameConfig, OpponentType};
use super::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub opponent: OpponentType,
    pub computer_delay: Duration,
    pub auto_restart_delay: Option<Duration>,
}

impl TicTacToeSessionSettings {
    /// The player driven by the move selector, if any.
    pub fn bot_player(&self) -> Option<Player> {
        match self.opponent {
            OpponentType::Heuristic => Some(Player::B),
            OpponentType::Human => None,
        }
    }
}

impl From<&GameConfig> for TicTacToeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            opponent: config.opponent,
            computer_delay: config.computer_delay(),
            auto_restart_delay: config.auto_restart_delay(),
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}
