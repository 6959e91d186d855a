use crate::config::{GameConfig, OpponentType};

pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 700;
pub const DEFAULT_AUTO_RESTART_DELAY_MS: u64 = 3000;
pub const MAX_DELAY_MS: u64 = 60_000;
pub const DEFAULT_PLAYER_A_SYMBOL: &str = "🐶";
pub const DEFAULT_PLAYER_B_SYMBOL: &str = "🦴";

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent: OpponentType::Heuristic,
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
            auto_restart_delay_ms: DEFAULT_AUTO_RESTART_DELAY_MS,
            player_a_symbol: DEFAULT_PLAYER_A_SYMBOL.to_string(),
            player_b_symbol: DEFAULT_PLAYER_B_SYMBOL.to_string(),
            verbose: false,
        }
    }
}
