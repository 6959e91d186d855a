use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::defaults::MAX_DELAY_MS;
use super::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentType {
    /// Two humans share the board and alternate turns.
    Human,
    /// Player B is driven by the heuristic move selector.
    Heuristic,
}

impl fmt::Display for OpponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentType::Human => write!(f, "human"),
            OpponentType::Heuristic => write!(f, "heuristic"),
        }
    }
}

impl FromStr for OpponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(OpponentType::Human),
            "heuristic" | "computer" => Ok(OpponentType::Heuristic),
            other => Err(format!("Unknown opponent type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub opponent: OpponentType,
    pub computer_delay_ms: u64,
    /// Zero disables the automatic restart after a finished game.
    pub auto_restart_delay_ms: u64,
    pub player_a_symbol: String,
    pub player_b_symbol: String,
    pub verbose: bool,
}

impl GameConfig {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    pub fn auto_restart_delay(&self) -> Option<Duration> {
        match self.auto_restart_delay_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "Computer delay must be at most {} ms, got {}",
                MAX_DELAY_MS, self.computer_delay_ms
            ));
        }
        if self.auto_restart_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "Auto restart delay must be at most {} ms, got {}",
                MAX_DELAY_MS, self.auto_restart_delay_ms
            ));
        }
        for (name, symbol) in [("A", &self.player_a_symbol), ("B", &self.player_b_symbol)] {
            if symbol.trim().is_empty() {
                return Err(format!("Player {} symbol must not be empty", name));
            }
            if symbol.chars().count() > 4 {
                return Err(format!("Player {} symbol must be at most 4 characters", name));
            }
        }
        if self.player_a_symbol == self.player_b_symbol {
            return Err("Player symbols must differ".to_string());
        }
        Ok(())
    }
}
