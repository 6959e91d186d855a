pub mod config;
pub mod games;
pub mod logger;
mod defaults;

pub use config::{GameConfig, OpponentType};
pub use games::tictactoe::{GameSnapshot, GameStatus, MoveOutcome, Player};
