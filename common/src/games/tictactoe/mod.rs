mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, CENTER, CORNERS};
pub use bot_controller::{BotInput, calculate_move, find_winning_move, select_move};
pub use game_state::{GameSnapshot, MoveOutcome, MoveRejection, TicTacToeGameState};
pub use session::TicTacToeSession;
pub use settings::TicTacToeSessionSettings;
pub use types::{GameStatus, Player, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, find_winning_line};
