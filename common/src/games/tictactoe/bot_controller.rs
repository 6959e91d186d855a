use crate::games::MoveRng;
use super::board::{Board, CENTER, CORNERS};
use super::game_state::TicTacToeGameState;
use super::types::Player;
use super::win_detector::WINNING_LINES;

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_player: state.current_player(),
        }
    }
}

pub fn calculate_move<R: MoveRng + ?Sized>(input: &BotInput, rng: &mut R) -> Option<usize> {
    select_move(&input.board, input.current_player, rng)
}

/// Picks a cell for `player` using a fixed priority cascade:
/// win now, block the opponent, center, random corner, random remaining cell.
///
/// Returns `None` only when the board has no empty cell.
pub fn select_move<R: MoveRng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<usize> {
    let available_moves = board.get_available_moves();
    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(board, player) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, player.opponent()) {
        return Some(index);
    }

    if board.is_valid_move(CENTER) {
        return Some(CENTER);
    }

    let available_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| board.is_valid_move(index))
        .collect();
    if !available_corners.is_empty() {
        return Some(available_corners[rng.pick_index(available_corners.len())]);
    }

    Some(available_moves[rng.pick_index(available_moves.len())])
}

/// The empty cell of the first line (in [`WINNING_LINES`] order) where
/// `player` already holds the other two cells.
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    WINNING_LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.get(i) == Some(player)).count();
        let empty: Vec<usize> = line.iter().copied().filter(|&i| board.is_valid_move(i)).collect();

        if owned == 2 && empty.len() == 1 {
            Some(empty[0])
        } else {
            None
        }
    })
}
