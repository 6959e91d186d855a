use std::fmt;

use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Player, WinningLine};
use super::win_detector::{check_win, find_winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfRange(usize),
    Occupied(usize),
    WrongTurn { expected: Player, got: Player },
    GameOver,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfRange(index) => write!(f, "cell {} is out of range", index),
            MoveRejection::Occupied(index) => write!(f, "cell {} is already marked", index),
            MoveRejection::WrongTurn { expected, got } => {
                write!(f, "not player {}'s turn, player {} is to move", got, expected)
            }
            MoveRejection::GameOver => write!(f, "game is already over"),
        }
    }
}

/// Read-only copy of the game handed to renderers and callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub current_player: Player,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl GameSnapshot {
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub snapshot: GameSnapshot,
}

impl MoveOutcome {
    pub fn board(&self) -> &Board {
        &self.snapshot.board
    }

    pub fn status(&self) -> GameStatus {
        self.snapshot.status
    }
}

#[derive(Debug, Clone, Default)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Recomputed from the board on every call so it can never drift.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = find_winning_line(&self.board) {
            return GameStatus::Won(line.player);
        }
        if self.board.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    pub fn is_active(&self) -> bool {
        self.status() == GameStatus::InProgress
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            status: self.status(),
            current_player: self.current_player,
            last_move: self.last_move,
            winning_line: find_winning_line(&self.board),
        }
    }

    pub fn validate_move(&self, index: usize, player: Player) -> Result<(), MoveRejection> {
        if self.status().is_terminal() {
            return Err(MoveRejection::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveRejection::OutOfRange(index));
        }
        if player != self.current_player {
            return Err(MoveRejection::WrongTurn {
                expected: self.current_player,
                got: player,
            });
        }
        if !self.board.is_valid_move(index) {
            return Err(MoveRejection::Occupied(index));
        }
        Ok(())
    }

    /// Places `player`'s mark and returns the resulting status.
    ///
    /// The turn passes to the opponent only while the game stays in progress.
    pub fn place_mark(&mut self, index: usize, player: Player) -> Result<GameStatus, MoveRejection> {
        self.validate_move(index, player)?;

        self.board.place(index, player);
        self.last_move = Some(index);

        if check_win(&self.board, player) {
            return Ok(GameStatus::Won(player));
        }
        if self.board.is_full() {
            return Ok(GameStatus::Draw);
        }

        self.current_player = player.opponent();
        Ok(GameStatus::InProgress)
    }

    /// Like [`Self::place_mark`], but a rejected move is reported as
    /// `accepted: false` with the untouched snapshot instead of an error.
    pub fn apply_move(&mut self, index: usize, player: Player) -> MoveOutcome {
        let accepted = self.place_mark(index, player).is_ok();
        MoveOutcome {
            accepted,
            snapshot: self.snapshot(),
        }
    }

    pub fn reset(&mut self) -> GameSnapshot {
        self.board.clear();
        self.current_player = Player::A;
        self.last_move = None;
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) -> Vec<MoveOutcome> {
        moves
            .iter()
            .map(|&index| {
                let player = state.current_player();
                state.apply_move(index, player)
            })
            .collect()
    }

    #[test]
    fn test_new_game_is_empty_and_a_moves_first() {
        let state = TicTacToeGameState::new();

        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.is_active());
    }

    #[test]
    fn test_accepted_move_swaps_player() {
        let mut state = TicTacToeGameState::new();

        let outcome = state.apply_move(4, Player::A);

        assert!(outcome.accepted);
        assert_eq!(outcome.board().get(4), Some(Player::A));
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_top_row_win_scenario() {
        let mut state = TicTacToeGameState::new();

        let outcomes = play(&mut state, &[0, 4, 1, 3, 2]);

        assert!(outcomes.iter().all(|o| o.accepted));
        let last = outcomes.last().unwrap();
        assert_eq!(last.status(), GameStatus::Won(Player::A));
        assert_eq!(last.snapshot.winning_line, Some(WinningLine::new(Player::A, [0, 1, 2])));
        assert_eq!(state.current_player(), Player::A);
        assert!(!state.is_active());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new();

        let outcomes = play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert!(outcomes.iter().all(|o| o.accepted));
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(outcomes[7].status(), GameStatus::InProgress);
        assert_eq!(state.snapshot().winning_line, None);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut state = TicTacToeGameState::new();
        state.apply_move(0, Player::A);
        let before = state.snapshot();

        let outcome = state.apply_move(0, Player::B);

        assert!(!outcome.accepted);
        assert_eq!(outcome.snapshot, before);
        assert_eq!(state.validate_move(0, Player::B), Err(MoveRejection::Occupied(0)));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut state = TicTacToeGameState::new();

        let outcome = state.apply_move(9, Player::A);

        assert!(!outcome.accepted);
        assert_eq!(outcome.board(), &Board::new());
        assert_eq!(state.validate_move(42, Player::A), Err(MoveRejection::OutOfRange(42)));
    }

    #[test]
    fn test_wrong_turn_is_rejected() {
        let mut state = TicTacToeGameState::new();

        let outcome = state.apply_move(4, Player::B);

        assert!(!outcome.accepted);
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(
            state.validate_move(4, Player::B),
            Err(MoveRejection::WrongTurn { expected: Player::A, got: Player::B })
        );
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 4, 1, 3, 2]);
        let before = state.snapshot();

        for index in [5, 6, 7, 8] {
            for player in [Player::A, Player::B] {
                let outcome = state.apply_move(index, player);
                assert!(!outcome.accepted);
                assert_eq!(outcome.snapshot, before);
            }
        }
        assert_eq!(state.validate_move(5, Player::A), Err(MoveRejection::GameOver));
    }

    #[test]
    fn test_played_cells_are_exactly_the_marked_cells() {
        let mut state = TicTacToeGameState::new();
        let moves = [4, 0, 8, 2, 1, 7, 6];
        let mut played = Vec::new();

        for &index in &moves {
            let player = state.current_player();
            let outcome = state.apply_move(index, player);
            assert!(outcome.accepted);
            played.push((index, player));

            for (cell, owner) in &played {
                assert_eq!(state.board().get(*cell), Some(*owner));
            }
            let marked = state.board().cells().iter().filter(|c| c.is_some()).count();
            assert_eq!(marked, played.len());
        }
    }

    #[test]
    fn test_reset_restores_initial_state_from_any_state() {
        let mut mid_game = TicTacToeGameState::new();
        play(&mut mid_game, &[4, 0]);
        let mut finished = TicTacToeGameState::new();
        play(&mut finished, &[0, 4, 1, 3, 2]);

        for state in [&mut mid_game, &mut finished] {
            let snapshot = state.reset();

            assert_eq!(snapshot.board, Board::new());
            assert_eq!(snapshot.status, GameStatus::InProgress);
            assert_eq!(snapshot.current_player, Player::A);
            assert_eq!(snapshot.last_move, None);
            assert!(state.is_active());
        }
    }

    #[test]
    fn test_rejection_messages_are_readable() {
        assert_eq!(MoveRejection::Occupied(3).to_string(), "cell 3 is already marked");
        assert_eq!(MoveRejection::GameOver.to_string(), "game is already over");
    }
}
