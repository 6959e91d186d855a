use std::io::Write;

use common::games::GameBroadcaster;
use common::{GameSnapshot, GameStatus, OpponentType, Player, log};

#[derive(Debug, Clone)]
pub struct Symbols {
    pub player_a: String,
    pub player_b: String,
}

impl Symbols {
    pub fn of(&self, player: Player) -> &str {
        match player {
            Player::A => &self.player_a,
            Player::B => &self.player_b,
        }
    }
}

pub fn status_message(snapshot: &GameSnapshot, opponent: OpponentType, symbols: &Symbols) -> String {
    match (opponent, snapshot.status) {
        (_, GameStatus::Draw) => "It's a draw! 🤝".to_string(),
        (OpponentType::Heuristic, GameStatus::Won(Player::A)) => "You won! 🎉".to_string(),
        (OpponentType::Heuristic, GameStatus::Won(Player::B)) => "Computer won! 🎉".to_string(),
        (OpponentType::Heuristic, GameStatus::InProgress) => match snapshot.current_player {
            Player::A => "Your turn!".to_string(),
            Player::B => "Computer's turn!".to_string(),
        },
        (OpponentType::Human, GameStatus::Won(winner)) => {
            format!("Player {} won! 🎉", symbols.of(winner))
        }
        (OpponentType::Human, GameStatus::InProgress) => {
            format!("Player {}'s turn!", symbols.of(snapshot.current_player))
        }
    }
}

pub fn render_board(snapshot: &GameSnapshot, symbols: &Symbols) -> String {
    let mut rows = Vec::with_capacity(3);

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match snapshot.board.get(index) {
                    Some(player) if snapshot.winning_line.is_some_and(|line| line.cells.contains(&index)) => {
                        format!("[{}]", symbols.of(player))
                    }
                    Some(player) => format!(" {} ", symbols.of(player)),
                    None => format!(" {} ", index + 1),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

/// Prints every snapshot it receives. Write failures are logged and
/// otherwise ignored; they never reach the game.
pub struct ConsoleBroadcaster<W: Write> {
    out: W,
    opponent: OpponentType,
    symbols: Symbols,
}

impl<W: Write> ConsoleBroadcaster<W> {
    pub fn new(out: W, opponent: OpponentType, symbols: Symbols) -> Self {
        Self { out, opponent, symbols }
    }

    pub fn print_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            log!("Failed to write to console: {}", e);
        }
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> GameBroadcaster for ConsoleBroadcaster<W> {
    fn broadcast_state(&mut self, snapshot: &GameSnapshot) {
        let text = format!(
            "\n{}\n{}",
            render_board(snapshot, &self.symbols),
            status_message(snapshot, self.opponent, &self.symbols)
        );
        self.print_line(&text);
    }

    fn broadcast_game_over(&mut self, _snapshot: &GameSnapshot) {
        self.print_line("Type r to play again.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::TicTacToeGameState;

    fn symbols() -> Symbols {
        Symbols {
            player_a: "X".to_string(),
            player_b: "O".to_string(),
        }
    }

    fn play(moves: &[usize]) -> GameSnapshot {
        let mut state = TicTacToeGameState::new();
        for &index in moves {
            let player = state.current_player();
            state.apply_move(index, player);
        }
        state.snapshot()
    }

    #[test]
    fn test_messages_in_heuristic_mode() {
        let symbols = symbols();

        assert_eq!(status_message(&play(&[]), OpponentType::Heuristic, &symbols), "Your turn!");
        assert_eq!(status_message(&play(&[4]), OpponentType::Heuristic, &symbols), "Computer's turn!");
        assert_eq!(status_message(&play(&[0, 4, 1, 3, 2]), OpponentType::Heuristic, &symbols), "You won! 🎉");
        assert_eq!(status_message(&play(&[0, 4, 1, 3, 8, 5]), OpponentType::Heuristic, &symbols), "Computer won! 🎉");
    }

    #[test]
    fn test_messages_in_human_mode() {
        let symbols = symbols();

        assert_eq!(status_message(&play(&[4]), OpponentType::Human, &symbols), "Player O's turn!");
        assert_eq!(
            status_message(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]), OpponentType::Human, &symbols),
            "It's a draw! 🤝"
        );
    }

    #[test]
    fn test_render_board_numbers_empty_cells_and_brackets_winning_line() {
        let text = render_board(&play(&[0, 4, 1, 3, 2]), &symbols());

        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "[X]|[X]|[X]");
        assert_eq!(rows[2], " O | O | 6 ");
        assert_eq!(rows[4], " 7 | 8 | 9 ");
    }

    #[test]
    fn test_broadcaster_writes_board_and_message() {
        let mut broadcaster = ConsoleBroadcaster::new(Vec::new(), OpponentType::Heuristic, symbols());

        broadcaster.broadcast_state(&play(&[4]));

        let text = String::from_utf8(broadcaster.output().clone()).unwrap();
        assert!(text.contains(" 1 | 2 | 3 "));
        assert!(text.contains(" 4 | X | 6 "));
        assert!(text.trim_end().ends_with("Computer's turn!"));
    }
}
