use std::fmt;

use super::types::Player;

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// 3x3 grid in row-major order: row 0 is cells 0..=2, row 2 is cells 6..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a 9-character row-major pattern.
    ///
    /// `A`/`X` marks player A, `B`/`O` marks player B, anything else is empty.
    /// Returns `None` when the pattern does not have exactly 9 characters.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let chars: Vec<char> = pattern.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return None;
        }

        let mut board = Self::new();
        for (index, c) in chars.into_iter().enumerate() {
            board.cells[index] = match c.to_ascii_uppercase() {
                'A' | 'X' => Some(Player::A),
                'B' | 'O' => Some(Player::B),
                _ => None,
            };
        }
        Some(board)
    }

    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.cells
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn get_available_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_none()).collect()
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(player)).count()
    }

    /// Only the game state calls this, after it has validated the move.
    pub(super) fn place(&mut self, index: usize, player: Player) {
        debug_assert!(self.cells[index].is_none());
        self.cells[index] = Some(player);
    }

    pub(super) fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let c = match self.cells[row * 3 + col] {
                    Some(Player::A) => 'A',
                    Some(Player::B) => 'B',
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pattern_maps_marks() {
        let board = Board::from_pattern("AX. BO. ...").unwrap();

        assert_eq!(board.get(0), Some(Player::A));
        assert_eq!(board.get(1), Some(Player::A));
        assert_eq!(board.get(3), Some(Player::B));
        assert_eq!(board.get(4), Some(Player::B));
        assert_eq!(board.get_available_moves(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_from_pattern_rejects_wrong_length() {
        assert!(Board::from_pattern("AB").is_none());
        assert!(Board::from_pattern("..........").is_none());
    }

    #[test]
    fn test_is_valid_move_checks_range_and_occupancy() {
        let board = Board::from_pattern("A........").unwrap();

        assert!(!board.is_valid_move(0));
        assert!(board.is_valid_move(8));
        assert!(!board.is_valid_move(9));
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::from_pattern("A.B .A. B..").unwrap();

        assert_eq!(board.to_string(), "A.B\n.A.\nB..");
    }
}
