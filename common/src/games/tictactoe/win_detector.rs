use super::board::Board;
use super::types::{Player, WinningLine};

/// Rows, then columns, then diagonals. The heuristic scans in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// True when every cell of some winning line holds `player`.
pub fn check_win(board: &Board, player: Player) -> bool {
    check_win_with_line(board, player).is_some()
}

pub fn check_win_with_line(board: &Board, player: Player) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&i| board.get(i) == Some(player)))
        .map(|&cells| WinningLine::new(player, cells))
}

pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    check_win_with_line(board, Player::A).or_else(|| check_win_with_line(board, Player::B))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_line_wins() {
        for line in WINNING_LINES {
            let mut pattern = ['.'; 9];
            for i in line {
                pattern[i] = 'A';
            }
            let board = Board::from_pattern(&pattern.iter().collect::<String>()).unwrap();

            assert_eq!(
                check_win_with_line(&board, Player::A),
                Some(WinningLine::new(Player::A, line))
            );
            assert!(!check_win(&board, Player::B));
        }
    }

    #[test]
    fn test_unlisted_triples_do_not_win() {
        // {0,1,3}, {1,3,5}, {0,2,6}, {0,5,7}
        for pattern in ["AA.A.....", ".A.A.A...", "A.A...A..", "A....A.A."] {
            let board = Board::from_pattern(pattern).unwrap();

            assert!(!check_win(&board, Player::A), "pattern {} should not win", pattern);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_pattern("ABA ... ...").unwrap();

        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_find_winning_line_reports_player_b() {
        let board = Board::from_pattern("AA. BBB A..").unwrap();

        assert_eq!(find_winning_line(&board), Some(WinningLine::new(Player::B, [3, 4, 5])));
    }
}
