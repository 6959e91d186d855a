use common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    Help,
    Quit,
}

/// Parses one line of user input. Cells are typed 1..=9 and stored 0..=8.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => Err("Empty input".to_string()),
        "r" | "reset" => Ok(ConsoleCommand::Reset),
        "h" | "help" | "?" => Ok(ConsoleCommand::Help),
        "q" | "quit" | "exit" => Ok(ConsoleCommand::Quit),
        other => {
            let cell: usize = other
                .parse()
                .map_err(|_| format!("Unknown command: {}", line))?;
            if cell == 0 || cell > CELL_COUNT {
                return Err(format!("Cell must be between 1 and {}, got {}", CELL_COUNT, cell));
            }
            Ok(ConsoleCommand::Place(cell - 1))
        }
    }
}

pub const HELP_TEXT: &str = "Type 1-9 to mark a cell (1 is top left, 9 is bottom right), r to restart, q to quit.";
