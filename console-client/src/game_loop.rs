use std::io::Write;
use std::ops::ControlFlow;

use tokio::io::{AsyncBufReadExt, BufReader};

use common::games::tictactoe::{TicTacToeSession, TicTacToeSessionSettings};
use common::games::{MoveRng, Scheduler, SessionRng, TokioScheduler};
use common::{GameConfig, Player, debug, log};
use crate::input::{ConsoleCommand, HELP_TEXT, parse_command};
use crate::renderer::{ConsoleBroadcaster, Symbols};

type ConsoleSession<S, R, W> = TicTacToeSession<S, R, ConsoleBroadcaster<W>>;

pub async fn run_console_game(config: &GameConfig, seed: u64) -> Result<(), String> {
    let (scheduler, mut timer_rx) = TokioScheduler::new();
    let symbols = Symbols {
        player_a: config.player_a_symbol.clone(),
        player_b: config.player_b_symbol.clone(),
    };
    let broadcaster = ConsoleBroadcaster::new(std::io::stdout(), config.opponent, symbols);

    let mut session = TicTacToeSession::new(
        TicTacToeSessionSettings::from(config),
        scheduler,
        SessionRng::new(seed),
        broadcaster,
    );

    session.broadcaster_mut().print_line(HELP_TEXT);
    session.broadcast_current_state();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
                let Some(line) = line else {
                    debug!("Input closed");
                    break;
                };
                if handle_line(&mut session, &line).is_break() {
                    break;
                }
            }
            Some(fired) = timer_rx.recv() => {
                session.on_timer(fired);
            }
        }
    }

    log!("Console game finished");
    Ok(())
}

/// The human always plays A against the computer; in two-player mode the
/// keyboard belongs to whoever is to move.
fn human_player<S, R, W>(session: &ConsoleSession<S, R, W>) -> Player
where
    S: Scheduler,
    R: MoveRng,
    W: Write,
{
    match session.settings().bot_player() {
        Some(bot) => bot.opponent(),
        None => session.game_state().current_player(),
    }
}

fn handle_line<S, R, W>(session: &mut ConsoleSession<S, R, W>, line: &str) -> ControlFlow<()>
where
    S: Scheduler,
    R: MoveRng,
    W: Write,
{
    match parse_command(line) {
        Ok(ConsoleCommand::Place(index)) => {
            let player = human_player(session);
            let outcome = session.request_move(index, player);
            if !outcome.accepted && outcome.snapshot.is_active() && outcome.snapshot.current_player == player {
                session
                    .broadcaster_mut()
                    .print_line(&format!("Cell {} is already taken.", index + 1));
            }
        }
        Ok(ConsoleCommand::Reset) => {
            session.reset();
        }
        Ok(ConsoleCommand::Help) => {
            session.broadcaster_mut().print_line(HELP_TEXT);
        }
        Ok(ConsoleCommand::Quit) => return ControlFlow::Break(()),
        Err(e) => {
            session.broadcaster_mut().print_line(&e);
        }
    }
    ControlFlow::Continue(())
}
