use crate::games::{FiredTask, GameBroadcaster, MoveRng, ScheduledTask, Scheduler, TaskHandle};
use crate::{debug, log};
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::{GameSnapshot, MoveOutcome, MoveRejection, TicTacToeGameState};
use super::settings::TicTacToeSessionSettings;
use super::types::{GameStatus, Player};

/// Drives one board: applies human moves, paces the computer's reply and
/// restarts finished games.
///
/// Nothing here blocks. Delays go through the [`Scheduler`], and whoever owns
/// the scheduler feeds fired tasks back through [`TicTacToeSession::on_timer`].
/// A fired task is only acted on while its handle is still the one the
/// session waits for, so timers that outlive a reset are dropped.
pub struct TicTacToeSession<S, R, B>
where
    S: Scheduler,
    R: MoveRng,
    B: GameBroadcaster,
{
    settings: TicTacToeSessionSettings,
    game_state: TicTacToeGameState,
    scheduler: S,
    rng: R,
    broadcaster: B,
    pending_computer_move: Option<TaskHandle>,
    pending_restart: Option<TaskHandle>,
}

impl<S, R, B> TicTacToeSession<S, R, B>
where
    S: Scheduler,
    R: MoveRng,
    B: GameBroadcaster,
{
    pub fn new(settings: TicTacToeSessionSettings, scheduler: S, rng: R, broadcaster: B) -> Self {
        Self {
            settings,
            game_state: TicTacToeGameState::new(),
            scheduler,
            rng,
            broadcaster,
            pending_computer_move: None,
            pending_restart: None,
        }
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game_state.snapshot()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn is_computer_move_pending(&self) -> bool {
        self.pending_computer_move.is_some()
    }

    pub fn is_restart_pending(&self) -> bool {
        self.pending_restart.is_some()
    }

    pub fn broadcast_current_state(&mut self) {
        let snapshot = self.game_state.snapshot();
        self.broadcaster.broadcast_state(&snapshot);
    }

    /// Move request from the UI. Requests on behalf of the computer player
    /// are ignored; it only moves when its scheduled turn fires.
    pub fn request_move(&mut self, index: usize, player: Player) -> MoveOutcome {
        if self.settings.bot_player() == Some(player) {
            debug!("Ignored UI move at {} for computer player {}", index, player);
            return MoveOutcome {
                accepted: false,
                snapshot: self.game_state.snapshot(),
            };
        }
        self.apply_move(index, player)
    }

    pub fn reset(&mut self) -> GameSnapshot {
        self.cancel_pending();
        let snapshot = self.game_state.reset();
        log!("New game started, player {} to move", snapshot.current_player);
        self.broadcaster.broadcast_state(&snapshot);
        snapshot
    }

    pub fn on_timer(&mut self, fired: FiredTask) {
        match fired.task {
            ScheduledTask::ComputerMove => {
                if self.pending_computer_move != Some(fired.handle) {
                    debug!("Dropped stale computer move timer {:?}", fired.handle);
                    return;
                }
                self.pending_computer_move = None;
                self.play_bot_turn();
            }
            ScheduledTask::AutoRestart => {
                if self.pending_restart != Some(fired.handle) {
                    debug!("Dropped stale restart timer {:?}", fired.handle);
                    return;
                }
                self.pending_restart = None;
                self.reset();
            }
        }
    }

    fn apply_move(&mut self, index: usize, player: Player) -> MoveOutcome {
        let status = match self.game_state.place_mark(index, player) {
            Ok(status) => status,
            Err(rejection) => {
                log_rejection(index, player, rejection);
                return MoveOutcome {
                    accepted: false,
                    snapshot: self.game_state.snapshot(),
                };
            }
        };

        let snapshot = self.game_state.snapshot();
        self.broadcaster.broadcast_state(&snapshot);

        match status {
            GameStatus::InProgress => {
                if self.settings.bot_player() == Some(snapshot.current_player) {
                    let handle = self
                        .scheduler
                        .schedule(self.settings.computer_delay, ScheduledTask::ComputerMove);
                    self.pending_computer_move = Some(handle);
                }
            }
            GameStatus::Won(winner) => {
                log!("Player {} won", winner);
                self.finish_game(&snapshot);
            }
            GameStatus::Draw => {
                log!("Game ended in a draw");
                self.finish_game(&snapshot);
            }
        }

        MoveOutcome {
            accepted: true,
            snapshot,
        }
    }

    fn play_bot_turn(&mut self) {
        let Some(bot_player) = self.settings.bot_player() else {
            return;
        };
        if !self.game_state.is_active() || self.game_state.current_player() != bot_player {
            return;
        }

        let input = BotInput::from_game_state(&self.game_state);
        let Some(index) = calculate_move(&input, &mut self.rng) else {
            return;
        };

        debug!("Computer player {} picks cell {}", bot_player, index);
        let outcome = self.apply_move(index, bot_player);
        if !outcome.accepted {
            log!("Computer move at {} was rejected", index);
        }
    }

    fn finish_game(&mut self, snapshot: &GameSnapshot) {
        self.broadcaster.broadcast_game_over(snapshot);

        if let Some(delay) = self.settings.auto_restart_delay {
            let handle = self.scheduler.schedule(delay, ScheduledTask::AutoRestart);
            self.pending_restart = Some(handle);
        }
    }

    fn cancel_pending(&mut self) {
        for handle in [self.pending_computer_move.take(), self.pending_restart.take()]
            .into_iter()
            .flatten()
        {
            self.scheduler.cancel(handle);
        }
    }
}

fn log_rejection(index: usize, player: Player, rejection: MoveRejection) {
    debug!("Ignored move at {} by player {}: {}", index, player, rejection);
}
