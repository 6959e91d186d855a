use super::tictactoe::GameSnapshot;

/// Rendering side of a session. Implementations only observe snapshots;
/// they never get mutable access to the game.
pub trait GameBroadcaster {
    fn broadcast_state(&mut self, snapshot: &GameSnapshot);

    fn broadcast_game_over(&mut self, snapshot: &GameSnapshot);
}

/// Broadcaster for headless sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBroadcaster;

impl GameBroadcaster for NullBroadcaster {
    fn broadcast_state(&mut self, _snapshot: &GameSnapshot) {}

    fn broadcast_game_over(&mut self, _snapshot: &GameSnapshot) {}
}
