mod broadcaster;
mod scheduler;
mod session_rng;

pub mod tictactoe;

pub use broadcaster::{GameBroadcaster, NullBroadcaster};
pub use scheduler::{FiredTask, ManualScheduler, ScheduledTask, Scheduler, TaskHandle, TokioScheduler};
pub use session_rng::{MoveRng, SessionRng};
