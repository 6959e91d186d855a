//! Cancelable delayed tasks.
//!
//! Sessions never sleep themselves. They ask a [`Scheduler`] to deliver a
//! [`ScheduledTask`] after a delay and get a [`TaskHandle`] back; when the
//! delay elapses the owner of the scheduler hands the [`FiredTask`] to the
//! session. [`ManualScheduler`] drives time by hand for tests,
//! [`TokioScheduler`] uses real timers.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    ComputerMove,
    AutoRestart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTask {
    pub handle: TaskHandle,
    pub task: ScheduledTask,
}

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TaskHandle;

    /// Cancelling an unknown or already fired handle is a no-op.
    fn cancel(&mut self, handle: TaskHandle);
}

#[derive(Debug)]
struct PendingTask {
    due: Duration,
    handle: TaskHandle,
    task: ScheduledTask,
}

/// Virtual clock scheduler; nothing fires until [`ManualScheduler::advance`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_tasks(&self) -> Vec<ScheduledTask> {
        self.pending.iter().map(|p| p.task).collect()
    }

    /// Moves the clock forward and returns every task that came due, oldest first.
    pub fn advance(&mut self, by: Duration) -> Vec<FiredTask> {
        self.now += by;
        let now = self.now;

        let (mut due, remaining): (Vec<PendingTask>, Vec<PendingTask>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = remaining;

        due.sort_by_key(|p| (p.due, p.handle.0));
        due.into_iter()
            .map(|p| FiredTask { handle: p.handle, task: p.task })
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTask {
            due: self.now + delay,
            handle,
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.pending.retain(|p| p.handle != handle);
    }
}

/// Real-time scheduler backed by tokio timers.
///
/// Fired tasks arrive on the receiver returned by [`TokioScheduler::new`].
pub struct TokioScheduler {
    next_id: u64,
    sender: mpsc::UnboundedSender<FiredTask>,
    tasks: HashMap<TaskHandle, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FiredTask>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            next_id: 0,
            sender,
            tasks: HashMap::new(),
        };
        (scheduler, receiver)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TaskHandle {
        self.tasks.retain(|_, join| !join.is_finished());

        let handle = TaskHandle(self.next_id);
        self.next_id += 1;

        let sender = self.sender.clone();
        let join = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(FiredTask { handle, task });
        });
        self.tasks.insert(handle, join);
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if let Some(join) = self.tasks.remove(&handle) {
            join.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, join) in self.tasks.drain() {
            join.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_fires_only_due_tasks() {
        let mut scheduler = ManualScheduler::new();
        let move_handle = scheduler.schedule(Duration::from_millis(700), ScheduledTask::ComputerMove);
        scheduler.schedule(Duration::from_millis(3000), ScheduledTask::AutoRestart);

        let fired = scheduler.advance(Duration::from_millis(700));

        assert_eq!(fired, vec![FiredTask { handle: move_handle, task: ScheduledTask::ComputerMove }]);
        assert_eq!(scheduler.pending_tasks(), vec![ScheduledTask::AutoRestart]);
    }

    #[test]
    fn test_manual_scheduler_orders_by_due_time() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(30), ScheduledTask::AutoRestart);
        scheduler.schedule(Duration::from_millis(10), ScheduledTask::ComputerMove);

        let fired: Vec<ScheduledTask> = scheduler
            .advance(Duration::from_millis(50))
            .into_iter()
            .map(|f| f.task)
            .collect();

        assert_eq!(fired, vec![ScheduledTask::ComputerMove, ScheduledTask::AutoRestart]);
    }

    #[test]
    fn test_manual_scheduler_cancel_prevents_firing() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(10), ScheduledTask::AutoRestart);

        scheduler.cancel(handle);

        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[tokio::test]
    async fn test_tokio_scheduler_delivers_fired_task() {
        let (mut scheduler, mut receiver) = TokioScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(5), ScheduledTask::ComputerMove);

        let fired = tokio::time::timeout(Duration::from_secs(2), receiver.recv())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(fired, FiredTask { handle, task: ScheduledTask::ComputerMove });
    }

    #[tokio::test]
    async fn test_tokio_scheduler_cancel_aborts_timer() {
        let (mut scheduler, mut receiver) = TokioScheduler::new();
        let cancelled = scheduler.schedule(Duration::from_millis(20), ScheduledTask::AutoRestart);
        let kept = scheduler.schedule(Duration::from_millis(60), ScheduledTask::ComputerMove);

        scheduler.cancel(cancelled);

        let fired = tokio::time::timeout(Duration::from_secs(2), receiver.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fired.handle, kept);
    }
}
