use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;

use super::{QueueError, TaskKey};

type Task = Box<dyn FnOnce()>;

struct Pending {
    key: Option<TaskKey>,
    task: Task,
}

#[derive(Default)]
struct QueueState {
    pending: VecDeque<Pending>,
    /// Keys currently in `pending`.
    scheduled: HashSet<TaskKey>,
    running: bool,
    turns: u64,
}

/// Handle to the UI thread's task queue.
///
/// Cloning is cheap and yields a handle to the same queue. The queue is
/// `!Send`: tasks and everything they touch stay on the thread that owns it.
#[derive(Clone, Default)]
pub struct UiQueue {
    state: Rc<RefCell<QueueState>>,
}

impl UiQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `task` for the next turn.
    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.state.borrow_mut().pending.push_back(Pending { key: None, task: Box::new(task) });
    }

    /// Enqueues `task` for the next turn unless a task with the same `key` is
    /// already waiting, in which case `task` is dropped.
    ///
    /// Returns `true` if `task` was queued. Coalesced tasks must therefore be
    /// idempotent and read their inputs when they run, not when queued.
    pub fn schedule(&self, key: TaskKey, task: impl FnOnce() + 'static) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.scheduled.insert(key) {
            return false;
        }
        state.pending.push_back(Pending { key: Some(key), task: Box::new(task) });
        true
    }

    /// Returns `true` if a task for `key` is waiting for the next turn.
    #[inline]
    pub fn is_scheduled(&self, key: TaskKey) -> bool {
        self.state.borrow().scheduled.contains(&key)
    }

    /// Number of tasks waiting for the next turn.
    #[inline]
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Number of completed turns.
    #[inline]
    pub fn turns(&self) -> u64 {
        self.state.borrow().turns
    }

    /// Runs every task queued before this call, in FIFO order.
    ///
    /// Tasks queued while the turn runs (including re-schedules of a key whose
    /// task is currently running) wait for the next turn. Returns the number
    /// of tasks run.
    ///
    /// If a task panics, the tasks of this turn it did not reach go back to the
    /// front of the queue, keeping their keys, and the panic propagates.
    pub fn run_turn(&self) -> Result<usize, QueueError> {
        let batch = {
            let mut state = self.state.borrow_mut();
            if state.running {
                return Err(QueueError::Reentrant);
            }
            state.running = true;
            let batch = std::mem::take(&mut state.pending);
            for key in batch.iter().filter_map(|p| p.key) {
                state.scheduled.remove(&key);
            }
            batch
        };

        let count = batch.len();
        let mut turn = Turn { state: &self.state, rest: batch };
        while let Some(pending) = turn.rest.pop_front() {
            (pending.task)();
        }
        drop(turn);

        log::trace!("ui queue: turn ran {count} task(s)");
        Ok(count)
    }

    /// Runs turns until the queue is empty or `max_turns` turns have run.
    ///
    /// Returns the total number of tasks run.
    pub fn run_until_idle(&self, max_turns: usize) -> Result<usize, QueueError> {
        let mut total = 0;
        for _ in 0..max_turns {
            if self.pending() == 0 {
                break;
            }
            total += self.run_turn()?;
        }
        Ok(total)
    }
}

impl fmt::Debug for UiQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("UiQueue")
            .field("pending", &state.pending.len())
            .field("running", &state.running)
            .field("turns", &state.turns)
            .finish()
    }
}

/// Ends a turn, also when a task panics: clears the running flag and puts
/// back the tasks the turn did not reach.
struct Turn<'a> {
    state: &'a RefCell<QueueState>,
    rest: VecDeque<Pending>,
}

impl Drop for Turn<'_> {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.running = false;
        state.turns += 1;

        if self.rest.is_empty() {
            return;
        }
        log::warn!("ui queue: task panicked, requeueing {} task(s)", self.rest.len());
        for pending in std::mem::take(&mut self.rest).into_iter().rev() {
            // A key re-scheduled before the panic already has a newer task queued.
            if let Some(key) = pending.key {
                if !state.scheduled.insert(key) {
                    continue;
                }
            }
            state.pending.push_front(pending);
        }
    }
}
