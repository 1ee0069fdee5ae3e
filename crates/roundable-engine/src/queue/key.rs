use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TASK_KEY: AtomicU64 = AtomicU64::new(1);

/// Coalescing key for [`UiQueue::schedule`](super::UiQueue::schedule).
///
/// Allocated once per owner (typically one per view controller) and reused
/// for every update that owner requests.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TaskKey(u64);

impl TaskKey {
    /// Allocate a new, globally unique key.
    pub fn new() -> Self {
        TaskKey(NEXT_TASK_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TaskKey {
    fn default() -> Self {
        Self::new()
    }
}
