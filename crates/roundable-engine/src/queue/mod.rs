//! UI task queue.
//!
//! Models the UI thread's event queue: work posted during one turn runs on
//! the next. Keyed tasks coalesce, so a burst of requests for the same update
//! within one turn runs it once.
//!
//! # Example
//!
//! ```rust
//! use roundable_engine::queue::{TaskKey, UiQueue};
//!
//! let queue = UiQueue::new();
//! let key = TaskKey::new();
//! assert!(queue.schedule(key, || {}));
//! assert!(!queue.schedule(key, || {})); // coalesced
//! assert_eq!(queue.run_turn(), Ok(1));
//! ```

mod error;
mod key;
mod ui_queue;

pub use error::QueueError;
pub use key::TaskKey;
pub use ui_queue::UiQueue;
