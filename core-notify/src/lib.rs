//! # Notification Queue
//!
//! Transient mailbox for notices raised outside a renderable context.
//!
//! A failure during pre-navigation data loading has nowhere to display
//! itself; producers enqueue a [`Notice`] here and whichever view mounts
//! next drains the queue. Strict FIFO, no deduplication, no expiry unless
//! the producer sets one explicitly.

pub mod queue;

pub use queue::{Notice, NoticeQueue, Severity};
