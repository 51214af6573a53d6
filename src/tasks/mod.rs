//! Background Tasks Module
//!
//! # Tasks
//! - TTL Cleanup: Purges the expired book list from the cache at a fixed interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
