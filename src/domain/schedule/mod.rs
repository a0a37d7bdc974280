//! Scheduling value objects

mod interval;

pub use interval::{Interval, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WATCH_INTERVAL_MS};
