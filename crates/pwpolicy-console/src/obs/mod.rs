//! Lightweight in-process metrics.
//!
//! Counters are stored as atomics keyed by label sets and rendered by the
//! `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::{ConsoleMetrics, CounterVec};
