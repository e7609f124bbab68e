//! Time-series utilities shared by the orchestrator and its tests.
//!
//! - `align`: map calendar days to the next trading day
//! - `merge`: join daily sentiment with same-day volatility
/// Trading-day index and next-trading-day lookup.
pub mod align;
/// Inner join of daily sentiment against price rows.
pub mod merge;
