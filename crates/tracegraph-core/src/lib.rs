//! Tracegraph Core Library
//!
//! Graph traversal and shortest-path engine that returns ordered, replayable
//! visit traces instead of bare results.

pub mod config;
pub mod error;
pub mod format;
pub mod frontier;
pub mod graph;
pub mod logging;
pub mod records;
