//! CLI commands for tracegraph

pub mod algorithms;
pub mod dispatch;
pub mod load;
pub mod path;
pub mod traverse;
