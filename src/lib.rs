//! **eller_mazes** grows an endless maze in the terminal, one row at a time, with Eller's algorithm.

pub mod cancellation;
pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod partition;
pub mod renderers;
pub mod row;
pub mod streaming;
pub mod terminal;
pub mod units;
mod utils;
