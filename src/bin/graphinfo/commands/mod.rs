//! Command implementations

pub mod completions;
pub mod configs;
pub mod describe;
