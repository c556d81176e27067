//! Additive salary-bracket scorer.
//!
//! Scoring is a small, pure function over fixed tables so that every
//! front-end (CLI, batch, TUI) shares exactly the same rules.

pub mod scorer;
pub mod tables;

pub use scorer::*;
