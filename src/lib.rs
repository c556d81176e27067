//! `salary-bracket` library crate.
//!
//! The binary (`salary`) is a thin wrapper around this library so that:
//!
//! - the scorer is testable without spawning processes
//! - the classify, batch, and TUI front-ends share one set of rules

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod scoring;
pub mod tui;

pub use domain::{Prediction, Profile, SalaryBracket};
pub use scoring::{classify, predict};
