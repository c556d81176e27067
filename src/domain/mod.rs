//! Domain types shared by the scorer and its front-ends.
//!
//! This module defines:
//!
//! - the form's choice lists (`Education`, `Occupation`, `Industry`, `CityTier`, ...)
//! - the scorer input (`Profile`)
//! - the scorer output (`Prediction`, `SalaryBracket`, `ScoreBreakdown`)

pub mod types;

pub use types::*;
