//! Input/output helpers.
//!
//! - profile CSV ingest + validation (`ingest`)
//! - prediction exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
