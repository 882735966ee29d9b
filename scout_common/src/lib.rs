//!
//! Spreadsheet custom functions for a scouting sheet, as a library.
//!
//! This crate aggregates:
//! - `error` — unified error type `ScoutError` used across the workspace.
//! - `result` — handy `Result<T, ScoutError>` alias.
//! - `cell` — `CellValue`, the value a spreadsheet hands to a custom function.
//! - `color` — alliance colors and their case-insensitive parsing.
//! - `lookup` — the scouter lookup: input validation, payload, outbound call.
//! - `quotes` — the motivational quote list and random selection.
//! - `net` — endpoint constants and the `Transport` used for the lookup call.
#![warn(missing_docs)]
pub mod cell;
pub mod color;
pub mod error;
pub mod lookup;
pub mod net;
pub mod quotes;
pub mod result;

pub use cell::CellValue;
pub use error::ScoutError;
pub use lookup::{InvalidInput, LookupRequest, get_scouter};
pub use quotes::{QUOTES, motivational_quote};
pub use result::Result;
