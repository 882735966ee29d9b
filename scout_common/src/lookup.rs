//! Scouter lookup: who scouted a given match position.
//!
//! The lookup validates three cells (match number, alliance color and
//! driverstation), turns them into a `LookupRequest`, and forwards its JSON
//! form to the scouting backend through a [`Transport`]. The backend's answer
//! is handed back as-is.
//!
//! Bad input is presentation-facing: the sheet user sees one of the
//! [`InvalidInput`] messages in the cell, so [`get_scouter`] returns it as
//! `Ok`. Only transport failures are `Err`.
use log::debug;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::cell::CellValue;
use crate::color::AllianceColor;
use crate::net::Transport;
use crate::result::Result;

/// Highest driverstation number within an alliance.
pub const MAX_DRIVER_STATION: u8 = 3;

/// 2^64, the first whole number a `u64` cannot hold.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Rejected lookup input. The messages are shown verbatim in the sheet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Match is not an integer, or is below 1.
    #[error("Please enter a valid match")]
    Match,
    /// Color is not red or blue.
    #[error("Please enter a valid color")]
    Color,
    /// Driverstation is not an integer in 1..=3.
    #[error("Please enter a valid Driverstation")]
    DriverStation,
}

/// Key the backend resolves to a scouter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LookupRequest {
    /// Match number, starting at 1. Kept as the cell's number so that large
    /// values reach the backend untruncated.
    #[serde(rename = "Match", serialize_with = "serialize_whole_number")]
    pub match_number: f64,
    /// `true` for the blue alliance, `false` for red.
    #[serde(rename = "isBlue")]
    pub is_blue: bool,
    /// Driverstation within the alliance, 1 to 3.
    #[serde(rename = "DriverStation")]
    pub driver_station: u8,
}

impl LookupRequest {
    /// Validates the three cells in order: match, then color, then driverstation.
    /// The first failing check decides the error.
    pub fn validate(
        match_number: &CellValue,
        color: &CellValue,
        driver_station: &CellValue,
    ) -> std::result::Result<Self, InvalidInput> {
        let match_number = match match_number.as_integer() {
            Some(n) if n >= 1.0 => n,
            _ => return Err(InvalidInput::Match),
        };

        let color = AllianceColor::from_cell(color).ok_or(InvalidInput::Color)?;

        let driver_station = match driver_station.as_integer() {
            Some(n) if (1.0..=f64::from(MAX_DRIVER_STATION)).contains(&n) => n as u8,
            _ => return Err(InvalidInput::DriverStation),
        };

        Ok(Self {
            match_number,
            is_blue: color.is_blue(),
            driver_station,
        })
    }

    /// JSON body sent to the backend, e.g. `{"Match":5,"isBlue":true,"DriverStation":2}`.
    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Writes whole numbers without a fraction (`5`, not `5.0`). Beyond `u64`
/// range the number is written in float notation.
fn serialize_whole_number<S: Serializer>(n: &f64, s: S) -> std::result::Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && (0.0..U64_LIMIT).contains(n) {
        s.serialize_u64(*n as u64)
    } else {
        s.serialize_f64(*n)
    }
}

/// Looks up the scouter of a match position.
///
/// Returns the validation message for bad input without calling out, otherwise
/// the backend's response text verbatim. Exactly one call is made; failures are
/// not retried.
pub fn get_scouter<T: Transport + ?Sized>(
    transport: &T,
    match_number: &CellValue,
    color: &CellValue,
    driver_station: &CellValue,
) -> Result<String> {
    let request = match LookupRequest::validate(match_number, color, driver_station) {
        Ok(request) => request,
        Err(invalid) => {
            debug!(
                "Rejected lookup ({}, {}, {}): {}",
                match_number, color, driver_station, invalid
            );
            return Ok(invalid.to_string());
        }
    };

    let payload = request.to_payload()?;
    transport.fetch(&payload)
}
