//! Clock-value parser.
//!
//! Accepts the three SMIL clock grammars:
//!
//! - full clock value `H:MM:SS(.fff)?`
//! - partial clock value `MM:SS(.fff)?` with minutes `00`-`59`
//! - timecount `<number>(h|min|s|ms)?`, seconds when the unit is absent

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SvgError};
use crate::timing::ClockValue;

lazy_static! {
    static ref RE_FULL: Regex = Regex::new(r"^(\d+):(\d{2}):(\d{2}(?:\.\d+)?)$").unwrap();
    static ref RE_PARTIAL: Regex = Regex::new(r"^([0-5]\d):(\d{2}(?:\.\d+)?)$").unwrap();
    static ref RE_TIMECOUNT: Regex = Regex::new(r"^(\d+(?:\.\d+)?)(h|min|s|ms)?$").unwrap();
}

/// Parse a clock value, carrying seconds and minutes that overflow 59.
pub fn parse_clock_value(text: &str) -> Result<ClockValue> {
    let trimmed = text.trim();
    let invalid = || {
        log::debug!("rejected clock value {:?}", text);
        SvgError::InvalidClockValue {
            input: text.to_string(),
        }
    };

    if let Some(caps) = RE_FULL.captures(trimmed) {
        let hours = caps[1].parse::<u64>().map_err(|_| invalid())?;
        let minutes = caps[2].parse::<u64>().map_err(|_| invalid())?;
        let seconds = caps[3].parse::<f64>().map_err(|_| invalid())?;
        return ClockValue::normalized(hours, minutes, seconds);
    }

    if let Some(caps) = RE_PARTIAL.captures(trimmed) {
        let minutes = caps[1].parse::<u64>().map_err(|_| invalid())?;
        let seconds = caps[2].parse::<f64>().map_err(|_| invalid())?;
        return ClockValue::normalized(0, minutes, seconds);
    }

    if let Some(caps) = RE_TIMECOUNT.captures(trimmed) {
        let count = caps[1].parse::<f64>().map_err(|_| invalid())?;
        let seconds = match caps.get(2).map(|m| m.as_str()) {
            Some("h") => count * 3600.0,
            Some("min") => count * 60.0,
            Some("ms") => count / 1000.0,
            _ => count,
        };
        return ClockValue::from_seconds(seconds);
    }

    Err(invalid())
}
