//! Error types for building SVG values and documents.
//!
//! Every failure is reported at the point where a value is constructed or
//! parsed. Rendering itself never fails.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SvgError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SvgError {
    /// Text did not match any clock-value grammar
    #[error("invalid clock value: {input:?}")]
    InvalidClockValue { input: String },

    /// A clock-value component is outside its allowed range
    #[error("clock value {field} out of range: {value}")]
    ClockOutOfRange { field: &'static str, value: f64 },

    /// `rotate(a x y)` needs both centre coordinates
    #[error("rotate transform needs both centre coordinates or neither")]
    RotateCenterIncomplete,

    #[error("cannot combine lengths with different units: {left} and {right}")]
    UnitMismatch { left: String, right: String },

    #[error("cannot combine {left} and {right} numbers")]
    NumberKindMismatch {
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,

    /// Unknown text for a closed keyword set
    #[error("invalid {kind} keyword: {value:?}")]
    InvalidKeyword { kind: &'static str, value: String },

    #[error("unknown length unit: {0:?}")]
    InvalidUnit(String),

    /// An element cannot hold text and child elements at once
    #[error("element already has text content; cannot append child elements")]
    TextWithChildren,
}
