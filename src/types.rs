//! Value types shared by element attributes.
//!
//! Numbers keep the kind they were built with (integer, float or decimal)
//! and format with Rust's own `Display`, so `10` stays `10` and `0.5` stays
//! `0.5`.

use std::fmt;
use std::ops::Neg;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SvgError};
use crate::keywords::{Alignment, LengthUnit, ScaleType};

/// Implements `From<primitive>` for a type wrapping a [`Number`] variant.
macro_rules! from_number {
    ($target:ident :: $variant:ident) => {
        impl From<$crate::types::Number> for $target {
            fn from(n: $crate::types::Number) -> Self {
                $target::$variant(n)
            }
        }
        from_number!(@prim $target; i32, i64, u8, u16, u32, f32, f64, rust_decimal::Decimal);
    };
    (@prim $target:ident; $($t:ty),*) => {
        $(
            impl From<$t> for $target {
                fn from(n: $t) -> Self {
                    $crate::types::Number::from(n).into()
                }
            }
        )*
    };
}
pub(crate) use from_number;

// ============================================================================
// Number
// ============================================================================

/// A numeric attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
}

/// Both operands of a binary operation, brought to one kind.
enum Operands {
    Int(i64, i64),
    Float(f64, f64),
    Decimal(Decimal, Decimal),
}

impl Number {
    pub fn kind(&self) -> &'static str {
        match self {
            Number::Int(_) => "integer",
            Number::Float(_) => "float",
            Number::Decimal(_) => "decimal",
        }
    }

    fn operands(self, rhs: Number) -> Result<Operands> {
        Ok(match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Operands::Int(a, b),
            (Number::Float(a), Number::Float(b)) => Operands::Float(a, b),
            (Number::Float(a), Number::Int(b)) => Operands::Float(a, b as f64),
            (Number::Int(a), Number::Float(b)) => Operands::Float(a as f64, b),
            (Number::Decimal(a), Number::Decimal(b)) => Operands::Decimal(a, b),
            (Number::Decimal(a), Number::Int(b)) => Operands::Decimal(a, b.into()),
            (Number::Int(a), Number::Decimal(b)) => Operands::Decimal(a.into(), b),
            (l, r) => {
                return Err(SvgError::NumberKindMismatch {
                    left: l.kind(),
                    right: r.kind(),
                })
            }
        })
    }

    pub fn checked_add(self, rhs: impl Into<Number>) -> Result<Number> {
        match self.operands(rhs.into())? {
            Operands::Int(a, b) => a.checked_add(b).map(Number::Int).ok_or(SvgError::Overflow),
            Operands::Float(a, b) => Ok(Number::Float(a + b)),
            Operands::Decimal(a, b) => a.checked_add(b).map(Number::Decimal).ok_or(SvgError::Overflow),
        }
    }

    pub fn checked_sub(self, rhs: impl Into<Number>) -> Result<Number> {
        match self.operands(rhs.into())? {
            Operands::Int(a, b) => a.checked_sub(b).map(Number::Int).ok_or(SvgError::Overflow),
            Operands::Float(a, b) => Ok(Number::Float(a - b)),
            Operands::Decimal(a, b) => a.checked_sub(b).map(Number::Decimal).ok_or(SvgError::Overflow),
        }
    }

    pub fn checked_mul(self, rhs: impl Into<Number>) -> Result<Number> {
        match self.operands(rhs.into())? {
            Operands::Int(a, b) => a.checked_mul(b).map(Number::Int).ok_or(SvgError::Overflow),
            Operands::Float(a, b) => Ok(Number::Float(a * b)),
            Operands::Decimal(a, b) => a.checked_mul(b).map(Number::Decimal).ok_or(SvgError::Overflow),
        }
    }

    /// Integer division yields a float, the way true division does.
    pub fn checked_div(self, rhs: impl Into<Number>) -> Result<Number> {
        match self.operands(rhs.into())? {
            Operands::Int(_, 0) => Err(SvgError::DivisionByZero),
            Operands::Int(a, b) => Ok(Number::Float(a as f64 / b as f64)),
            Operands::Float(_, b) if b == 0.0 => Err(SvgError::DivisionByZero),
            Operands::Float(a, b) => Ok(Number::Float(a / b)),
            Operands::Decimal(_, b) if b.is_zero() => Err(SvgError::DivisionByZero),
            Operands::Decimal(a, b) => a.checked_div(b).map(Number::Decimal).ok_or(SvgError::Overflow),
        }
    }

    /// Negation that fails on `i64::MIN` instead of saturating.
    pub fn checked_neg(self) -> Result<Number> {
        match self {
            Number::Int(n) => n.checked_neg().map(Number::Int).ok_or(SvgError::Overflow),
            other => Ok(-other),
        }
    }
}

/// Saturates at `i64::MAX` for `-i64::MIN`; use [`Number::checked_neg`] to
/// detect that case.
impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(n) => Number::Int(n.saturating_neg()),
            Number::Float(n) => Number::Float(-n),
            Number::Decimal(n) => Number::Decimal(-n),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
            Number::Decimal(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n.into())
                }
            }
        )*
    };
}

number_from!(Int: i32, i64, u8, u16, u32);
number_from!(Float: f32, f64);

impl From<Decimal> for Number {
    fn from(n: Decimal) -> Self {
        Number::Decimal(n)
    }
}

// ============================================================================
// Length
// ============================================================================

/// A number with an explicit unit, e.g. `10mm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: Number,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: impl Into<Number>, unit: LengthUnit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    /// Build a length from a unit spelled as text (`"mm"`, `"%"`, ...).
    pub fn with_unit(value: impl Into<Number>, unit: &str) -> Result<Self> {
        let unit = unit
            .parse::<LengthUnit>()
            .map_err(|_| SvgError::InvalidUnit(unit.to_string()))?;
        Ok(Self::new(value, unit))
    }

    fn same_unit(&self, rhs: &Length) -> Result<()> {
        if self.unit != rhs.unit {
            return Err(SvgError::UnitMismatch {
                left: self.unit.to_string(),
                right: rhs.unit.to_string(),
            });
        }
        Ok(())
    }

    pub fn checked_add(&self, rhs: &Length) -> Result<Length> {
        self.same_unit(rhs)?;
        Ok(Length::new(self.value.checked_add(rhs.value)?, self.unit))
    }

    pub fn checked_sub(&self, rhs: &Length) -> Result<Length> {
        self.same_unit(rhs)?;
        Ok(Length::new(self.value.checked_sub(rhs.value)?, self.unit))
    }

    /// Add a bare number, keeping this length's unit.
    pub fn checked_add_number(&self, rhs: impl Into<Number>) -> Result<Length> {
        Ok(Length::new(self.value.checked_add(rhs)?, self.unit))
    }

    pub fn checked_sub_number(&self, rhs: impl Into<Number>) -> Result<Length> {
        Ok(Length::new(self.value.checked_sub(rhs)?, self.unit))
    }

    pub fn checked_mul(&self, factor: impl Into<Number>) -> Result<Length> {
        Ok(Length::new(self.value.checked_mul(factor)?, self.unit))
    }

    pub fn checked_div(&self, divisor: impl Into<Number>) -> Result<Length> {
        Ok(Length::new(self.value.checked_div(divisor)?, self.unit))
    }

    pub fn checked_neg(&self) -> Result<Length> {
        Ok(Length::new(self.value.checked_neg()?, self.unit))
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length::new(-self.value, self.unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

macro_rules! unit_helper {
    ($($(#[$meta:meta])* $name:ident => $unit:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(value: impl Into<Number>) -> Length {
                Length::new(value, LengthUnit::$unit)
            }
        )*
    };
}

unit_helper! {
    em => Em,
    ex => Ex,
    /// Explicitly specify the px unit for the value.
    px => Px,
    pt => Pt,
    pc => Pc,
    cm => Cm,
    /// Explicitly specify the mm unit for the value.
    mm => Mm,
    inch => In,
    percent => Percent,
}

// ============================================================================
// Composite values
// ============================================================================

/// A coordinate or size: a bare number in user units, or a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(Number),
    Length(Length),
}

from_number!(Dimension::Number);

impl From<Length> for Dimension {
    fn from(l: Length) -> Self {
        Dimension::Length(l)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Number(n) => n.fmt(f),
            Dimension::Length(l) => l.fmt(f),
        }
    }
}

/// `stroke-dasharray`: the `none` keyword, or dash and gap lengths.
///
/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/stroke-dasharray>
#[derive(Debug, Clone, PartialEq)]
pub enum DashArray {
    None,
    Values(Vec<Dimension>),
}

impl<U: Into<Dimension>> From<Vec<U>> for DashArray {
    fn from(items: Vec<U>) -> Self {
        DashArray::Values(items.into_iter().map(Into::into).collect())
    }
}

impl<U: Into<Dimension>, const N: usize> From<[U; N]> for DashArray {
    fn from(items: [U; N]) -> Self {
        DashArray::Values(items.into_iter().map(Into::into).collect())
    }
}

impl From<Length> for DashArray {
    fn from(l: Length) -> Self {
        DashArray::Values(vec![l.into()])
    }
}

impl fmt::Display for DashArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashArray::None => f.write_str("none"),
            DashArray::Values(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                f.write_str(&parts.join(" "))
            }
        }
    }
}

/// A loosely typed value, as found in animation `values` lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(Number),
    Length(Length),
    Text(String),
}

from_number!(Value::Number);

impl From<Length> for Value {
    fn from(l: Length) -> Self {
        Value::Length(l)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => n.fmt(f),
            Value::Length(l) => l.fmt(f),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// `<number-optional-number>`: one value, or an x/y pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOptionalNumber {
    One(Number),
    Two(Number, Number),
}

from_number!(NumberOptionalNumber::One);

impl<A: Into<Number>, B: Into<Number>> From<(A, B)> for NumberOptionalNumber {
    fn from((a, b): (A, B)) -> Self {
        NumberOptionalNumber::Two(a.into(), b.into())
    }
}

impl fmt::Display for NumberOptionalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOptionalNumber::One(n) => n.fmt(f),
            NumberOptionalNumber::Two(a, b) => write!(f, "{} {}", a, b),
        }
    }
}

/// The `rotate` attribute of `<animateMotion>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionRotate {
    Angle(Number),
    Auto,
    AutoReverse,
}

from_number!(MotionRotate::Angle);

impl fmt::Display for MotionRotate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionRotate::Angle(n) => n.fmt(f),
            MotionRotate::Auto => f.write_str("auto"),
            MotionRotate::AutoReverse => f.write_str("auto-reverse"),
        }
    }
}

/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/viewBox>
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBoxSpec {
    pub min_x: Number,
    pub min_y: Number,
    pub width: Number,
    pub height: Number,
}

impl ViewBoxSpec {
    pub fn new(
        min_x: impl Into<Number>,
        min_y: impl Into<Number>,
        width: impl Into<Number>,
        height: impl Into<Number>,
    ) -> Self {
        Self {
            min_x: min_x.into(),
            min_y: min_y.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}

impl fmt::Display for ViewBoxSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/preserveAspectRatio>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreserveAspectRatio {
    pub alignment: Alignment,
    pub scale_type: ScaleType,
}

impl PreserveAspectRatio {
    pub fn new(alignment: Alignment, scale_type: ScaleType) -> Self {
        Self {
            alignment,
            scale_type,
        }
    }
}

impl Default for PreserveAspectRatio {
    fn default() -> Self {
        Self::new(Alignment::XMidYMid, ScaleType::Meet)
    }
}

impl fmt::Display for PreserveAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.alignment, self.scale_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_number_display_keeps_kind() {
        assert_eq!(Number::from(10).to_string(), "10");
        assert_eq!(Number::from(45.5).to_string(), "45.5");
        assert_eq!(Number::from(-0.5).to_string(), "-0.5");
        assert_eq!(Number::from(dec("10.50")).to_string(), "10.50");
    }

    #[test]
    fn test_length_display() {
        assert_eq!(mm(10).to_string(), "10mm");
        assert_eq!(px(2.5).to_string(), "2.5px");
        assert_eq!(percent(50).to_string(), "50%");
        assert_eq!(inch(1).to_string(), "1in");
    }

    #[test]
    fn test_length_with_unit() {
        for (n, unit) in [(3, "mm"), (7, "em"), (100, "%")] {
            let length = Length::with_unit(n, unit).unwrap();
            assert_eq!(length.to_string(), format!("{}{}", n, unit));
        }
        assert_eq!(
            Length::with_unit(1, "furlong").unwrap_err(),
            SvgError::InvalidUnit("furlong".to_string())
        );
    }

    #[test]
    fn test_length_arithmetic() {
        let ten = px(10);
        assert_eq!(ten.checked_add(&px(5)).unwrap(), px(15));
        assert_eq!(ten.checked_sub(&px(5)).unwrap(), px(5));
        assert_eq!(ten.checked_mul(2).unwrap(), px(20));
        assert_eq!(ten.checked_div(2).unwrap(), px(5.0));
        assert_eq!(-ten, px(-10));
        assert_eq!(ten.checked_add_number(5.0).unwrap(), px(15.0));
        assert_eq!(px(5).checked_mul(5.0).unwrap(), px(25.0));
        assert_eq!(ten.checked_div(3.0).unwrap(), px(10.0 / 3.0));
    }

    #[test]
    fn test_length_decimal_arithmetic() {
        let a = px(dec("10.5"));
        let b = px(dec("5.5"));
        assert_eq!(a.checked_add(&b).unwrap(), px(dec("16.0")));
        assert_eq!(a.checked_sub(&b).unwrap(), px(dec("5.0")));
        assert_eq!(a.checked_mul(dec("2.0")).unwrap(), px(dec("21.0")));
        assert_eq!(a.checked_div(dec("2.0")).unwrap(), px(dec("5.25")));
    }

    #[test]
    fn test_length_unit_mismatch() {
        let err = px(10).checked_add(&em(5)).unwrap_err();
        assert_eq!(
            err,
            SvgError::UnitMismatch {
                left: "px".to_string(),
                right: "em".to_string()
            }
        );
        assert!(px(10).checked_sub(&em(5)).is_err());
    }

    #[test]
    fn test_decimal_and_float_do_not_mix() {
        let a = px(dec("10"));
        assert!(matches!(
            a.checked_add(&px(5.2)),
            Err(SvgError::NumberKindMismatch { .. })
        ));
        assert!(a.checked_mul(5.5).is_err());
        assert!(a.checked_div(5.5).is_err());
        assert!(a.checked_sub_number(5.5).is_err());
    }

    #[test]
    fn test_negation_overflow() {
        assert_eq!(-Number::Int(i64::MIN), Number::Int(i64::MAX));
        assert_eq!(Number::Int(i64::MIN).checked_neg(), Err(SvgError::Overflow));
        assert_eq!(Number::Int(5).checked_neg(), Ok(Number::Int(-5)));
        assert_eq!(Number::Float(2.5).checked_neg(), Ok(Number::Float(-2.5)));
        assert_eq!(px(i64::MIN).checked_neg(), Err(SvgError::Overflow));
        assert_eq!(px(3).checked_neg().unwrap(), px(-3));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(px(1).checked_div(0).unwrap_err(), SvgError::DivisionByZero);
        assert_eq!(px(1.0).checked_div(0.0).unwrap_err(), SvgError::DivisionByZero);
    }

    #[test]
    fn test_composite_display() {
        assert_eq!(ViewBoxSpec::new(-40, 0, 150, 100).to_string(), "-40 0 150 100");
        assert_eq!(PreserveAspectRatio::default().to_string(), "xMidYMid meet");
        assert_eq!(
            PreserveAspectRatio::new(Alignment::None, ScaleType::Slice).to_string(),
            "none slice"
        );
        assert_eq!(NumberOptionalNumber::from((2, 0.5)).to_string(), "2 0.5");
        assert_eq!(Dimension::from(mm(4)).to_string(), "4mm");
        assert_eq!(Value::from("red").to_string(), "red");
        assert_eq!(MotionRotate::AutoReverse.to_string(), "auto-reverse");
    }

    #[test]
    fn test_length_serde() {
        let json = serde_json::to_string(&mm(3)).unwrap();
        assert_eq!(json, r#"{"value":3,"unit":"mm"}"#);
        let back: Length = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mm(3));
    }
}
