//! `transform` list items.

use std::fmt;

use crate::error::{Result, SvgError};
use crate::types::Number;

/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/transform>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Matrix {
        a: Number,
        b: Number,
        c: Number,
        d: Number,
        e: Number,
        f: Number,
    },
    Translate { x: Number, y: Option<Number> },
    Scale { x: Number, y: Option<Number> },
    /// Rotation by `a` degrees, about the origin or about `center`.
    Rotate { a: Number, center: Option<(Number, Number)> },
    SkewX(Number),
    SkewY(Number),
}

impl Transform {
    pub fn matrix(
        a: impl Into<Number>,
        b: impl Into<Number>,
        c: impl Into<Number>,
        d: impl Into<Number>,
        e: impl Into<Number>,
        f: impl Into<Number>,
    ) -> Self {
        Transform::Matrix {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
            e: e.into(),
            f: f.into(),
        }
    }

    pub fn translate(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Transform::Translate {
            x: x.into(),
            y: Some(y.into()),
        }
    }

    pub fn translate_x(x: impl Into<Number>) -> Self {
        Transform::Translate {
            x: x.into(),
            y: None,
        }
    }

    pub fn scale(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Transform::Scale {
            x: x.into(),
            y: Some(y.into()),
        }
    }

    pub fn scale_uniform(factor: impl Into<Number>) -> Self {
        Transform::Scale {
            x: factor.into(),
            y: None,
        }
    }

    pub fn rotate(a: impl Into<Number>) -> Self {
        Transform::Rotate {
            a: a.into(),
            center: None,
        }
    }

    pub fn rotate_around(a: impl Into<Number>, x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Transform::Rotate {
            a: a.into(),
            center: Some((x.into(), y.into())),
        }
    }

    /// Rotation with independently optional centre coordinates.
    ///
    /// The centre needs both coordinates; a lone `x` or `y` is rejected.
    pub fn try_rotate(a: impl Into<Number>, x: Option<Number>, y: Option<Number>) -> Result<Self> {
        let center = match (x, y) {
            (None, None) => None,
            (Some(x), Some(y)) => Some((x, y)),
            _ => return Err(SvgError::RotateCenterIncomplete),
        };
        Ok(Transform::Rotate {
            a: a.into(),
            center,
        })
    }

    pub fn skew_x(a: impl Into<Number>) -> Self {
        Transform::SkewX(a.into())
    }

    pub fn skew_y(a: impl Into<Number>) -> Self {
        Transform::SkewY(a.into())
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Matrix { a, b, c, d, e, f: ff } => {
                write!(f, "matrix({} {} {} {} {} {})", a, b, c, d, e, ff)
            }
            Transform::Translate { x, y: None } => write!(f, "translate({})", x),
            Transform::Translate { x, y: Some(y) } => write!(f, "translate({} {})", x, y),
            Transform::Scale { x, y: None } => write!(f, "scale({})", x),
            Transform::Scale { x, y: Some(y) } => write!(f, "scale({} {})", x, y),
            Transform::Rotate { a, center: None } => write!(f, "rotate({})", a),
            Transform::Rotate {
                a,
                center: Some((x, y)),
            } => write!(f, "rotate({} {} {})", a, x, y),
            Transform::SkewX(a) => write!(f, "skewX({})", a),
            Transform::SkewY(a) => write!(f, "skewY({})", a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::attrs::{ListSeparator, ToAttr};

    #[test]
    fn test_transform_display() {
        assert_eq!(Transform::matrix(1, 0, 0, 1, 0, 0).to_string(), "matrix(1 0 0 1 0 0)");
        assert_eq!(Transform::translate(-36, 45.5).to_string(), "translate(-36 45.5)");
        assert_eq!(Transform::translate_x(5).to_string(), "translate(5)");
        assert_eq!(Transform::scale(1, 0.5).to_string(), "scale(1 0.5)");
        assert_eq!(Transform::scale_uniform(2).to_string(), "scale(2)");
        assert_eq!(Transform::rotate(45).to_string(), "rotate(45)");
        assert_eq!(Transform::rotate_around(-10, 50, 100).to_string(), "rotate(-10 50 100)");
        assert_eq!(Transform::skew_x(40).to_string(), "skewX(40)");
        assert_eq!(Transform::skew_y(-3).to_string(), "skewY(-3)");
    }

    #[test]
    fn test_try_rotate() {
        assert_eq!(Transform::try_rotate(30, None, None).unwrap(), Transform::rotate(30));
        assert_eq!(
            Transform::try_rotate(30, Some(Number::from(5)), Some(Number::from(6))).unwrap(),
            Transform::rotate_around(30, 5, 6)
        );
        assert_eq!(
            Transform::try_rotate(30, None, Some(Number::from(6))).unwrap_err(),
            SvgError::RotateCenterIncomplete
        );
        assert_eq!(
            Transform::try_rotate(30, Some(Number::from(5)), None).unwrap_err(),
            SvgError::RotateCenterIncomplete
        );
    }

    #[test]
    fn test_transform_list() {
        let list = vec![
            Transform::rotate_around(-10, 50, 100),
            Transform::translate(-36, 45.5),
            Transform::skew_x(40),
            Transform::scale(1, 0.5),
        ];
        assert_eq!(
            list.to_attr(ListSeparator::Space),
            "rotate(-10 50 100) translate(-36 45.5) skewX(40) scale(1 0.5)"
        );
    }
}
