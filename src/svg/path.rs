//! Path commands for the `d` attribute.
//!
//! Each command renders as its letter followed by its arguments, all joined
//! by single spaces: `M 10 30`, `A 20 20 0 0 1 50 30`, `Z`. Arc flags render
//! as `1`/`0`.

use std::fmt;

use crate::types::Number;

/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/d>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathData {
    MoveTo { x: Number, y: Number },
    MoveToRel { dx: Number, dy: Number },
    LineTo { x: Number, y: Number },
    LineToRel { dx: Number, dy: Number },
    HorizontalLineTo { x: Number },
    HorizontalLineToRel { dx: Number },
    VerticalLineTo { y: Number },
    VerticalLineToRel { dy: Number },
    CubicBezier { x1: Number, y1: Number, x2: Number, y2: Number, x: Number, y: Number },
    CubicBezierRel { dx1: Number, dy1: Number, dx2: Number, dy2: Number, dx: Number, dy: Number },
    SmoothCubicBezier { x2: Number, y2: Number, x: Number, y: Number },
    SmoothCubicBezierRel { dx2: Number, dy2: Number, dx: Number, dy: Number },
    QuadraticBezier { x1: Number, y1: Number, x: Number, y: Number },
    QuadraticBezierRel { dx1: Number, dy1: Number, dx: Number, dy: Number },
    SmoothQuadraticBezier { x: Number, y: Number },
    SmoothQuadraticBezierRel { dx: Number, dy: Number },
    Arc {
        rx: Number,
        ry: Number,
        angle: Number,
        large_arc: bool,
        sweep: bool,
        x: Number,
        y: Number,
    },
    ArcRel {
        rx: Number,
        ry: Number,
        angle: Number,
        large_arc: bool,
        sweep: bool,
        dx: Number,
        dy: Number,
    },
    ClosePath,
    ClosePathRel,
}

fn n(v: impl Into<Number>) -> Number {
    v.into()
}

impl PathData {
    pub fn move_to(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        PathData::MoveTo { x: n(x), y: n(y) }
    }

    pub fn move_to_rel(dx: impl Into<Number>, dy: impl Into<Number>) -> Self {
        PathData::MoveToRel { dx: n(dx), dy: n(dy) }
    }

    pub fn line_to(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        PathData::LineTo { x: n(x), y: n(y) }
    }

    pub fn line_to_rel(dx: impl Into<Number>, dy: impl Into<Number>) -> Self {
        PathData::LineToRel { dx: n(dx), dy: n(dy) }
    }

    pub fn horizontal(x: impl Into<Number>) -> Self {
        PathData::HorizontalLineTo { x: n(x) }
    }

    pub fn horizontal_rel(dx: impl Into<Number>) -> Self {
        PathData::HorizontalLineToRel { dx: n(dx) }
    }

    pub fn vertical(y: impl Into<Number>) -> Self {
        PathData::VerticalLineTo { y: n(y) }
    }

    pub fn vertical_rel(dy: impl Into<Number>) -> Self {
        PathData::VerticalLineToRel { dy: n(dy) }
    }

    pub fn cubic(
        x1: impl Into<Number>,
        y1: impl Into<Number>,
        x2: impl Into<Number>,
        y2: impl Into<Number>,
        x: impl Into<Number>,
        y: impl Into<Number>,
    ) -> Self {
        PathData::CubicBezier {
            x1: n(x1),
            y1: n(y1),
            x2: n(x2),
            y2: n(y2),
            x: n(x),
            y: n(y),
        }
    }

    pub fn cubic_rel(
        dx1: impl Into<Number>,
        dy1: impl Into<Number>,
        dx2: impl Into<Number>,
        dy2: impl Into<Number>,
        dx: impl Into<Number>,
        dy: impl Into<Number>,
    ) -> Self {
        PathData::CubicBezierRel {
            dx1: n(dx1),
            dy1: n(dy1),
            dx2: n(dx2),
            dy2: n(dy2),
            dx: n(dx),
            dy: n(dy),
        }
    }

    pub fn smooth_cubic(
        x2: impl Into<Number>,
        y2: impl Into<Number>,
        x: impl Into<Number>,
        y: impl Into<Number>,
    ) -> Self {
        PathData::SmoothCubicBezier {
            x2: n(x2),
            y2: n(y2),
            x: n(x),
            y: n(y),
        }
    }

    pub fn smooth_cubic_rel(
        dx2: impl Into<Number>,
        dy2: impl Into<Number>,
        dx: impl Into<Number>,
        dy: impl Into<Number>,
    ) -> Self {
        PathData::SmoothCubicBezierRel {
            dx2: n(dx2),
            dy2: n(dy2),
            dx: n(dx),
            dy: n(dy),
        }
    }

    pub fn quadratic(
        x1: impl Into<Number>,
        y1: impl Into<Number>,
        x: impl Into<Number>,
        y: impl Into<Number>,
    ) -> Self {
        PathData::QuadraticBezier {
            x1: n(x1),
            y1: n(y1),
            x: n(x),
            y: n(y),
        }
    }

    pub fn quadratic_rel(
        dx1: impl Into<Number>,
        dy1: impl Into<Number>,
        dx: impl Into<Number>,
        dy: impl Into<Number>,
    ) -> Self {
        PathData::QuadraticBezierRel {
            dx1: n(dx1),
            dy1: n(dy1),
            dx: n(dx),
            dy: n(dy),
        }
    }

    pub fn smooth_quadratic(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        PathData::SmoothQuadraticBezier { x: n(x), y: n(y) }
    }

    pub fn smooth_quadratic_rel(dx: impl Into<Number>, dy: impl Into<Number>) -> Self {
        PathData::SmoothQuadraticBezierRel { dx: n(dx), dy: n(dy) }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        rx: impl Into<Number>,
        ry: impl Into<Number>,
        angle: impl Into<Number>,
        large_arc: bool,
        sweep: bool,
        x: impl Into<Number>,
        y: impl Into<Number>,
    ) -> Self {
        PathData::Arc {
            rx: n(rx),
            ry: n(ry),
            angle: n(angle),
            large_arc,
            sweep,
            x: n(x),
            y: n(y),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_rel(
        rx: impl Into<Number>,
        ry: impl Into<Number>,
        angle: impl Into<Number>,
        large_arc: bool,
        sweep: bool,
        dx: impl Into<Number>,
        dy: impl Into<Number>,
    ) -> Self {
        PathData::ArcRel {
            rx: n(rx),
            ry: n(ry),
            angle: n(angle),
            large_arc,
            sweep,
            dx: n(dx),
            dy: n(dy),
        }
    }

    pub fn close() -> Self {
        PathData::ClosePath
    }

    pub fn close_rel() -> Self {
        PathData::ClosePathRel
    }

    pub fn command(&self) -> char {
        match self {
            PathData::MoveTo { .. } => 'M',
            PathData::MoveToRel { .. } => 'm',
            PathData::LineTo { .. } => 'L',
            PathData::LineToRel { .. } => 'l',
            PathData::HorizontalLineTo { .. } => 'H',
            PathData::HorizontalLineToRel { .. } => 'h',
            PathData::VerticalLineTo { .. } => 'V',
            PathData::VerticalLineToRel { .. } => 'v',
            PathData::CubicBezier { .. } => 'C',
            PathData::CubicBezierRel { .. } => 'c',
            PathData::SmoothCubicBezier { .. } => 'S',
            PathData::SmoothCubicBezierRel { .. } => 's',
            PathData::QuadraticBezier { .. } => 'Q',
            PathData::QuadraticBezierRel { .. } => 'q',
            PathData::SmoothQuadraticBezier { .. } => 'T',
            PathData::SmoothQuadraticBezierRel { .. } => 't',
            PathData::Arc { .. } => 'A',
            PathData::ArcRel { .. } => 'a',
            PathData::ClosePath => 'Z',
            PathData::ClosePathRel => 'z',
        }
    }

    /// Arguments in command order, flags as `1`/`0`.
    fn args(&self) -> Vec<String> {
        fn flag(b: bool) -> String {
            String::from(if b { "1" } else { "0" })
        }
        fn nums(values: &[Number]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        match *self {
            PathData::MoveTo { x, y }
            | PathData::LineTo { x, y }
            | PathData::SmoothQuadraticBezier { x, y } => nums(&[x, y]),
            PathData::MoveToRel { dx, dy }
            | PathData::LineToRel { dx, dy }
            | PathData::SmoothQuadraticBezierRel { dx, dy } => nums(&[dx, dy]),
            PathData::HorizontalLineTo { x } => nums(&[x]),
            PathData::HorizontalLineToRel { dx } => nums(&[dx]),
            PathData::VerticalLineTo { y } => nums(&[y]),
            PathData::VerticalLineToRel { dy } => nums(&[dy]),
            PathData::CubicBezier { x1, y1, x2, y2, x, y } => nums(&[x1, y1, x2, y2, x, y]),
            PathData::CubicBezierRel { dx1, dy1, dx2, dy2, dx, dy } => {
                nums(&[dx1, dy1, dx2, dy2, dx, dy])
            }
            PathData::SmoothCubicBezier { x2, y2, x, y } => nums(&[x2, y2, x, y]),
            PathData::SmoothCubicBezierRel { dx2, dy2, dx, dy } => nums(&[dx2, dy2, dx, dy]),
            PathData::QuadraticBezier { x1, y1, x, y } => nums(&[x1, y1, x, y]),
            PathData::QuadraticBezierRel { dx1, dy1, dx, dy } => nums(&[dx1, dy1, dx, dy]),
            PathData::Arc { rx, ry, angle, large_arc, sweep, x, y } => {
                let mut out = nums(&[rx, ry, angle]);
                out.push(flag(large_arc));
                out.push(flag(sweep));
                out.extend(nums(&[x, y]));
                out
            }
            PathData::ArcRel { rx, ry, angle, large_arc, sweep, dx, dy } => {
                let mut out = nums(&[rx, ry, angle]);
                out.push(flag(large_arc));
                out.push(flag(sweep));
                out.extend(nums(&[dx, dy]));
                out
            }
            PathData::ClosePath | PathData::ClosePathRel => Vec::new(),
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.args();
        if args.is_empty() {
            write!(f, "{}", self.command())
        } else {
            write!(f, "{} {}", self.command(), args.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_commands() {
        assert_eq!(PathData::move_to(10, 30).to_string(), "M 10 30");
        assert_eq!(PathData::line_to_rel(-5, 2.5).to_string(), "l -5 2.5");
        assert_eq!(PathData::horizontal(4).to_string(), "H 4");
        assert_eq!(PathData::vertical_rel(-1).to_string(), "v -1");
        assert_eq!(PathData::quadratic(90, 60, 50, 90).to_string(), "Q 90 60 50 90");
        assert_eq!(
            PathData::cubic(1, 2, 3, 4, 5, 6).to_string(),
            "C 1 2 3 4 5 6"
        );
        assert_eq!(PathData::smooth_cubic_rel(1, 2, 3, 4).to_string(), "s 1 2 3 4");
        assert_eq!(PathData::smooth_quadratic(7, 8).to_string(), "T 7 8");
    }

    #[test]
    fn test_arc_flags_render_as_digits() {
        assert_eq!(
            PathData::arc(20, 20, 0, false, true, 50, 30).to_string(),
            "A 20 20 0 0 1 50 30"
        );
        assert_eq!(
            PathData::arc_rel(5, 5, 45.5, true, false, 10, 0).to_string(),
            "a 5 5 45.5 1 0 10 0"
        );
    }

    #[test]
    fn test_close_path_has_no_arguments() {
        assert_eq!(PathData::close().to_string(), "Z");
        assert_eq!(PathData::close_rel().to_string(), "z");
    }
}
