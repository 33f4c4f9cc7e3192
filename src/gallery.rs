//! Ready-made drawings, printed by `svgdoc demo` and checked against the
//! fixtures in `testdata/gallery/`.

use chrono::TimeDelta;

use crate::keywords::TransformType;
use crate::svg::{
    Animate, AnimateTransform, AnimationAttrs, AnimationTimingAttrs, Circle, Element, Ellipse,
    FillStrokeAttrs, Line, Path, PathData, Polygon, Polyline, Rect, Style, Svg, SvgElement, Text,
    TextStyleAttrs, Transform,
};
use crate::timing::RepeatCount;
use crate::types::ViewBoxSpec;

/// Names accepted by [`demo`].
pub const NAMES: &[&str] = &["animate", "animate_transform", "shapes", "text", "transform"];

/// Build a gallery drawing by name.
pub fn demo(name: &str) -> Option<Svg> {
    let svg = match name {
        "animate" => animate(),
        "animate_transform" => animate_transform(),
        "shapes" => shapes(),
        "text" => text(),
        "transform" => transform(),
        _ => return None,
    };
    Some(svg)
}

/// A square whose corners round off and back.
///
/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animate>
pub fn animate() -> Svg {
    Svg::new().x(0).y(0).width(100).height(100).child(
        Rect::new().x(0).y(0).width(100).height(100).child(
            Animate::new()
                .attributeName("rx")
                .values(vec![0, 50, 0])
                .dur(TimeDelta::seconds(10))
                .repeatCount(RepeatCount::Indefinite),
        ),
    )
}

/// A spinning triangle.
///
/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animateTransform>
pub fn animate_transform() -> Svg {
    Svg::new().x(0).y(0).width(120).height(120).child(
        Polygon::new().points(vec![60, 30, 90, 90, 30, 90]).child(
            AnimateTransform::new()
                .attributeName("transform")
                .type_(TransformType::Rotate)
                .from_("0 60 70")
                .to("360 60 70")
                .dur(TimeDelta::seconds(10))
                .repeatCount(RepeatCount::Indefinite),
        ),
    )
}

/// The basic shapes.
///
/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Tutorial/Basic_Shapes>
pub fn shapes() -> Svg {
    let shapes: [Element; 8] = [
        Rect::new()
            .x(10)
            .y(10)
            .width(30)
            .height(30)
            .stroke("black")
            .fill("transparent")
            .stroke_width(5)
            .into(),
        Rect::new()
            .x(60)
            .y(10)
            .rx(10)
            .ry(10)
            .width(30)
            .height(30)
            .stroke("black")
            .fill("transparent")
            .stroke_width(5)
            .into(),
        Circle::new()
            .cx(25)
            .cy(75)
            .r(20)
            .stroke("red")
            .fill("transparent")
            .stroke_width(5)
            .into(),
        Ellipse::new()
            .cx(75)
            .cy(75)
            .rx(20)
            .ry(5)
            .stroke("red")
            .fill("transparent")
            .stroke_width(5)
            .into(),
        Line::new()
            .x1(10)
            .x2(50)
            .y1(110)
            .y2(150)
            .stroke("orange")
            .stroke_width(5)
            .into(),
        Polyline::new()
            .points(vec![
                60, 110, 65, 120, 70, 115, 75, 130, 80, 125, 85, 140, 90, 135, 95, 150, 100, 145,
            ])
            .stroke("orange")
            .fill("transparent")
            .stroke_width(5)
            .into(),
        Polygon::new()
            .points(vec![
                50, 160, 55, 180, 70, 180, 60, 190, 65, 205, 50, 195, 35, 205, 40, 190, 30, 180,
                45, 180,
            ])
            .stroke("green")
            .fill("transparent")
            .stroke_width(5)
            .into(),
        Path::new()
            .d(vec![
                PathData::move_to(20, 230),
                PathData::quadratic(40, 205, 50, 230),
                PathData::smooth_quadratic(90, 230),
            ])
            .fill("none")
            .stroke("blue")
            .stroke_width(5)
            .into(),
    ];
    Svg::new().width(200).height(250).children(shapes)
}

/// Text styled from an embedded style sheet.
///
/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/text>
pub fn text() -> Svg {
    let css = concat!(
        ".small { font: italic 13px sans-serif; } ",
        ".heavy { font: bold 30px sans-serif; } ",
        ".Rrrrr { font: italic 40px serif; fill: red; }",
    );
    Svg::new()
        .width(240)
        .height(80)
        .child(Style::new().text(css))
        .child(Text::new().x(20).y(35).class_("small").text("My"))
        .child(Text::new().x(40).y(35).class_("heavy").text("cat"))
        .child(Text::new().x(55).y(55).class_("small").text("is"))
        .child(Text::new().x(65).y(55).class_("Rrrrr").text("Grumpy!"))
}

fn heart_path() -> Vec<PathData> {
    vec![
        PathData::move_to(10, 30),
        PathData::arc(20, 20, 0, false, true, 50, 30),
        PathData::arc(20, 20, 0, false, true, 90, 30),
        PathData::quadratic(90, 60, 50, 90),
        PathData::quadratic(10, 60, 10, 30),
        PathData::close(),
    ]
}

/// A heart, and the same heart rotated, translated, skewed and scaled.
///
/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/transform>
pub fn transform() -> Svg {
    Svg::new()
        .viewBox(ViewBoxSpec::new(-40, 0, 150, 100))
        .child(
            Path::new().d(heart_path()).fill("grey").transform(vec![
                Transform::rotate_around(-10, 50, 100),
                Transform::translate(-36, 45.5),
                Transform::skew_x(40),
                Transform::scale(1, 0.5),
            ]),
        )
        .child(Path::new().d(heart_path()).fill("none").stroke("red"))
}
