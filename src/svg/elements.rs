//! Structural, shape, text, paint-server and animation elements.
//!
//! Filter elements live in [`filters`](super::filters).

use super::attrs::List;
use super::element::element;
use super::mixins::{
    Animation, AnimationTiming, Color, FillStroke, Figure, FontSpecification, Gradient, Graphics,
    GraphicsElementEvents, TextContentElements, TextStyle,
};
use super::path::PathData;
use super::transform::Transform;
use crate::keywords::{
    AlignmentBaseline, BaselineShift, FillRule, ImageRendering, LengthAdjust, LineCap, LineJoin,
    MarkerUnits, Overflow, PointerEvents, Target, TextPathMethod, TextPathSide, TextPathSpacing,
    TextRendering, TransformType, Units, VectorEffect, Visibility, WritingMode,
};
use crate::types::{Dimension, MotionRotate, Number, PreserveAspectRatio, Value, ViewBoxSpec};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// ============================================================================
// Structure
// ============================================================================

element! {
    /// The svg element is a container that defines a new coordinate system and viewport.
    ///
    /// It is the outermost element of SVG documents, but it can also embed an
    /// SVG fragment inside another SVG or HTML document. `xmlns` defaults to
    /// the SVG namespace.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/svg>
    pub struct Svg("svg") {
        xmlns: String = SVG_NAMESPACE,
        viewBox: ViewBoxSpec,
        preserveAspectRatio: PreserveAspectRatio,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        class_: List<String>,
        mask: String,
        opacity: Number,
        clip_path: String,
        overflow: Overflow,
        onunload: String,
        onabort: String,
        onerror: String,
        onresize: String,
        onscroll: String,
        onzoom: String,
    }
    with {
        events: GraphicsElementEvents,
        color: Color,
        graphics: Graphics,
    }
}

element! {
    /// A container used to group other elements.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/g>
    pub struct G("g") {
        transform: List<Transform>,
        class_: List<String>,
        mask: String,
        opacity: Number,
        clip_path: String,
        fill_rule: FillRule,
        fill_opacity: Number,
        fill: String,
    }
    with {
        events: GraphicsElementEvents,
        color: Color,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// Stores graphical objects that are used later, e.g. through `<use>`.
    pub struct Defs("defs") {
        transform: List<Transform>,
        class_: List<String>,
        pointer_events: PointerEvents,
    }
    with {
        color: Color,
        events: GraphicsElementEvents,
    }
}

element! {
    /// An accessible, long-text description of any element.
    pub struct Desc("desc") {
        class_: List<String>,
    }
    with {
        events: GraphicsElementEvents,
    }
}

element! {
    /// An accessible, short-text description of any element.
    pub struct Title("title") {
        class_: List<String>,
    }
    with {
        events: GraphicsElementEvents,
    }
}

element! {
    /// A template object, instantiated by `<use>`.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/symbol>
    pub struct Symbol("symbol") {
        viewBox: ViewBoxSpec,
        preserveAspectRatio: PreserveAspectRatio,
        refX: Dimension,
        refY: Dimension,
        x: Dimension,
        y: Dimension,
        class_: List<String>,
        mask: String,
        opacity: Number,
        clip_path: String,
        overflow: Overflow,
    }
    with {
        events: GraphicsElementEvents,
        color: Color,
        graphics: Graphics,
    }
}

element! {
    /// Includes a raster image or another SVG file.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/image>
    pub struct Image("image") {
        href: String,
        transform: List<Transform>,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        preserveAspectRatio: PreserveAspectRatio,
        image_rendering: ImageRendering,
        class_: List<String>,
        vector_effect: VectorEffect,
        visibility: Visibility,
        mask: String,
        opacity: Number,
        clip_path: String,
        overflow: Overflow,
    }
    with {
        color: Color,
        graphics: Graphics,
        events: GraphicsElementEvents,
    }
}

element! {
    pub struct Switch("switch") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        opacity: Number,
        class_: List<String>,
        pointer_events: PointerEvents,
    }
    with {
        color: Color,
        events: GraphicsElementEvents,
    }
}

element! {
    /// An embedded style sheet; put the CSS in the text content.
    pub struct Style("style") {
        type_: String,
        media: List<String>,
        title: String,
    }
    with {
        events: GraphicsElementEvents,
    }
}

element! {
    pub struct Use("use") {
        href: String,
        class_: List<String>,
        transform: List<Transform>,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        vector_effect: VectorEffect,
        opacity: Number,
        clip_path: String,
        mask: String,
        fill_rule: FillRule,
        fill_opacity: Number,
        fill: String,
    }
    with {
        events: GraphicsElementEvents,
        color: Color,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    pub struct A("a") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        target: Target,
        href: String,
        class_: List<String>,
        visibility: Visibility,
        mask: String,
        opacity: Number,
        clip_path: String,
    }
    with {
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
    }
}

element! {
    pub struct View("view") {
        externalResourcesRequired: bool,
        viewBox: ViewBoxSpec,
        preserveAspectRatio: PreserveAspectRatio,
    }
    with {
        events: GraphicsElementEvents,
    }
}

element! {
    pub struct Script("script") {
        externalResourcesRequired: bool,
        type_: String,
        href: String,
    }
    with {
        events: GraphicsElementEvents,
    }
}

element! {
    pub struct Metadata("metadata") {}
    with {
        events: GraphicsElementEvents,
    }
}

element! {
    pub struct DefinitionSrc("definition-src") {}
    with {}
}

element! {
    pub struct ColorProfile("color-profile") {
        local: String,
    }
    with {}
}

element! {
    /// Embeds content from another XML namespace, usually XHTML.
    pub struct ForeignObject("foreignObject") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        class_: List<String>,
        vector_effect: VectorEffect,
        visibility: Visibility,
        opacity: Number,
        overflow: Overflow,
    }
    with {
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
    }
}

// ============================================================================
// Shapes
// ============================================================================

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/path>
    pub struct Path("path") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        d: List<PathData>,
        marker_start: String,
        marker_mid: String,
        marker_end: String,
        stroke_linecap: LineCap,
        stroke_linejoin: LineJoin,
        stroke_miterlimit: Number,
        fill_rule: FillRule,
        fill_opacity: Number,
        fill: String,
    }
    with {
        figure: Figure,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/rect>
    pub struct Rect("rect") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        rx: Dimension,
        ry: Dimension,
        marker_start: String,
        marker_mid: String,
        marker_end: String,
        stroke_linejoin: LineJoin,
        stroke_miterlimit: Number,
        fill_opacity: Number,
        fill: String,
    }
    with {
        figure: Figure,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/circle>
    pub struct Circle("circle") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        cx: Dimension,
        cy: Dimension,
        r: Dimension,
        marker_mid: String,
        fill_opacity: Number,
        fill: String,
    }
    with {
        figure: Figure,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/ellipse>
    pub struct Ellipse("ellipse") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        cx: Dimension,
        cy: Dimension,
        rx: Dimension,
        ry: Dimension,
        marker_start: String,
        marker_mid: String,
        marker_end: String,
        fill_opacity: Number,
        fill: String,
    }
    with {
        figure: Figure,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/line>
    pub struct Line("line") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        x1: Dimension,
        y1: Dimension,
        x2: Dimension,
        y2: Dimension,
        marker_start: String,
        marker_mid: String,
        marker_end: String,
        stroke_linecap: LineCap,
    }
    with {
        figure: Figure,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/polyline>
    pub struct Polyline("polyline") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        points: List<Number>,
        marker_start: String,
        marker_mid: String,
        marker_end: String,
        stroke_linecap: LineCap,
        stroke_linejoin: LineJoin,
        stroke_miterlimit: Number,
        fill_rule: FillRule,
        fill_opacity: Number,
        fill: String,
    }
    with {
        figure: Figure,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/polygon>
    pub struct Polygon("polygon") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        points: List<Number>,
        marker_start: String,
        marker_mid: String,
        marker_end: String,
        stroke_linejoin: LineJoin,
        stroke_miterlimit: Number,
        fill_rule: FillRule,
        fill_opacity: Number,
        fill: String,
    }
    with {
        figure: Figure,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/marker>
    pub struct Marker("marker") {
        externalResourcesRequired: bool,
        viewBox: ViewBoxSpec,
        preserveAspectRatio: PreserveAspectRatio,
        refX: Dimension,
        refY: Dimension,
        markerUnits: MarkerUnits,
        markerWidth: Dimension,
        markerHeight: Dimension,
        orient: String,
        opacity: Number,
        clip_path: String,
        class_: List<String>,
        mask: String,
        overflow: Overflow,
    }
    with {
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
    }
}

// ============================================================================
// Text
// ============================================================================

element! {
    /// Draws a graphics element consisting of text.
    ///
    /// Gradients, patterns, clipping paths, masks and filters apply to
    /// `<text>` like to any other graphics element.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/text>
    pub struct Text("text") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        x: Dimension,
        y: Dimension,
        dx: Dimension,
        dy: Dimension,
        textLength: Dimension,
        lengthAdjust: LengthAdjust,
        writing_mode: WritingMode,
        text_rendering: TextRendering,
        stroke_linecap: LineCap,
        stroke_linejoin: LineJoin,
        stroke_miterlimit: Number,
        fill_rule: FillRule,
        mask: String,
        opacity: Number,
        clip_path: String,
        overflow: Overflow,
    }
    with {
        text_style: TextStyle,
        font: FontSpecification,
        text_content: TextContentElements,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/tspan>
    pub struct TSpan("tspan") {
        externalResourcesRequired: bool,
        x: Dimension,
        y: Dimension,
        dx: Dimension,
        dy: Dimension,
        textLength: Dimension,
        lengthAdjust: LengthAdjust,
        writing_mode: WritingMode,
        alignment_baseline: AlignmentBaseline,
        baseline_shift: BaselineShift,
        stroke_linecap: LineCap,
        stroke_linejoin: LineJoin,
        stroke_miterlimit: Number,
        fill_rule: FillRule,
        opacity: Number,
    }
    with {
        text_style: TextStyle,
        font: FontSpecification,
        text_content: TextContentElements,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/textPath>
    pub struct TextPath("textPath") {
        externalResourcesRequired: bool,
        startOffset: Dimension,
        textLength: Dimension,
        lengthAdjust: LengthAdjust,
        method: TextPathMethod,
        spacing: TextPathSpacing,
        href: String,
        path: List<PathData>,
        side: TextPathSide,
        writing_mode: WritingMode,
        alignment_baseline: AlignmentBaseline,
        baseline_shift: BaselineShift,
        stroke_linecap: LineCap,
        stroke_linejoin: LineJoin,
        stroke_miterlimit: Number,
        fill_rule: FillRule,
        opacity: Number,
    }
    with {
        text_style: TextStyle,
        font: FontSpecification,
        text_content: TextContentElements,
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
        fill_stroke: FillStroke,
    }
}

// ============================================================================
// Paint servers and masking
// ============================================================================

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/linearGradient>
    pub struct LinearGradient("linearGradient") {
        x1: Dimension,
        y1: Dimension,
        x2: Dimension,
        y2: Dimension,
    }
    with {
        gradient: Gradient,
        color: Color,
        events: GraphicsElementEvents,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/radialGradient>
    pub struct RadialGradient("radialGradient") {
        cx: Dimension,
        cy: Dimension,
        r: Dimension,
        fr: Dimension,
        fx: Dimension,
        fy: Dimension,
    }
    with {
        gradient: Gradient,
        color: Color,
        events: GraphicsElementEvents,
    }
}

element! {
    /// A gradient stop; `offset` is a number in `0..=1` or a percentage.
    pub struct Stop("stop") {
        offset: Dimension,
        stop_opacity: Number,
        stop_color: String,
        class_: List<String>,
    }
    with {
        events: GraphicsElementEvents,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/pattern>
    pub struct Pattern("pattern") {
        externalResourcesRequired: bool,
        viewBox: ViewBoxSpec,
        preserveAspectRatio: PreserveAspectRatio,
        patternUnits: Units,
        patternTransform: List<Transform>,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        patternContentUnits: Units,
        href: String,
        class_: List<String>,
        mask: String,
        clip_path: String,
        overflow: Overflow,
    }
    with {
        color: Color,
        events: GraphicsElementEvents,
        graphics: Graphics,
    }
}

element! {
    pub struct ClipPath("clipPath") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        clipPathUnits: Units,
        class_: List<String>,
        mask: String,
        clip_path: String,
    }
    with {
        color: Color,
        graphics: Graphics,
    }
}

element! {
    pub struct Mask("mask") {
        externalResourcesRequired: bool,
        transform: List<Transform>,
        maskUnits: Units,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        maskContentUnits: Units,
        class_: List<String>,
        mask: String,
        clip_path: String,
    }
    with {
        color: Color,
        graphics: Graphics,
    }
}

// ============================================================================
// Animation
// ============================================================================

element! {
    /// Animates one attribute over time.
    ///
    /// `values`, `keyTimes`, `keySplines`, `keyPoints`, `begin` and `end`
    /// join their items with `;`.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animate>
    pub struct Animate("animate") {
        externalResourcesRequired: bool,
        attributeName: String,
    }
    with {
        animation: Animation,
        color: Color,
        timing: AnimationTiming,
        events: GraphicsElementEvents,
    }
}

element! {
    /// Sets an attribute to a value for a duration.
    pub struct Set("set") {
        externalResourcesRequired: bool,
        to: Value,
        attributeName: String,
        href: String,
    }
    with {
        timing: AnimationTiming,
        events: GraphicsElementEvents,
    }
}

element! {
    /// Moves an element along a motion path.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animateMotion>
    pub struct AnimateMotion("animateMotion") {
        externalResourcesRequired: bool,
        path: List<PathData>,
        rotate: MotionRotate,
        origin: String,
    }
    with {
        animation: Animation,
        timing: AnimationTiming,
        events: GraphicsElementEvents,
    }
}

element! {
    /// References a `<path>` as the motion path of `<animateMotion>`.
    pub struct MPath("mpath") {
        externalResourcesRequired: bool,
        href: String,
    }
    with {
        events: GraphicsElementEvents,
    }
}

element! {
    /// Animates the `transform` attribute.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animateTransform>
    pub struct AnimateTransform("animateTransform") {
        externalResourcesRequired: bool,
        type_: TransformType,
        attributeName: String,
    }
    with {
        animation: Animation,
        timing: AnimationTiming,
        events: GraphicsElementEvents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::element::SvgElement;
    use crate::svg::mixins::{
        AnimationAttrs, AnimationTimingAttrs, FillStrokeAttrs, FontSpecificationAttrs,
        TextContentElementsAttrs, TextStyleAttrs,
    };
    use crate::keywords::{FontWeight, TextAnchor};
    use crate::timing::RepeatCount;
    use crate::types::{mm, percent};

    #[test]
    fn test_rect_fields_in_declaration_order() {
        let rect = Rect::new().x(0).y(0).width(100).height(100).rx(5).fill("blue");
        assert_eq!(
            rect.render(),
            r#"<rect x="0" y="0" width="100" height="100" rx="5" fill="blue"/>"#
        );
    }

    #[test]
    fn test_path_data_list() {
        let path = Path::new().d(vec![
            PathData::move_to(10, 30),
            PathData::arc(20, 20, 0, false, true, 50, 30),
            PathData::close(),
        ]);
        assert_eq!(path.render(), r#"<path d="M 10 30 A 20 20 0 0 1 50 30 Z"/>"#);
    }

    #[test]
    fn test_polygon_points() {
        let polygon = Polygon::new().points(vec![60, 30, 90, 90, 30, 90]);
        assert_eq!(polygon.render(), r#"<polygon points="60 30 90 90 30 90"/>"#);
    }

    #[test]
    fn test_text_bundles() {
        let text = Text::new()
            .x(mm(5))
            .fill("black")
            .font_weight(FontWeight::Bold)
            .text_anchor(TextAnchor::Middle)
            .stroke_width(0.5)
            .text("Hi");
        assert_eq!(
            text.render(),
            r#"<text x="5mm" fill="black" font-weight="bold" text-anchor="middle" stroke-width="0.5">Hi</text>"#
        );
    }

    #[test]
    fn test_animate_semicolon_lists() {
        let animate = Animate::new()
            .attributeName("rx")
            .values(vec![0, 50, 0])
            .keyTimes(vec![0.0, 0.5, 1.0])
            .dur(chrono::TimeDelta::seconds(10))
            .repeatCount(RepeatCount::Indefinite);
        assert_eq!(
            animate.render(),
            r#"<animate attributeName="rx" values="0;50;0" keyTimes="0;0.5;1" dur="10s" repeatCount="indefinite"/>"#
        );
    }

    #[test]
    fn test_set_uses_timing_bundle_only() {
        assert!(Set::ANIMATED);
        let set = Set::new()
            .attributeName("fill")
            .to("red")
            .begin(vec![chrono::TimeDelta::seconds(1), chrono::TimeDelta::seconds(3)]);
        assert_eq!(
            set.render(),
            r#"<set to="red" attributeName="fill" begin="1s;3s"/>"#
        );
    }

    #[test]
    fn test_values_on_plain_element_use_spaces() {
        assert!(!Polygon::ANIMATED);
        assert!(!Rect::ANIMATED);
        assert!(Animate::ANIMATED);
        assert!(AnimateTransform::ANIMATED);
    }

    #[test]
    fn test_gradient_stops() {
        let gradient = LinearGradient::new().id("fade").child(
            Stop::new().offset(percent(0)).stop_color("white"),
        );
        assert_eq!(
            gradient.render(),
            r#"<linearGradient id="fade"><stop offset="0%" stop-color="white"/></linearGradient>"#
        );
    }

    #[test]
    fn test_keyword_renamed_fields() {
        let script = Script::new().type_("text/javascript").text("run()");
        assert_eq!(script.render(), r#"<script type="text/javascript">run()</script>"#);
        assert_eq!(ColorProfile::new().local("x").render(), r#"<color-profile local="x"/>"#);
    }
}
