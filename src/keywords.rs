//! Closed keyword sets for enum-valued attributes.
//!
//! Each enum renders as its SVG spelling and parses back from it, so a
//! misspelled keyword is rejected when the value is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SvgError;
use crate::svg::attrs::{ListSeparator, ToAttr};

macro_rules! keyword {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $text:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $text)] $variant, )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SvgError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )*
                    _ => {
                        log::debug!("rejected {} keyword {:?}", stringify!($name), s);
                        Err(SvgError::InvalidKeyword {
                            kind: stringify!($name),
                            value: s.to_string(),
                        })
                    }
                }
            }
        }

        impl ToAttr for $name {
            fn to_attr(&self, _sep: ListSeparator) -> String {
                self.as_str().to_string()
            }
        }
    };
}

keyword! {
    /// Units accepted by [`Length`](crate::types::Length)
    pub enum LengthUnit {
        Em => "em",
        Ex => "ex",
        Px => "px",
        Pt => "pt",
        Pc => "pc",
        Cm => "cm",
        Mm => "mm",
        In => "in",
        Percent => "%",
    }
}

keyword! {
    pub enum Alignment {
        None => "none",
        XMinYMin => "xMinYMin",
        XMidYMin => "xMidYMin",
        XMaxYMin => "xMaxYMin",
        XMinYMid => "xMinYMid",
        XMidYMid => "xMidYMid",
        XMaxYMid => "xMaxYMid",
        XMinYMax => "xMinYMax",
        XMidYMax => "xMidYMax",
        XMaxYMax => "xMaxYMax",
    }
}

keyword! {
    pub enum ScaleType {
        Meet => "meet",
        Slice => "slice",
    }
}

// Painting and presentation

keyword! {
    pub enum ColorInterpolation {
        Auto => "auto",
        SRgb => "sRGB",
        LinearRgb => "linearRGB",
        Inherit => "inherit",
    }
}

keyword! {
    /// Shared by `fill-rule` and `clip-rule`
    pub enum FillRule {
        EvenOdd => "evenodd",
        NonZero => "nonzero",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum Cursor {
        Auto => "auto",
        Crosshair => "crosshair",
        Default => "default",
        Pointer => "pointer",
        Move => "move",
        EResize => "e-resize",
        NeResize => "ne-resize",
        NwResize => "nw-resize",
        NResize => "n-resize",
        SeResize => "se-resize",
        SwResize => "sw-resize",
        SResize => "s-resize",
        WResize => "w-resize",
        Text => "text",
        Wait => "wait",
        Help => "help",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum PointerEvents {
        BoundingBox => "bounding-box",
        VisiblePainted => "visiblePainted",
        VisibleFill => "visibleFill",
        VisibleStroke => "visibleStroke",
        Visible => "visible",
        Painted => "painted",
        Fill => "fill",
        Stroke => "stroke",
        All => "all",
        None => "none",
    }
}

keyword! {
    pub enum LineCap {
        Butt => "butt",
        Round => "round",
        Square => "square",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum LineJoin {
        Miter => "miter",
        Round => "round",
        Bevel => "bevel",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum PaintOrder {
        Normal => "normal",
        Fill => "fill",
        Stroke => "stroke",
        Markers => "markers",
    }
}

keyword! {
    pub enum ShapeRendering {
        Auto => "auto",
        OptimizeSpeed => "optimizeSpeed",
        CrispEdges => "crispEdges",
        GeometricPrecision => "geometricPrecision",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum VectorEffect {
        None => "none",
        NonScalingStroke => "non-scaling-stroke",
        NonScalingSize => "non-scaling-size",
        NonRotation => "non-rotation",
        FixedPosition => "fixed-position",
    }
}

keyword! {
    pub enum Visibility {
        Visible => "visible",
        Hidden => "hidden",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum Overflow {
        Visible => "visible",
        Hidden => "hidden",
        Scroll => "scroll",
        Auto => "auto",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum ImageRendering {
        Auto => "auto",
        OptimizeSpeed => "optimizeSpeed",
        OptimizeQuality => "optimizeQuality",
    }
}

// Text

keyword! {
    pub enum FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum FontVariant {
        Normal => "normal",
        SmallCaps => "small-caps",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum FontWeight {
        Normal => "normal",
        Bold => "bold",
        Bolder => "bolder",
        Lighter => "lighter",
        Inherit => "inherit",
        W100 => "100",
        W200 => "200",
        W300 => "300",
        W400 => "400",
        W500 => "500",
        W600 => "600",
        W700 => "700",
        W800 => "800",
        W900 => "900",
    }
}

keyword! {
    pub enum Direction {
        Ltr => "ltr",
        Rtl => "rtl",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum DominantBaseline {
        Auto => "auto",
        AutosenseScript => "autosense-script",
        NoChange => "no-change",
        Reset => "reset",
        Ideographic => "ideographic",
        Lower => "lower",
        Hanging => "hanging",
        Mathematical => "mathematical",
        Inherit => "inherit",
        TextBottom => "text-bottom",
        Alphabetic => "alphabetic",
        Middle => "middle",
        Central => "central",
        TextTop => "text-top",
    }
}

keyword! {
    pub enum AlignmentBaseline {
        Baseline => "baseline",
        Top => "top",
        BeforeEdge => "before-edge",
        TextTop => "text-top",
        TextBeforeEdge => "text-before-edge",
        Middle => "middle",
        Bottom => "bottom",
        AfterEdge => "after-edge",
        TextBottom => "text-bottom",
        TextAfterEdge => "text-after-edge",
        Ideographic => "ideographic",
        Lower => "lower",
        Hanging => "hanging",
        Mathematical => "mathematical",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum BaselineShift {
        Baseline => "baseline",
        Sub => "sub",
        Super => "super",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum TextAnchor {
        Start => "start",
        Middle => "middle",
        End => "end",
        Inherit => "inherit",
    }
}

keyword! {
    pub enum TextDecoration {
        None => "none",
        Underline => "underline",
        Overline => "overline",
        LineThrough => "line-through",
    }
}

keyword! {
    pub enum UnicodeBidi {
        Normal => "normal",
        Embed => "embed",
        Isolate => "isolate",
        BidiOverride => "bidi-override",
        IsolateOverride => "isolate-override",
        Plaintext => "plaintext",
    }
}

keyword! {
    pub enum LengthAdjust {
        Spacing => "spacing",
        SpacingAndGlyphs => "spacingAndGlyphs",
    }
}

keyword! {
    pub enum WritingMode {
        HorizontalTb => "horizontal-tb",
        VerticalRl => "vertical-rl",
        VerticalLr => "vertical-lr",
    }
}

keyword! {
    pub enum TextRendering {
        Auto => "auto",
        OptimizeSpeed => "optimizeSpeed",
        OptimizeLegibility => "optimizeLegibility",
        GeometricPrecision => "geometricPrecision",
    }
}

keyword! {
    pub enum TextPathMethod {
        Align => "align",
        Stretch => "stretch",
    }
}

keyword! {
    pub enum TextPathSpacing {
        Auto => "auto",
        Exact => "exact",
    }
}

keyword! {
    pub enum TextPathSide {
        Left => "left",
        Right => "right",
    }
}

// Structure

keyword! {
    /// `gradientUnits`, `patternUnits`, `clipPathUnits`, `maskUnits`, `filterUnits`, ...
    pub enum Units {
        UserSpaceOnUse => "userSpaceOnUse",
        ObjectBoundingBox => "objectBoundingBox",
    }
}

keyword! {
    pub enum MarkerUnits {
        StrokeWidth => "strokeWidth",
        UserSpaceOnUse => "userSpaceOnUse",
        UserSpace => "userSpace",
    }
}

keyword! {
    pub enum SpreadMethod {
        Pad => "pad",
        Reflect => "reflect",
        Repeat => "repeat",
    }
}

keyword! {
    pub enum Target {
        SelfFrame => "_self",
        Parent => "_parent",
        Top => "_top",
        Blank => "_blank",
    }
}

// Animation

keyword! {
    pub enum CalcMode {
        Discrete => "discrete",
        Linear => "linear",
        Paced => "paced",
        Spline => "spline",
    }
}

keyword! {
    pub enum Additive {
        Replace => "replace",
        Sum => "sum",
    }
}

keyword! {
    pub enum Accumulate {
        None => "none",
        Sum => "sum",
    }
}

keyword! {
    pub enum Restart {
        Always => "always",
        Never => "never",
        WhenNotActive => "whenNotActive",
    }
}

keyword! {
    /// The `fill` attribute of animation elements
    pub enum AnimationFill {
        Freeze => "freeze",
        Remove => "remove",
    }
}

keyword! {
    pub enum TransformType {
        Translate => "translate",
        Scale => "scale",
        Rotate => "rotate",
        SkewX => "skewX",
        SkewY => "skewY",
    }
}

keyword! {
    /// Edge of a syncbase reference, `id.begin` or `id.end`
    pub enum SyncEdge {
        Begin => "begin",
        End => "end",
    }
}

// Filters

keyword! {
    pub enum BlendMode {
        Normal => "normal",
        Multiply => "multiply",
        Screen => "screen",
        Overlay => "overlay",
        Darken => "darken",
        Lighten => "lighten",
        ColorDodge => "color-dodge",
        ColorBurn => "color-burn",
        HardLight => "hard-light",
        SoftLight => "soft-light",
        Difference => "difference",
        Exclusion => "exclusion",
        Hue => "hue",
        Saturation => "saturation",
        Color => "color",
        Luminosity => "luminosity",
    }
}

keyword! {
    pub enum ColorMatrixType {
        Matrix => "matrix",
        Saturate => "saturate",
        HueRotate => "hueRotate",
        LuminanceToAlpha => "luminanceToAlpha",
    }
}

keyword! {
    pub enum CompositeOperator {
        Over => "over",
        In => "in",
        Out => "out",
        Atop => "atop",
        Xor => "xor",
        Lighter => "lighter",
        Arithmetic => "arithmetic",
    }
}

keyword! {
    pub enum EdgeMode {
        Duplicate => "duplicate",
        Wrap => "wrap",
        None => "none",
    }
}

keyword! {
    pub enum MorphologyOperator {
        Erode => "erode",
        Dilate => "dilate",
    }
}

keyword! {
    pub enum ChannelSelector {
        R => "R",
        G => "G",
        B => "B",
        A => "A",
    }
}

keyword! {
    pub enum StitchTiles {
        NoStitch => "noStitch",
        Stitch => "stitch",
    }
}

keyword! {
    pub enum TurbulenceType {
        FractalNoise => "fractalNoise",
        Turbulence => "turbulence",
    }
}

keyword! {
    pub enum TransferFunctionType {
        Identity => "identity",
        Table => "table",
        Discrete => "discrete",
        Linear => "linear",
        Gamma => "gamma",
    }
}
