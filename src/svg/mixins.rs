//! Capability bundles: named groups of optional attributes shared by many
//! element kinds.
//!
//! An element embeds a bundle as a struct field. Each bundle also gets a
//! setter trait, implemented for every element that embeds it, so bundle
//! attributes chain like the element's own: `Rect::new().stroke("red")`.

use chrono::TimeDelta;

use super::attrs::{attr_name, List, Projection};
use super::transform::Transform;
use crate::keywords::{
    Accumulate, Additive, AnimationFill, CalcMode, ColorInterpolation, Cursor, Direction,
    DominantBaseline, FillRule, FontStyle, FontVariant, FontWeight, PaintOrder, PointerEvents,
    Restart, ShapeRendering, SpreadMethod, TextAnchor, TextDecoration, TransferFunctionType,
    UnicodeBidi, Units, VectorEffect, Visibility,
};
use crate::timing::{DurationValue, RepeatCount, TimeBezierPoint, TimingEvent};
use crate::types::{DashArray, Dimension, Number, Value};

/// A group of attributes that can be embedded in an element kind.
pub trait AttrBundle: Default {
    /// Whether list attributes in [`SEMICOLON_ATTRS`](super::attrs::SEMICOLON_ATTRS)
    /// join with `;` on elements embedding this bundle.
    const ANIMATED: bool;
    /// Field names, in projection order.
    const FIELDS: &'static [&'static str];

    fn project(&self, out: &mut Projection);

    fn attribute_names() -> Vec<String> {
        Self::FIELDS.iter().map(|f| attr_name(f)).collect()
    }
}

/// Access to an embedded bundle; the bundle setter traits build on it.
pub trait HasBundle<B: AttrBundle> {
    fn bundle_mut(&mut self) -> &mut B;
}

macro_rules! attr_bundle {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $setters:ident (animated = $animated:literal) {
            $( $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( pub $field: Option<$ty>, )*
        }

        impl AttrBundle for $name {
            const ANIMATED: bool = $animated;
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            fn project(&self, out: &mut Projection) {
                $( out.push(stringify!($field), self.$field.as_ref()); )*
            }
        }

        #[doc = concat!("Chained setters for the [`", stringify!($name), "`] attributes.")]
        #[allow(non_snake_case)]
        pub trait $setters: HasBundle<$name> + Sized {
            $(
                fn $field(mut self, value: impl Into<$ty>) -> Self {
                    <Self as HasBundle<$name>>::bundle_mut(&mut self).$field = Some(value.into());
                    self
                }
            )*
        }

        impl<T: HasBundle<$name>> $setters for T {}
    };
}

attr_bundle! {
    /// Event handler attributes of graphics elements.
    pub struct GraphicsElementEvents / GraphicsElementEventsAttrs (animated = false) {
        onfocusin: String,
        onfocusout: String,
        onactivate: String,
        onclick: String,
        onmousedown: String,
        onmouseup: String,
        onmouseover: String,
        onmousemove: String,
        onmouseout: String,
        onload: String,
    }
}

attr_bundle! {
    pub struct Color / ColorAttrs (animated = false) {
        color: String,
        color_interpolation: ColorInterpolation,
    }
}

attr_bundle! {
    /// Stroke painting.
    pub struct FillStroke / FillStrokeAttrs (animated = false) {
        stroke: String,
        stroke_dasharray: DashArray,
        stroke_dashoffset: Dimension,
        stroke_opacity: Number,
        stroke_width: Dimension,
    }
}

attr_bundle! {
    pub struct FontSpecification / FontSpecificationAttrs (animated = false) {
        font_family: String,
        font_size: Dimension,
        font_size_adjust: Number,
        font_style: FontStyle,
        font_variant: FontVariant,
        font_weight: FontWeight,
    }
}

attr_bundle! {
    pub struct Graphics / GraphicsAttrs (animated = false) {
        clip_rule: FillRule,
        cursor: Cursor,
        display: String,
        filter: String,
        pointer_events: PointerEvents,
    }
}

attr_bundle! {
    pub struct TextContentElements / TextContentElementsAttrs (animated = false) {
        direction: Direction,
        dominant_baseline: DominantBaseline,
        letter_spacing: Dimension,
        text_anchor: TextAnchor,
        text_decoration: TextDecoration,
        unicode_bidi: UnicodeBidi,
        word_spacing: Dimension,
    }
}

attr_bundle! {
    /// Subregion and output name of a filter primitive.
    pub struct FilterPrimitive / FilterPrimitiveAttrs (animated = false) {
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        result: String,
    }
}

attr_bundle! {
    /// The transfer function of `<feFuncR>`, `<feFuncG>`, `<feFuncB>` and `<feFuncA>`.
    pub struct ComponentTransferFunction / ComponentTransferFunctionAttrs (animated = false) {
        type_: TransferFunctionType,
        tableValues: List<Number>,
        slope: Number,
        intercept: Number,
        amplitude: Number,
        exponent: Number,
        offset: Number,
    }
}

attr_bundle! {
    /// Animation value, target and addition attributes.
    pub struct Animation / AnimationAttrs (animated = true) {
        calcMode: CalcMode,
        values: List<Value>,
        keyTimes: List<Number>,
        keySplines: List<TimeBezierPoint>,
        keyPoints: List<Number>,
        from_: Value,
        to: Value,
        by: Value,
        href: String,
        additive: Additive,
        accumulate: Accumulate,
    }
}

attr_bundle! {
    /// When an animation starts, how long it runs and what happens after.
    pub struct AnimationTiming / AnimationTimingAttrs (animated = true) {
        begin: List<TimingEvent>,
        dur: DurationValue,
        end: List<TimingEvent>,
        min: TimeDelta,
        max: TimeDelta,
        restart: Restart,
        repeatCount: RepeatCount,
        repeatDur: DurationValue,
        fill: AnimationFill,
    }
}

attr_bundle! {
    /// Presentation attributes shared by the basic shapes.
    pub struct Figure / FigureAttrs (animated = false) {
        pathLength: Number,
        paint_order: PaintOrder,
        shape_rendering: ShapeRendering,
        class_: List<String>,
        vector_effect: VectorEffect,
        visibility: Visibility,
        mask: String,
        opacity: Number,
        clip_path: String,
    }
}

attr_bundle! {
    /// Presentation attributes shared by the text elements.
    pub struct TextStyle / TextStyleAttrs (animated = false) {
        paint_order: PaintOrder,
        class_: List<String>,
        vector_effect: VectorEffect,
        visibility: Visibility,
        fill_opacity: Number,
        fill: String,
    }
}

attr_bundle! {
    pub struct Gradient / GradientAttrs (animated = false) {
        externalResourcesRequired: bool,
        gradientUnits: Units,
        gradientTransform: List<Transform>,
        spreadMethod: SpreadMethod,
        href: String,
        class_: List<String>,
    }
}
