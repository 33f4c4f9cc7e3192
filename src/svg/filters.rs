//! `<filter>` and the filter primitives.
//!
//! Primitives embed [`FilterPrimitive`] for their subregion and `result`;
//! light sources, `<feMergeNode>` and the `<feFunc*>` transfer functions do
//! not have a subregion.

use super::attrs::List;
use super::element::element;
use super::mixins::{ComponentTransferFunction, FilterPrimitive};
use super::transform::Transform;
use crate::keywords::{
    BlendMode, ChannelSelector, ColorInterpolation, ColorMatrixType, CompositeOperator, EdgeMode,
    MorphologyOperator, StitchTiles, TurbulenceType, Units,
};
use crate::types::{Dimension, Number, NumberOptionalNumber, PreserveAspectRatio};

element! {
    /// A container of filter primitives, referenced through the `filter` attribute.
    ///
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/filter>
    pub struct Filter("filter") {
        externalResourcesRequired: bool,
        filterUnits: Units,
        primitiveUnits: Units,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
        class_: List<String>,
    }
    with {}
}

// ============================================================================
// Light sources
// ============================================================================

element! {
    pub struct FeDistantLight("feDistantLight") {
        azimuth: Number,
        elevation: Number,
    }
    with {}
}

element! {
    pub struct FePointLight("fePointLight") {
        x: Dimension,
        y: Dimension,
        z: Dimension,
    }
    with {}
}

element! {
    pub struct FeSpotLight("feSpotLight") {
        x: Dimension,
        y: Dimension,
        z: Dimension,
        pointsAtX: Number,
        pointsAtY: Number,
        pointsAtZ: Number,
        specularExponent: Number,
        limitingConeAngle: Number,
    }
    with {}
}

// ============================================================================
// Primitives
// ============================================================================

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feBlend>
    pub struct FeBlend("feBlend") {
        in_: String,
        in2: String,
        mode: BlendMode,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feColorMatrix>
    pub struct FeColorMatrix("feColorMatrix") {
        in_: String,
        type_: ColorMatrixType,
        values: List<Number>,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    /// Holds one `<feFuncX>` child per channel.
    pub struct FeComponentTransfer("feComponentTransfer") {
        in_: String,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeFuncR("feFuncR") {}
    with {
        function: ComponentTransferFunction,
    }
}

element! {
    pub struct FeFuncG("feFuncG") {}
    with {
        function: ComponentTransferFunction,
    }
}

element! {
    pub struct FeFuncB("feFuncB") {}
    with {
        function: ComponentTransferFunction,
    }
}

element! {
    pub struct FeFuncA("feFuncA") {}
    with {
        function: ComponentTransferFunction,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feComposite>
    pub struct FeComposite("feComposite") {
        in_: String,
        in2: String,
        operator: CompositeOperator,
        k1: Number,
        k2: Number,
        k3: Number,
        k4: Number,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feConvolveMatrix>
    pub struct FeConvolveMatrix("feConvolveMatrix") {
        in_: String,
        order: NumberOptionalNumber,
        kernelMatrix: List<Number>,
        divisor: Number,
        bias: Number,
        targetX: i32,
        targetY: i32,
        edgeMode: EdgeMode,
        preserveAlpha: bool,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeDiffuseLighting("feDiffuseLighting") {
        in_: String,
        surfaceScale: Number,
        diffuseConstant: Number,
        lighting_color: String,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeDisplacementMap("feDisplacementMap") {
        in_: String,
        in2: String,
        scale: Number,
        xChannelSelector: ChannelSelector,
        yChannelSelector: ChannelSelector,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeDropShadow("feDropShadow") {
        in_: String,
        dx: Number,
        dy: Number,
        stdDeviation: NumberOptionalNumber,
        flood_color: String,
        flood_opacity: Number,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeFlood("feFlood") {
        flood_color: String,
        flood_opacity: Number,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feGaussianBlur>
    pub struct FeGaussianBlur("feGaussianBlur") {
        in_: String,
        stdDeviation: NumberOptionalNumber,
        edgeMode: EdgeMode,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeImage("feImage") {
        externalResourcesRequired: bool,
        href: String,
        transform: List<Transform>,
        preserveAspectRatio: PreserveAspectRatio,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    /// Layers its `<feMergeNode>` children on top of each other.
    pub struct FeMerge("feMerge") {
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeMergeNode("feMergeNode") {
        in_: String,
    }
    with {}
}

element! {
    pub struct FeMorphology("feMorphology") {
        in_: String,
        operator: MorphologyOperator,
        radius: NumberOptionalNumber,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeOffset("feOffset") {
        in_: String,
        dx: Number,
        dy: Number,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeSpecularLighting("feSpecularLighting") {
        in_: String,
        surfaceScale: Number,
        specularConstant: Number,
        specularExponent: Number,
        lighting_color: String,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    pub struct FeTile("feTile") {
        in_: String,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

element! {
    /// <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feTurbulence>
    pub struct FeTurbulence("feTurbulence") {
        baseFrequency: NumberOptionalNumber,
        numOctaves: i32,
        seed: Number,
        stitchTiles: StitchTiles,
        type_: TurbulenceType,
        color_interpolation_filters: ColorInterpolation,
        class_: List<String>,
    }
    with {
        primitive: FilterPrimitive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::TransferFunctionType;
    use crate::svg::element::SvgElement;
    use crate::svg::mixins::{ComponentTransferFunctionAttrs, FilterPrimitiveAttrs};

    #[test]
    fn test_gaussian_blur() {
        let blur = FeGaussianBlur::new()
            .in_("SourceGraphic")
            .stdDeviation((2, 0.5))
            .result("blurred");
        assert_eq!(
            blur.render(),
            r#"<feGaussianBlur in="SourceGraphic" stdDeviation="2 0.5" result="blurred"/>"#
        );
    }

    #[test]
    fn test_primitive_subregion_follows_own_fields() {
        let flood = FeFlood::new().flood_color("gold").x(0).width(10);
        assert_eq!(
            flood.render(),
            r#"<feFlood flood-color="gold" x="0" width="10"/>"#
        );
    }

    #[test]
    fn test_filter_with_primitives() {
        let filter = Filter::new()
            .id("shadow")
            .child(FeOffset::new().dx(2).dy(2))
            .child(FeMerge::new().children([
                FeMergeNode::new().in_("offset"),
                FeMergeNode::new().in_("SourceGraphic"),
            ]));
        assert_eq!(
            filter.render(),
            concat!(
                r#"<filter id="shadow"><feOffset dx="2" dy="2"/>"#,
                r#"<feMerge><feMergeNode in="offset"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
            )
        );
    }

    #[test]
    fn test_transfer_function() {
        let func = FeFuncR::new()
            .type_(TransferFunctionType::Table)
            .tableValues(vec![0.0, 0.5, 1.0]);
        assert_eq!(func.render(), r#"<feFuncR type="table" tableValues="0 0.5 1"/>"#);
    }

    #[test]
    fn test_color_matrix_values_use_spaces() {
        let matrix = FeColorMatrix::new().type_(ColorMatrixType::Saturate).values(vec![0.2]);
        assert_eq!(matrix.render(), r#"<feColorMatrix type="saturate" values="0.2"/>"#);
    }
}
