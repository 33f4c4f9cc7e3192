//! svgdoc - Build SVG documents as typed element trees
//!
//! Every SVG element kind is a plain struct with chained setters. Attribute
//! values are typed (numbers, lengths, transforms, path commands, clock
//! values) and are formatted to attribute text when the tree is rendered.
//!
//! # Example
//!
//! ```rust
//! use svgdoc::prelude::*;
//! use svgdoc::{Circle, Svg};
//!
//! let svg = Svg::new().width(100).height(100).child(
//!     Circle::new()
//!         .cx(50)
//!         .cy(50)
//!         .r(40)
//!         .stroke("green")
//!         .stroke_width(4)
//!         .fill("yellow"),
//! );
//! assert_eq!(
//!     svg.render(),
//!     concat!(
//!         r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">"#,
//!         r#"<circle cx="50" cy="50" r="40" fill="yellow" stroke="green" stroke-width="4"/>"#,
//!         "</svg>",
//!     )
//! );
//! ```
//!
//! # Layout
//!
//! - [`svg`]: the element model, the catalog and the renderer
//! - [`types`], [`keywords`], [`timing`]: attribute value types
//! - [`parser`]: clock-value parsing
//! - [`gallery`]: ready-made documents

pub mod error;
pub mod gallery;
pub mod keywords;
pub mod parser;
pub mod svg;
pub mod timing;
pub mod types;

pub use error::{Result, SvgError};
pub use parser::parse_clock_value;
pub use svg::*;
pub use timing::*;
pub use types::*;

/// The element trait and every bundle setter trait.
///
/// Bundle attributes such as `stroke` or `dur` are set through traits, so
/// they need to be in scope.
pub mod prelude {
    pub use crate::svg::mixins::{
        AnimationAttrs, AnimationTimingAttrs, ColorAttrs, ComponentTransferFunctionAttrs,
        FigureAttrs, FillStrokeAttrs, FilterPrimitiveAttrs, FontSpecificationAttrs, GradientAttrs,
        GraphicsAttrs, GraphicsElementEventsAttrs, TextContentElementsAttrs, TextStyleAttrs,
    };
    pub use crate::svg::SvgElement;
}
