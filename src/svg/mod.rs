//! SVG document model - typed elements rendered to markup.
//!
//! - [`elements`] and [`filters`]: one struct per element kind
//! - [`mixins`]: attribute bundles shared between kinds
//! - [`attrs`]: how field values become attribute text
//! - [`renderer`]: the markup writer
//!
//! Pure string building, no DOM manipulation.

pub mod attrs;
pub mod catalog;
pub mod element;
pub mod elements;
pub mod filters;
pub mod mixins;
pub mod path;
pub mod renderer;
pub mod transform;

pub use attrs::{attr_name, AttrMap, List, ListSeparator, Projection, ToAttr};
pub use catalog::{catalog, catalog_json, find_schema, Element, ElementSchema};
pub use element::{Content, Core, SvgElement};
pub use elements::*;
pub use filters::*;
pub use mixins::*;
pub use path::PathData;
pub use renderer::{escape, to_document, DocumentOptions};
pub use transform::Transform;
