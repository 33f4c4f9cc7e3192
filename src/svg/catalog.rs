//! The closed set of element kinds.
//!
//! [`Element`] has one boxed variant per kind and is what children are stored
//! as. [`catalog`] lists every kind with the attribute names it can emit, for
//! external validators.

use std::fmt;

use serde::Serialize;

use super::element::{Core, SvgElement};
use super::elements::*;
use super::filters::*;
use crate::error::Result;

/// One element kind as seen by introspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSchema {
    /// Rust type name, e.g. `"LinearGradient"`.
    pub kind: &'static str,
    pub tag: &'static str,
    /// Whether animation lists join with `;`.
    pub animated: bool,
    pub attributes: Vec<String>,
}

macro_rules! catalog {
    ($($name:ident),* $(,)?) => {
        /// Any element kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Element {
            $( $name(Box<$name>), )*
        }

        impl Element {
            /// Every tag name, in catalog order.
            pub const TAGS: &'static [&'static str] = &[$(<$name as SvgElement>::TAG),*];

            pub fn tag(&self) -> &'static str {
                match self {
                    $( Element::$name(_) => <$name as SvgElement>::TAG, )*
                }
            }

            pub fn kind(&self) -> &'static str {
                match self {
                    $( Element::$name(_) => stringify!($name), )*
                }
            }

            pub fn core(&self) -> &Core {
                match self {
                    $( Element::$name(e) => e.core(), )*
                }
            }

            pub fn core_mut(&mut self) -> &mut Core {
                match self {
                    $( Element::$name(e) => e.core_mut(), )*
                }
            }

            pub fn attributes(&self) -> Vec<(String, String)> {
                match self {
                    $( Element::$name(e) => e.attributes(), )*
                }
            }

            pub fn render(&self) -> String {
                match self {
                    $( Element::$name(e) => e.render(), )*
                }
            }
        }

        $(
            impl From<$name> for Element {
                fn from(e: $name) -> Self {
                    Element::$name(Box::new(e))
                }
            }
        )*

        /// Schema of every element kind, in a fixed order.
        pub fn catalog() -> Vec<ElementSchema> {
            vec![
                $(
                    ElementSchema {
                        kind: stringify!($name),
                        tag: <$name as SvgElement>::TAG,
                        animated: <$name as SvgElement>::ANIMATED,
                        attributes: <$name as SvgElement>::attribute_names(),
                    },
                )*
            ]
        }
    };
}

catalog! {
    Svg, G, Defs, Desc, Title, Symbol, Image, Switch, Style, Use, A, View, Script,
    Metadata, DefinitionSrc, ColorProfile, ForeignObject,
    Path, Rect, Circle, Ellipse, Line, Polyline, Polygon, Marker,
    Text, TSpan, TextPath,
    LinearGradient, RadialGradient, Stop, Pattern, ClipPath, Mask,
    Animate, Set, AnimateMotion, MPath, AnimateTransform,
    Filter, FeDistantLight, FePointLight, FeSpotLight,
    FeBlend, FeColorMatrix, FeComponentTransfer, FeFuncR, FeFuncG, FeFuncB, FeFuncA,
    FeComposite, FeConvolveMatrix, FeDiffuseLighting, FeDisplacementMap, FeDropShadow,
    FeFlood, FeGaussianBlur, FeImage, FeMerge, FeMergeNode, FeMorphology, FeOffset,
    FeSpecularLighting, FeTile, FeTurbulence,
}

impl Element {
    /// Append a child. Fails if the element holds text.
    pub fn push(&mut self, child: impl Into<Element>) -> Result<()> {
        self.core_mut().push(child.into())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Look up a kind by tag name.
pub fn find_schema(tag: &str) -> Option<ElementSchema> {
    catalog().into_iter().find(|schema| schema.tag == tag)
}

/// The catalog as pretty-printed JSON.
pub fn catalog_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&catalog())
}
