//! The element model: core attributes, content and the definition macro
//! every element kind is declared with.

use super::attrs::{attr_name, AttrMap, Projection};
use super::catalog::Element;
use super::renderer::render_node;
use crate::error::{Result, SvgError};

/// What goes between the start and end tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Children(Vec<Element>),
}

impl Content {
    /// True when the element renders as a self-closing tag.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Empty => true,
            Content::Text(text) => text.is_empty(),
            Content::Children(children) => children.is_empty(),
        }
    }
}

/// Attributes and content every element kind carries.
///
/// <https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/Core>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Core {
    pub id: Option<String>,
    pub tabindex: Option<i32>,
    pub lang: Option<String>,
    pub transform_origin: Option<String>,
    pub style: Option<String>,
    /// Rendered as `data-<key>="<value>"` after the typed attributes.
    pub data: AttrMap,
    /// Rendered verbatim after the `data-*` attributes. Useful for htmx and
    /// similar frameworks; nothing is checked.
    pub extra: AttrMap,
    pub content: Content,
}

impl Core {
    pub const FIELDS: &'static [&'static str] = &["id", "tabindex", "lang", "transform_origin", "style"];

    pub fn project(&self, out: &mut Projection) {
        out.push("id", self.id.as_ref());
        out.push("tabindex", self.tabindex.as_ref());
        out.push("lang", self.lang.as_ref());
        out.push("transform_origin", self.transform_origin.as_ref());
        out.push("style", self.style.as_ref());
    }

    pub fn attribute_names() -> Vec<String> {
        Self::FIELDS.iter().map(|f| attr_name(f)).collect()
    }

    /// Append a child. Fails if the element holds text.
    pub fn push(&mut self, child: Element) -> Result<()> {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Text(text) if !text.is_empty() => return Err(SvgError::TextWithChildren),
            content => *content = Content::Children(vec![child]),
        }
        Ok(())
    }
}

/// Behaviour shared by all element kinds.
///
/// Implemented by the [`element!`] macro; the builder methods here cover the
/// core attributes and content.
pub trait SvgElement: Sized {
    /// Tag name, e.g. `"rect"` or `"feGaussianBlur"`.
    const TAG: &'static str;
    /// Whether the kind embeds an animation bundle.
    const ANIMATED: bool;

    fn core(&self) -> &Core;

    fn core_mut(&mut self) -> &mut Core;

    /// Record every present attribute, in declaration order.
    fn project(&self, out: &mut Projection);

    /// Every attribute name this kind can emit.
    fn attribute_names() -> Vec<String>;

    fn attributes(&self) -> Vec<(String, String)> {
        let mut out = Projection::new(Self::ANIMATED);
        self.project(&mut out);
        out.into_pairs()
    }

    fn render(&self) -> String {
        render_node(Self::TAG, &self.attributes(), self.core())
    }

    fn id(mut self, id: impl Into<String>) -> Self {
        self.core_mut().id = Some(id.into());
        self
    }

    fn tabindex(mut self, tabindex: i32) -> Self {
        self.core_mut().tabindex = Some(tabindex);
        self
    }

    fn lang(mut self, lang: impl Into<String>) -> Self {
        self.core_mut().lang = Some(lang.into());
        self
    }

    fn transform_origin(mut self, origin: impl Into<String>) -> Self {
        self.core_mut().transform_origin = Some(origin.into());
        self
    }

    fn style(mut self, style: impl Into<String>) -> Self {
        self.core_mut().style = Some(style.into());
        self
    }

    /// Replace the content with text.
    fn text(mut self, text: impl Into<String>) -> Self {
        self.core_mut().content = Content::Text(text.into());
        self
    }

    /// Replace the content with children.
    fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.core_mut().content = Content::Children(children.into_iter().map(Into::into).collect());
        self
    }

    /// Append one child. Text content is replaced, as with [`children`](Self::children);
    /// [`push`](Self::push) is the checked form.
    fn child(mut self, child: impl Into<Element>) -> Self {
        let core = self.core_mut();
        match &mut core.content {
            Content::Children(children) => children.push(child.into()),
            content => *content = Content::Children(vec![child.into()]),
        }
        self
    }

    fn push(&mut self, child: impl Into<Element>) -> Result<()> {
        self.core_mut().push(child.into())
    }

    fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.core_mut().data.insert(key.into(), value.into());
        self
    }

    fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.core_mut().extra.insert(key.into(), value.into());
        self
    }
}

/// Declare an element kind.
///
/// ```text
/// element! {
///     pub struct Rect("rect") {
///         x: Dimension,
///         fill: String,
///     }
///     with {
///         figure: Figure,
///         fill_stroke: FillStroke,
///     }
/// }
/// ```
///
/// Own fields become `Option`s with a chained setter each; `field: Ty = expr`
/// gives a field a default. Bundles listed under `with` are embedded and
/// their setter traits apply to the new kind. Attributes project as core,
/// then own fields, then bundles in the order listed.
macro_rules! element {
    (@default) => { None };
    (@default $default:expr) => { Some(($default).into()) };
    (
        $(#[$meta:meta])*
        pub struct $name:ident($tag:literal) {
            $( $field:ident : $ty:ty $(= $default:expr)? ),* $(,)?
        }
        with {
            $( $bundle:ident : $bty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub core: $crate::svg::element::Core,
            $( pub $field: Option<$ty>, )*
            $( pub $bundle: $bty, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    core: Default::default(),
                    $( $field: element!(@default $($default)?), )*
                    $( $bundle: Default::default(), )*
                }
            }
        }

        #[allow(non_snake_case)]
        impl $name {
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::svg::element::SvgElement for $name {
            const TAG: &'static str = $tag;
            const ANIMATED: bool =
                false $( || <$bty as $crate::svg::mixins::AttrBundle>::ANIMATED )*;

            fn core(&self) -> &$crate::svg::element::Core {
                &self.core
            }

            fn core_mut(&mut self) -> &mut $crate::svg::element::Core {
                &mut self.core
            }

            fn project(&self, out: &mut $crate::svg::attrs::Projection) {
                self.core.project(out);
                $( out.push(stringify!($field), self.$field.as_ref()); )*
                $( $crate::svg::mixins::AttrBundle::project(&self.$bundle, out); )*
            }

            fn attribute_names() -> Vec<String> {
                let mut names = $crate::svg::element::Core::attribute_names();
                names.extend(Self::FIELDS.iter().map(|f| $crate::svg::attrs::attr_name(f)));
                $( names.extend(<$bty as $crate::svg::mixins::AttrBundle>::attribute_names()); )*
                names
            }
        }

        $(
            impl $crate::svg::mixins::HasBundle<$bty> for $name {
                fn bundle_mut(&mut self) -> &mut $bty {
                    &mut self.$bundle
                }
            }
        )*

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::svg::element::SvgElement::render(self))
            }
        }
    };
}
pub(crate) use element;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::elements::{Circle, Rect, Svg, Text};
    use crate::svg::mixins::{FillStrokeAttrs, FigureAttrs};
    use crate::types::mm;

    #[test]
    fn test_core_attributes_come_first() {
        let rect = Rect::new().width(10).id("box").tabindex(2).style("fill: red");
        assert_eq!(
            rect.attributes(),
            vec![
                ("id".to_string(), "box".to_string()),
                ("tabindex".to_string(), "2".to_string()),
                ("style".to_string(), "fill: red".to_string()),
                ("width".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_bundle_setters_chain() {
        let circle = Circle::new().r(mm(3)).stroke("black").class_(vec!["dot", "big"]);
        assert_eq!(
            circle.render(),
            r#"<circle r="3mm" class="dot big" stroke="black"/>"#
        );
    }

    #[test]
    fn test_push_onto_text_fails() {
        let mut text = Text::new().text("hello");
        assert_eq!(text.push(Rect::new()), Err(SvgError::TextWithChildren));

        let mut empty_text = Text::new().text("");
        assert!(empty_text.push(Rect::new()).is_ok());
        assert_eq!(empty_text.core.content, Content::Children(vec![Rect::new().into()]));
    }

    #[test]
    fn test_child_appends() {
        let svg = Svg::new().child(Rect::new()).child(Circle::new());
        match &svg.core.content {
            Content::Children(children) => assert_eq!(children.len(), 2),
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_svg_namespace_default() {
        assert_eq!(
            Svg::new().xmlns.as_deref(),
            Some("http://www.w3.org/2000/svg")
        );
    }

    #[test]
    fn test_attribute_names_include_bundles() {
        let names = Rect::attribute_names();
        assert_eq!(&names[..5], &["id", "tabindex", "lang", "transform-origin", "style"]);
        assert!(names.contains(&"rx".to_string()));
        assert!(names.contains(&"stroke-width".to_string()));
        assert!(names.contains(&"onclick".to_string()));
        assert!(names.contains(&"clip-path".to_string()));
    }
}
