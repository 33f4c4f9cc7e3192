//! SVG renderer - converts an element tree into markup.
//!
//! Pure string building, no DOM manipulation. Attribute values are written
//! verbatim; callers escape untrusted text with [`escape`].

use super::element::{Content, Core};
use super::elements::Svg;

/// Render one node given its projected attributes.
///
/// Attributes come first, then `data-*` pairs, then extra pairs. Text content
/// wins over children; with neither the tag self-closes.
pub fn render_node(tag: &str, attrs: &[(String, String)], core: &Core) -> String {
    let mut parts: Vec<String> = attrs
        .iter()
        .map(|(key, value)| format!(r#"{}="{}""#, key, value))
        .collect();
    parts.extend(
        core.data
            .iter()
            .map(|(key, value)| format!(r#"data-{}="{}""#, key, value)),
    );
    parts.extend(
        core.extra
            .iter()
            .map(|(key, value)| format!(r#"{}="{}""#, key, value)),
    );

    let props = if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    };
    log::trace!("rendering <{}> with {} attributes", tag, parts.len());

    match &core.content {
        Content::Text(text) if !text.is_empty() => format!("<{tag}{props}>{text}</{tag}>"),
        Content::Children(children) if !children.is_empty() => {
            let inner: String = children.iter().map(|child| child.render()).collect();
            format!("<{tag}{props}>{inner}</{tag}>")
        }
        _ => format!("<{tag}{props}/>"),
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Options for [`to_document`].
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Prefix `<?xml version="1.0" encoding="UTF-8"?>` and a newline.
    pub xml_declaration: bool,
    /// End the document with a newline.
    pub trailing_newline: bool,
}

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render a root `<svg>` as a standalone document.
///
/// With default options this is exactly the element's own markup.
pub fn to_document(root: &Svg, options: Option<DocumentOptions>) -> String {
    use super::element::SvgElement;

    let options = options.unwrap_or_default();
    let mut out = String::new();
    if options.xml_declaration {
        out.push_str(XML_DECLARATION);
        out.push('\n');
    }
    out.push_str(&root.render());
    if options.trailing_newline {
        out.push('\n');
    }
    out
}

// ============================================================================
// Utilities
// ============================================================================

/// Make text safe to use in SVG. `&` goes first so the entities added for
/// `>` and `<` are not escaped again.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('>', "&gt;")
        .replace('<', "&lt;")
}
