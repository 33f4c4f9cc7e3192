//! Integration tests using test data fixtures
//!
//! Each gallery document has a fixture in testdata/gallery/ and gets its own
//! test function. Run all tests with: cargo test

use std::fs;
use std::path::PathBuf;

use chrono::TimeDelta;
use svgdoc::keywords::SyncEdge;
use svgdoc::prelude::*;
use svgdoc::svg::{
    catalog, catalog_json, escape, to_document, AnimateMotion, DocumentOptions, Element, Rect, Set,
    Svg, Text, Transform, G, SVG_NAMESPACE,
};
use svgdoc::timing::{EventValue, SyncbaseValue, TimingEvent};
use svgdoc::types::{DashArray, Number};
use svgdoc::{gallery, parse_clock_value, SvgError};

/// Get the path to the gallery fixtures
fn get_gallery_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/gallery")
}

/// Normalize output for comparison (trim trailing whitespace from each line)
fn normalize_output(s: &str) -> String {
    s.lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Render a gallery document and compare it with its fixture
fn run_gallery_test(name: &str) {
    let fixture = get_gallery_dir().join(format!("{}.svg", name));
    let expected = fs::read_to_string(&fixture)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", fixture, e));

    let svg = gallery::demo(name).unwrap_or_else(|| panic!("Unknown demo: {}", name));
    let actual = svg.render();

    let expected_normalized = normalize_output(&expected);
    let actual_normalized = normalize_output(&actual);

    if expected_normalized != actual_normalized {
        eprintln!("=== Test: {} ===", name);
        eprintln!("\n--- Expected ---");
        eprintln!("{}", expected_normalized);
        eprintln!("\n--- Actual ---");
        eprintln!("{}", actual_normalized);

        let position = expected_normalized
            .chars()
            .zip(actual_normalized.chars())
            .position(|(e, a)| e != a)
            .unwrap_or_else(|| expected_normalized.len().min(actual_normalized.len()));
        eprintln!("\n--- First difference at char {} ---", position);

        panic!("Output mismatch for test: {}", name);
    }

    let doc = roxmltree::Document::parse(&actual)
        .unwrap_or_else(|e| panic!("{} is not well-formed: {}", name, e));
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.tag_name().namespace(), Some(SVG_NAMESPACE));
}

/// Macro to generate gallery test functions
macro_rules! gallery_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<gallery_ $name>]() {
                run_gallery_test(stringify!($name));
            }
        }
    };
}

// =============================================================================
// Gallery tests
// =============================================================================

gallery_test!(animate);
gallery_test!(animate_transform);
gallery_test!(shapes);
gallery_test!(text);
gallery_test!(transform);

#[test]
fn test_every_demo_has_a_fixture() {
    for name in gallery::NAMES {
        assert!(
            get_gallery_dir().join(format!("{}.svg", name)).exists(),
            "missing fixture for {}",
            name
        );
    }
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn test_document_with_declaration_parses() {
    let options = DocumentOptions {
        xml_declaration: true,
        trailing_newline: true,
    };
    let out = to_document(&gallery::shapes(), Some(options));
    assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(out.ends_with("</svg>\n"));

    let doc = roxmltree::Document::parse(&out).unwrap();
    let rects = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "rect")
        .count();
    assert_eq!(rects, 2);
}

#[test]
fn test_default_document_is_plain_render() {
    let svg = gallery::animate();
    assert_eq!(to_document(&svg, None), svg.render());
}

#[test]
fn test_escaped_text_round_trips() {
    let raw = "1 < 2 && 3 > 2";
    let svg = Svg::new().child(Text::new().text(escape(raw)));
    let out = svg.render();
    assert!(out.contains("1 &lt; 2 &amp;&amp; 3 &gt; 2"));

    let doc = roxmltree::Document::parse(&out).unwrap();
    let text = doc
        .descendants()
        .find(|n| n.tag_name().name() == "text")
        .unwrap();
    assert_eq!(text.text(), Some(raw));
}

#[test]
fn test_data_and_extra_attributes_follow_typed_ones() {
    let group = G::new()
        .id("axis")
        .extra("hx-get", "/ticks")
        .data("role", "axis")
        .child(Rect::new().width(5));
    assert_eq!(
        group.render(),
        r#"<g id="axis" data-role="axis" hx-get="/ticks"><rect width="5"/></g>"#
    );
}

#[test]
fn test_pushing_onto_text_fails() {
    let mut label = Element::from(Text::new().text("label"));
    assert_eq!(label.push(Rect::new()), Err(SvgError::TextWithChildren));
}

// =============================================================================
// Attribute values
// =============================================================================

#[test]
fn test_rotate_centre_needs_both_coordinates() {
    assert_eq!(
        Transform::try_rotate(30, None, Some(Number::from(5))),
        Err(SvgError::RotateCenterIncomplete)
    );
    assert_eq!(
        Transform::try_rotate(30, Some(Number::from(5)), None),
        Err(SvgError::RotateCenterIncomplete)
    );
    let rotate = Transform::try_rotate(30, Some(Number::from(5)), Some(Number::from(0))).unwrap();
    assert_eq!(rotate.to_string(), "rotate(30 5 0)");
}

#[test]
fn test_begin_list_uses_semicolons() {
    let set = Set::new().attributeName("x").to(10).begin(vec![
        TimingEvent::from(SyncbaseValue::new("a", SyncEdge::Begin).offset(TimeDelta::seconds(1))),
        TimingEvent::from(EventValue::new("click").on("btn")),
    ]);
    assert_eq!(
        set.render(),
        r#"<set to="10" attributeName="x" begin="a.begin+1s;btn.click"/>"#
    );
}

#[test]
fn test_key_points_on_motion() {
    let motion = AnimateMotion::new()
        .keyPoints(vec![0.0, 0.5, 1.0])
        .dur(TimeDelta::seconds(2));
    assert_eq!(
        motion.render(),
        r#"<animateMotion keyPoints="0;0.5;1" dur="2s"/>"#
    );
}

#[test]
fn test_lists_outside_animation_use_spaces() {
    let rect = Rect::new().stroke_dasharray(vec![5, 10]);
    assert_eq!(rect.render(), r#"<rect stroke-dasharray="5 10"/>"#);
}

#[test]
fn test_dash_array_accepts_none() {
    let rect = Rect::new().stroke_dasharray(DashArray::None);
    assert_eq!(rect.render(), r#"<rect stroke-dasharray="none"/>"#);
}

#[test]
fn test_clock_values_from_text() {
    let cases = [
        ("02:30:03", "2:30:03"),
        ("45:00", "0:45:00"),
        ("90min", "1:30:00"),
        ("0.5s", "0.5s"),
        ("  12  ", "12s"),
    ];
    for (input, expected) in cases {
        let clock = parse_clock_value(input).unwrap();
        assert_eq!(clock.to_string(), expected, "input {:?}", input);
    }
    assert!(matches!(
        parse_clock_value("1:2:3"),
        Err(SvgError::InvalidClockValue { .. })
    ));
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_catalog_json_lists_every_tag() {
    let json = catalog_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let tags: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["tag"].as_str().unwrap())
        .collect();
    assert_eq!(tags, Element::TAGS);
    assert_eq!(catalog().len(), tags.len());
    assert!(tags.contains(&"feGaussianBlur"));
    assert!(tags.contains(&"color-profile"));
}
