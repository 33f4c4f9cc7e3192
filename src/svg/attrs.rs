//! Attribute projection: typed field values to `name="value"` pairs.
//!
//! Field names become attribute names through [`attr_name`]. Values become
//! text through [`ToAttr`], which each attribute value type implements.

use std::ops::Deref;

use chrono::{NaiveDateTime, TimeDelta};
use indexmap::IndexMap;

use super::catalog::Element;
use super::path::PathData;
use super::transform::Transform;
use crate::timing::{
    format_clock_value, format_wallclock, AccessKeyValue, ClockValue, DurationValue, EventValue,
    RepeatCount, RepeatValue, SyncbaseValue, TimeBezierPoint, TimingEvent,
};
use crate::types::{
    DashArray, Dimension, Length, MotionRotate, Number, NumberOptionalNumber, PreserveAspectRatio, Value,
    ViewBoxSpec,
};

/// Ordered string map used for `data-*` and verbatim extra attributes.
pub type AttrMap = IndexMap<String, String>;

/// Attribute names whose lists are `;`-separated on animation elements.
pub const SEMICOLON_ATTRS: [&str; 6] = ["values", "keyTimes", "keySplines", "keyPoints", "begin", "end"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSeparator {
    Space,
    Semicolon,
}

impl ListSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            ListSeparator::Space => " ",
            ListSeparator::Semicolon => ";",
        }
    }
}

/// Turn a field name into its attribute name.
///
/// One trailing `_` is dropped (`class_` → `class`), `__` becomes a namespace
/// colon (`xml__space` → `xml:space`) and the remaining `_` become `-`
/// (`stroke_width` → `stroke-width`).
pub fn attr_name(field: &str) -> String {
    let name = field.strip_suffix('_').unwrap_or(field);
    name.replace("__", ":").replace('_', "-")
}

/// Conversion of an attribute value to its text.
///
/// `sep` only matters for lists: it is the separator chosen for the
/// attribute being projected. Items nested inside a list always use spaces.
pub trait ToAttr {
    fn to_attr(&self, sep: ListSeparator) -> String;
}

macro_rules! display_attr {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToAttr for $t {
                fn to_attr(&self, _sep: ListSeparator) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_attr!(
    str,
    String,
    i32,
    u32,
    i64,
    f64,
    Number,
    Length,
    Dimension,
    DashArray,
    Value,
    NumberOptionalNumber,
    MotionRotate,
    ViewBoxSpec,
    PreserveAspectRatio,
    Transform,
    PathData,
    ClockValue,
    DurationValue,
    RepeatCount,
    TimeBezierPoint,
    SyncbaseValue,
    EventValue,
    RepeatValue,
    AccessKeyValue,
    TimingEvent,
);

impl ToAttr for bool {
    fn to_attr(&self, _sep: ListSeparator) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

impl ToAttr for TimeDelta {
    fn to_attr(&self, _sep: ListSeparator) -> String {
        format_clock_value(*self)
    }
}

impl ToAttr for NaiveDateTime {
    fn to_attr(&self, _sep: ListSeparator) -> String {
        format_wallclock(self)
    }
}

/// An element used as an attribute value renders as its markup.
impl ToAttr for Element {
    fn to_attr(&self, _sep: ListSeparator) -> String {
        self.render()
    }
}

impl<T: ToAttr> ToAttr for [T] {
    fn to_attr(&self, sep: ListSeparator) -> String {
        self.iter()
            .map(|item| item.to_attr(ListSeparator::Space))
            .collect::<Vec<_>>()
            .join(sep.as_str())
    }
}

impl<T: ToAttr> ToAttr for Vec<T> {
    fn to_attr(&self, sep: ListSeparator) -> String {
        self.as_slice().to_attr(sep)
    }
}

impl<T: ToAttr + ?Sized> ToAttr for &T {
    fn to_attr(&self, sep: ListSeparator) -> String {
        (**self).to_attr(sep)
    }
}

/// A list-valued attribute.
///
/// Built from any vector or array whose items convert into `T`, so
/// `vec![0, 50, 0]` works for a `List<Value>`.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T>(pub Vec<T>);

impl<T> List<T> {
    pub fn new() -> Self {
        List(Vec::new())
    }

    pub fn push(&mut self, item: impl Into<T>) {
        self.0.push(item.into());
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List(Vec::new())
    }
}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, U: Into<T>> From<Vec<U>> for List<T> {
    fn from(items: Vec<U>) -> Self {
        List(items.into_iter().map(Into::into).collect())
    }
}

impl<T, U: Into<T>, const N: usize> From<[U; N]> for List<T> {
    fn from(items: [U; N]) -> Self {
        List(items.into_iter().map(Into::into).collect())
    }
}

/// A single class name or other one-item string list.
impl From<&str> for List<String> {
    fn from(item: &str) -> Self {
        List(vec![item.to_string()])
    }
}

impl From<String> for List<String> {
    fn from(item: String) -> Self {
        List(vec![item])
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: ToAttr> ToAttr for List<T> {
    fn to_attr(&self, sep: ListSeparator) -> String {
        self.0.to_attr(sep)
    }
}

/// Collects the attribute pairs of one element, in projection order.
#[derive(Debug)]
pub struct Projection {
    animated: bool,
    pairs: Vec<(String, String)>,
}

impl Projection {
    /// `animated` marks element kinds that include an animation bundle;
    /// only those join [`SEMICOLON_ATTRS`] lists with `;`.
    pub fn new(animated: bool) -> Self {
        Self {
            animated,
            pairs: Vec::new(),
        }
    }

    pub fn separator_for(&self, name: &str) -> ListSeparator {
        if self.animated && SEMICOLON_ATTRS.contains(&name) {
            ListSeparator::Semicolon
        } else {
            ListSeparator::Space
        }
    }

    /// Record a field; absent values produce nothing.
    pub fn push<T: ToAttr + ?Sized>(&mut self, field: &str, value: Option<&T>) {
        if let Some(value) = value {
            let name = attr_name(field);
            let text = value.to_attr(self.separator_for(&name));
            self.pairs.push((name, text));
        }
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::elements::Rect;

    #[test]
    fn test_attr_name_transform() {
        assert_eq!(attr_name("stroke_width"), "stroke-width");
        assert_eq!(attr_name("class_"), "class");
        assert_eq!(attr_name("xml__lang"), "xml:lang");
        assert_eq!(attr_name("viewBox"), "viewBox");
        assert_eq!(attr_name("in_"), "in");
        assert_eq!(attr_name("color_interpolation_filters"), "color-interpolation-filters");
    }

    #[test]
    fn test_attr_name_strips_only_one_underscore() {
        assert_eq!(attr_name("odd__"), "odd-");
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let mut out = Projection::new(false);
        out.push::<String>("id", None);
        out.push("width", Some(&Number::from(10)));
        assert_eq!(out.into_pairs(), vec![("width".to_string(), "10".to_string())]);
    }

    #[test]
    fn test_bool_values() {
        assert_eq!(true.to_attr(ListSeparator::Space), "true");
        assert_eq!(false.to_attr(ListSeparator::Space), "false");
    }

    #[test]
    fn test_list_separator_depends_on_name_and_kind() {
        let values: List<Value> = vec![0, 50, 0].into();

        let mut animated = Projection::new(true);
        animated.push("values", Some(&values));
        animated.push("points", Some(&values));
        assert_eq!(
            animated.into_pairs(),
            vec![
                ("values".to_string(), "0;50;0".to_string()),
                ("points".to_string(), "0 50 0".to_string()),
            ]
        );

        let mut plain = Projection::new(false);
        plain.push("values", Some(&values));
        assert_eq!(plain.into_pairs()[0].1, "0 50 0");
    }

    #[test]
    fn test_nested_lists_use_spaces() {
        let splines: List<TimeBezierPoint> = vec![
            TimeBezierPoint::new(0.5, 0, 0.5, 1),
            TimeBezierPoint::new(0, 0, 1, 1),
        ]
        .into();
        assert_eq!(splines.to_attr(ListSeparator::Semicolon), "0.5 0 0.5 1;0 0 1 1");

        let nested = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(nested.to_attr(ListSeparator::Semicolon), "1 2;3 4");
    }

    #[test]
    fn test_time_values() {
        assert_eq!(TimeDelta::seconds(90).to_attr(ListSeparator::Space), "0:01:30");
    }

    #[test]
    fn test_element_value_renders_markup() {
        let element = Element::from(Rect::new().width(4));
        assert_eq!(element.to_attr(ListSeparator::Space), r#"<rect width="4"/>"#);
    }
}
