//! SVG/SMIL timing values: clock values, offsets and event references.
//!
//! Durations are `chrono::TimeDelta`s and format through the shortest-form
//! chooser in [`format_clock_value`]. [`ClockValue`] is the structured
//! `(hours, minutes, seconds)` form that the clock grammar parses into.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta, Timelike};

use crate::error::{Result, SvgError};
use crate::keywords::SyncEdge;
use crate::parser::parse_clock_value;
use crate::types::{from_number, Number};

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Longest clock value whose microsecond count fits an `i64`.
pub const MAX_CLOCK_SECONDS: u64 = (i64::MAX / MICROS_PER_SECOND) as u64;

/// Format a duration in the shortest clock-value form.
///
/// Under a minute this is a timecount with an explicit `s` unit (`0.5s`,
/// `-10s`). From a minute up it is a full clock value (`0:01:10`,
/// `240:00:00`). Sub-second precision is kept to the microsecond.
pub fn format_clock_value(duration: TimeDelta) -> String {
    let negative = duration < TimeDelta::zero();
    let magnitude = if negative { -duration } else { duration };
    let sign = if negative { "-" } else { "" };

    let whole = magnitude.num_seconds();
    let micros = i64::from(magnitude.subsec_nanos()) / 1_000;
    let fraction = if micros == 0 {
        String::new()
    } else {
        format!(".{:06}", micros).trim_end_matches('0').to_string()
    };

    if whole < 60 {
        return format!("{}{}{}s", sign, whole, fraction);
    }
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let seconds = whole % 60;
    format!("{}{}:{:02}:{:02}{}", sign, hours, minutes, seconds, fraction)
}

/// Format a signed offset. Unlike a plain clock value it always carries a sign.
pub fn format_offset(offset: TimeDelta) -> String {
    let text = format_clock_value(offset);
    if text.starts_with('-') {
        text
    } else {
        format!("+{}", text)
    }
}

/// `wallclock(2025-07-09 00:00:00)`; microseconds appear only when non-zero.
pub fn format_wallclock(at: &NaiveDateTime) -> String {
    let micros = at.nanosecond() / 1_000;
    if micros == 0 {
        format!("wallclock({})", at.format("%Y-%m-%d %H:%M:%S"))
    } else {
        format!("wallclock({}.{:06})", at.format("%Y-%m-%d %H:%M:%S"), micros)
    }
}

fn write_offset(f: &mut fmt::Formatter<'_>, offset: &Option<TimeDelta>) -> fmt::Result {
    match offset {
        Some(offset) => f.write_str(&format_offset(*offset)),
        None => Ok(()),
    }
}

// ============================================================================
// Clock values
// ============================================================================

/// A non-negative clock value with `minutes < 60` and a total of at most
/// [`MAX_CLOCK_SECONDS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockValue {
    hours: u64,
    minutes: u64,
    seconds: f64,
}

impl ClockValue {
    pub fn new(hours: u64, minutes: u64, seconds: f64) -> Result<Self> {
        if minutes >= 60 {
            return Err(SvgError::ClockOutOfRange {
                field: "minutes",
                value: minutes as f64,
            });
        }
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SvgError::ClockOutOfRange {
                field: "seconds",
                value: seconds,
            });
        }
        let whole = hours
            .checked_mul(3600)
            .and_then(|s| s.checked_add(minutes * 60))
            .filter(|s| *s <= MAX_CLOCK_SECONDS)
            .ok_or(SvgError::ClockOutOfRange {
                field: "hours",
                value: hours as f64,
            })?;
        if whole as f64 + seconds > MAX_CLOCK_SECONDS as f64 {
            return Err(SvgError::ClockOutOfRange {
                field: "seconds",
                value: seconds,
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Build from parts that may overflow, carrying seconds into minutes and
    /// minutes into hours.
    pub(crate) fn normalized(hours: u64, minutes: u64, seconds: f64) -> Result<Self> {
        if !seconds.is_finite() || seconds < 0.0 || seconds > MAX_CLOCK_SECONDS as f64 {
            return Err(SvgError::ClockOutOfRange {
                field: "seconds",
                value: seconds,
            });
        }
        let carry = (seconds / 60.0).floor();
        let seconds = seconds - carry * 60.0;
        let too_long = || SvgError::ClockOutOfRange {
            field: "minutes",
            value: minutes as f64 + carry,
        };
        let minutes = minutes.checked_add(carry as u64).ok_or_else(too_long)?;
        let hours = hours.checked_add(minutes / 60).ok_or_else(too_long)?;
        Self::new(hours, minutes % 60, seconds)
    }

    pub(crate) fn from_seconds(total: f64) -> Result<Self> {
        Self::normalized(0, 0, total)
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn total_seconds(&self) -> f64 {
        self.hours as f64 * 3600.0 + self.minutes as f64 * 60.0 + self.seconds
    }

    pub fn to_duration(&self) -> TimeDelta {
        // Construction bounds the total, so none of these saturate.
        let whole = (self.hours * 3600 + self.minutes * 60) as i64;
        let micros = (self.seconds * MICROS_PER_SECOND as f64).round() as i64;
        let total = whole.saturating_mul(MICROS_PER_SECOND).saturating_add(micros);
        TimeDelta::microseconds(total)
    }
}

impl FromStr for ClockValue {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self> {
        parse_clock_value(s)
    }
}

impl fmt::Display for ClockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock_value(self.to_duration()))
    }
}

/// `dur` and `repeatDur`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationValue {
    Clock(TimeDelta),
    Media,
    Indefinite,
}

impl From<TimeDelta> for DurationValue {
    fn from(d: TimeDelta) -> Self {
        DurationValue::Clock(d)
    }
}

impl From<ClockValue> for DurationValue {
    fn from(c: ClockValue) -> Self {
        DurationValue::Clock(c.to_duration())
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationValue::Clock(d) => f.write_str(&format_clock_value(*d)),
            DurationValue::Media => f.write_str("media"),
            DurationValue::Indefinite => f.write_str("indefinite"),
        }
    }
}

/// `repeatCount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepeatCount {
    Count(Number),
    Indefinite,
}

from_number!(RepeatCount::Count);

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatCount::Count(n) => n.fmt(f),
            RepeatCount::Indefinite => f.write_str("indefinite"),
        }
    }
}

/// One `keySplines` entry: the two control points of a cubic Bézier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBezierPoint {
    pub x1: Number,
    pub y1: Number,
    pub x2: Number,
    pub y2: Number,
}

impl TimeBezierPoint {
    pub fn new(
        x1: impl Into<Number>,
        y1: impl Into<Number>,
        x2: impl Into<Number>,
        y2: impl Into<Number>,
    ) -> Self {
        Self {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
        }
    }
}

impl fmt::Display for TimeBezierPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

// ============================================================================
// Event references
// ============================================================================

/// `<id>.begin` / `<id>.end`, optionally offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncbaseValue {
    pub id: String,
    pub edge: SyncEdge,
    pub offset: Option<TimeDelta>,
}

impl SyncbaseValue {
    pub fn new(id: impl Into<String>, edge: SyncEdge) -> Self {
        Self {
            id: id.into(),
            edge,
            offset: None,
        }
    }

    pub fn offset(mut self, offset: TimeDelta) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for SyncbaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.edge)?;
        write_offset(f, &self.offset)
    }
}

/// A DOM event, `click` or `button.click`, optionally offset.
#[derive(Debug, Clone, PartialEq)]
pub struct EventValue {
    pub element_id: Option<String>,
    pub event: String,
    pub offset: Option<TimeDelta>,
}

impl EventValue {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            element_id: None,
            event: event.into(),
            offset: None,
        }
    }

    pub fn on(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn offset(mut self, offset: TimeDelta) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.element_id {
            write!(f, "{}.", id)?;
        }
        f.write_str(&self.event)?;
        write_offset(f, &self.offset)
    }
}

/// `repeat(n)` of the current or a named element.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatValue {
    pub element_id: Option<String>,
    pub iteration: u32,
    pub offset: Option<TimeDelta>,
}

impl RepeatValue {
    pub fn new(iteration: u32) -> Self {
        Self {
            element_id: None,
            iteration,
            offset: None,
        }
    }

    pub fn on(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn offset(mut self, offset: TimeDelta) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for RepeatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.element_id {
            write!(f, "{}.", id)?;
        }
        write!(f, "repeat({})", self.iteration)?;
        write_offset(f, &self.offset)
    }
}

/// `accessKey(a)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessKeyValue {
    pub key: char,
    pub offset: Option<TimeDelta>,
}

impl AccessKeyValue {
    pub fn new(key: char) -> Self {
        Self { key, offset: None }
    }

    pub fn offset(mut self, offset: TimeDelta) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for AccessKeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "accessKey({})", self.key)?;
        write_offset(f, &self.offset)
    }
}

/// One entry of a `begin` or `end` list.
#[derive(Debug, Clone, PartialEq)]
pub enum TimingEvent {
    Offset(TimeDelta),
    Syncbase(SyncbaseValue),
    Event(EventValue),
    Repeat(RepeatValue),
    AccessKey(AccessKeyValue),
    WallClock(NaiveDateTime),
    Indefinite,
}

impl fmt::Display for TimingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingEvent::Offset(d) => f.write_str(&format_clock_value(*d)),
            TimingEvent::Syncbase(v) => v.fmt(f),
            TimingEvent::Event(v) => v.fmt(f),
            TimingEvent::Repeat(v) => v.fmt(f),
            TimingEvent::AccessKey(v) => v.fmt(f),
            TimingEvent::WallClock(at) => f.write_str(&format_wallclock(at)),
            TimingEvent::Indefinite => f.write_str("indefinite"),
        }
    }
}

impl From<TimeDelta> for TimingEvent {
    fn from(d: TimeDelta) -> Self {
        TimingEvent::Offset(d)
    }
}

impl From<NaiveDateTime> for TimingEvent {
    fn from(at: NaiveDateTime) -> Self {
        TimingEvent::WallClock(at)
    }
}

impl From<SyncbaseValue> for TimingEvent {
    fn from(v: SyncbaseValue) -> Self {
        TimingEvent::Syncbase(v)
    }
}

impl From<EventValue> for TimingEvent {
    fn from(v: EventValue) -> Self {
        TimingEvent::Event(v)
    }
}

impl From<RepeatValue> for TimingEvent {
    fn from(v: RepeatValue) -> Self {
        TimingEvent::Repeat(v)
    }
}

impl From<AccessKeyValue> for TimingEvent {
    fn from(v: AccessKeyValue) -> Self {
        TimingEvent::AccessKey(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn secs(s: f64) -> TimeDelta {
        TimeDelta::microseconds((s * 1e6).round() as i64)
    }

    #[test]
    fn test_format_clock_value_timecount() {
        let cases = [
            (TimeDelta::zero(), "0s"),
            (TimeDelta::seconds(1), "1s"),
            (TimeDelta::seconds(-1), "-1s"),
            (TimeDelta::seconds(10), "10s"),
            (TimeDelta::seconds(-10), "-10s"),
            (secs(0.5), "0.5s"),
            (secs(-0.5), "-0.5s"),
            (secs(0.002), "0.002s"),
            (secs(-0.002), "-0.002s"),
            (TimeDelta::milliseconds(1), "0.001s"),
            (TimeDelta::milliseconds(-1), "-0.001s"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_clock_value(input), expected, "{:?}", input);
        }
    }

    #[test]
    fn test_format_clock_value_full() {
        let cases = [
            (TimeDelta::seconds(70), "0:01:10"),
            (TimeDelta::seconds(605), "0:10:05"),
            (TimeDelta::days(10), "240:00:00"),
            (
                TimeDelta::hours(5) + TimeDelta::minutes(7) + secs(12.2),
                "5:07:12.2",
            ),
            (TimeDelta::hours(-1), "-1:00:00"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_clock_value(input), expected, "{:?}", input);
        }
    }

    #[test]
    fn test_format_offset_always_signed() {
        assert_eq!(format_offset(TimeDelta::seconds(5)), "+5s");
        assert_eq!(format_offset(TimeDelta::seconds(-5)), "-5s");
        assert_eq!(format_offset(TimeDelta::zero()), "+0s");
        assert_eq!(format_offset(TimeDelta::minutes(2)), "+0:02:00");
    }

    #[test]
    fn test_format_wallclock() {
        let midnight = NaiveDate::from_ymd_opt(2025, 7, 9)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_wallclock(&midnight), "wallclock(2025-07-09 00:00:00)");

        let precise = NaiveDate::from_ymd_opt(1999, 1, 1)
            .unwrap()
            .and_hms_micro_opt(13, 37, 12, 4000)
            .unwrap();
        assert_eq!(
            format_wallclock(&precise),
            "wallclock(1999-01-01 13:37:12.004000)"
        );
    }

    #[test]
    fn test_clock_value_validation() {
        assert!(ClockValue::new(1, 59, 59.5).is_ok());
        assert_eq!(
            ClockValue::new(0, 60, 0.0).unwrap_err(),
            SvgError::ClockOutOfRange {
                field: "minutes",
                value: 60.0
            }
        );
        assert!(ClockValue::new(0, 0, -1.0).is_err());
        assert!(ClockValue::new(0, 0, f64::NAN).is_err());
    }

    #[test]
    fn test_clock_value_total_is_bounded() {
        let max_hours = MAX_CLOCK_SECONDS / 3600;
        let longest = ClockValue::new(max_hours, 0, 0.0).unwrap();
        assert_eq!(longest.to_duration().num_seconds(), (max_hours * 3600) as i64);

        assert!(matches!(
            ClockValue::new(max_hours + 1, 0, 0.0),
            Err(SvgError::ClockOutOfRange { field: "hours", .. })
        ));
        assert!(matches!(
            ClockValue::new(u64::MAX, 59, 0.0),
            Err(SvgError::ClockOutOfRange { .. })
        ));
        assert!(matches!(
            ClockValue::new(max_hours, 59, 0.0),
            Err(SvgError::ClockOutOfRange { .. })
        ));
        assert!(ClockValue::normalized(0, 0, 1e300).is_err());
        assert!(ClockValue::normalized(u64::MAX, 0, 3600.0).is_err());
    }

    #[test]
    fn test_clock_value_normalizes_overflow() {
        let clock = ClockValue::normalized(1, 59, 75.0).unwrap();
        assert_eq!(clock.hours(), 2);
        assert_eq!(clock.minutes(), 0);
        assert_eq!(clock.seconds(), 15.0);
        assert_eq!(clock.to_string(), "2:00:15");
    }

    #[test]
    fn test_clock_value_display() {
        assert_eq!(ClockValue::new(0, 0, 2.5).unwrap().to_string(), "2.5s");
        assert_eq!(ClockValue::new(5, 7, 12.2).unwrap().to_string(), "5:07:12.2");
    }

    #[test]
    fn test_timing_references() {
        let begin = SyncbaseValue::new("intro", SyncEdge::End).offset(TimeDelta::seconds(2));
        assert_eq!(begin.to_string(), "intro.end+2s");

        let click = EventValue::new("click").on("button");
        assert_eq!(click.to_string(), "button.click");
        let click = EventValue::new("click").offset(secs(-0.5));
        assert_eq!(click.to_string(), "click-0.5s");

        assert_eq!(RepeatValue::new(2).on("spin").to_string(), "spin.repeat(2)");
        assert_eq!(
            AccessKeyValue::new('a').offset(TimeDelta::seconds(1)).to_string(),
            "accessKey(a)+1s"
        );
        assert_eq!(TimingEvent::from(TimeDelta::seconds(3)).to_string(), "3s");
        assert_eq!(TimingEvent::Indefinite.to_string(), "indefinite");
    }

    #[test]
    fn test_duration_and_repeat_values() {
        assert_eq!(DurationValue::from(TimeDelta::seconds(10)).to_string(), "10s");
        assert_eq!(DurationValue::Media.to_string(), "media");
        assert_eq!(RepeatCount::from(2.5).to_string(), "2.5");
        assert_eq!(RepeatCount::Indefinite.to_string(), "indefinite");
        assert_eq!(TimeBezierPoint::new(0.5, 0, 0.5, 1).to_string(), "0.5 0 0.5 1");
    }
}
