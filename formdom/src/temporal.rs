//! Parsing of number and date/time input values.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::Regex;

use crate::types::InputType;

/// HTML "valid floating-point number": no leading `+`, no trailing `.`,
/// no `inf`/`NaN` spellings.
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][-+]?[0-9]+)?$")
        .expect("float grammar is a valid regex")
});

static WEEK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4,})-W([0-9]{2})$").expect("week grammar is a valid regex")
});

static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4,})-([0-9]{2})$").expect("month grammar is a valid regex")
});

/// Parse a valid floating-point number.
pub fn parse_float(s: &str) -> Option<f64> {
    if !FLOAT_RE.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a value of a date/time input type into a comparable instant.
///
/// `time` values land on the epoch date; `month` and `week` on their first day.
pub fn parse_temporal(ty: InputType, s: &str) -> Option<NaiveDateTime> {
    match ty {
        InputType::Date => parse_date(s).map(at_midnight),
        InputType::Time => parse_time(s).map(|t| epoch().and_time(t)),
        InputType::DatetimeLocal => parse_datetime_local(s),
        InputType::Month => parse_month(s).map(at_midnight),
        InputType::Week => parse_week(s).map(at_midnight),
        _ => None,
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    // Exactly YYYY-MM-DD; chrono alone would accept unpadded fields.
    let bytes = s.as_bytes();
    if bytes.len() < 10 || bytes[bytes.len() - 3] != b'-' || bytes[bytes.len() - 6] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.len() < 5 || s.as_bytes()[2] != b':' {
        return None;
    }
    ["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

fn parse_datetime_local(s: &str) -> Option<NaiveDateTime> {
    let (date, time) = s.split_once(['T', ' '])?;
    Some(parse_date(date)?.and_time(parse_time(time)?))
}

fn parse_month(s: &str) -> Option<NaiveDate> {
    let caps = MONTH_RE.captures(s)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn parse_week(s: &str) -> Option<NaiveDate> {
    let caps = WEEK_RE.captures(s)?;
    let year = caps[1].parse().ok()?;
    let week = caps[2].parse().ok()?;
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
}

fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}
