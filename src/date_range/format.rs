//! Display formatting and parsing of dates and ranges

use chrono::{Datelike, NaiveDate};

use super::range::DateRange;

/// Default pattern used by the picker's text field
pub const DEFAULT_FORMAT: &str = "MM/dd/yyyy";

/// Separator between the two ends of a displayed range
pub const RANGE_SEPARATOR: &str = " - ";

/// Tokens understood by [`format_date`], in substitution order
pub const FORMAT_TOKENS: [&str; 6] = ["MM", "dd", "yyyy", "M", "d", "yy"];

enum Segment {
    Pattern(String),
    Filled(String),
}

/// Format `date` with a pattern built from `MM`, `dd`, `yyyy`, `M`, `d` and `yy`.
///
/// Each token replaces its first occurrence only, longest tokens first. Text
/// produced by an earlier substitution is never scanned again, so `yyyy` can not
/// be rewritten by the later `yy`. Patterns repeating a token keep the later
/// copies verbatim.
#[must_use]
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let year = date.year().to_string();
    let short_year = year[year.len().saturating_sub(2)..].to_string();
    let values = [
        format!("{:02}", date.month()),
        format!("{:02}", date.day()),
        year,
        date.month().to_string(),
        date.day().to_string(),
        short_year,
    ];

    let mut segments = vec![Segment::Pattern(pattern.to_string())];
    for (token, value) in FORMAT_TOKENS.iter().zip(values) {
        let hit = segments.iter().enumerate().find_map(|(index, segment)| match segment {
            Segment::Pattern(text) => text.find(token).map(|at| (index, at)),
            Segment::Filled(_) => None,
        });
        let Some((index, at)) = hit else {
            continue;
        };
        let Segment::Pattern(text) = segments.remove(index) else {
            continue;
        };
        let (before, rest) = text.split_at(at);
        let after = &rest[token.len()..];
        let mut replacement = Vec::with_capacity(3);
        if !before.is_empty() {
            replacement.push(Segment::Pattern(before.to_string()));
        }
        replacement.push(Segment::Filled(value));
        if !after.is_empty() {
            replacement.push(Segment::Pattern(after.to_string()));
        }
        segments.splice(index..index, replacement);
    }

    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Pattern(text) | Segment::Filled(text) => text,
        })
        .collect()
}

/// Whether a pattern contains at least one date token
#[must_use]
pub fn has_date_token(pattern: &str) -> bool {
    FORMAT_TOKENS.iter().any(|token| pattern.contains(token))
}

/// Text shown in the picker's field.
///
/// A half-picked range keeps the separator on the missing side so the field
/// reads as a selection in progress.
#[must_use]
pub fn format_display_value(value: &DateRange, pattern: &str) -> String {
    match (value.start, value.end) {
        (Some(start), Some(end)) => {
            format!("{}{RANGE_SEPARATOR}{}", format_date(start, pattern), format_date(end, pattern))
        }
        (Some(start), None) => format!("{}{RANGE_SEPARATOR}", format_date(start, pattern)),
        (None, Some(end)) => format!("{RANGE_SEPARATOR}{}", format_date(end, pattern)),
        (None, None) => String::new(),
    }
}

#[derive(Clone, Copy)]
enum FieldOrder {
    MonthDayYear,
    YearMonthDay,
}

/// Accepted free-text layouts, tried in order: MM/dd/yyyy, yyyy-MM-dd, MM-dd-yyyy
const INPUT_LAYOUTS: [(char, FieldOrder); 3] = [
    ('/', FieldOrder::MonthDayYear),
    ('-', FieldOrder::YearMonthDay),
    ('-', FieldOrder::MonthDayYear),
];

fn numeric_field(text: &str, min_width: usize, max_width: usize) -> Option<u32> {
    if text.len() < min_width || text.len() > max_width || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_layout(text: &str, separator: char, order: FieldOrder) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split(separator).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };
    let (year, month, day) = match order {
        FieldOrder::MonthDayYear => (
            numeric_field(third, 4, 4)?,
            numeric_field(first, 1, 2)?,
            numeric_field(second, 1, 2)?,
        ),
        FieldOrder::YearMonthDay => (
            numeric_field(first, 4, 4)?,
            numeric_field(second, 1, 2)?,
            numeric_field(third, 1, 2)?,
        ),
    };
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Parse user text into a date, `None` when no layout matches or the date does not exist
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    INPUT_LAYOUTS
        .iter()
        .find_map(|&(separator, order)| parse_layout(text, separator, order))
}

/// Inverse of [`format_display_value`] for the free-text field.
///
/// Returns `None` unless every non-blank side parses.
#[must_use]
pub fn parse_display_value(text: &str) -> Option<DateRange> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(DateRange::EMPTY);
    }
    let (left, right) = if let Some((left, right)) = text.split_once(RANGE_SEPARATOR) {
        (left.trim(), right.trim())
    } else if let Some(left) = trimmed.strip_suffix('-') {
        (left.trim(), "")
    } else if let Some(right) = trimmed.strip_prefix('-') {
        ("", right.trim())
    } else {
        (trimmed, "")
    };
    let side = |part: &str| -> Option<Option<NaiveDate>> {
        if part.is_empty() {
            Some(None)
        } else {
            parse_date(part).map(Some)
        }
    };
    Some(DateRange::new(side(left)?, side(right)?))
}
