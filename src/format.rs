//! Date helpers shared by the store and the views.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::model::Language;

/// Current time as an RFC 3339 UTC timestamp with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalize a user-entered date to `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// Accepts a calendar date (`2021-03-04`) or any RFC 3339 timestamp.
/// Blank input yields `None`; unrecognized input is kept as entered.
pub fn normalize_date(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Some(date) = parse_date(input) {
        return Some(to_timestamp(date));
    }
    Some(input.to_string())
}

/// Localized short date for display. Unparseable values are shown raw.
pub fn format_date(timestamp: &str, language: Language) -> String {
    let Some(date) = parse_date(timestamp) else {
        return timestamp.to_string();
    };
    match language {
        Language::En => date.format("%-m/%-d/%Y").to_string(),
        Language::Tr => date.format("%d.%m.%Y").to_string(),
    }
}

/// The calendar-date part of a stored timestamp, as a date input field
/// shows it.
pub fn date_input_value(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn to_timestamp(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| date.to_string())
}
