use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Two-digit 12-hour clock, e.g. `09:05 AM`.
pub fn clock_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%I:%M %p").to_string()
}

pub fn local_clock_label(at: DateTime<Utc>) -> String {
    clock_label(&at.with_timezone(&Local))
}

/// e.g. `Saturday, October 17, 2026`.
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
