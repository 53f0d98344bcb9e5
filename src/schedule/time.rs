use std::sync::OnceLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use crate::error::TimeError;

pub const DEFAULT_TIME: &str = "00:00:00";
const CLOCK_FORMAT: &str = "%H:%M:%S";

fn period_time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<period>\S+)\s+(?P<hour>\d{1,2}):(?P<minute>\d{1,2}):(?P<second>\d{1,2})$")
            .expect("period time pattern compiles")
    })
}

/// Strictly parse a 12-hour `"AM 07:05:09"` / `"PM 03:00:00"` value.
///
/// The period token is case-insensitive. Hours run 0..=12; `PM` adds 12 unless
/// the hour already is 12, `AM 12` maps to midnight.
pub fn parse_period_time(raw: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = raw.trim();
    if !trimmed.contains(char::is_whitespace) {
        return Err(TimeError::MissingPeriod(raw.to_string()));
    }

    let caps = period_time_pattern()
        .captures(trimmed)
        .ok_or_else(|| TimeError::MalformedClock(raw.to_string()))?;

    let is_pm = match caps["period"].to_ascii_uppercase().as_str() {
        "AM" => false,
        "PM" => true,
        _ => return Err(TimeError::UnknownPeriod(raw.to_string())),
    };

    let field = |name: &str| -> Result<u32, TimeError> {
        caps[name]
            .parse::<u32>()
            .map_err(|_| TimeError::MalformedClock(raw.to_string()))
    };
    let hour = field("hour")?;
    let minute = field("minute")?;
    let second = field("second")?;

    if hour > 12 {
        return Err(TimeError::MalformedClock(raw.to_string()));
    }

    let hour = match (is_pm, hour) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| TimeError::MalformedClock(raw.to_string()))
}

/// Convert a persisted 12-hour time to the editor's 24-hour `HH:MM:SS`.
///
/// Missing, blank, or malformed input yields `"00:00:00"`.
pub fn normalize_time(raw: Option<&str>) -> String {
    let value = match raw.map(str::trim) {
        None | Some("") => return DEFAULT_TIME.to_string(),
        Some(value) => value,
    };

    match parse_period_time(value) {
        Ok(time) => format_clock(time),
        Err(err) => {
            log::warn!("{}, using {}", err, DEFAULT_TIME);
            DEFAULT_TIME.to_string()
        }
    }
}

/// Parse a 24-hour `HH:MM:SS` value as the editor stores it.
pub fn parse_clock(clock: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(clock.trim(), CLOCK_FORMAT)
        .map_err(|_| TimeError::MalformedClock(clock.to_string()))
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Inverse of [`normalize_time`]: `"15:00:00"` becomes `"PM 03:00:00"`.
pub fn to_period_time(clock: &str) -> Result<String, TimeError> {
    let time = parse_clock(clock)?;
    let (is_pm, hour) = time.hour12();
    Ok(format!(
        "{} {:02}:{:02}:{:02}",
        if is_pm { "PM" } else { "AM" },
        hour,
        time.minute(),
        time.second()
    ))
}
