use crate::domain::model::{DateFormat, DateInput};
use crate::utils::error::{Result, UtilError};
use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::fmt;

/// Naive layouts `new Date(text)` accepts as local wall time.
const LOCAL_DATE_TIME_LAYOUTS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// 依選擇器名稱取得顯示格式，未知名稱回傳 `None`
pub fn get_date_time_format(selector: &str) -> Option<&'static str> {
    selector.parse::<DateFormat>().ok().map(DateFormat::pattern)
}

/// Result of [`format_date`]: either the caller's own value handed back or
/// the rendered text.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedDate<'a> {
    Unchanged(&'a DateInput),
    Formatted(String),
}

impl FormattedDate<'_> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FormattedDate::Unchanged(_))
    }

    pub fn into_string(self) -> String {
        match self {
            FormattedDate::Unchanged(input) => input.to_string(),
            FormattedDate::Formatted(text) => text,
        }
    }
}

impl fmt::Display for FormattedDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedDate::Unchanged(input) => write!(f, "{}", input),
            FormattedDate::Formatted(text) => f.write_str(text),
        }
    }
}

/// Render `date` with the pattern of `format`.
///
/// Empty text, the epoch `0` and `"N/A"` come back unchanged. With a
/// `timezone` (an IANA name) the date is shown in that zone, otherwise in the
/// local one. Text that is not a recognizable date is an error.
pub fn format_date<'a>(
    date: &'a DateInput,
    format: DateFormat,
    timezone: Option<&str>,
) -> Result<FormattedDate<'a>> {
    if date.is_passthrough() {
        return Ok(FormattedDate::Unchanged(date));
    }

    let instant = to_instant(date).ok_or_else(|| {
        tracing::debug!("Cannot format unrecognized date: {}", date);
        UtilError::invalid_date(date.to_string())
    })?;

    let rendered = match timezone {
        Some(name) => {
            let zone: Tz = name.parse().map_err(|_| UtilError::InvalidTimezone {
                name: name.to_string(),
            })?;
            format_instant(&instant.with_timezone(&zone), format)
        }
        None => format_instant(&instant.with_timezone(&Local), format),
    };

    Ok(FormattedDate::Formatted(rendered))
}

pub fn format_instant<Z>(instant: &DateTime<Z>, format: DateFormat) -> String
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    instant.format(format.chrono_pattern()).to_string()
}

/// Parse `text` written in `format`, filling omitted parts from the current
/// local time.
pub fn parse_date(text: &str, format: DateFormat) -> Result<DateTime<Local>> {
    parse_date_with_reference(text, format, &Local::now())
}

/// 以 `reference` 補齊缺少的欄位：只有時間時取其日期，只有日期時為午夜
pub fn parse_date_with_reference<Z: TimeZone>(
    text: &str,
    format: DateFormat,
    reference: &DateTime<Z>,
) -> Result<DateTime<Z>> {
    let pattern = format.chrono_pattern();

    let parsed = match format {
        DateFormat::Daytime => NaiveDateTime::parse_from_str(text, pattern),
        DateFormat::Day => {
            NaiveDate::parse_from_str(text, pattern).map(|day| day.and_time(NaiveTime::MIN))
        }
        DateFormat::Time => NaiveTime::parse_from_str(text, pattern)
            .map(|time| reference.date_naive().and_time(time)),
    };

    let naive = parsed.map_err(|e| {
        tracing::debug!("'{}' does not match {}: {}", text, format.pattern(), e);
        UtilError::invalid_date(text)
    })?;

    reference
        .timezone()
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| UtilError::invalid_date(text))
}

/// Only an actual instant counts; text and timestamps are never dates
/// themselves, whether or not they would parse.
pub fn is_valid_date(input: &DateInput) -> bool {
    matches!(input, DateInput::Instant(_))
}

/// Coerce a loose date the way `new Date(value)` does.
pub(crate) fn to_instant(input: &DateInput) -> Option<DateTime<Utc>> {
    match input {
        DateInput::Instant(instant) => Some(*instant),
        DateInput::Timestamp(ms) => DateTime::from_timestamp_millis(*ms),
        DateInput::Text(text) => parse_date_string(text),
    }
}

fn parse_date_string(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    // 純日期視為 UTC 午夜
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(day.and_time(NaiveTime::MIN).and_utc());
    }

    for layout in LOCAL_DATE_TIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_get_date_time_format() {
        assert_eq!(get_date_time_format("daytime"), Some("dd.MM.yyyy - HH:mm"));
        assert_eq!(get_date_time_format("day"), Some("dd.MM.yyyy"));
        assert_eq!(get_date_time_format("time"), Some("HH:mm"));
        assert_eq!(get_date_time_format("week"), None);
        assert_eq!(get_date_time_format("Day"), None);
    }

    #[test]
    fn test_format_date_passthrough() {
        let not_available = DateInput::from("N/A");
        let empty = DateInput::from("");
        let epoch = DateInput::Timestamp(0);

        for input in [&not_available, &empty, &epoch] {
            let result = format_date(input, DateFormat::Day, None).unwrap();
            assert_eq!(result, FormattedDate::Unchanged(input));
        }
        assert_eq!(
            format_date(&not_available, DateFormat::Day, None)
                .unwrap()
                .into_string(),
            "N/A"
        );
    }

    #[test]
    fn test_format_date_in_timezone() {
        let input = DateInput::from("2024-03-05T14:07:00Z");

        let in_utc = format_date(&input, DateFormat::Daytime, Some("UTC")).unwrap();
        assert_eq!(in_utc.to_string(), "05.03.2024 - 14:07");

        let in_madrid = format_date(&input, DateFormat::Daytime, Some("Europe/Madrid")).unwrap();
        assert_eq!(in_madrid.to_string(), "05.03.2024 - 15:07");

        let time_only = format_date(&input, DateFormat::Time, Some("UTC")).unwrap();
        assert_eq!(time_only.to_string(), "14:07");
    }

    #[test]
    fn test_format_date_accepts_all_input_kinds() {
        let expected = "05.03.2024 - 14:07";

        let timestamp = DateInput::Timestamp(1_709_647_620_000);
        let instant = DateInput::Instant(utc(2024, 3, 5, 14, 7, 0));
        let offset_text = DateInput::from("2024-03-05T15:07:00+01:00");

        for input in [&timestamp, &instant, &offset_text] {
            let result = format_date(input, DateFormat::Daytime, Some("UTC")).unwrap();
            assert_eq!(result.to_string(), expected);
        }

        let date_only = DateInput::from("2024-03-05");
        let result = format_date(&date_only, DateFormat::Day, Some("UTC")).unwrap();
        assert_eq!(result.to_string(), "05.03.2024");
    }

    #[test]
    fn test_format_date_errors() {
        let garbage = DateInput::from("not a date");
        assert!(matches!(
            format_date(&garbage, DateFormat::Day, Some("UTC")),
            Err(UtilError::InvalidDate { .. })
        ));

        let valid = DateInput::from("2024-03-05");
        assert!(matches!(
            format_date(&valid, DateFormat::Day, Some("Mars/Olympus")),
            Err(UtilError::InvalidTimezone { .. })
        ));
    }

    #[test]
    fn test_parse_date_with_reference() {
        let reference = utc(2024, 3, 5, 8, 15, 42);

        let day = parse_date_with_reference("17.06.2023", DateFormat::Day, &reference).unwrap();
        assert_eq!(day, utc(2023, 6, 17, 0, 0, 0));

        let time = parse_date_with_reference("14:30", DateFormat::Time, &reference).unwrap();
        assert_eq!(time, utc(2024, 3, 5, 14, 30, 0));

        let daytime =
            parse_date_with_reference("01.12.2024 - 09:05", DateFormat::Daytime, &reference)
                .unwrap();
        assert_eq!(daytime, utc(2024, 12, 1, 9, 5, 0));
    }

    #[test]
    fn test_parse_date_mismatch_is_invalid() {
        let reference = utc(2024, 3, 5, 8, 15, 42);

        for (text, format) in [
            ("2024-03-05", DateFormat::Day),
            ("14h30", DateFormat::Time),
            ("05.03.2024", DateFormat::Daytime),
            ("32.01.2024", DateFormat::Day),
        ] {
            assert!(
                matches!(
                    parse_date_with_reference(text, format, &reference),
                    Err(UtilError::InvalidDate { .. })
                ),
                "{} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_round_trip_day_precision_in_utc() {
        let original = utc(2024, 3, 5, 14, 7, 33);
        let input = DateInput::Instant(original);

        let formatted = format_date(&input, DateFormat::Day, Some("UTC"))
            .unwrap()
            .into_string();
        let parsed = parse_date_with_reference(&formatted, DateFormat::Day, &Utc::now()).unwrap();

        assert_eq!(parsed, utc(2024, 3, 5, 0, 0, 0));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date(&DateInput::Instant(utc(2024, 3, 5, 14, 7, 0))));
        assert!(!is_valid_date(&DateInput::from("2024-03-05")));
        assert!(!is_valid_date(&DateInput::from("2024-03-05T14:07")));
        assert!(!is_valid_date(&DateInput::from("yesterday")));
        assert!(!is_valid_date(&DateInput::Timestamp(1_709_647_620_000)));
    }
}
