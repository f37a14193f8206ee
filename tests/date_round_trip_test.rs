use chrono::{Local, NaiveTime, TimeZone, Utc};
use inventhora_utils::{
    format_date, get_banner_message, parse_date, parse_date_with_reference, BannerSettings,
    DateFormat, DateInput, TopBannerMessage,
};

#[test]
fn test_day_round_trip_in_local_time() {
    let original = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 33).unwrap();
    let input = DateInput::Instant(original);

    let formatted = format_date(&input, DateFormat::Day, None)
        .unwrap()
        .into_string();
    let parsed = parse_date(&formatted, DateFormat::Day).unwrap();

    let local_day = original.with_timezone(&Local).date_naive();
    let expected = Local
        .from_local_datetime(&local_day.and_time(NaiveTime::MIN))
        .earliest()
        .unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn test_daytime_round_trip_drops_seconds() {
    let original = Utc.with_ymd_and_hms(2023, 11, 30, 23, 59, 58).unwrap();
    let input = DateInput::Instant(original);

    let formatted = format_date(&input, DateFormat::Daytime, Some("UTC"))
        .unwrap()
        .into_string();
    assert_eq!(formatted, "30.11.2023 - 23:59");

    let parsed = parse_date_with_reference(&formatted, DateFormat::Daytime, &Utc::now()).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 11, 30, 23, 59, 0).unwrap());
}

#[test]
fn test_time_only_takes_todays_date() {
    let parsed = parse_date("08:45", DateFormat::Time).unwrap();
    let today = Local::now().date_naive();

    // 午夜前後執行時日期可能已經換日
    assert!(parsed.date_naive() == today || parsed.date_naive() == today.pred_opt().unwrap());
    assert_eq!(parsed.time(), NaiveTime::from_hms_opt(8, 45, 0).unwrap());
}

#[test]
fn test_banner_settings_from_json() {
    let due = (Utc::now() + chrono::Duration::days(4)).to_rfc3339();
    let settings: BannerSettings =
        serde_json::from_value(serde_json::json!({"type": "trial", "dueDate": due})).unwrap();
    assert_eq!(get_banner_message(&settings), Some(TopBannerMessage::TrialEnd));

    let due = (Utc::now() + chrono::Duration::days(10)).timestamp_millis();
    let settings: BannerSettings =
        serde_json::from_value(serde_json::json!({"type": "trial", "dueDate": due})).unwrap();
    assert_eq!(settings.due_date, Some(DateInput::Timestamp(due)));
    assert_eq!(get_banner_message(&settings), None);
}
