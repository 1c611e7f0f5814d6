use super::{
    models::{Activity, WeekData},
    types::{Bool, Date, DateKey, DayOfWeek},
};
use crate::core::cli::CliPaths;
use crate::errors::Error;
use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

// ---------- types.rs ----------
#[test]
fn date_key_encodes_yyyymmdd() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    let key = DateKey::from_date(date);
    assert_eq!(key, DateKey(20240603));
    assert_eq!(key.to_string(), "20240603");
    assert_eq!(key.to_date(), Some(date));
}

#[test]
fn date_key_rejects_impossible_days() {
    assert_eq!(DateKey(20240230).to_date(), None);
    assert_eq!(DateKey(20241301).to_date(), None);
}

#[test]
fn date_key_deserializes_from_plain_integer() {
    let key: DateKey = serde_json::from_str("20240609").unwrap();
    assert_eq!(key, DateKey(20240609));
}

#[test]
fn day_of_week_indexes_from_monday() {
    assert_eq!(DayOfWeek::Mon.index(), 0);
    assert_eq!(DayOfWeek::Sun.index(), 6);
    assert_eq!(DayOfWeek::from_index(2), Some(DayOfWeek::Wed));
    assert_eq!(DayOfWeek::from_index(7), None);
    assert_eq!(DayOfWeek::Sat.abbrev(), "토");
    assert_eq!(DayOfWeek::Thu.to_string(), "목요일");
}

#[test]
fn date_accepts_multiple_formats_and_defaults_year() {
    let d = Date::try_from_str("2025-01-01").unwrap();
    assert_eq!(d.to_string(), "2025-01-01");

    let slash = Date::try_from_str("2025/01/02").unwrap();
    assert_eq!(slash.0, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());

    let compact = Date::try_from_str("20250103").unwrap();
    assert_eq!(compact.0, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());

    let dotted = Date::try_from_str("2024.06.05").unwrap();
    assert_eq!(dotted.0, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());

    let short = Date::try_from_str("12-31").unwrap();
    assert_eq!(short.0.month(), 12);
    assert_eq!(short.0.day(), 31);
}

#[test]
fn date_reports_usage_on_garbage() {
    let err = Date::try_from_str("someday").unwrap_err();
    match err {
        Error::Parse(msg) => assert!(msg.starts_with("Invalid date format: 'someday'.")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn bool_parses_text_values() {
    assert_eq!(Bool::try_from_str("True").unwrap(), Bool(true));
    assert_eq!(Bool::try_from_str("false").unwrap(), Bool(false));
    assert!(Bool::try_from_str("yes").is_err());
    assert_eq!(Bool(false).to_string(), "False");
}

// ---------- models.rs ----------
#[test]
fn activity_reads_korean_columns_and_keeps_extra_fields() {
    let json = r#"{
        "id": 7,
        "날짜": 20240603,
        "시작시간": "9:00",
        "종료시간": "10:00",
        "활동명": "수학",
        "메모": "교재 지참"
    }"#;
    let activity: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(activity.date, DateKey(20240603));
    assert_eq!(activity.start_time(), Some("9:00"));
    assert_eq!(activity.end_time(), "10:00");
    assert_eq!(activity.name, "수학");
    assert_eq!(activity.extra.get("id"), Some(&serde_json::json!(7)));
    assert_eq!(activity.extra.get("메모"), Some(&serde_json::json!("교재 지참")));

    let back = serde_json::to_value(&activity).unwrap();
    assert_eq!(back["메모"], "교재 지참");
    assert_eq!(back["활동명"], "수학");
}

#[test]
fn activity_without_start_reports_none() {
    let json = r#"{ "날짜": 20240603, "활동명": "자유시간" }"#;
    let activity: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(activity.start_time(), None);
    assert_eq!(activity.end_time(), "");

    let mut blank = Activity::new(DateKey(20240603), "", "10:00", "x");
    assert_eq!(blank.start_time(), None);
    blank.start = None;
    assert_eq!(blank.start_time(), None);
}

#[test]
fn week_data_defaults_missing_days_to_empty() {
    let keys = [DateKey(20240603), DateKey(20240604)];
    let mut week = WeekData::empty_for(&keys);
    assert_eq!(week.len(), 2);
    assert!(!week.has_any_data());
    assert!(week.day(DateKey(20240610)).is_empty());

    week.insert(
        keys[1],
        vec![Activity::new(keys[1], "9:00", "10:00", "수학")],
    );
    assert!(week.has_any_data());
    assert_eq!(week.total_activities(), 1);
    assert_eq!(week.day(keys[1])[0].name, "수학");
}

// ---------- cli.rs ----------
#[test]
fn cli_paths_parse_flags_and_defaults() {
    let args = vec![
        "--config".to_string(),
        "cfg.json".to_string(),
        "--exports".to_string(),
        "out".to_string(),
    ];
    let paths = CliPaths::from_args(args.into_iter()).unwrap();
    assert_eq!(paths.config_path, PathBuf::from("cfg.json"));
    assert_eq!(paths.logs_dir, PathBuf::from("logs"));
    assert_eq!(paths.exports_dir, PathBuf::from("out"));
}

#[test]
fn cli_paths_reject_unknown_and_dangling_flags() {
    let err = CliPaths::from_args(vec!["--bogus".to_string()].into_iter()).unwrap_err();
    assert_eq!(err, "Unknown argument: --bogus");

    let err = CliPaths::from_args(vec!["--logs".to_string()].into_iter()).unwrap_err();
    assert_eq!(err, "Missing value for --logs");
}
