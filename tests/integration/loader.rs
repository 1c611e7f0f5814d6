use std::sync::Arc;

use chrono::NaiveDate;
use timetable::calendar::WeekView;
use timetable::core::types::DateKey;
use timetable::loader::WeekLoader;
use timetable::loader::source::{ActivitySource, JsonFileSource};
use timetable::logging::Logger;

use crate::common::{build_context, sample_dir, write_data};

fn june_week() -> WeekView {
    WeekView::containing(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap())
}

fn loader_for(source: JsonFileSource, logger: &Logger) -> WeekLoader {
    WeekLoader::new(Arc::new(source), logger.clone())
}

#[tokio::test]
async fn batch_and_per_day_loads_agree() {
    let dir = sample_dir("loader-agree", true);
    let ctx = build_context(&dir);
    let keys = june_week().keys();
    let logger = Logger::capturing();

    let batch = loader_for(ctx.activity_source().unwrap(), &logger)
        .load(&keys)
        .await;
    let per_day = loader_for(ctx.activity_source().unwrap().with_batch(false), &logger)
        .load(&keys)
        .await;

    assert_eq!(batch, per_day);
    assert_eq!(batch.len(), 7);
    assert_eq!(batch.total_activities(), 5);
    let monday: Vec<&str> = batch
        .day(DateKey(20240603))
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(monday, vec!["수학", "영어", "피아노"]);
    let wednesday = batch.day(DateKey(20240605));
    assert_eq!(wednesday.last().map(|a| a.name.as_str()), Some("시작 없음"));
}

#[tokio::test]
async fn unknown_columns_survive_loading() {
    let dir = sample_dir("loader-extra", true);
    let ctx = build_context(&dir);
    let source = ctx.activity_source().unwrap();

    let rows = source.fetch_day(DateKey(20240611)).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].extra.get("장소").and_then(|v| v.as_str()),
        Some("체육관")
    );
}

#[tokio::test]
async fn malformed_file_degrades_to_empty_week() {
    let dir = sample_dir("loader-bad", true);
    write_data(&dir, "{ not json");
    let ctx = build_context(&dir);
    let keys = june_week().keys();
    let logger = Logger::capturing();

    let week = loader_for(ctx.activity_source().unwrap(), &logger)
        .load(&keys)
        .await;

    assert_eq!(week.len(), 7);
    assert!(!week.has_any_data());
    assert!(
        logger
            .captured()
            .iter()
            .any(|l| l.contains("Week fetch failed"))
    );
}

#[tokio::test]
async fn per_day_failures_are_logged_per_key() {
    let dir = sample_dir("loader-bad-days", false);
    write_data(&dir, r#"{ "rows": [] }"#);
    let ctx = build_context(&dir);
    let keys = june_week().keys();
    let logger = Logger::capturing();

    let week = loader_for(ctx.activity_source().unwrap(), &logger)
        .load(&keys)
        .await;

    assert!(!week.has_any_data());
    let lines = logger.captured();
    assert!(lines.iter().any(|l| l.contains("falling back to per-day")));
    let day_failures = lines
        .iter()
        .filter(|l| l.contains("Day fetch failed") && l.contains("JSON array"))
        .count();
    assert_eq!(day_failures, 7);
}
