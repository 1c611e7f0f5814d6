use std::cell::RefCell;
use std::fs;
use std::sync::Arc;

use chrono::NaiveDate;
use timetable::calendar::WeekLabel;
use timetable::controller::{FixedClock, NavOutcome, TimetableController, TimetableView};
use timetable::loader::WeekLoader;
use timetable::logging::Logger;
use timetable::ui::display_manager::DisplayManager;
use timetable::ui::view::{CellView, TableView};

use crate::common::{build_context, sample_dir};

#[derive(Default)]
struct LastRender(RefCell<Option<(WeekLabel, TableView)>>);

impl TimetableView for LastRender {
    fn show_label(&self, _: &WeekLabel) {}

    fn render(&self, label: &WeekLabel, table: &TableView) {
        *self.0.borrow_mut() = Some((label.clone(), table.clone()));
    }
}

fn controller(batch: bool) -> (TimetableController<LastRender>, std::path::PathBuf) {
    let dir = sample_dir("controller", batch);
    let ctx = build_context(&dir);
    let logger = Logger::capturing();
    let loader = WeekLoader::new(Arc::new(ctx.activity_source().unwrap()), logger.clone());
    let controller = TimetableController::new(loader, LastRender::default(), logger)
        .with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()))
        .with_title_prefix(ctx.config.title_prefix())
        .with_start_date(ctx.config.start_date());
    (controller, ctx.exports_dir.clone())
}

fn last(c: &TimetableController<LastRender>) -> (WeekLabel, TableView) {
    c.view().0.borrow().clone().expect("a render happened")
}

#[tokio::test]
async fn sample_week_lays_out_periods() {
    let (c, _) = controller(true);

    assert_eq!(c.start().await, NavOutcome::Rendered);

    let (label, table) = last(&c);
    assert_eq!(label.title, "우리집 2024년 6월 2주차 시간표");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].label, "1차");

    match &table.rows[0].cells[0] {
        CellView::Filled {
            time_range,
            tags,
            tooltip,
        } => {
            assert_eq!(time_range, "09:00 ~ 10:30");
            assert_eq!(tags.len(), 2);
            assert_eq!(tags[0].tooltip, "09:00 ~ 10:00\n수학");
            assert_eq!(tooltip, "09:00 ~ 10:30\n수학, 영어");
        }
        other => panic!("expected a filled Monday cell, got {other:?}"),
    }
    assert!(!table.rows[1].cells[0].is_empty());
    assert!(!table.rows[0].cells[2].is_empty());
    // The row without a start time never becomes a period.
    assert!(table.rows[1].cells[2].is_empty());
}

#[tokio::test]
async fn per_day_source_renders_same_table() {
    let (batch, _) = controller(true);
    let (per_day, _) = controller(false);

    batch.start().await;
    per_day.start().await;

    assert_eq!(last(&batch).1, last(&per_day).1);
}

#[tokio::test]
async fn today_uses_clock_not_start_date() {
    let (c, _) = controller(true);
    c.start().await;

    c.go_to_current_week().await;

    assert_eq!(
        c.session().week_start,
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    );
    let (label, table) = last(&c);
    assert_eq!(label.range, "06.10 - 06.16");
    assert_eq!(table.rows.len(), 1);
}

#[tokio::test]
async fn print_exports_current_week() {
    let (c, exports) = controller(true);
    c.start().await;
    c.navigate(1).await;

    let path = c.print(&exports).unwrap();

    assert_eq!(path, exports.join("timetable-20240610.html"));
    let html = fs::read_to_string(path).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("수영"));
    assert!(html.contains("16:00 ~ 17:00"));
    assert!(html.contains("page-break-inside: avoid"));
}

#[test]
fn terminal_table_keeps_columns_aligned() {
    let week = timetable::calendar::WeekView::containing(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    let label = week.label("우리집");
    let table = timetable::ui::view::TableView::empty(&week);
    let dm = DisplayManager::plain();

    let mut buf = Vec::new();
    dm.render_timetable(&label, &table, &mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "우리집 2024년 6월 2주차 시간표");
    assert_eq!(lines[2], "06.03 - 06.09");
    assert!(lines[4].starts_with("차수 | 6.3(월) | 6.4(화)"));
}
