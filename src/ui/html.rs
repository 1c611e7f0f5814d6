//! Printable HTML rendering of a [`TableView`].

use maud::{DOCTYPE, Markup, PreEscaped, html};
use strum::IntoEnumIterator;

use crate::calendar::WeekLabel;
use crate::ui::palette::PastelColor;
use crate::ui::view::{CellView, RowView, TableView};

const BASE_CSS: &str = r#"
body { font-family: "Noto Sans KR", "Apple SD Gothic Neo", sans-serif; margin: 24px; color: #333; }
header { text-align: center; margin-bottom: 16px; }
h1 { font-size: 20px; margin: 0 0 4px; }
.range { color: #777; font-size: 14px; }
table.timetable { width: 100%; border-collapse: collapse; table-layout: fixed; }
.timetable th, .timetable td { border: 1px solid #ddd; padding: 6px; vertical-align: top; text-align: center; }
.timetable th { background: #f6f6f6; font-weight: 600; }
.timetable th.period { width: 56px; }
.cell-empty { color: #bbb; }
.time { font-size: 12px; color: #666; margin-bottom: 4px; }
.tag { display: inline-block; border-radius: 10px; padding: 2px 8px; margin: 2px; font-size: 13px; }
@media print {
  body { margin: 0; }
  table.timetable { page-break-inside: auto; }
  tr { page-break-inside: avoid; page-break-after: auto; }
  thead { display: table-header-group; }
}
"#;

/// Palette rules, one class per pastel color.
fn palette_css() -> String {
    PastelColor::iter()
        .map(|color| {
            let (bg, fg) = color.css();
            format!(".{color} {{ background: {bg}; color: {fg}; }}\n")
        })
        .collect()
}

pub fn render_document(label: &WeekLabel, table: &TableView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="UTF-8";
                title { (label.title) }
                style { (PreEscaped(BASE_CSS)) (PreEscaped(palette_css())) }
            }
            body {
                header {
                    h1 { (label.title) }
                    div.range { (label.range) }
                }
                (render_table(table))
            }
        }
    }
}

pub fn render_table(table: &TableView) -> Markup {
    html! {
        table.timetable {
            thead {
                tr {
                    th.period { (table.period_header) }
                    @for header in &table.day_headers {
                        th { (header) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    (render_row(row))
                }
            }
        }
    }
}

fn render_row(row: &RowView) -> Markup {
    html! {
        tr {
            th.period { (row.label) }
            @for cell in &row.cells {
                @match cell {
                    CellView::Empty { glyph, tooltip } => {
                        td.cell-empty title=(tooltip) { (glyph) }
                    }
                    CellView::Filled { time_range, tags, tooltip } => {
                        td.cell-filled title=(tooltip) {
                            div.time { (time_range) }
                            @for tag in tags {
                                span class={ "tag " (tag.color.to_string()) } title=(tag.tooltip) { (tag.name) }
                            }
                        }
                    }
                }
            }
        }
    }
}
