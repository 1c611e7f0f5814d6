//! Declarative timetable view, independent of where it is drawn.

use crate::calendar::{DAYS_IN_WEEK, WeekView};
use crate::organizer::{Period, TimeGroup};
use crate::ui::palette::{PastelColor, color_for_activity};
use crate::ui::time_format::{cell_time_range, format_range};

pub const PERIOD_HEADER: &str = "차수";
pub const EMPTY_GLYPH: &str = "-";
pub const EMPTY_TOOLTIP: &str = "일정 없음";

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub period_header: String,
    pub day_headers: [String; DAYS_IN_WEEK],
    pub rows: Vec<RowView>,
}

impl TableView {
    /// Headers only; what a week without any periods looks like.
    pub fn empty(week: &WeekView) -> Self {
        Self {
            period_header: PERIOD_HEADER.to_string(),
            day_headers: week.day_headers(),
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> Vec<&str> {
        std::iter::once(self.period_header.as_str())
            .chain(self.day_headers.iter().map(String::as_str))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub number: usize,
    pub label: String,
    pub cells: [CellView; DAYS_IN_WEEK],
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellView {
    Empty {
        glyph: String,
        tooltip: String,
    },
    Filled {
        time_range: String,
        tags: Vec<TagView>,
        tooltip: String,
    },
}

impl CellView {
    pub fn tooltip(&self) -> &str {
        match self {
            CellView::Empty { tooltip, .. } | CellView::Filled { tooltip, .. } => tooltip,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellView::Empty { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagView {
    pub name: String,
    pub color: PastelColor,
    pub tooltip: String,
}

/// Builds a [`TableView`] from organized periods.
#[derive(Debug, Default, Clone)]
pub struct TableBuilder;

impl TableBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Day headers come from `week`, so they appear even with no periods.
    pub fn build(&self, week: &WeekView, periods: &[Period]) -> TableView {
        let mut table = TableView::empty(week);
        table.rows = periods.iter().map(|p| self.build_row(p)).collect();
        table
    }

    fn build_row(&self, period: &Period) -> RowView {
        RowView {
            number: period.number,
            label: format!("{}차", period.number),
            cells: std::array::from_fn(|day| self.build_cell(period.slot(day))),
        }
    }

    fn build_cell(&self, slot: Option<&TimeGroup>) -> CellView {
        let Some(group) = slot.filter(|g| !g.activities.is_empty()) else {
            return CellView::Empty {
                glyph: EMPTY_GLYPH.to_string(),
                tooltip: EMPTY_TOOLTIP.to_string(),
            };
        };

        let time_range = cell_time_range(&group.activities);
        let tags = group
            .activities
            .iter()
            .map(|activity| {
                let own_range = format_range(
                    activity.start.as_deref().unwrap_or(""),
                    activity.end_time(),
                );
                TagView {
                    name: activity.name.clone(),
                    color: color_for_activity(&activity.name),
                    tooltip: format!("{own_range}\n{}", activity.name),
                }
            })
            .collect::<Vec<_>>();
        let names = tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        CellView::Filled {
            tooltip: format!("{time_range}\n{names}"),
            time_range,
            tags,
        }
    }
}
