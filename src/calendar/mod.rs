//! Week arithmetic for a Monday..Sunday timetable.


use crate::core::types::{DateKey, DayOfWeek};
use crate::extensions::chrono::{NaiveDateExt, WeekdayExt};
use chrono::{Datelike, Duration, NaiveDate};

pub const DAYS_IN_WEEK: usize = 7;

/// Monday of the week containing `date`. Sunday belongs to the week before it.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().to_day_of_week().index() as i64;
    date - Duration::days(offset)
}

/// Week ordinal within `date`'s own month; week 1 is the week holding the 1st.
///
/// Two adjacent weeks straddling a month boundary can share a number.
pub fn week_number(date: NaiveDate) -> u32 {
    let first_week_start = week_start(date.first_of_month());
    let days = (date - first_week_start).num_days();
    (days.div_euclid(7) + 1) as u32
}

/// Replaces the first `YYYY`, `MM` and `DD` tokens of `pattern`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    pattern
        .replacen("YYYY", &date.year().to_string(), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("DD", &format!("{:02}", date.day()), 1)
}

pub fn date_key(date: NaiveDate) -> DateKey {
    DateKey::from_date(date)
}

/// Column index of a date key, 0 = Monday. `None` for impossible dates.
pub fn day_of_week_index(key: DateKey) -> Option<usize> {
    key.to_date()
        .map(|date| date.weekday().to_day_of_week().index())
}

/// The seven days of one timetable week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekView {
    start: NaiveDate,
}

impl WeekView {
    /// The week containing `date`; any day of the week may be passed.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: week_start(date),
        }
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start = week_start(date);
        self
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(DAYS_IN_WEEK as i64 - 1)
    }

    /// Shift by whole weeks; negative moves back.
    pub fn shifted(&self, weeks: i64) -> Self {
        Self {
            start: self.start + Duration::days(weeks * DAYS_IN_WEEK as i64),
        }
    }

    /// Ordered dates, Monday first.
    pub fn days(&self) -> [NaiveDate; DAYS_IN_WEEK] {
        std::array::from_fn(|offset| self.start + Duration::days(offset as i64))
    }

    pub fn keys(&self) -> [DateKey; DAYS_IN_WEEK] {
        self.days().map(date_key)
    }

    /// `6.3(월)` style header for each column.
    pub fn day_headers(&self) -> [String; DAYS_IN_WEEK] {
        self.days().map(|date| {
            let day = date.weekday().to_day_of_week();
            format!("{}.{}({})", date.month(), date.day(), day.abbrev())
        })
    }

    pub fn label(&self, prefix: &str) -> WeekLabel {
        WeekLabel::new(self, prefix)
    }
}

/// Title and date range shown above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekLabel {
    pub title: String,
    pub range: String,
}

impl WeekLabel {
    pub fn new(week: &WeekView, prefix: &str) -> Self {
        let start = week.start();
        let title = format!(
            "{} {}년 {}월 {}주차 시간표",
            prefix,
            start.year(),
            start.month(),
            week_number(start)
        );
        let range = format!(
            "{} - {}",
            format_date(start, "MM.DD"),
            format_date(week.end(), "MM.DD")
        );
        Self {
            title: title.trim_start().to_string(),
            range,
        }
    }
}

/// Monday-first day names, used for diagnostics.
pub fn day_name(index: usize) -> String {
    DayOfWeek::from_index(index)
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("day {index}"))
}
