//! Turns per-day activity lists into aligned timetable periods.
//!
//! A period is a row position, not a clock time: period 1 holds each day's
//! earliest start-time group, period 2 the next one, and so on. Days with
//! fewer groups leave trailing empty slots.


use crate::calendar::{DAYS_IN_WEEK, day_name};
use crate::core::models::{Activity, WeekData};
use crate::core::types::DateKey;
use crate::logging::Logger;
use std::collections::BTreeMap;

/// Upper bound on rows shown for one week.
pub const MAX_PERIODS: usize = 10;

/// Activities of one day that share an identical start-time string.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGroup {
    pub time: String,
    pub activities: Vec<Activity>,
}

/// One timetable row; `slots[d]` is day `d` (Monday = 0).
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub number: usize,
    pub slots: [Option<TimeGroup>; DAYS_IN_WEEK],
}

impl Period {
    pub fn slot(&self, day: usize) -> Option<&TimeGroup> {
        self.slots.get(day).and_then(Option::as_ref)
    }

    pub fn filled_days(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

pub trait PeriodObserver {
    fn day_grouped(&self, day: usize, key: DateKey, groups: &[TimeGroup]);
    fn periods_planned(&self, max_groups: usize, shown: usize);
    fn groups_dropped(&self, day: usize, dropped: &[TimeGroup]);
}

/// Writes organizer diagnostics to the log file.
pub struct LoggerObserver {
    logger: Logger,
}

impl LoggerObserver {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl PeriodObserver for LoggerObserver {
    fn day_grouped(&self, day: usize, key: DateKey, groups: &[TimeGroup]) {
        let times = groups
            .iter()
            .map(|g| format!("{}x{}", g.time, g.activities.len()))
            .collect::<Vec<_>>()
            .join(", ");
        self.logger.debug(format!(
            "{} ({key}) time groups: [{times}]",
            day_name(day)
        ));
    }

    fn periods_planned(&self, max_groups: usize, shown: usize) {
        self.logger
            .debug(format!("Max time groups: {max_groups}, periods shown: {shown}"));
    }

    fn groups_dropped(&self, day: usize, dropped: &[TimeGroup]) {
        let times = dropped
            .iter()
            .map(|g| g.time.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        self.logger.debug(format!(
            "{}: {} time group(s) beyond period {MAX_PERIODS} not shown ({times})",
            day_name(day),
            dropped.len()
        ));
    }
}

/// Observer that discards everything.
pub struct NoopObserver;

impl PeriodObserver for NoopObserver {
    fn day_grouped(&self, _day: usize, _key: DateKey, _groups: &[TimeGroup]) {}
    fn periods_planned(&self, _max_groups: usize, _shown: usize) {}
    fn groups_dropped(&self, _day: usize, _dropped: &[TimeGroup]) {}
}

/// Groups a day's activities by start time, ordered by the time string.
///
/// Rows without a start time are skipped. Arrival order is kept inside a group.
pub fn group_by_start(activities: &[Activity]) -> Vec<TimeGroup> {
    let mut groups: BTreeMap<&str, Vec<Activity>> = BTreeMap::new();
    for activity in activities {
        if let Some(start) = activity.start_time() {
            groups.entry(start).or_default().push(activity.clone());
        }
    }
    groups
        .into_iter()
        .map(|(time, activities)| TimeGroup {
            time: time.to_string(),
            activities,
        })
        .collect()
}

pub struct PeriodOrganizer<'a> {
    observer: &'a dyn PeriodObserver,
}

impl<'a> PeriodOrganizer<'a> {
    pub fn new(observer: &'a dyn PeriodObserver) -> Self {
        Self { observer }
    }

    /// Lay `week` out into periods for the seven `keys`, Monday first.
    pub fn organize(&self, week: &WeekData, keys: &[DateKey; DAYS_IN_WEEK]) -> Vec<Period> {
        let mut per_day: [Vec<TimeGroup>; DAYS_IN_WEEK] = Default::default();
        for (day, key) in keys.iter().enumerate() {
            let groups = group_by_start(week.day(*key));
            self.observer.day_grouped(day, *key, &groups);
            per_day[day] = groups;
        }

        let max_groups = per_day.iter().map(Vec::len).max().unwrap_or(0);
        let shown = max_groups.min(MAX_PERIODS);
        self.observer.periods_planned(max_groups, shown);
        if shown == 0 {
            return Vec::new();
        }

        for (day, groups) in per_day.iter_mut().enumerate() {
            if groups.len() > shown {
                let dropped = groups.split_off(shown);
                self.observer.groups_dropped(day, &dropped);
            }
        }

        let mut columns = per_day.map(|groups| groups.into_iter());
        (1..=shown)
            .map(|number| Period {
                number,
                slots: std::array::from_fn(|day| columns[day].next()),
            })
            .collect()
    }
}

/// Convenience wrapper with no diagnostics.
pub fn organize(week: &WeekData, keys: &[DateKey; DAYS_IN_WEEK]) -> Vec<Period> {
    PeriodOrganizer::new(&NoopObserver).organize(week, keys)
}
