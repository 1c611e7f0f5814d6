//! Backend collaborators that hand out activity rows.

use crate::core::models::{Activity, WeekData};
use crate::core::types::DateKey;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Where the timetable gets its rows from.
///
/// `fetch_day` is mandatory. Sources that can answer a whole week in one
/// round trip report `supports_batch()` and override `fetch_week`.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Rows for one day, ordered by start time ascending.
    async fn fetch_day(&self, key: DateKey) -> Result<Vec<Activity>>;

    fn supports_batch(&self) -> bool {
        false
    }

    /// One list per requested key, empty for keys without rows.
    async fn fetch_week(&self, keys: &[DateKey]) -> Result<WeekData> {
        let _ = keys;
        Err(Error::BatchUnavailable)
    }
}

/// Stable ascending order by start time; rows without a start go last.
fn order_by_start(rows: &mut [Activity]) {
    rows.sort_by(|a, b| {
        let ka = (a.start.is_none(), a.start.as_deref());
        let kb = (b.start.is_none(), b.start.as_deref());
        ka.cmp(&kb)
    });
}

fn rows_for_day(rows: &[Activity], key: DateKey) -> Vec<Activity> {
    let mut day: Vec<Activity> = rows.iter().filter(|a| a.date == key).cloned().collect();
    order_by_start(&mut day);
    day
}

fn group_week(rows: &[Activity], keys: &[DateKey]) -> WeekData {
    let mut week = WeekData::empty_for(keys);
    for key in keys {
        week.insert(*key, rows_for_day(rows, *key));
    }
    week
}

/// Reads a JSON array of activity rows from disk on every request.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    batch: bool,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            batch: true,
        }
    }

    pub fn with_batch(mut self, enabled: bool) -> Self {
        self.batch = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_rows(&self) -> Result<Vec<Activity>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        parse_rows(&text).map_err(|err| match err {
            Error::Parse(msg) => Error::Parse(format!("{}: {msg}", self.path.display())),
            other => other,
        })
    }
}

/// Parses a JSON document that must be an array of activity rows.
pub fn parse_rows(text: &str) -> Result<Vec<Activity>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(Error::parse("activity data must be a JSON array"));
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Error::from))
        .collect()
}

#[async_trait]
impl ActivitySource for JsonFileSource {
    async fn fetch_day(&self, key: DateKey) -> Result<Vec<Activity>> {
        let rows = self
            .read_rows()
            .await
            .map_err(|err| Error::fetch(key, err.to_string()))?;
        Ok(rows_for_day(&rows, key))
    }

    fn supports_batch(&self) -> bool {
        self.batch
    }

    async fn fetch_week(&self, keys: &[DateKey]) -> Result<WeekData> {
        if !self.batch {
            return Err(Error::BatchUnavailable);
        }
        let rows = self.read_rows().await?;
        Ok(group_week(&rows, keys))
    }
}

/// In-process rows with switchable batch support, injected failures and
/// per-day latency.
#[derive(Debug, Default)]
pub struct MemorySource {
    rows: Vec<Activity>,
    batch: bool,
    fail_batch: bool,
    failing_days: HashSet<DateKey>,
    delays: HashMap<DateKey, Duration>,
    day_calls: AtomicUsize,
    week_calls: AtomicUsize,
}

impl MemorySource {
    pub fn new(rows: Vec<Activity>) -> Self {
        Self {
            rows,
            batch: true,
            ..Self::default()
        }
    }

    pub fn with_batch(mut self, enabled: bool) -> Self {
        self.batch = enabled;
        self
    }

    pub fn failing_batch(mut self) -> Self {
        self.fail_batch = true;
        self
    }

    pub fn failing_day(mut self, key: DateKey) -> Self {
        self.failing_days.insert(key);
        self
    }

    pub fn with_delay(mut self, key: DateKey, delay: Duration) -> Self {
        self.delays.insert(key, delay);
        self
    }

    pub fn day_calls(&self) -> usize {
        self.day_calls.load(Ordering::SeqCst)
    }

    pub fn week_calls(&self) -> usize {
        self.week_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActivitySource for MemorySource {
    async fn fetch_day(&self, key: DateKey) -> Result<Vec<Activity>> {
        self.day_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_days.contains(&key) {
            return Err(Error::fetch(key, "injected failure"));
        }
        Ok(rows_for_day(&self.rows, key))
    }

    fn supports_batch(&self) -> bool {
        self.batch
    }

    async fn fetch_week(&self, keys: &[DateKey]) -> Result<WeekData> {
        if !self.batch {
            return Err(Error::BatchUnavailable);
        }
        self.week_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if self.fail_batch {
            return Err(Error::Domain("injected batch failure".into()));
        }
        Ok(group_week(&self.rows, keys))
    }
}
