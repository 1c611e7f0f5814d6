use crate::core::types::DateKey;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One scheduled activity row as the backend returns it.
///
/// Only the four Korean-named columns are read by the timetable; any other
/// column the backend adds is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "날짜")]
    pub date: DateKey,
    #[serde(rename = "시작시간", default)]
    pub start: Option<String>,
    #[serde(rename = "종료시간", default)]
    pub end: Option<String>,
    #[serde(rename = "활동명", default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    pub fn new(date: DateKey, start: &str, end: &str, name: &str) -> Self {
        Self {
            date,
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            name: name.to_string(),
            extra: Map::new(),
        }
    }

    /// Start time, or `None` when the row has no usable start.
    pub fn start_time(&self) -> Option<&str> {
        self.start.as_deref().filter(|s| !s.is_empty())
    }

    pub fn end_time(&self) -> &str {
        self.end.as_deref().unwrap_or("")
    }
}

/// Activities of one displayed week, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekData(BTreeMap<DateKey, Vec<Activity>>);

impl WeekData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every key mapped to an empty list.
    pub fn empty_for(keys: &[DateKey]) -> Self {
        Self(keys.iter().map(|k| (*k, Vec::new())).collect())
    }

    pub fn insert(&mut self, key: DateKey, activities: Vec<Activity>) {
        self.0.insert(key, activities);
    }

    /// Activities for `key`; missing keys read as an empty day.
    pub fn day(&self, key: DateKey) -> &[Activity] {
        self.0.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: DateKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn has_any_data(&self) -> bool {
        self.0.values().any(|day| !day.is_empty())
    }

    pub fn total_activities(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &Vec<Activity>)> {
        self.0.iter()
    }
}

impl FromIterator<(DateKey, Vec<Activity>)> for WeekData {
    fn from_iter<I: IntoIterator<Item = (DateKey, Vec<Activity>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
