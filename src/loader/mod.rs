pub mod source;

use crate::core::models::WeekData;
use crate::core::types::DateKey;
use crate::errors::Error;
use crate::logging::{LogTarget, Logger};
use futures::future::join_all;
use source::ActivitySource;
use std::sync::Arc;

/// Fetches one week of rows and never fails: whatever goes wrong becomes
/// empty days plus a warning in the log.
#[derive(Clone)]
pub struct WeekLoader {
    source: Arc<dyn ActivitySource>,
    logger: Logger,
}

impl WeekLoader {
    pub fn new(source: Arc<dyn ActivitySource>, logger: Logger) -> Self {
        Self { source, logger }
    }

    pub async fn load(&self, keys: &[DateKey]) -> WeekData {
        let joined = keys
            .iter()
            .map(DateKey::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.logger.debug(format!("Loading week: {joined}"));

        let week = if self.source.supports_batch() {
            self.load_batch(keys).await
        } else {
            self.logger.warn(
                "Batch fetch unavailable; falling back to per-day requests.",
                LogTarget::FileOnly,
            );
            self.load_per_day(keys).await
        };

        self.logger.debug(format!(
            "Week loaded: {} activities, data present: {}",
            week.total_activities(),
            week.has_any_data()
        ));
        week
    }

    async fn load_batch(&self, keys: &[DateKey]) -> WeekData {
        match self.source.fetch_week(keys).await {
            Ok(mut week) => {
                for key in keys {
                    if !week.contains_key(*key) {
                        week.insert(*key, Vec::new());
                    }
                }
                week
            }
            Err(Error::BatchUnavailable) => {
                self.logger.warn(
                    "Source declined the batch request; falling back to per-day requests.",
                    LogTarget::FileOnly,
                );
                self.load_per_day(keys).await
            }
            Err(err) => {
                self.logger.warn(
                    format!("Week fetch failed, showing an empty week: {err}"),
                    LogTarget::FileOnly,
                );
                WeekData::empty_for(keys)
            }
        }
    }

    /// All days in flight at once; results map back to keys by position.
    async fn load_per_day(&self, keys: &[DateKey]) -> WeekData {
        let results = join_all(keys.iter().map(|key| self.source.fetch_day(*key))).await;

        keys.iter()
            .zip(results)
            .map(|(key, result)| match result {
                Ok(rows) => (*key, rows),
                Err(err) => {
                    self.logger.warn(
                        format!("Day fetch failed for {key}: {err}"),
                        LogTarget::FileOnly,
                    );
                    (*key, Vec::new())
                }
            })
            .collect()
    }
}
