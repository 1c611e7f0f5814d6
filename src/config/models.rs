use crate::core::types::{Bool, Date};
use crate::errors::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFileConfigItem {
    pub value: PathBuf,
    pub description: String,
}
impl ConfigItem<PathBuf> for DataFileConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() {
            return Err(Error::parse("Data file path cannot be empty."));
        }
        self.value = PathBuf::from(trimmed);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoolConfigItem {
    pub value: Bool,
    pub description: String,
}

impl BoolConfigItem {
    pub fn batch_fetch() -> Self {
        Self {
            value: Bool(true),
            description: "Fetch a whole week in one request when the source allows it.".into(),
        }
    }

    pub fn file_logging() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for BoolConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitlePrefixConfigItem {
    pub value: String,
    pub description: String,
}

impl Default for TitlePrefixConfigItem {
    fn default() -> Self {
        Self {
            value: "우리집".into(),
            description: "Words shown before the week title.".into(),
        }
    }
}

impl ConfigItem<String> for TitlePrefixConfigItem {
    fn get_value(&self) -> &String {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = new_value.trim().to_string();
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StartDateConfigItem {
    pub value: Option<NaiveDate>,
    pub description: String,
}
impl ConfigItem<Option<NaiveDate>> for StartDateConfigItem {
    fn get_value(&self) -> &Option<NaiveDate> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        if new_value.trim().is_empty() {
            self.value = None;
            return Ok(());
        }
        let parsed = Date::try_from_str(new_value)?;
        self.value = Some(parsed.0);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
