pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    BoolConfigItem, ConfigItem, DataFileConfigItem, StartDateConfigItem, TitlePrefixConfigItem,
};
use crate::errors::{Error, Result, require_config_item};
use crate::extensions::enums::valid_csv;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    DataFile,
    BatchFetchEnabled,
    TitlePrefix,
    StartDate,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub data_file: Option<DataFileConfigItem>,
    #[serde(default = "BoolConfigItem::batch_fetch")]
    pub batch_fetch_enabled: BoolConfigItem,
    #[serde(default)]
    pub title_prefix: TitlePrefixConfigItem,
    #[serde(default)]
    pub start_date: StartDateConfigItem,
    #[serde(default = "BoolConfigItem::file_logging")]
    pub file_logging_enabled: BoolConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        require_config_item(data.data_file.as_ref(), "data_file")?;
        Ok(Self { path, data })
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    /// Activity file; relative paths resolve against the config file's folder.
    pub fn data_file(&self) -> PathBuf {
        let raw = self
            .data
            .data_file
            .as_ref()
            .map(|item| item.get_value().clone())
            .unwrap_or_default();
        if raw.is_absolute() {
            return raw;
        }
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(raw),
            _ => raw,
        }
    }
    pub fn batch_fetch_enabled(&self) -> bool {
        self.data.batch_fetch_enabled.get_value().0
    }
    pub fn title_prefix(&self) -> &str {
        self.data.title_prefix.get_value()
    }
    pub fn start_date(&self) -> Option<NaiveDate> {
        *self.data.start_date.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    /// `(key, description, value)` rows in declaration order.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        ConfigKey::iter()
            .map(|key| {
                let (description, value) = self.describe(key);
                (key.to_string(), description, value)
            })
            .collect()
    }

    fn describe(&self, key: ConfigKey) -> (String, String) {
        match key {
            ConfigKey::DataFile => (
                self.data
                    .data_file
                    .as_ref()
                    .map(|item| item.description().to_string())
                    .unwrap_or_default(),
                self.data
                    .data_file
                    .as_ref()
                    .map(|item| item.get_value().display().to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ConfigKey::BatchFetchEnabled => (
                self.data.batch_fetch_enabled.description().to_string(),
                self.data.batch_fetch_enabled.get_value().to_string(),
            ),
            ConfigKey::TitlePrefix => (
                self.data.title_prefix.description().to_string(),
                self.data.title_prefix.get_value().clone(),
            ),
            ConfigKey::StartDate => (
                self.data.start_date.description().to_string(),
                self.data
                    .start_date
                    .get_value()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ConfigKey::FileLoggingEnabled => (
                self.data.file_logging_enabled.description().to_string(),
                self.data.file_logging_enabled.get_value().to_string(),
            ),
        }
    }

    /// Update one key and write the file back. Returns `(old, new)` values.
    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<(String, String)> {
        use std::str::FromStr;
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<(String, String)> {
        let (_, old) = self.describe(key);
        match key {
            ConfigKey::DataFile => {
                let item = self.data.data_file.get_or_insert_with(|| DataFileConfigItem {
                    value: PathBuf::new(),
                    description: "JSON array of activity rows.".into(),
                });
                item.set_value(new_value)?
            }
            ConfigKey::BatchFetchEnabled => self.data.batch_fetch_enabled.set_value(new_value)?,
            ConfigKey::TitlePrefix => self.data.title_prefix.set_value(new_value)?,
            ConfigKey::StartDate => self.data.start_date.set_value(new_value)?,
            ConfigKey::FileLoggingEnabled => {
                self.data.file_logging_enabled.set_value(new_value)?
            }
        }
        self.save()?;
        let (_, new) = self.describe(key);
        Ok((old, new))
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
