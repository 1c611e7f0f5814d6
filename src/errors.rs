use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::core::types::DateKey;

/// Error set shared by the timetable core, its sources and the shell.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing ------------------------------------------------------------
    /// Bad user input, bad date strings, non-array activity files.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Startup ------------------------------------------------------------
    /// A piece the view cannot start without (data file, export dir, ...).
    #[error("Startup error: missing {}", .missing.join(", "))]
    Startup { missing: Vec<String> },

    // ---- Loading ------------------------------------------------------------
    /// A single backend call failed.
    #[error("Fetch failed for {key}: {reason}")]
    Fetch { key: DateKey, reason: String },

    /// The source has no batch primitive; callers fall back to per-day fetches.
    #[error("Batch fetch is not available for this source")]
    BatchUnavailable,

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// Specific missing config item.
    #[error("Missing configuration item: {item}")]
    ConfigItemMissing { item: &'static str },

    // ---- Plumbing / Wrappers ------------------------------------------------
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config JSON decode/encode, activity files).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn fetch<S: Into<String>>(key: DateKey, reason: S) -> Self {
        Error::Fetch {
            key,
            reason: reason.into(),
        }
    }
}

/// Map an `Option<T>` into `Result<T, Error::ConfigItemMissing>` with a static key.
pub fn require_config_item<T>(opt: Option<T>, item: &'static str) -> Result<T> {
    opt.ok_or_else(|| Error::ConfigItemMissing { item })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_constructor_wraps_message() {
        let err = Error::parse("bad args");
        match err {
            Error::Parse(msg) => assert_eq!(msg, "bad args"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn config_constructor_wraps_message() {
        let err = Error::config("config missing");
        match err {
            Error::Config(msg) => assert_eq!(msg, "config missing"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn fetch_error_names_the_date_key() {
        let err = Error::fetch(DateKey(20240606), "timeout");
        assert_eq!(err.to_string(), "Fetch failed for 20240606: timeout");
    }

    #[test]
    fn startup_error_lists_missing_pieces() {
        let err = Error::Startup {
            missing: vec!["data_file".to_string(), "exports".to_string()],
        };
        assert_eq!(err.to_string(), "Startup error: missing data_file, exports");
    }

    #[test]
    fn require_config_item_errors_with_key() {
        let err = require_config_item::<i32>(None, "data_file").unwrap_err();
        match err {
            Error::ConfigItemMissing { item } => assert_eq!(item, "data_file"),
            other => panic!("expected config item missing error, got {other:?}"),
        }
    }

    #[test]
    fn io_error_formats_message() {
        let raw = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let err = Error::from(raw);
        assert_eq!(err.to_string(), "I/O error: disk");
    }

    #[test]
    fn json_error_formats_message() {
        let raw = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let expected = format!("JSON error: {}", raw);
        let err = Error::from(raw);
        assert_eq!(err.to_string(), expected);
    }
}
