use crate::config::Config;
use crate::errors::{Error, Result};
use crate::loader::source::JsonFileSource;
use crate::logging::Logger;
use std::path::PathBuf;

/// Everything the view needs once startup succeeded.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    pub exports_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(
        config_path: PathBuf,
        logs_dir: PathBuf,
        exports_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            logger,
            config_path,
            logs_dir,
            exports_dir,
        })
    }

    /// Build the configured activity source, failing when its file is absent.
    pub fn activity_source(&self) -> Result<JsonFileSource> {
        let path = self.config.data_file();
        if !path.is_file() {
            return Err(Error::Startup {
                missing: vec![format!("data file '{}'", path.display())],
            });
        }
        Ok(JsonFileSource::new(path).with_batch(self.config.batch_fetch_enabled()))
    }
}
