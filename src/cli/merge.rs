// merge.rs - Merge configuration file values over built-in defaults

use std::path::PathBuf;

use crate::cli::{Args, Config, Settings};
use crate::error::AppError;

impl Settings {
    /// Overlay every key the configuration file sets
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Output
        if let Some(overwrite) = config.overwrite {
            self.merge.overwrite = overwrite;
        }
        if let Some(compress) = config.compress {
            self.merge.compress = compress;
        }
        if let Some(verify) = config.verify_page_count {
            self.merge.verify_page_count = verify;
        }
        if let Some(import) = config.import_outlines {
            self.merge.import_outlines = import;
        }

        // Metadata
        if let Some(stamp) = config.stamp_metadata {
            self.merge.stamp_metadata = stamp;
        }
        if let Some(producer) = config.producer {
            self.merge.producer = producer;
        }

        // Logging
        if let Some(log_file) = config.log_file {
            self.log_file = Some(PathBuf::from(log_file));
        }
        if let Some(log_level) = config.log_level {
            self.log_level = log_level;
        }

        self
    }
}

impl Args {
    /// Resolve settings, loading `--config` when given
    pub fn settings(&self) -> Result<Settings, AppError> {
        let settings = Settings::default();
        match &self.config {
            Some(config_path) => Ok(settings.merge_with_config(Config::from_file(config_path)?)),
            None => Ok(settings),
        }
    }
}
