// validation.rs - Input validation utilities

use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::Level;

use crate::cli::Settings;
use crate::error::AppError;

/// Parse the JSON request. Anything but a JSON object is an input error.
pub fn parse_payload(payload: Option<&str>) -> Result<Map<String, Value>, AppError> {
    let raw = payload.ok_or_else(|| AppError::Input("no JSON argument given".to_string()))?;
    Ok(serde_json::from_str(raw)?)
}

/// Validate resolved settings, returning the log level to use
pub fn validate_settings(settings: &Settings) -> Result<Level, AppError> {
    let level = Level::from_str(&settings.log_level).map_err(|_| {
        AppError::Config(format!(
            "invalid log level '{}'. Use: trace, debug, info, warn, error",
            settings.log_level
        ))
    })?;

    if settings.merge.stamp_metadata && settings.merge.producer.trim().is_empty() {
        return Err(AppError::Config("producer must not be empty".to_string()));
    }

    Ok(level)
}
