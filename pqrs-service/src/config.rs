use pqrs_db::{SlaPolicy, DEFAULT_CHANNEL};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Service settings: SLA thresholds and the channel reported to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    pub sla: SlaPolicy,
    pub prediction_channel: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            sla: SlaPolicy::default(),
            prediction_channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

impl ServiceConfig {
    /// Reads `PQRS_*` environment variables, keeping defaults for unset ones
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup("PQRS_EXPIRATION_DAYS") {
            config.sla.expiration_days = parse("PQRS_EXPIRATION_DAYS", value)?;
        }
        if let Some(value) = lookup("PQRS_NEAR_EXPIRATION_DAYS") {
            config.sla.near_expiration_days = parse("PQRS_NEAR_EXPIRATION_DAYS", value)?;
        }
        if let Some(value) = lookup("PQRS_SATISFACTION_DAYS") {
            config.sla.satisfaction_days = parse("PQRS_SATISFACTION_DAYS", value)?;
        }
        if let Some(value) = lookup("PQRS_TOP_EMPLOYEES") {
            config.sla.top_employees = parse("PQRS_TOP_EMPLOYEES", value)?;
        }
        if let Some(value) = lookup("PQRS_PREDICTION_CHANNEL") {
            config.prediction_channel = value;
        }
        Ok(config)
    }
}
