//! Engine configuration
//!
//! Defaults suit a single dining room; every field can be overridden from the
//! environment (`FASTQUEUE_*`) and again by CLI flags.

use crate::error::{AppError, Result};
use crate::port::{IdProvider, SequentialIdProvider, UuidProvider};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Default maximum number of waiting entries
pub const DEFAULT_CAPACITY: usize = 100;

/// Default number of ID generation attempts before giving up
pub const DEFAULT_MAX_ID_ATTEMPTS: u32 = 3;

pub const ENV_CAPACITY: &str = "FASTQUEUE_CAPACITY";
pub const ENV_MAX_ID_ATTEMPTS: &str = "FASTQUEUE_MAX_ID_ATTEMPTS";
pub const ENV_ID_STRATEGY: &str = "FASTQUEUE_ID_STRATEGY";

/// How entry IDs are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl IdStrategy {
    pub fn provider(&self) -> Arc<dyn IdProvider> {
        match self {
            IdStrategy::Uuid => Arc::new(UuidProvider),
            IdStrategy::Sequential => Arc::new(SequentialIdProvider::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" => Ok(IdStrategy::Sequential),
            other => Err(AppError::Config(format!(
                "unknown id strategy '{other}' (expected 'uuid' or 'sequential')"
            ))),
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Uuid => write!(f, "uuid"),
            IdStrategy::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub capacity: usize,
    pub max_id_attempts: u32,
    pub id_strategy: IdStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            capacity: parse_var(&lookup, ENV_CAPACITY)?.unwrap_or(defaults.capacity),
            max_id_attempts: parse_var(&lookup, ENV_MAX_ID_ATTEMPTS)?
                .unwrap_or(defaults.max_id_attempts),
            id_strategy: match lookup(ENV_ID_STRATEGY) {
                Some(raw) => raw.parse()?,
                None => defaults.id_strategy,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(AppError::Config("capacity must be at least 1".to_string()));
        }
        if self.max_id_attempts == 0 {
            return Err(AppError::Config(
                "max_id_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{name} has invalid value '{raw}'"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_overrides_from_env() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_CAPACITY, "12"),
            (ENV_MAX_ID_ATTEMPTS, "5"),
            (ENV_ID_STRATEGY, "Sequential"),
        ]))
        .unwrap();

        assert_eq!(config.capacity, 12);
        assert_eq!(config.max_id_attempts, 5);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let result = EngineConfig::from_lookup(lookup_from(&[(ENV_CAPACITY, "0")]));
        assert!(result.unwrap_err().to_string().contains("capacity"));
    }

    #[test]
    fn test_rejects_garbage() {
        let result = EngineConfig::from_lookup(lookup_from(&[(ENV_CAPACITY, "lots")]));
        assert!(result.unwrap_err().to_string().contains(ENV_CAPACITY));

        let result = EngineConfig::from_lookup(lookup_from(&[(ENV_ID_STRATEGY, "random")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
