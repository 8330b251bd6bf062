//! Workbench configuration

use crate::BenchError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Largest row or column count accepted from user input
pub const DEFAULT_MAX_DIM: usize = 50;

pub const ENV_DATA_PATH: &str = "MATRIXBENCH_DATA_PATH";
pub const ENV_MAX_DIM: &str = "MATRIXBENCH_MAX_DIM";
pub const ENV_TRACE: &str = "MATRIXBENCH_TRACE";
pub const ENV_SEED: &str = "MATRIXBENCH_SEED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Upper bound for rows and columns of created matrices
    pub max_dim: usize,
    /// Base directory for relative save/load/export paths
    pub data_dir: PathBuf,
    /// Record each cofactor expansion step in the history
    pub trace_steps: bool,
    /// Seed for random fill; entropy when absent
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_dim: DEFAULT_MAX_DIM,
            data_dir: PathBuf::from("."),
            trace_steps: false,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_dim(mut self, max_dim: usize) -> Self {
        self.max_dim = max_dim;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_trace_steps(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self, BenchError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| BenchError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build from `MATRIXBENCH_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, BenchError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, BenchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATA_PATH) {
            config.data_dir = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_MAX_DIM) {
            config.max_dim = raw.trim().parse()
                .map_err(|_| BenchError::invalid_config(format!("{} must be a positive integer, got '{}'", ENV_MAX_DIM, raw)))?;
        }
        if let Some(raw) = lookup(ENV_TRACE) {
            config.trace_steps = matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw.trim().parse()
                .map_err(|_| BenchError::invalid_config(format!("{} must be an unsigned integer, got '{}'", ENV_SEED, raw)))?;
            config.seed = Some(seed);
        }

        config.validate()?;
        tracing::debug!(?config, "configuration loaded from environment");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.max_dim == 0 {
            return Err(BenchError::invalid_config("max_dim must be at least 1"));
        }
        Ok(())
    }

    /// Resolve a relative path against `data_dir`
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.max_dim, 50);
        assert!(!config.trace_steps);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_json_partial() {
        let config = BenchConfig::from_json(r#"{"max_dim": 8, "seed": 7}"#).unwrap();
        assert_eq!(config.max_dim, 8);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn test_from_json_rejects_zero_dim() {
        let err = BenchConfig::from_json(r#"{"max_dim": 0}"#).unwrap_err();
        assert!(err.is(codes::INVALID_CONFIG));
    }

    #[test]
    fn test_from_lookup() {
        let config = BenchConfig::from_lookup(lookup_from(&[
            (ENV_DATA_PATH, "/tmp/mb"),
            (ENV_MAX_DIM, "12"),
            (ENV_TRACE, "true"),
        ])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/mb"));
        assert_eq!(config.max_dim, 12);
        assert!(config.trace_steps);
    }

    #[test]
    fn test_from_lookup_bad_seed() {
        let err = BenchConfig::from_lookup(lookup_from(&[(ENV_SEED, "abc")])).unwrap_err();
        assert!(err.is(codes::INVALID_CONFIG));
    }

    #[test]
    fn test_resolve() {
        let config = BenchConfig::new().with_data_dir("/data");
        assert_eq!(config.resolve("a.csv"), PathBuf::from("/data/a.csv"));
        assert_eq!(config.resolve("/abs/b.csv"), PathBuf::from("/abs/b.csv"));
    }
}
