//! Configuration
//!
//! `DiagnosisOptions` are the per-request knobs of the core.
//! `ServerConfig` is read from the environment by the binaries.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{DiagnosisError, Result};

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.30;
pub const DEFAULT_TOP_K: usize = 5;

/// Confidence threshold and top-K cutoff applied by the assembler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisOptions {
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_confidence_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for DiagnosisOptions {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl DiagnosisOptions {
    pub fn new(confidence_threshold: f64, top_k: usize) -> Result<Self> {
        let options = Self {
            confidence_threshold,
            top_k,
        };
        options.validate()?;
        Ok(options)
    }

    /// Reject thresholds outside [0, 1] (NaN included) and a zero top-K
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(DiagnosisError::InvalidInput {
                field: "confidence_threshold",
                reason: format!("must be within [0, 1], got {}", self.confidence_threshold),
            });
        }
        if self.top_k == 0 {
            return Err(DiagnosisError::InvalidInput {
                field: "top_k",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Fill unset fields of a partial request from these defaults
    pub fn with_overrides(&self, confidence_threshold: Option<f64>, top_k: Option<usize>) -> Self {
        Self {
            confidence_threshold: confidence_threshold.unwrap_or(self.confidence_threshold),
            top_k: top_k.unwrap_or(self.top_k),
        }
    }
}

/// Process-level settings for the binaries
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// JSON knowledge base replacing the embedded one
    pub knowledge_base_path: Option<String>,
    pub defaults: DiagnosisOptions,
    pub cache_capacity: u64,
    pub cache_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            knowledge_base_path: None,
            defaults: DiagnosisOptions::default(),
            cache_capacity: 10_000,
            cache_ttl_secs: 300,
        }
    }
}

impl ServerConfig {
    /// Read PORT, KNOWLEDGE_BASE_PATH, CONFIDENCE_THRESHOLD, TOP_K,
    /// CACHE_CAPACITY and CACHE_TTL_SECS; unset or unparsable values keep defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();

        let defaults = DiagnosisOptions {
            confidence_threshold: parse_var(&lookup, "CONFIDENCE_THRESHOLD")
                .unwrap_or(base.defaults.confidence_threshold),
            top_k: parse_var(&lookup, "TOP_K").unwrap_or(base.defaults.top_k),
        };
        defaults.validate()?;

        Ok(Self {
            port: parse_var(&lookup, "PORT").unwrap_or(base.port),
            knowledge_base_path: lookup("KNOWLEDGE_BASE_PATH").filter(|p| !p.trim().is_empty()),
            defaults,
            cache_capacity: parse_var(&lookup, "CACHE_CAPACITY").unwrap_or(base.cache_capacity),
            cache_ttl_secs: parse_var(&lookup, "CACHE_TTL_SECS").unwrap_or(base.cache_ttl_secs),
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let options = DiagnosisOptions::default();
        assert_eq!(options.confidence_threshold, 0.30);
        assert_eq!(options.top_k, 5);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        assert!(DiagnosisOptions::new(1.5, 5).is_err());
        assert!(DiagnosisOptions::new(-0.1, 5).is_err());
        assert!(DiagnosisOptions::new(f64::NAN, 5).is_err());
        assert!(DiagnosisOptions::new(0.0, 5).is_ok());
        assert!(DiagnosisOptions::new(1.0, 5).is_ok());
    }

    #[test]
    fn test_rejects_zero_top_k() {
        let err = DiagnosisOptions::new(0.3, 0).unwrap_err();
        assert!(matches!(err, DiagnosisError::InvalidInput { field: "top_k", .. }));
    }

    #[test]
    fn test_partial_options_deserialize_with_defaults() {
        let options: DiagnosisOptions = serde_json::from_str(r#"{"top_k": 2}"#).unwrap();
        assert_eq!(options.top_k, 2);
        assert_eq!(options.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn test_server_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "8080"),
            ("TOP_K", "3"),
            ("CONFIDENCE_THRESHOLD", "not-a-number"),
            ("KNOWLEDGE_BASE_PATH", "/tmp/kb.json"),
        ]
        .into_iter()
        .collect();

        let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.defaults.top_k, 3);
        assert_eq!(config.defaults.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD);
        assert_eq!(config.knowledge_base_path.as_deref(), Some("/tmp/kb.json"));
        assert_eq!(config.cache_capacity, 10_000);
    }

    #[test]
    fn test_server_config_rejects_invalid_threshold() {
        let result = ServerConfig::from_lookup(|k| {
            (k == "CONFIDENCE_THRESHOLD").then(|| "2.0".to_string())
        });
        assert!(result.is_err());
    }
}
