//! Mapper configuration.
//!
//! Defaults reproduce the stock matching policy exactly. Environment
//! overrides:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `RIGMAP_THRESHOLD` | fuzzy acceptance threshold | `0.6` |
//! | `RIGMAP_FALLBACK` | fuzzy fallback after direct mapping (`0`/`false` disables) | on |
//! | `RIGMAP_MIN_SIGNATURE_FRACTION` | fraction of bones that must carry the convention signature | any bone |

use std::env;

use crate::engine::auto_mapper::DEFAULT_ACCEPTANCE_THRESHOLD;
use crate::engine::convention::RecognitionPolicy;
use crate::error::{Result, RigmapError};

/// Environment variable for the acceptance threshold
pub const ENV_THRESHOLD: &str = "RIGMAP_THRESHOLD";

/// Environment variable toggling fuzzy fallback
pub const ENV_FALLBACK: &str = "RIGMAP_FALLBACK";

/// Environment variable for the recognition fraction
pub const ENV_MIN_SIGNATURE_FRACTION: &str = "RIGMAP_MIN_SIGNATURE_FRACTION";

/// Mapping engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MapperConfig {
    /// Minimum similarity for a fuzzy match (default: 0.6)
    pub acceptance_threshold: f32,

    /// Run fuzzy matching for targets the direct table left unresolved
    pub fallback_to_auto: bool,

    /// How a target skeleton is recognized as a known convention
    pub recognition: RecognitionPolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            fallback_to_auto: true,
            recognition: RecognitionPolicy::AnyName,
        }
    }
}

impl MapperConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.acceptance_threshold) {
            return Err(RigmapError::InvalidThreshold(self.acceptance_threshold));
        }
        if let RecognitionPolicy::MinFraction(fraction) = self.recognition {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(RigmapError::InvalidMinFraction(fraction));
            }
        }
        Ok(())
    }

    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_THRESHOLD) {
            config.acceptance_threshold = parse_f32(ENV_THRESHOLD, &raw)?;
        }

        if let Some(raw) = lookup(ENV_FALLBACK) {
            let raw = raw.trim().to_lowercase();
            config.fallback_to_auto = raw != "0" && raw != "false";
        }

        if let Some(raw) = lookup(ENV_MIN_SIGNATURE_FRACTION) {
            config.recognition =
                RecognitionPolicy::MinFraction(parse_f32(ENV_MIN_SIGNATURE_FRACTION, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_f32(var: &'static str, raw: &str) -> Result<f32> {
    raw.trim().parse().map_err(|_| RigmapError::InvalidEnv {
        var,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = MapperConfig::default();
        assert_eq!(config.acceptance_threshold, 0.6);
        assert!(config.fallback_to_auto);
        assert_eq!(config.recognition, RecognitionPolicy::AnyName);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = MapperConfig {
            acceptance_threshold: 1.2,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RigmapError::InvalidThreshold(_))));

        let config = MapperConfig {
            acceptance_threshold: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MapperConfig {
            recognition: RecognitionPolicy::MinFraction(0.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RigmapError::InvalidMinFraction(_))));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = MapperConfig::from_lookup(lookup_from(&[
            (ENV_THRESHOLD, "0.75"),
            (ENV_FALLBACK, "false"),
            (ENV_MIN_SIGNATURE_FRACTION, "0.5"),
        ]))
        .unwrap();

        assert_eq!(config.acceptance_threshold, 0.75);
        assert!(!config.fallback_to_auto);
        assert_eq!(config.recognition, RecognitionPolicy::MinFraction(0.5));
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = MapperConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, MapperConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = MapperConfig::from_lookup(lookup_from(&[(ENV_THRESHOLD, "high")])).unwrap_err();
        assert!(matches!(err, RigmapError::InvalidEnv { var: ENV_THRESHOLD, .. }));

        let err = MapperConfig::from_lookup(lookup_from(&[(ENV_THRESHOLD, "7")])).unwrap_err();
        assert!(matches!(err, RigmapError::InvalidThreshold(_)));
    }
}
