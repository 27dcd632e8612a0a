//! Explicit configuration values passed into lattice and controller construction.

use crate::error::ConfigError;

/// Constants used by the interaction rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Height written into a cell by the source brush (left button, grid)
    pub source_height: f64,
    /// Weight written alongside `source_height`
    pub source_weight: f64,
    /// Right button only releases cells heavier than this
    pub release_threshold: f64,
    /// Weight a released cell gets
    pub release_weight: f64,
    /// Height added by the bump gesture (right click, line)
    pub bump_offset: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            source_height: 10_000.0,
            source_weight: 10.0,
            release_threshold: 100.0,
            release_weight: 1.0,
            bump_offset: 100.0,
        }
    }
}

impl InteractionConfig {
    /// Weights the controller writes must keep every cell's weight positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight("source_weight", self.source_weight)?;
        check_weight("release_weight", self.release_weight)?;
        Ok(())
    }

    /// Builder-style override of the source constants
    pub fn with_source(mut self, height: f64, weight: f64) -> Self {
        self.source_height = height;
        self.source_weight = weight;
        self
    }

    /// Builder-style override of the release threshold
    pub fn with_release_threshold(mut self, threshold: f64) -> Self {
        self.release_threshold = threshold;
        self
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight { name, value })
    }
}

/// Host pacing: how many simulation ticks run per second of wall time.
pub fn validate_tick_rate(ticks_per_second: u32) -> Result<(), ConfigError> {
    if ticks_per_second == 0 {
        return Err(ConfigError::ZeroTickRate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = InteractionConfig::default();
        assert_eq!(config.source_height, 10_000.0);
        assert_eq!(config.source_weight, 10.0);
        assert_eq!(config.release_threshold, 100.0);
        assert_eq!(config.release_weight, 1.0);
        assert_eq!(config.bump_offset, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_source_weight() {
        let config = InteractionConfig::default().with_source(10_000.0, 0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWeight { name: "source_weight", value: 0.0 })
        );
    }

    #[test]
    fn test_rejects_infinite_release_weight() {
        let config = InteractionConfig {
            release_weight: f64::INFINITY,
            ..InteractionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_rate() {
        assert_eq!(validate_tick_rate(0), Err(ConfigError::ZeroTickRate));
        assert!(validate_tick_rate(25).is_ok());
    }
}
