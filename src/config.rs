//! Star field configuration
//!
//! Built in code from the `consts` defaults; the motion profile is picked at
//! runtime. Serializes to JSON for startup logging.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Rule set for a new star's initial position and velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnProfile {
    /// Scatter from a jittered window around the screen center
    Burst,
    /// Enter at the right edge and drift left with a slight vertical skew
    #[default]
    Drift,
}

impl SpawnProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnProfile::Burst => "Burst",
            SpawnProfile::Drift => "Drift",
        }
    }
}

/// All tunables for the star field. Speeds are in pixels per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    /// Frames between spawns
    pub spawn_interval: u32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_speed_y: f32,
    pub max_speed_y: f32,
    /// Exclusive upper bound on star radius
    pub max_size: u32,
    /// Cull margin beyond the visible extent, same on both axes
    pub extra_edge: f32,
    pub center_var_x: u32,
    pub center_var_y: u32,
    /// Active motion profile
    pub profile: SpawnProfile,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            spawn_interval: SPAWN_INTERVAL,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            min_speed_y: MIN_SPEED_Y,
            max_speed_y: MAX_SPEED_Y,
            max_size: MAX_SIZE,
            extra_edge: EXTRA_EDGE,
            center_var_x: CENTER_VAR_X,
            center_var_y: CENTER_VAR_Y,
            profile: SpawnProfile::Drift,
        }
    }
}

impl StarConfig {
    /// Default config with a different motion profile
    pub fn with_profile(profile: SpawnProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Check every field the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.max_size == 0 {
            return Err(ConfigError::ZeroMaxSize);
        }
        if self.max_size > MAX_SIZE_LIMIT {
            return Err(ConfigError::SizeTooLarge {
                size: self.max_size,
                limit: MAX_SIZE_LIMIT,
            });
        }
        if self.min_speed.is_nan() || self.min_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.min_speed));
        }
        check_range("speed", self.min_speed, self.max_speed)?;
        check_range("speed_y", self.min_speed_y, self.max_speed_y)?;
        if self.min_speed_y < 0.0 {
            return Err(ConfigError::InvalidRange {
                name: "speed_y",
                min: self.min_speed_y,
                max: self.max_speed_y,
            });
        }
        if self.extra_edge.is_nan() || self.extra_edge < 0.0 {
            return Err(ConfigError::NegativeEdge(self.extra_edge));
        }
        // A star must be fully out of view before the cull can reach it
        if self.extra_edge < self.max_size as f32 {
            return Err(ConfigError::EdgeBelowSize {
                edge: self.extra_edge,
                max_size: self.max_size,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    // Equal bounds are a fixed value, not an empty range
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { name, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = StarConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.profile, SpawnProfile::Drift);
        assert_eq!(config.extra_edge, config.max_size as f32);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = StarConfig {
            spawn_interval: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSpawnInterval)));

        let config = StarConfig {
            min_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonPositiveSpeed(_))));

        let config = StarConfig {
            min_speed: 2.0,
            max_speed: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { name: "speed", .. })
        ));

        let config = StarConfig {
            extra_edge: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NegativeEdge(_))));
    }

    #[test]
    fn test_edge_must_cover_largest_star() {
        let config = StarConfig {
            max_size: 30,
            spawn_interval: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EdgeBelowSize { max_size: 30, .. })
        ));

        let config = StarConfig {
            max_size: 30,
            extra_edge: 30.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_size_is_capped() {
        let config = StarConfig {
            max_size: MAX_SIZE_LIMIT + 1,
            extra_edge: f32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SizeTooLarge { .. })
        ));

        let config = StarConfig {
            max_size: MAX_SIZE_LIMIT,
            extra_edge: MAX_SIZE_LIMIT as f32,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_fills_defaults() {
        let json = StarConfig::with_profile(SpawnProfile::Burst).to_json().unwrap();
        let config: StarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, StarConfig::with_profile(SpawnProfile::Burst));

        let partial: StarConfig = serde_json::from_str(r#"{"spawn_interval":5}"#).unwrap();
        assert_eq!(partial.spawn_interval, 5);
        assert_eq!(partial.max_size, MAX_SIZE);
        assert_eq!(partial.profile, SpawnProfile::Drift);
        assert_eq!(SpawnProfile::Burst.as_str(), "Burst");
    }
}
