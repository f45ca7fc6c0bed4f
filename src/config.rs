//! Session configuration, validated once at the start boundary.

use thiserror::Error;

use crate::entities::Level;

pub const DEFAULT_TARGETS: usize = 7;
pub const DEFAULT_HAZARDS: usize = 14;

/// Upper bound on either entity count.
pub const MAX_ENTITIES: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{what} count must not be negative (got {value})")]
    NegativeCount { what: &'static str, value: i64 },
    #[error("{what} count {value} exceeds the maximum of {max}")]
    TooMany {
        what: &'static str,
        value: i64,
        max: usize,
    },
    #[error("at least one scooter is required")]
    NoTargets,
    #[error("invalid field: {0}")]
    InvalidField(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub level: Level,
    pub num_targets: usize,
    pub num_hazards: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            level: Level::Normal,
            num_targets: DEFAULT_TARGETS,
            num_hazards: DEFAULT_HAZARDS,
        }
    }
}

impl GameConfig {
    /// Build a config from raw, possibly negative, user-supplied counts.
    pub fn from_counts(level: Level, num_targets: i64, num_hazards: i64) -> Result<Self, ConfigError> {
        let config = GameConfig {
            level,
            num_targets: checked_count("scooter", num_targets)?,
            num_hazards: checked_count("student", num_hazards)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_targets == 0 {
            return Err(ConfigError::NoTargets);
        }
        for (what, n) in [("scooter", self.num_targets), ("student", self.num_hazards)] {
            if n > MAX_ENTITIES {
                return Err(ConfigError::TooMany {
                    what,
                    value: n as i64,
                    max: MAX_ENTITIES,
                });
            }
        }
        Ok(())
    }
}

fn checked_count(what: &'static str, value: i64) -> Result<usize, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeCount { what, value });
    }
    match usize::try_from(value) {
        Ok(n) if n <= MAX_ENTITIES => Ok(n),
        _ => Err(ConfigError::TooMany {
            what,
            value,
            max: MAX_ENTITIES,
        }),
    }
}
