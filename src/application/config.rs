use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::presets;

/// Default pause between generations
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Where the first generation comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitialPattern {
    /// Random fill; `seed` of `None` means the caller picks a fresh one
    Random {
        rows: usize,
        cols: usize,
        alive_percentage: u8,
        seed: Option<u64>,
    },
    /// Pattern file on disk
    File(PathBuf),
    /// Named preset centred on an empty grid
    Preset {
        name: String,
        rows: usize,
        cols: usize,
    },
}

/// Everything a run needs, collected from the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub initial: InitialPattern,
    pub generations: u64,
    pub delay: Duration,
    pub stop_when_stable: bool,
}

impl RunConfig {
    /// Reject input the engine is allowed to assume is valid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generations == 0 {
            return Err(invalid("number of generations must be a positive integer"));
        }
        match &self.initial {
            InitialPattern::Random {
                rows,
                cols,
                alive_percentage,
                ..
            } => {
                check_dimensions(*rows, *cols)?;
                if *alive_percentage > 100 {
                    return Err(invalid(format!(
                        "alive percentage {alive_percentage} must be between 0 and 100"
                    )));
                }
            }
            InitialPattern::File(path) => {
                if path.as_os_str().is_empty() {
                    return Err(invalid("pattern path must not be empty"));
                }
            }
            InitialPattern::Preset { name, rows, cols } => {
                check_dimensions(*rows, *cols)?;
                if presets::by_name(name).is_none() {
                    return Err(invalid(format!("unknown preset `{name}`")));
                }
            }
        }
        Ok(())
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(invalid(format!(
            "dimensions {rows}x{cols} invalid: rows and columns must be positive integers"
        )));
    }
    if rows.checked_mul(cols).is_none() {
        return Err(invalid(format!("dimensions {rows}x{cols} are too large")));
    }
    Ok(())
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfiguration(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random(rows: usize, cols: usize, alive_percentage: u8) -> RunConfig {
        RunConfig {
            initial: InitialPattern::Random {
                rows,
                cols,
                alive_percentage,
                seed: None,
            },
            generations: 10,
            delay: DEFAULT_DELAY,
            stop_when_stable: false,
        }
    }

    #[test]
    fn test_valid_random_config() {
        assert_eq!(random(20, 40, 0).validate(), Ok(()));
        assert_eq!(random(1, 1, 100).validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(random(0, 5, 30).validate().is_err());
        assert!(random(5, 0, 30).validate().is_err());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert!(matches!(
            random(usize::MAX, 2, 30).validate(),
            Err(ConfigError::InvalidConfiguration(msg)) if msg.contains("too large")
        ));
        let preset = RunConfig {
            initial: InitialPattern::Preset {
                name: "block".to_owned(),
                rows: 2,
                cols: usize::MAX,
            },
            ..random(5, 5, 30)
        };
        assert!(preset.validate().is_err());
    }

    #[test]
    fn test_rejects_percentage_over_100() {
        assert!(random(5, 5, 101).validate().is_err());
    }

    #[test]
    fn test_rejects_zero_generations() {
        let config = RunConfig {
            generations: 0,
            ..random(5, 5, 30)
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_must_exist() {
        let mut config = RunConfig {
            initial: InitialPattern::Preset {
                name: "glider".to_owned(),
                rows: 10,
                cols: 10,
            },
            ..random(5, 5, 30)
        };
        assert_eq!(config.validate(), Ok(()));

        config.initial = InitialPattern::Preset {
            name: "nope".to_owned(),
            rows: 10,
            cols: 10,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfiguration(msg)) if msg.contains("nope")
        ));
    }
}
