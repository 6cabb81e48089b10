use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub obstacles: ObstacleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
}

/// Obstacle count range for random boards, both ends inclusive
#[derive(Debug, Clone, Deserialize)]
pub struct ObstacleConfig {
    #[serde(default = "default_obstacle_min")]
    pub min: usize,
    #[serde(default = "default_obstacle_max")]
    pub max: usize,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// env_logger filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_rows() -> i32 { 8 }
fn default_cols() -> i32 { 8 }
fn default_obstacle_min() -> usize { 8 }
fn default_obstacle_max() -> usize { 16 }
fn default_log_level() -> String { "info".to_string() }

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            min: default_obstacle_min(),
            max: default_obstacle_max(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            obstacles: ObstacleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, PartialEq)]
pub enum ConfigSource {
    File,
    /// No file at the given path
    Missing,
    /// File present but unparsable; carries the parser message
    Invalid(String),
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration from file, or use defaults if it is missing or malformed
    ///
    /// Logging is usually not initialised yet when this runs, so the outcome is
    /// returned for the caller to report.
    pub fn load(path: &Path) -> (Self, ConfigSource) {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(config) => (config, ConfigSource::File),
                Err(e) => (Config::default(), ConfigSource::Invalid(e.to_string())),
            },
            Err(_) => (Config::default(), ConfigSource::Missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("[board]\nrows = 12\n").unwrap();
        assert_eq!(config.board.rows, 12);
        assert_eq!(config.board.cols, 8);
        assert_eq!(config.obstacles.min, 8);
        assert_eq!(config.obstacles.max, 16);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_malformed_file_rejected() {
        assert!(Config::from_toml("[board]\nrows = \"many\"\n").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (config, source) = Config::load(Path::new("definitely/not/here/config.toml"));
        assert_eq!(source, ConfigSource::Missing);
        assert_eq!(config.board.rows, 8);
    }
}
