use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{PrecedenceMode, SortingOptions};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub sorting: SortingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct SortingSettings {
    #[serde(default = "default_students_per_class")]
    pub students_per_class: usize,
    #[serde(default = "default_min_classes")]
    pub min_classes: usize,
    #[serde(default = "default_max_classes")]
    pub max_classes: usize,
    #[serde(default)]
    pub default_precedence: PrecedenceMode,
}

impl Default for SortingSettings {
    fn default() -> Self {
        Self {
            students_per_class: default_students_per_class(),
            min_classes: default_min_classes(),
            max_classes: default_max_classes(),
            default_precedence: PrecedenceMode::default(),
        }
    }
}

impl SortingSettings {
    pub fn options(&self) -> SortingOptions {
        SortingOptions {
            students_per_class: self.students_per_class.max(1),
            min_classes: self.min_classes.max(1),
        }
    }
}

fn default_students_per_class() -> usize { 25 }
fn default_min_classes() -> usize { 2 }
fn default_max_classes() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CLASS_SORTER)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CLASS_SORTER__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CLASS_SORTER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_sorting() {
        let sorting = SortingSettings::default();
        assert_eq!(sorting.students_per_class, 25);
        assert_eq!(sorting.min_classes, 2);
        assert_eq!(sorting.max_classes, 100);
        assert_eq!(sorting.default_precedence, PrecedenceMode::Student);
        assert_eq!(sorting.options(), SortingOptions::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_partial_toml() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "[sorting]\nmin_classes = 3\ndefault_precedence = \"teacher\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.sorting.min_classes, 3);
        assert_eq!(settings.sorting.students_per_class, 25);
        assert_eq!(settings.sorting.default_precedence, PrecedenceMode::Teacher);
        assert_eq!(settings.server.port, 8080);
    }
}
