//! Configuration management for Strand.
//!
//! Parses `strand.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Values in `[fill.values]` support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "strand.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override strict slicing.
    pub strict: Option<bool>,
    /// Override strict placeholder filling.
    pub fill_strict: Option<bool>,
    /// Override debug rendering of embedding marks.
    pub debug_marks: Option<bool>,
    /// Extra placeholder values; these replace configured values of the same key.
    pub values: Vec<(String, String)>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bidi slicing configuration.
    pub bidi: BidiConfig,
    /// Placeholder fill configuration.
    pub fill: FillConfig,
    /// Output configuration.
    pub output: OutputConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Bidi slicing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BidiConfig {
    /// Report invalid slice arguments instead of clamping them.
    pub strict: bool,
}

impl Default for BidiConfig {
    fn default() -> Self {
        Self {
            strict: cfg!(debug_assertions),
        }
    }
}

/// Placeholder fill configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Fail on placeholders that have no value.
    pub strict: bool,
    /// Default placeholder values, keyed by name without braces.
    pub values: BTreeMap<String, String>,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Render embedding marks as `[LTR]`, `[RTL]` and `[POP]`.
    pub debug_marks: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { debug_marks: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`fill.values.user`").
        field: String,
        /// Error message (e.g., "${`USER`} not set").
        message: String,
    },
}

/// Check that `key` can appear inside a `{{key}}` placeholder.
///
/// # Errors
///
/// Returns `ConfigError::Validation` if the key is empty or contains braces.
pub fn validate_placeholder_key(key: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::Validation(
            "placeholder key cannot be empty".to_owned(),
        ));
    }
    if key.contains(['{', '}']) {
        return Err(ConfigError::Validation(format!(
            "placeholder key {key:?} cannot contain braces"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `strand.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading, taking precedence over config
    /// file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(strict) = settings.strict {
            self.bidi.strict = strict;
        }
        if let Some(fill_strict) = settings.fill_strict {
            self.fill.strict = fill_strict;
        }
        if let Some(debug_marks) = settings.debug_marks {
            self.output.debug_marks = debug_marks;
        }
        for (key, value) in &settings.values {
            self.fill.values.insert(key.clone(), value.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a placeholder key is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in self.fill.values.keys() {
            validate_placeholder_key(key)?;
        }
        Ok(())
    }

    /// Expand environment variable references in placeholder values.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for (key, value) in &mut self.fill.values {
            *value = expand::expand_env(value, &format!("fill.values.{key}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bidi.strict, cfg!(debug_assertions));
        assert!(!config.fill.strict);
        assert!(config.fill.values.is_empty());
        assert!(config.output.debug_marks);
        assert_eq!(config.config_path, None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.bidi.strict, cfg!(debug_assertions));
        assert!(config.output.debug_marks);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[bidi]
strict = false

[fill]
strict = true

[fill.values]
name = "World"
count = "3"

[output]
debug_marks = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.bidi.strict);
        assert!(config.fill.strict);
        assert_eq!(config.fill.values.get("name").map(String::as_str), Some("World"));
        assert_eq!(config.fill.values.get("count").map(String::as_str), Some("3"));
        assert!(!config.output.debug_marks);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[fill.values]\nplanet = \"Mars\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.fill.values.get("planet").map(String::as_str), Some("Mars"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[bidi\nstrict = ").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_key_with_braces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[fill.values]\n\"a{b\" = \"x\"\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("STRAND_TEST_CONFIG_USER", "ada");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let toml = r#"
[fill.values]
user = "${STRAND_TEST_CONFIG_USER}"
place = "${STRAND_TEST_CONFIG_PLACE:-home}"
"#;
        std::fs::write(&path, toml).unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.fill.values.get("user").map(String::as_str), Some("ada"));
        assert_eq!(config.fill.values.get("place").map(String::as_str), Some("home"));

        unsafe {
            std::env::remove_var("STRAND_TEST_CONFIG_USER");
        }
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        config.fill.values.insert("name".to_owned(), "file".to_owned());

        let settings = CliSettings {
            strict: Some(true),
            fill_strict: Some(true),
            debug_marks: Some(false),
            values: vec![
                ("name".to_owned(), "cli".to_owned()),
                ("extra".to_owned(), "1".to_owned()),
            ],
        };
        config.apply_cli_settings(&settings);

        assert!(config.bidi.strict);
        assert!(config.fill.strict);
        assert!(!config.output.debug_marks);
        assert_eq!(config.fill.values.get("name").map(String::as_str), Some("cli"));
        assert_eq!(config.fill.values.get("extra").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.bidi.strict, cfg!(debug_assertions));
        assert!(config.output.debug_marks);
    }

    #[test]
    fn test_validate_placeholder_key() {
        assert!(validate_placeholder_key("name").is_ok());
        assert!(validate_placeholder_key("with space").is_ok());
        assert!(validate_placeholder_key("").is_err());
        assert!(validate_placeholder_key("a}").is_err());
    }
}
