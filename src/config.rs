//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving field defaults in TOML
//! format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::adapters::{ColorFieldConfig, MoneyFieldConfig};
use crate::constants::{
    APP_NAME, CONFIG_DIR_ENV, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMAL_SEPARATOR,
    DEFAULT_MAX_FILES, DEFAULT_THOUSAND_SEPARATOR,
};
use crate::models::{ColorFormat, ColorPreset, PresetCatalog, Separators};
use crate::services::{AcceptList, MoneyFormatter, UploadPolicy};

/// Money field defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyConfig {
    /// Decimal separator (single character)
    pub decimal_separator: String,
    /// Thousands separator (single character)
    pub thousand_separator: String,
    /// Currency symbol shown before the amount
    pub currency_symbol: String,
    /// Whether a typed `-` makes the amount negative
    pub allow_negative: bool,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR.to_string(),
            thousand_separator: DEFAULT_THOUSAND_SEPARATOR.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            allow_negative: false,
        }
    }
}

impl MoneyConfig {
    /// Validated separator pair.
    pub fn separators(&self) -> Result<Separators> {
        Separators::parse(&self.decimal_separator, &self.thousand_separator)
            .context("Invalid money separators")
    }
}

/// Color field defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ColorConfig {
    /// Output format ("hex", "rgb", or "hsl")
    pub format: ColorFormat,
    /// Whether alpha is emitted
    pub show_alpha: bool,
    /// Custom swatches; the embedded catalog is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<ColorPreset>>,
}

/// Upload field defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Accepted types (e.g., "image/*,.pdf")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    /// Size cap in bytes (0 = unlimited)
    pub max_size: u64,
    /// Maximum number of files
    pub max_files: usize,
    /// Whether the field holds a list
    pub multiple: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accept: None,
            max_size: 0,
            max_files: DEFAULT_MAX_FILES,
            multiple: false,
        }
    }
}

/// Application configuration.
///
/// Stored at:
/// - `$FIELDKIT_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/fieldkit/config.toml`
/// - macOS: `~/Library/Application Support/fieldkit/config.toml`
/// - Windows: `%APPDATA%\fieldkit\config.toml`
///
/// # Validation
///
/// - separators must each be one non-digit character and must differ
/// - `max_files` must be at least 1
/// - preset values must be hex colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Money field defaults
    pub money: MoneyConfig,
    /// Color field defaults
    pub color: ColorConfig,
    /// Upload field defaults
    pub upload: UploadConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// `FIELDKIT_CONFIG_DIR` wins when set; otherwise the platform config
    /// directory joined with the application name.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        info!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        info!(path = %config_path.display(), "saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.money.separators()?;

        if self.upload.max_files == 0 {
            anyhow::bail!("upload.max_files must be at least 1");
        }

        if let Some(presets) = &self.color.presets {
            for preset in presets {
                if !crate::services::is_valid_hex_color(&preset.value) {
                    anyhow::bail!(
                        "Preset '{}' has an invalid color '{}'. Expected #RRGGBB or #RGB",
                        preset.label,
                        preset.value
                    );
                }
            }
        }

        Ok(())
    }

    /// Money formatter for the configured separators and symbol.
    pub fn money_formatter(&self) -> Result<MoneyFormatter> {
        Ok(MoneyFormatter::new(
            self.money.separators()?,
            self.money.currency_symbol.clone(),
        ))
    }

    /// Money field adapter configuration.
    pub fn money_field(&self) -> Result<MoneyFieldConfig> {
        Ok(MoneyFieldConfig {
            separators: self.money.separators()?,
            currency_symbol: self.money.currency_symbol.clone(),
            allow_negative: self.money.allow_negative,
        })
    }

    /// Configured presets, or the embedded catalog.
    #[must_use]
    pub fn preset_catalog(&self) -> PresetCatalog {
        self.color
            .presets
            .clone()
            .map_or_else(PresetCatalog::default, PresetCatalog::new)
    }

    /// Color field adapter configuration.
    #[must_use]
    pub fn color_field(&self) -> ColorFieldConfig {
        ColorFieldConfig {
            format: self.color.format,
            show_alpha: self.color.show_alpha,
            presets: self.preset_catalog(),
            disabled: false,
        }
    }

    /// Upload limits.
    #[must_use]
    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            accept: self.upload.accept.as_deref().map(AcceptList::parse),
            max_size: Some(self.upload.max_size),
            max_files: self.upload.max_files,
            multiple: self.upload.multiple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.money.decimal_separator, ",");
        assert_eq!(config.money.thousand_separator, ".");
        assert_eq!(config.money.currency_symbol, "R$");
        assert!(!config.money.allow_negative);
        assert_eq!(config.color.format, ColorFormat::Hex);
        assert!(!config.color.show_alpha);
        assert_eq!(config.upload.max_files, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_separators() {
        let mut config = Config::new();
        config.money.thousand_separator = ",".to_string();
        assert!(config.validate().is_err());

        config.money.thousand_separator = "..".to_string();
        assert!(config.validate().is_err());

        config.money.thousand_separator = String::new();
        assert!(config.validate().is_err());

        config.money.thousand_separator = " ".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_presets_and_limits() {
        let mut config = Config::new();
        config.color.presets = Some(vec![ColorPreset::new("Bad", "red", None)]);
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.upload.max_files = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.money.currency_symbol = "$".to_string();
        config.color.format = ColorFormat::Hsl;
        config.upload.accept = Some("image/*".to_string());
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_config_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[money]\ncurrency_symbol = \"€\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.money.currency_symbol, "€");
        assert_eq!(loaded.money.decimal_separator, ",");
        assert_eq!(loaded.upload, UploadConfig::default());
    }

    #[test]
    fn test_config_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[money]\ndecimal_separator = \".\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());

        fs::write(&config_file, "[color]\nformat = \"cmyk\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_config_derived_settings() {
        let mut config = Config::new();
        config.upload.accept = Some(".pdf".to_string());
        config.upload.max_size = 1024;
        config.color.show_alpha = true;

        let policy = config.upload_policy();
        assert_eq!(policy.max_size, Some(1024));
        assert_eq!(policy.accept.map(|a| a.as_str().to_string()).as_deref(), Some(".pdf"));

        assert!(config.color_field().show_alpha);
        assert_eq!(config.preset_catalog().len(), 20);

        let formatter = config.money_formatter().unwrap();
        assert_eq!(formatter.format_with_symbol(Some(1.5)), "R$ 1,50");
    }
}
