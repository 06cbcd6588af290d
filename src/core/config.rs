//! Configuration management

use crate::core::{Error, Result};
use crate::pricing::TariffCategory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub usage: UsageConfig,
    #[serde(default)]
    pub advanced: AdvancedConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("powercost-calculator").join("config.toml"))
    }

    /// Load configuration from the default location, creating it on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            log::info!("Created default configuration at {}", path.display());
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "id"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tariff category from the fixed schedule
    #[serde(default)]
    pub tariff: TariffCategory,
    /// User-supplied rate per kWh, wins over the schedule when it differs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rate: Option<f64>,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String { "Rp".to_string() }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tariff: TariffCategory::default(),
            custom_rate: None,
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Defaults offered by the device form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Mains voltage used for V x A power
    #[serde(default = "default_voltage")]
    pub default_voltage: f64,
    /// Initial hours per day for slider and custom entry
    #[serde(default = "default_hours")]
    pub default_hours: f64,
    /// Initial day count for a custom period
    #[serde(default = "default_custom_days")]
    pub default_custom_days: u32,
}

fn default_voltage() -> f64 { 220.0 }
fn default_hours() -> f64 { 8.0 }
fn default_custom_days() -> u32 { 30 }

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            default_voltage: default_voltage(),
            default_hours: default_hours(),
            default_custom_days: default_custom_days(),
        }
    }
}

/// Advanced settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedConfig {
    /// Total cost above which saving tips are shown
    #[serde(default = "default_tip_threshold")]
    pub savings_tip_threshold: f64,
    /// Width of the longest bar in text charts
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_tip_threshold() -> f64 { 500_000.0 }
fn default_chart_width() -> usize { 40 }

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            savings_tip_threshold: default_tip_threshold(),
            chart_width: default_chart_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.pricing.tariff, TariffCategory::Household1300Va);
        assert_eq!(config.pricing.custom_rate, None);
        assert_eq!(config.usage.default_voltage, 220.0);
        assert_eq!(config.advanced.savings_tip_threshold, 500_000.0);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [pricing]
            tariff = "r1-900va"
            custom_rate = 1500.0
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.tariff, TariffCategory::Household900Va);
        assert_eq!(config.pricing.custom_rate, Some(1500.0));
        assert_eq!(config.pricing.currency_symbol, "Rp");
        assert_eq!(config.usage.default_hours, 8.0);
        assert_eq!(config.advanced.chart_width, 40);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.general.language = "id".to_string();
        config.pricing.tariff = TariffCategory::Medium3500Va;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.general.language, "id");
        assert_eq!(loaded.pricing.tariff, TariffCategory::Medium3500Va);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pricing]\ntariff = 12").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
