use crate::config::defaults;
use crate::domain::ports::StoreOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_config, validate_positive_millis, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File-based configuration, the alternative front-end to the CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_price_class")]
    pub price_class: String,
    #[serde(default = "default_name_class")]
    pub name_class: String,
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_toast_visible_ms")]
    pub visible_ms: u64,
    #[serde(default = "default_toast_fade_ms")]
    pub fade_ms: u64,
}

fn default_currency_symbol() -> String {
    defaults::DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_price_class() -> String {
    defaults::DEFAULT_PRICE_CLASS.to_string()
}

fn default_name_class() -> String {
    defaults::DEFAULT_NAME_CLASS.to_string()
}

fn default_hidden_class() -> String {
    defaults::DEFAULT_HIDDEN_CLASS.to_string()
}

fn default_toast_visible_ms() -> u64 {
    defaults::DEFAULT_TOAST_VISIBLE_MS
}

fn default_toast_fade_ms() -> u64 {
    defaults::DEFAULT_TOAST_FADE_MS
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            price_class: default_price_class(),
            name_class: default_name_class(),
            hidden_class: default_hidden_class(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            visible_ms: default_toast_visible_ms(),
            fade_ms: default_toast_fade_ms(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl StoreOptions for TomlConfig {
    fn currency_symbol(&self) -> &str {
        &self.listing.currency_symbol
    }

    fn price_class(&self) -> &str {
        &self.listing.price_class
    }

    fn name_class(&self) -> &str {
        &self.listing.name_class
    }

    fn hidden_class(&self) -> &str {
        &self.listing.hidden_class
    }

    fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast.visible_ms)
    }

    fn toast_fade(&self) -> Duration {
        Duration::from_millis(self.toast.fade_ms)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_config("listing.currency_symbol", &self.listing.currency_symbol)?;
        validate_non_empty_config("listing.price_class", &self.listing.price_class)?;
        validate_non_empty_config("listing.name_class", &self.listing.name_class)?;
        validate_non_empty_config("listing.hidden_class", &self.listing.hidden_class)?;
        validate_positive_millis("toast.visible_ms", self.toast.visible_ms)?;
        validate_positive_millis("toast.fade_ms", self.toast.fade_ms)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn minimal_file_fills_in_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "catalog = \"catalog.json\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.catalog.as_deref(), Some("catalog.json"));
        assert_eq!(config.currency_symbol(), "$");
        assert_eq!(config.price_class(), "product-price");
        assert_eq!(config.toast_visible(), Duration::from_millis(3000));
        assert_eq!(config.toast_fade(), Duration::from_millis(500));
    }

    #[test]
    fn sections_override_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[listing]\ncurrency_symbol = \"£\"\n\n[toast]\nvisible_ms = 1000\nfade_ms = 100"
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.currency_symbol(), "£");
        assert_eq!(config.toast_visible(), Duration::from_millis(1000));
        assert_eq!(config.toast_fade(), Duration::from_millis(100));
    }

    #[test]
    fn zero_duration_fails_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[toast]\nvisible_ms = 0").unwrap();

        assert!(TomlConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn empty_class_fails_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[listing]\nprice_class = \"\"").unwrap();

        assert!(TomlConfig::from_file(file.path()).is_err());
    }
}
