pub mod defaults;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::StoreOptions;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_config, validate_positive_millis, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
use defaults::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_HIDDEN_CLASS, DEFAULT_NAME_CLASS, DEFAULT_PRICE_CLASS,
    DEFAULT_TOAST_FADE_MS, DEFAULT_TOAST_VISIBLE_MS,
};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-ui")]
#[command(about = "Storefront listing sort and notification demo")]
pub struct CliConfig {
    /// Catalog JSON file; a built-in sample is used when absent.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Sort-select value; unknown values keep the insertion order.
    #[arg(long, default_value = "newest")]
    pub sort: String,

    /// Write the resulting order as CSV to this path.
    #[arg(long)]
    pub export_csv: Option<String>,

    /// Client-side species filter applied after sorting.
    #[arg(long)]
    pub species: Option<String>,

    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    pub currency_symbol: String,

    #[arg(long, default_value = DEFAULT_PRICE_CLASS)]
    pub price_class: String,

    #[arg(long, default_value = DEFAULT_NAME_CLASS)]
    pub name_class: String,

    #[arg(long, default_value = DEFAULT_HIDDEN_CLASS)]
    pub hidden_class: String,

    #[arg(long, default_value_t = DEFAULT_TOAST_VISIBLE_MS)]
    pub toast_visible_ms: u64,

    #[arg(long, default_value_t = DEFAULT_TOAST_FADE_MS)]
    pub toast_fade_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl StoreOptions for CliConfig {
    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn price_class(&self) -> &str {
        &self.price_class
    }

    fn name_class(&self) -> &str {
        &self.name_class
    }

    fn hidden_class(&self) -> &str {
        &self.hidden_class
    }

    fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    fn toast_fade(&self) -> Duration {
        Duration::from_millis(self.toast_fade_ms)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_config("currency_symbol", &self.currency_symbol)?;
        validate_non_empty_config("price_class", &self.price_class)?;
        validate_non_empty_config("name_class", &self.name_class)?;
        validate_non_empty_config("hidden_class", &self.hidden_class)?;
        validate_positive_millis("toast_visible_ms", self.toast_visible_ms)?;
        validate_positive_millis("toast_fade_ms", self.toast_fade_ms)?;
        Ok(())
    }
}
