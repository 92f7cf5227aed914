use crate::domain::ports::StoreOptions;
use std::time::Duration;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_PRICE_CLASS: &str = "product-price";
pub const DEFAULT_NAME_CLASS: &str = "card-title";
pub const DEFAULT_HIDDEN_CLASS: &str = "d-none";
pub const DEFAULT_TOAST_VISIBLE_MS: u64 = 3000;
pub const DEFAULT_TOAST_FADE_MS: u64 = 500;

/// The storefront's hard-coded page conventions. Used directly in tests and
/// as the baseline both config front-ends start from.
#[derive(Debug, Clone)]
pub struct DefaultOptions {
    pub currency_symbol: String,
    pub price_class: String,
    pub name_class: String,
    pub hidden_class: String,
    pub toast_visible_ms: u64,
    pub toast_fade_ms: u64,
}

impl Default for DefaultOptions {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            price_class: DEFAULT_PRICE_CLASS.to_string(),
            name_class: DEFAULT_NAME_CLASS.to_string(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_string(),
            toast_visible_ms: DEFAULT_TOAST_VISIBLE_MS,
            toast_fade_ms: DEFAULT_TOAST_FADE_MS,
        }
    }
}

impl StoreOptions for DefaultOptions {
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
