use crate::page::NodeId;
use serde::{Deserialize, Serialize};

/// User-selected ordering strategy for the product listing.
///
/// `Newest` doubles as the fallback: an unrecognized selector value must leave
/// the listing in its natural insertion order rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortMode {
    /// Parses a sort-select value. Unknown values fall back to [`SortMode::Newest`].
    pub fn from_value(value: &str) -> Self {
        match value {
            "priceAsc" => SortMode::PriceAsc,
            "priceDesc" => SortMode::PriceDesc,
            "nameAsc" => SortMode::NameAsc,
            "nameDesc" => SortMode::NameDesc,
            "newest" => SortMode::Newest,
            other => {
                tracing::debug!("Unknown sort mode '{}', keeping insertion order", other);
                SortMode::Newest
            }
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PriceAsc => "priceAsc",
            SortMode::PriceDesc => "priceDesc",
            SortMode::NameAsc => "nameAsc",
            SortMode::NameDesc => "nameDesc",
        }
    }
}

/// Comparable view of one catalog entry, extracted fresh from the page for
/// every sort. The wrapper node is the unit that moves during a reflow.
#[derive(Debug, Clone)]
pub struct ItemRecord {
    pub node: NodeId,
    /// Currency-stripped price; `NaN` when the price text was missing or
    /// unparseable, which sorts after every valid price.
    pub price: f64,
    pub name: String,
}

/// Lifecycle of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    Visible,
    Fading,
    Removed,
}

/// One catalog entry as delivered by the page-rendering collaborator.
///
/// The price is the display text (currency symbol included) because the core
/// contract is to parse what the page shows, not a clean numeric feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub species: Option<String>,
}
