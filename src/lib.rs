pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod page;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::{ElementRole, Event, EventKind, Storefront};
pub use crate::config::defaults::DefaultOptions;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::toast::ToastScheduler;
pub use crate::domain::model::{CatalogItem, ItemRecord, NotificationState, SortMode};
pub use crate::domain::ports::{Clock, Delay, StoreOptions, SystemClock, TokioDelay};
pub use crate::page::{Document, NodeId};
pub use crate::utils::error::{Result, UiError};
