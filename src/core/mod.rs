pub mod comparator;
pub mod extract;
pub mod filter;
pub mod reflow;
pub mod toast;

pub use crate::domain::model::{CatalogItem, ItemRecord, NotificationState, SortMode};
pub use crate::domain::ports::{Clock, Delay, StoreOptions};
pub use crate::utils::error::Result;
