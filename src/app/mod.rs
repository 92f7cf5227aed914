pub mod donation;
pub mod storefront;

pub use storefront::{ElementRole, Event, EventKind, Storefront};
