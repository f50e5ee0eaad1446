//! Larder Core - grocery catalog items and the in-memory item store

pub mod category;
pub mod item;
pub mod store;

pub use category::{GroceryCategory, UnknownCategory};
pub use item::{GroceryItem, ItemCandidate, ItemId};
pub use store::ItemStore;
