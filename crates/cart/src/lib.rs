//! Shopping cart domain module.
//!
//! The cart is deliberately not an aggregate with history: it is a plain
//! read-modify-write store over a single serialized slot in a key/value
//! store. Every operation reloads the persisted rows, mutates them,
//! persists the full sequence, and republishes the badge count.

pub mod line_item;
pub mod product;
pub mod store;

pub use line_item::LineItem;
pub use product::ProductDetails;
pub use store::{CART_STORAGE_KEY, CartStore, CountSink, NullSink};
