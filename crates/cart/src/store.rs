//! Storage-backed cart store.

use luxfinds_core::{ProductId, Quantity};
use luxfinds_storage::KeyValueStore;

use crate::line_item::LineItem;
use crate::product::ProductDetails;

/// Storage key holding the entire serialized cart.
pub const CART_STORAGE_KEY: &str = "luxfinds_cart";

/// Receives the aggregate quantity whenever the cart changes.
///
/// The contract of the header badge: given a non-negative total, render it.
/// Which element shows it is the page layer's business.
pub trait CountSink {
    fn publish(&self, total: u64);
}

/// Sink that drops the count (headless embedding, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl CountSink for NullSink {
    fn publish(&self, _total: u64) {}
}

/// The cart store: sole writer of the cart's storage slot.
///
/// Every operation is a full read-modify-write cycle against the injected
/// store; nothing is cached across calls, so persisted state stays the single
/// source of truth. A stored value that fails to deserialize degrades to an
/// empty cart; a failed write is logged and leaves the previous value in
/// place. No operation panics or surfaces an error to the page layer.
pub struct CartStore<S> {
    storage: S,
    key: String,
    sink: Box<dyn CountSink>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Store under the default key with the given display sink.
    pub fn new(storage: S, sink: impl CountSink + 'static) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY, sink)
    }

    /// Store under an explicit key (one cart per key).
    pub fn with_key(storage: S, key: impl Into<String>, sink: impl CountSink + 'static) -> Self {
        Self {
            storage,
            key: key.into(),
            sink: Box::new(sink),
        }
    }

    /// Current cart rows, in insertion order.
    ///
    /// Absent state is an empty cart. Unreadable or corrupt state is logged
    /// and also treated as empty: the cart fails open, never with a crash.
    pub fn items(&self) -> Vec<LineItem> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "cart storage read failed; treating cart as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "stored cart is not valid JSON; treating cart as empty");
                Vec::new()
            }
        }
    }

    /// Add `quantity` of a product by bare identifier.
    ///
    /// Merges into an existing row (quantities add, saturating, with no upper
    /// bound) or appends a new row without display fields.
    pub fn add_item(&self, id: &ProductId, quantity: Quantity) {
        let mut items = self.items();
        match items.iter_mut().find(|item| item.id == *id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity.get()),
            None => items.push(LineItem::bare(id.clone(), quantity)),
        }
        self.save(&items);
    }

    /// Add a product with its display snapshot.
    ///
    /// On first insertion the name/price/image are captured into the row. A
    /// repeat add only increments the quantity; the stored snapshot is not
    /// refreshed, so the price at the time of first add wins.
    pub fn add_product(&self, product: &ProductDetails, quantity: Quantity) {
        let mut items = self.items();
        match items.iter_mut().find(|item| item.id == *product.id()) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity.get()),
            None => items.push(LineItem::with_snapshot(product, quantity)),
        }
        self.save(&items);
    }

    /// Remove a row by identifier. An unknown identifier is a no-op.
    pub fn remove_item(&self, id: &ProductId) {
        let mut items = self.items();
        items.retain(|item| item.id != *id);
        self.save(&items);
    }

    /// Set a row's quantity to an absolute value.
    ///
    /// Zero (or less, at the caller's edge) deletes the row entirely; the
    /// persisted cart never holds a zero-quantity row. An unknown identifier
    /// is a no-op.
    pub fn update_item_quantity(&self, id: &ProductId, new_quantity: u32) {
        let mut items = self.items();
        let Some(pos) = items.iter().position(|item| item.id == *id) else {
            return;
        };
        if new_quantity == 0 {
            items.remove(pos);
        } else if let Some(item) = items.get_mut(pos) {
            item.quantity = new_quantity;
        }
        self.save(&items);
    }

    /// Empty the cart by removing the storage entry itself.
    ///
    /// Afterwards the key no longer exists, which reads back as an empty
    /// cart.
    pub fn clear(&self) {
        if let Err(err) = self.storage.remove(&self.key) {
            tracing::error!(key = %self.key, error = %err, "failed to remove cart storage entry");
            return;
        }
        self.publish_count();
    }

    /// Sum of `price * quantity` over all rows.
    ///
    /// Rows without a price snapshot count as zero. Pure read; mutates
    /// nothing.
    pub fn total(&self) -> u64 {
        self.items()
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.subtotal()))
    }

    /// Recompute the aggregate quantity and push it to the display sink.
    ///
    /// Idempotent, with no side effect beyond the sink write; callable
    /// without a prior mutation (page load republishes the current total).
    pub fn publish_count(&self) {
        let total = self
            .items()
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(u64::from(item.quantity)));
        self.sink.publish(total);
    }

    fn save(&self, items: &[LineItem]) {
        let payload = match serde_json::to_string(items) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(key = %self.key, error = %err, "failed to serialize cart; previous value kept");
                return;
            }
        };
        if let Err(err) = self.storage.set(&self.key, &payload) {
            tracing::error!(key = %self.key, error = %err, "failed to persist cart; previous value kept");
            return;
        }
        self.publish_count();
    }
}
