//! Persisted cart rows.

use serde::{Deserialize, Serialize};

use luxfinds_core::{ProductId, Quantity};

use crate::product::ProductDetails;

/// One row in the persisted cart.
///
/// `id` is the natural key: at most one row per product. `quantity` is always
/// at least 1 in persisted state; a row whose quantity would drop to zero is
/// deleted instead. The display fields are an optional snapshot captured at
/// first add; there is no catalog to re-fetch them from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price in minor units. Rows added by bare id have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LineItem {
    /// Row holding identifier and quantity only.
    pub fn bare(id: ProductId, quantity: Quantity) -> Self {
        Self {
            id,
            quantity: quantity.get(),
            name: None,
            price: None,
            image_url: None,
        }
    }

    /// Row with the full display snapshot.
    pub fn with_snapshot(product: &ProductDetails, quantity: Quantity) -> Self {
        Self {
            id: product.id().clone(),
            quantity: quantity.get(),
            name: Some(product.name().to_owned()),
            price: Some(product.price().minor_units()),
            image_url: Some(product.image_url().to_owned()),
        }
    }

    /// `price * quantity` for this row; rows without a price count as zero.
    pub fn subtotal(&self) -> u64 {
        self.price
            .unwrap_or(0)
            .saturating_mul(u64::from(self.quantity))
    }
}
