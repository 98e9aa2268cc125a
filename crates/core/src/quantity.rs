//! Positive quantity with product-page stepper arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// How many units of a product: always at least 1.
///
/// A quantity of zero is not a valid value; "zero of something" is expressed
/// by removing the cart row instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Self = Self(1);

    pub fn new(count: u32) -> DomainResult<Self> {
        if count == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        Ok(Self(count))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Stepper "+": no upper bound is enforced, saturating at `u32::MAX`.
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Stepper "-": clamps at 1. The quantity input never shows zero.
    pub const fn decrement(self) -> Self {
        if self.0 > 1 { Self(self.0 - 1) } else { self }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
