//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a product.
///
/// Opaque: product ids come straight from the storefront markup
/// (`data-product-id`) and carry no internal structure. The only rule is
/// that an id is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_opaque_value() {
        let id = ProductId::new("sku-0042").unwrap();
        assert_eq!(id.as_str(), "sku-0042");
        assert_eq!(id.to_string(), "sku-0042");
    }

    #[test]
    fn rejects_empty_and_blank_ids() {
        assert!(ProductId::new("").is_err());
        assert!(ProductId::new("   ").is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let id = ProductId::new("sku1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"sku1\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
