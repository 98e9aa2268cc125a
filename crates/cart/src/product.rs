//! Typed product reference handed to the cart by the page layer.

use luxfinds_core::{DomainError, DomainResult, Price, ProductId, ValueObject};

/// Product attributes captured at add-to-cart time.
///
/// The page layer builds one of these from its markup (and shows its own
/// notice when extraction fails), so incomplete product data never reaches
/// the store. The values are a snapshot, not a live catalog reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    id: ProductId,
    name: String,
    price: Price,
    image_url: String,
}

impl ProductDetails {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name is empty"));
        }
        let image_url = image_url.into();
        if image_url.trim().is_empty() {
            return Err(DomainError::validation("product image url is empty"));
        }
        Ok(Self {
            id,
            name,
            price,
            image_url,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl ValueObject for ProductDetails {}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn accepts_complete_product_data() {
        let product =
            ProductDetails::new(id("sku1"), "Gold Watch", Price::new(100), "img/w.jpg").unwrap();
        assert_eq!(product.id().as_str(), "sku1");
        assert_eq!(product.name(), "Gold Watch");
        assert_eq!(product.price(), Price::new(100));
        assert_eq!(product.image_url(), "img/w.jpg");
    }

    #[test]
    fn rejects_blank_name_or_image() {
        assert!(ProductDetails::new(id("sku1"), "  ", Price::new(100), "img/w.jpg").is_err());
        assert!(ProductDetails::new(id("sku1"), "Gold Watch", Price::new(100), "").is_err());
    }

    #[test]
    fn price_extraction_feeds_the_snapshot() {
        // The page layer parses the displayed price before building the
        // reference; unparseable text stops the add before it reaches the cart.
        let price = Price::parse_display("Rp1.299.000").unwrap();
        let product = ProductDetails::new(id("sku1"), "Gold Watch", price, "img/w.jpg").unwrap();
        assert_eq!(product.price().minor_units(), 1_299_000);

        assert!(Price::parse_display("price unavailable").is_err());
    }
}
