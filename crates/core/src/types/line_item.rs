//! Products and cart line items.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId, Variant};

/// A product as offered by an add-to-cart control.
///
/// The display and pricing fields are copied into the cart at add time and
/// never re-fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub variant: Variant,
}

/// Compound key identifying one cart row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub id: ProductId,
    pub variant: Variant,
}

impl LineKey {
    /// Create a new line key.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, variant: impl Into<Variant>) -> Self {
        Self {
            id: id.into(),
            variant: variant.into(),
        }
    }
}

/// One product/variant combination in the cart.
///
/// Field order matches the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub variant: Variant,
    /// Always at least 1 while the item is in a cart.
    pub qty: u64,
}

impl LineItem {
    /// Start a new line for `product` with a quantity of one.
    #[must_use]
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            variant: product.variant,
            qty: 1,
        }
    }

    /// Whether this line is identified by `key`.
    #[must_use]
    pub fn matches(&self, key: &LineKey) -> bool {
        self.id == key.id && self.variant == key.variant
    }

    /// The compound key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            id: self.id.clone(),
            variant: self.variant.clone(),
        }
    }

    /// `price × qty`.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.qty)
    }
}
