//! In-memory cart model.
//!
//! A [`Cart`] is an ordered sequence of [`LineItem`]s, unique by
//! [`LineKey`]. Every item it holds has `qty >= 1`; operations that would
//! drop a quantity to zero or below remove the row instead.

use serde::Serialize;

use super::{LineItem, LineKey, Price, Product};

/// Result of [`Cart::change_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line matched the key; the cart is unchanged.
    Missing,
    /// The line now holds this quantity.
    Updated(u64),
    /// The quantity fell to zero or below and the line was removed.
    Removed,
}

/// An ordered sequence of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from raw line items.
    ///
    /// Lines with a zero quantity are dropped and repeated keys are merged
    /// into the first occurrence, so the result always upholds the cart
    /// invariants.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.qty == 0 {
                continue;
            }
            let key = item.key();
            match cart.position(&key) {
                Some(idx) => {
                    if let Some(existing) = cart.items.get_mut(idx) {
                        existing.qty = existing.qty.saturating_add(item.qty);
                    }
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the line for `key`.
    #[must_use]
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|item| item.matches(key))
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for `(id, variant)` or appends a new
    /// line with `qty = 1`. Returns the resulting quantity.
    pub fn add(&mut self, product: Product) -> u64 {
        let key = LineKey {
            id: product.id.clone(),
            variant: product.variant.clone(),
        };
        if let Some(existing) = self.items.iter_mut().find(|item| item.matches(&key)) {
            existing.qty = existing.qty.saturating_add(1);
            return existing.qty;
        }
        self.items.push(LineItem::from_product(product));
        1
    }

    /// Remove the line for `key`. Returns whether a line was removed.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(key));
        self.items.len() != before
    }

    /// Adjust the quantity of the line for `key` by `delta`.
    pub fn change_quantity(&mut self, key: &LineKey, delta: i64) -> QuantityChange {
        let Some(idx) = self.position(key) else {
            return QuantityChange::Missing;
        };
        let Some(item) = self.items.get_mut(idx) else {
            return QuantityChange::Missing;
        };

        let current = i128::from(item.qty);
        let next = current + i128::from(delta);
        if next <= 0 {
            self.items.remove(idx);
            return QuantityChange::Removed;
        }

        item.qty = u64::try_from(next).unwrap_or(u64::MAX);
        QuantityChange::Updated(item.qty)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities, as shown on the cart-count indicator.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.qty))
    }

    /// Sum of every line subtotal.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.items.iter().position(|item| item.matches(key))
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = core::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
