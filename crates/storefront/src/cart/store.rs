//! Cart store mirrored to a persistent slot.
//!
//! The store owns the authoritative in-memory [`Cart`]. Every mutation runs a
//! complete read-modify-persist-notify cycle before returning:
//!
//! 1. mutate the in-memory cart
//! 2. rewrite the whole slot as a JSON array
//! 3. publish the new item count to every observer
//! 4. ask observers to re-render (remove / quantity change) or show a
//!    confirmation (add)
//!
//! Failures never reach the caller. A missing or unreadable slot loads as an
//! empty cart, and a failed write is logged while the in-memory cart stays
//! authoritative.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use bookinest_core::{Cart, LineItem, LineKey, Price, Product, ProductId, QuantityChange, Variant};

use super::Notification;
use crate::storage::{SlotStore, StorageError};

/// Default slot key holding the cart.
pub const CART_SLOT_KEY: &str = "bookinest_cart";

/// Receives cart events. Every method defaults to a no-op.
pub trait CartObserver: Send + Sync {
    /// The cart-count indicator should now show `count`.
    fn count_changed(&self, _count: u64) {}

    /// The cart view should be re-rendered from `cart`.
    fn cart_changed(&self, _cart: &Cart) {}

    /// An item was added; show `notification`.
    fn item_added(&self, _notification: &Notification) {}
}

/// Observer that reports cart events to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CartObserver for TracingObserver {
    fn count_changed(&self, count: u64) {
        debug!(count, "Cart count updated");
    }

    fn cart_changed(&self, cart: &Cart) {
        debug!(lines = cart.len(), total = %cart.total(), "Cart re-rendered");
    }

    fn item_added(&self, notification: &Notification) {
        info!(message = %notification.message, "Cart notification");
    }
}

/// Line item as found in the slot.
///
/// Quantity is read as a signed integer so that rows edited down to zero or
/// below can be dropped instead of poisoning the whole document.
#[derive(Debug, Deserialize)]
struct StoredLineItem {
    id: ProductId,
    #[serde(default)]
    name: String,
    price: Price,
    #[serde(default)]
    image: String,
    variant: Variant,
    qty: i64,
}

impl StoredLineItem {
    fn into_line_item(self) -> Option<LineItem> {
        let qty = u64::try_from(self.qty).ok().filter(|qty| *qty > 0)?;
        Some(LineItem {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            variant: self.variant,
            qty,
        })
    }
}

/// Session-scoped cart mirrored to a persistent slot.
pub struct CartStore {
    slot: Arc<dyn SlotStore>,
    key: String,
    cart: Cart,
    observers: Vec<Arc<dyn CartObserver>>,
    notification_duration: Duration,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .field("notification_duration", &self.notification_duration)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Open the cart stored under `key`, starting empty if the slot is
    /// missing or malformed.
    pub fn open(slot: Arc<dyn SlotStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = Self::load(slot.as_ref(), &key).unwrap_or_default();
        debug!(key = %key, lines = cart.len(), "Cart loaded");
        Self {
            slot,
            key,
            cart,
            observers: Vec::new(),
            notification_duration: Notification::DEFAULT_DURATION,
        }
    }

    /// Read the persisted cart.
    ///
    /// Returns `None` when the slot is empty, unreadable, or does not hold a
    /// JSON array of line items. Rows with a quantity of zero or below are
    /// dropped.
    #[must_use]
    pub fn load(slot: &dyn SlotStore, key: &str) -> Option<Cart> {
        let raw = match slot.read(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "Failed to read cart slot, starting empty");
                return None;
            }
        };

        match serde_json::from_str::<Vec<StoredLineItem>>(&raw) {
            Ok(rows) => Some(Cart::from_items(
                rows.into_iter().filter_map(StoredLineItem::into_line_item),
            )),
            Err(e) => {
                warn!(key, error = %e, "Malformed cart slot, starting empty");
                None
            }
        }
    }

    /// Set how long add-to-cart notifications stay visible.
    #[must_use]
    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    /// Register an observer for count, render and notification events.
    pub fn subscribe(&mut self, observer: Arc<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Slot key this store writes to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist the whole cart and refresh every count indicator.
    pub fn save(&self) {
        if let Err(e) = self.persist() {
            warn!(key = %self.key, error = %e, "Failed to persist cart");
        }
        let count = self.cart.item_count();
        for observer in &self.observers {
            observer.count_changed(count);
        }
    }

    /// Add one unit of `product` and return the confirmation to show.
    pub fn add_item(&mut self, product: Product) -> Notification {
        let notification = Notification::item_added(&product.name, self.notification_duration);
        let qty = self.cart.add(product);
        debug!(qty, "Item added to cart");

        self.save();
        for observer in &self.observers {
            observer.item_added(&notification);
        }
        notification
    }

    /// Remove the line for `key`, if present. Returns whether a line was
    /// removed.
    pub fn remove_item(&mut self, key: &LineKey) -> bool {
        let removed = self.cart.remove(key);
        debug!(id = %key.id, variant = %key.variant, removed, "Remove from cart");

        self.save();
        self.render();
        removed
    }

    /// Adjust the quantity for `key` by `delta`, removing the line when the
    /// result is zero or below.
    pub fn change_quantity(&mut self, key: &LineKey, delta: i64) -> QuantityChange {
        let change = self.cart.change_quantity(key, delta);
        debug!(id = %key.id, variant = %key.variant, delta, ?change, "Change quantity");

        if change != QuantityChange::Missing {
            self.save();
            self.render();
        }
        change
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.save();
        self.render();
    }

    fn render(&self) {
        for observer in &self.observers {
            observer.cart_changed(&self.cart);
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.cart)?;
        self.slot.write(&self.key, &json)
    }
}
