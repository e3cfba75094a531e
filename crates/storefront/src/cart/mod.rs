//! Shopping cart: persistence, mutation, notification and rendering.
//!
//! The in-memory model lives in [`bookinest_core::Cart`]. This module adds
//! the [`CartStore`] that mirrors it to a persistent slot and notifies
//! observers, plus the [`view`] projection used by templates and the CLI.

pub mod notification;
pub mod store;
pub mod view;

pub use notification::Notification;
pub use store::{CART_SLOT_KEY, CartObserver, CartStore, TracingObserver};
pub use view::{CartItemView, CartView};
