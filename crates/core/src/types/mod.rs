//! Core types for Bookinest.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts and the in-memory cart model.

pub mod cart;
pub mod id;
pub mod line_item;
pub mod price;

pub use cart::{Cart, QuantityChange};
pub use id::*;
pub use line_item::{LineItem, LineKey, Product};
pub use price::{Price, PriceError};
