//! Bookinest Core - Shared types library.
//!
//! This crate provides common types used across all Bookinest components:
//! - `storefront` - Storefront library and HTTP binary
//! - `cli` - Command-line tools for inspecting and editing the persisted cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! persistence, no HTTP. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, variants and prices, plus
//!   the line-item and cart model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
