//! Bookinest storefront library.
//!
//! The cart (store, mutators, renderer, notification), the small UI widgets
//! around it, and the axum + HTMX surface that drives them. Exposed as a
//! library so the binary, the CLI and the integration tests share one
//! implementation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod widgets;
