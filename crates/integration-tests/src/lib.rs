//! Integration tests for Bookinest.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bookinest-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - cart store behaviour across real slot storage
//! - `storefront_routes` - the HTTP surface driven in-process
//!
//! Everything runs in-process; no server or network is needed.

use std::sync::Arc;

use axum::Router;
use bookinest_storefront::cart::CartStore;
use bookinest_storefront::catalog::Catalog;
use bookinest_storefront::config::StorefrontConfig;
use bookinest_storefront::routes;
use bookinest_storefront::session::StorefrontSession;
use bookinest_storefront::state::AppState;
use bookinest_storefront::storage::SlotStore;

/// Catalog used by route tests: two books, two slides, two FAQ entries.
pub const TEST_CATALOG: &str = r#"{
  "books": [
    {
      "id": "B1",
      "name": "Atlas",
      "author": "Ana Paz",
      "price": 1000,
      "image": "/img/atlas.jpg",
      "thumbnails": ["/img/atlas-150x150.jpg", "/img/atlas-back-80x80.jpg"],
      "variants": ["Libro Físico", "E-book"],
      "description": "Mapas que cambian.",
      "details": "312 páginas."
    },
    {
      "id": "B2",
      "name": "Cuentos",
      "price": 12900,
      "image": "/img/cuentos.jpg"
    }
  ],
  "slides": [
    { "image": "/img/s1.jpg", "title": "Novedades" },
    { "image": "/img/s2.jpg", "title": "Envíos", "link": "/libros" }
  ],
  "faq": [
    { "question": "¿Envíos?", "answer": "A todo el país." },
    { "question": "¿E-books?", "answer": "Sí, como variante." }
  ]
}"#;

/// Parse [`TEST_CATALOG`].
///
/// # Panics
///
/// Panics if the fixture is not valid catalog JSON.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn test_catalog() -> Catalog {
    Catalog::from_json(TEST_CATALOG).unwrap()
}

/// Build application state over `slots` with default configuration.
///
/// # Panics
///
/// Panics if the default configuration fails to load.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn test_state(slots: Arc<dyn SlotStore>) -> AppState {
    let config = StorefrontConfig::from_lookup(|_| None).unwrap();
    let cart = CartStore::open(slots, config.storage.cart_key.clone())
        .with_notification_duration(config.ui.notification_duration);
    let session = StorefrontSession::new(cart, Arc::new(test_catalog()));
    AppState::new(config, session)
}

/// The full storefront router over `slots`.
#[must_use]
pub fn test_app(slots: Arc<dyn SlotStore>) -> Router {
    routes::app(test_state(slots))
}
