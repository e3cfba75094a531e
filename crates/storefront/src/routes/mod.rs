//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (slider)
//! GET  /health                 - Health check
//! GET  /slider                 - Current slide (fragment, polled)
//!
//! # Books
//! GET  /libros                 - Book listing
//! GET  /libros/{id}            - Book detail (tabs, thumbnails)
//!
//! # Pages
//! GET  /faq                    - FAQ accordion
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (badge + notification, triggers cart-updated)
//! POST /cart/quantity          - Change quantity (returns cart fragment)
//! POST /cart/remove            - Remove item (returns cart fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Redirect back to the cart
//!
//! # UI actions
//! POST /actions/{action}       - Dispatch a registered action
//! ```

pub mod actions;
pub mod cart;
pub mod home;
pub mod layout;
pub mod pages;
pub mod products;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{request_id_middleware, request_span};
use crate::state::AppState;

/// Directory served under `/static`.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/quantity", post(cart::quantity))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        .route("/slider", get(home::slider))
        // Book routes
        .nest("/libros", product_routes())
        // Content pages
        .route("/faq", get(pages::faq))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout redirect
        .route("/checkout", get(cart::checkout))
        // UI actions
        .route("/actions/{action}", post(actions::dispatch))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Build the complete application router with its layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(middleware::from_fn(request_id_middleware)),
        )
        .with_state(state)
}
