//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Mutations go through the action registry like every other UI control;
//! these routes give them stable, form-friendly URLs.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use super::actions::run_action;
use super::layout::LayoutView;
use crate::actions::ActionId;
use crate::cart::{CartView, Notification};
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: LayoutView,
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Response to an add: refreshed badge plus the notification, both swapped
/// out-of-band.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub count: u64,
    pub notification: Notification,
}

/// Response to a quantity change or removal: re-rendered cart plus an
/// out-of-band badge.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_changed.html")]
pub struct CartChangedTemplate {
    pub cart: CartView,
    pub count: u64,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session();
    let page = CartShowTemplate {
        layout: LayoutView::from_session(&session),
        cart: CartView::from(session.cart.cart()),
    };
    drop(session);
    page
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.session().cart.cart().item_count();
    CartCountTemplate { count }
}

/// Add item to cart (HTMX).
///
/// Form fields mirror the add-to-cart button: `id`, `name`, `price`,
/// `image` and an optional `variant`.
#[instrument(skip(state, form))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response> {
    run_action(&state, ActionId::CartAdd, form)
}

/// Change a line's quantity by `delta` (HTMX).
#[instrument(skip(state, form))]
pub async fn quantity(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response> {
    run_action(&state, ActionId::CartChangeQuantity, form)
}

/// Remove a line (HTMX).
#[instrument(skip(state, form))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response> {
    run_action(&state, ActionId::CartRemove, form)
}

/// Checkout is handled outside the storefront; send the visitor back to the
/// cart.
#[instrument]
pub async fn checkout() -> impl IntoResponse {
    Redirect::to("/cart")
}
