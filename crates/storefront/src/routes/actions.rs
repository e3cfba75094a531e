//! Generic UI action endpoint.
//!
//! Every interactive control posts to `/actions/{action}` with its fields as
//! a form. The action runs through the registry under the session lock and
//! the response is the fragment that changed.

use std::collections::HashMap;

use axum::{
    Form,
    extract::{Path, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use tracing::instrument;

use super::cart::{CartAddedTemplate, CartChangedTemplate};
use super::home::SliderTemplate;
use super::layout::{LayoutView, NavTemplate, SearchBarTemplate};
use super::pages::{FaqTemplate, faq_entries};
use super::products::ProductWidgetsTemplate;
use crate::actions::{ActionError, ActionId, ActionOutcome, ActionPayload};
use crate::cart::CartView;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::session::StorefrontSession;
use crate::state::AppState;

/// Event fired on the page whenever cart contents change.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Dispatch a UI action by name.
///
/// # Errors
///
/// Returns 404 for unknown actions or products, 400 for bad fields.
#[instrument(skip(state, form))]
pub async fn dispatch(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response> {
    let id: ActionId = action.parse()?;
    run_action(&state, id, form)
}

/// Run `id` with submitted `form` fields and render what changed.
pub(crate) fn run_action(
    state: &AppState,
    id: ActionId,
    form: HashMap<String, String>,
) -> Result<Response> {
    add_breadcrumb("action", id.as_str());
    let payload = ActionPayload::new(form);
    state.dispatch(id, &payload, |session, outcome| {
        render_outcome(state, session, outcome)
    })
}

fn render_outcome(
    state: &AppState,
    session: &mut StorefrontSession,
    outcome: &ActionOutcome,
) -> Result<Response> {
    let response = match outcome {
        ActionOutcome::ItemAdded(notification) => (
            AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
            CartAddedTemplate {
                count: session.cart.cart().item_count(),
                notification: notification.clone(),
            },
        )
            .into_response(),
        ActionOutcome::CartChanged => (
            AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
            CartChangedTemplate {
                cart: CartView::from(session.cart.cart()),
                count: session.cart.cart().item_count(),
            },
        )
            .into_response(),
        ActionOutcome::SlideSelected => SliderTemplate::from_state(state, session).into_response(),
        ActionOutcome::FaqChanged => FaqTemplate {
            entries: faq_entries(session),
        }
        .into_response(),
        ActionOutcome::SearchToggled { focus } => SearchBarTemplate {
            layout: LayoutView {
                search_focus: *focus,
                ..LayoutView::from_session(session)
            },
        }
        .into_response(),
        ActionOutcome::MenuToggled => NavTemplate {
            layout: LayoutView::from_session(session),
        }
        .into_response(),
        ActionOutcome::ProductPageChanged(id) => ProductWidgetsTemplate::for_product(session, id)
            .ok_or_else(|| AppError::from(ActionError::UnknownProduct(id.to_string())))?
            .into_response(),
    };
    Ok(response)
}
