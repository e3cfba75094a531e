//! Static content page route handlers.
//!
//! Serves the FAQ accordion. Entries come from the catalog; which one is
//! open lives in the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::layout::LayoutView;
use crate::filters;
use crate::session::StorefrontSession;
use crate::state::AppState;

/// FAQ entry display data.
#[derive(Debug, Clone)]
pub struct FaqEntryView {
    pub index: usize,
    pub question: String,
    pub answer: String,
    pub open: bool,
    pub icon: char,
}

/// Snapshot the accordion for rendering.
#[must_use]
pub fn faq_entries(session: &StorefrontSession) -> Vec<FaqEntryView> {
    session
        .catalog()
        .faq
        .iter()
        .enumerate()
        .map(|(index, entry)| FaqEntryView {
            index,
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            open: session.faq.is_open(index),
            icon: session.faq.icon(index),
        })
        .collect()
}

/// FAQ page template.
#[derive(Template, WebTemplate)]
#[template(path = "faq.html")]
pub struct FaqPageTemplate {
    pub layout: LayoutView,
    pub entries: Vec<FaqEntryView>,
}

/// FAQ accordion fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/faq.html")]
pub struct FaqTemplate {
    pub entries: Vec<FaqEntryView>,
}

/// Display the FAQ page.
#[instrument(skip(state))]
pub async fn faq(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session();
    let page = FaqPageTemplate {
        layout: LayoutView::from_session(&session),
        entries: faq_entries(&session),
    };
    drop(session);
    page
}
