//! Home page route handler.
//!
//! The home page leads with the rotating slider. Slides come from the
//! catalog; the visible index lives in the session and is advanced by the
//! background ticker (see [`AppState::spawn_slider`]).

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::layout::LayoutView;
use crate::filters;
use crate::session::StorefrontSession;
use crate::state::AppState;

/// A slide as rendered.
#[derive(Debug, Clone)]
pub struct SlideView {
    pub index: usize,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    /// Target URL, empty when the slide is not a link.
    pub link: String,
    pub active: bool,
}

/// Slider display data.
#[derive(Debug, Clone)]
pub struct SliderView {
    pub slides: Vec<SlideView>,
    pub current: usize,
    /// Translation of the slide strip, in percent.
    pub offset: usize,
    /// Poll interval for the client, in milliseconds.
    pub interval_ms: u128,
}

impl SliderView {
    /// Snapshot the slider for rendering.
    #[must_use]
    pub fn from_session(session: &StorefrontSession, interval_ms: u128) -> Self {
        let current = session.slider.current();
        let slides = session
            .catalog()
            .slides
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideView {
                index,
                image: slide.image.clone(),
                title: slide.title.clone(),
                subtitle: slide.subtitle.clone(),
                link: slide.link.clone().unwrap_or_default(),
                active: index == current,
            })
            .collect();

        Self {
            slides,
            current,
            offset: session.slider.offset_percent(),
            interval_ms,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub slider: SliderView,
}

/// Slider fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/slider.html")]
pub struct SliderTemplate {
    pub slider: SliderView,
}

impl SliderTemplate {
    pub(crate) fn from_state(state: &AppState, session: &StorefrontSession) -> Self {
        Self {
            slider: SliderView::from_session(session, state.config().ui.slider_interval.as_millis()),
        }
    }
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let interval_ms = state.config().ui.slider_interval.as_millis();
    let session = state.session();
    let page = HomeTemplate {
        layout: LayoutView::from_session(&session),
        slider: SliderView::from_session(&session, interval_ms),
    };
    drop(session);
    page
}

/// Current slide (HTMX poll).
#[instrument(skip(state))]
pub async fn slider(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session();
    let fragment = SliderTemplate::from_state(&state, &session);
    drop(session);
    fragment
}
