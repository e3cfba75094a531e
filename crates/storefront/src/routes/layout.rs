//! Shared page chrome: header cart badge, search bar and mobile menu.

use askama::Template;
use askama_web::WebTemplate;

use crate::session::StorefrontSession;

/// Header state rendered on every page.
#[derive(Debug, Clone, Default)]
pub struct LayoutView {
    pub cart_count: u64,
    pub search_open: bool,
    /// Set only on the response that just opened the search bar.
    pub search_focus: bool,
    pub nav_open: bool,
}

impl LayoutView {
    /// Header state for a full page render.
    #[must_use]
    pub fn from_session(session: &StorefrontSession) -> Self {
        Self {
            cart_count: session.cart.cart().item_count(),
            search_open: session.search.is_open(),
            search_focus: false,
            nav_open: session.nav.is_open(),
        }
    }
}

/// Search bar fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_bar.html")]
pub struct SearchBarTemplate {
    pub layout: LayoutView,
}

/// Navigation menu fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/nav.html")]
pub struct NavTemplate {
    pub layout: LayoutView,
}
