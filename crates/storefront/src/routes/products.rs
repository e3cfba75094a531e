//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use bookinest_core::ProductId;
use tracing::instrument;

use super::layout::LayoutView;
use crate::catalog::Book;
use crate::error::{AppError, Result};
use crate::filters;
use crate::session::{ProductPage, StorefrontSession};
use crate::state::AppState;

/// Book display data for templates.
#[derive(Debug, Clone)]
pub struct BookView {
    pub id: String,
    pub name: String,
    /// Empty when the catalog lists no author.
    pub author: String,
    /// Unit price in whole pesos, as submitted by the add-to-cart form.
    pub price_amount: i64,
    pub image: String,
    pub variants: Vec<String>,
    pub description: String,
    pub details: String,
}

impl From<&Book> for BookView {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            name: book.name.clone(),
            author: book.author.clone().unwrap_or_default(),
            price_amount: book.price.amount(),
            image: book.image.clone(),
            variants: book.variants.iter().map(ToString::to_string).collect(),
            description: book.description.clone(),
            details: book.details.clone(),
        }
    }
}

/// Tab display data.
#[derive(Debug, Clone)]
pub struct TabView {
    pub id: String,
    pub label: &'static str,
    pub active: bool,
}

/// Thumbnail display data.
#[derive(Debug, Clone)]
pub struct ThumbnailView {
    pub index: usize,
    pub src: String,
    pub active: bool,
}

/// Product page widget state (tabs and gallery) for templates.
#[derive(Debug, Clone)]
pub struct ProductPageView {
    pub product_id: String,
    pub tabs: Vec<TabView>,
    pub active_panel: Option<String>,
    pub thumbnails: Vec<ThumbnailView>,
    pub main_image: String,
}

fn tab_label(id: &str) -> &'static str {
    match id {
        "descripcion" => "Descripción",
        "detalles" => "Detalles",
        _ => "",
    }
}

impl ProductPageView {
    fn new(id: &ProductId, page: &ProductPage) -> Self {
        let tabs = page
            .tabs
            .tabs()
            .iter()
            .map(|tab| TabView {
                id: tab.clone(),
                label: tab_label(tab),
                active: page.tabs.is_active(tab),
            })
            .collect();
        let thumbnails = page
            .gallery
            .thumbnails()
            .iter()
            .enumerate()
            .map(|(index, src)| ThumbnailView {
                index,
                src: src.clone(),
                active: page.gallery.is_active(index),
            })
            .collect();

        Self {
            product_id: id.to_string(),
            tabs,
            active_panel: page.tabs.active_panel().map(str::to_string),
            thumbnails,
            main_image: page.gallery.main_image().to_string(),
        }
    }

    /// Whether panel `id` is shown.
    #[must_use]
    pub fn shows(&self, id: &str) -> bool {
        self.active_panel.as_deref() == Some(id)
    }
}

/// Snapshot the widgets on product `id`'s page.
pub(crate) fn product_page_view(
    session: &mut StorefrontSession,
    id: &ProductId,
) -> Option<ProductPageView> {
    session
        .product_page(id)
        .map(|page| ProductPageView::new(id, page))
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub layout: LayoutView,
    pub books: Vec<BookView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub layout: LayoutView,
    pub book: BookView,
    pub page: ProductPageView,
}

/// Tabs and gallery fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_widgets.html")]
pub struct ProductWidgetsTemplate {
    pub book: BookView,
    pub page: ProductPageView,
}

impl ProductWidgetsTemplate {
    pub(crate) fn for_product(session: &mut StorefrontSession, id: &ProductId) -> Option<Self> {
        let book = BookView::from(session.catalog().book(id)?);
        let page = product_page_view(session, id)?;
        Some(Self { book, page })
    }
}

/// Display product listing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session();
    let page = ProductsIndexTemplate {
        layout: LayoutView::from_session(&session),
        books: session.catalog().books.iter().map(BookView::from).collect(),
    };
    drop(session);
    page
}

/// Display product detail page.
///
/// # Errors
///
/// Returns 404 if the catalog has no such book.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = ProductId::from(id);
    let mut session = state.session();
    let widgets = ProductWidgetsTemplate::for_product(&mut session, &id)
        .ok_or_else(|| AppError::NotFound(format!("libro {id}")))?;
    let layout = LayoutView::from_session(&session);
    drop(session);

    Ok(ProductShowTemplate {
        layout,
        book: widgets.book,
        page: widgets.page,
    })
}
