//! The page session: cart plus widget state.
//!
//! One [`StorefrontSession`] is created at start-up and owns everything a
//! visitor's clicks can change. Callers hold it behind a single lock so each
//! action runs to completion before the next one starts.

use std::collections::HashMap;
use std::sync::Arc;

use bookinest_core::ProductId;

use crate::cart::CartStore;
use crate::catalog::{Book, Catalog};
use crate::widgets::{Accordion, NavMenu, SearchBar, Slider, TabSet, ThumbnailGallery};

/// Tab ids on every product page, in display order.
pub const PRODUCT_TABS: [&str; 2] = ["descripcion", "detalles"];

/// Widget state for one product page.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub tabs: TabSet,
    pub gallery: ThumbnailGallery,
}

impl ProductPage {
    /// Fresh page state for `book`: first tab active, cover image shown.
    #[must_use]
    pub fn for_book(book: &Book) -> Self {
        Self {
            tabs: TabSet::matched(&PRODUCT_TABS),
            gallery: ThumbnailGallery::new(book.image.clone(), book.thumbnails.clone()),
        }
    }
}

/// Everything owned by the visitor's session.
#[derive(Debug)]
pub struct StorefrontSession {
    pub cart: CartStore,
    pub slider: Slider,
    pub faq: Accordion,
    pub search: SearchBar,
    pub nav: NavMenu,
    catalog: Arc<Catalog>,
    product_pages: HashMap<ProductId, ProductPage>,
}

impl StorefrontSession {
    /// Start a session over `catalog` with an already-opened cart.
    #[must_use]
    pub fn new(cart: CartStore, catalog: Arc<Catalog>) -> Self {
        Self {
            cart,
            slider: Slider::new(catalog.slides.len()),
            faq: Accordion::new(catalog.faq.len()),
            search: SearchBar::default(),
            nav: NavMenu::default(),
            catalog,
            product_pages: HashMap::new(),
        }
    }

    /// Static storefront content.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Widget state for product `id`, created on first access. `None` if
    /// the catalog has no such book.
    pub fn product_page(&mut self, id: &ProductId) -> Option<&mut ProductPage> {
        if !self.product_pages.contains_key(id) {
            let page = ProductPage::for_book(self.catalog.book(id)?);
            self.product_pages.insert(id.clone(), page);
        }
        self.product_pages.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CART_SLOT_KEY;
    use crate::storage::MemorySlotStore;

    fn session() -> StorefrontSession {
        let catalog = Catalog::from_json(
            r#"{
                "books": [{ "id": "b1", "name": "B", "price": 1, "image": "b-scaled.jpg",
                            "thumbnails": ["b-80x80.jpg", "c-80x80.jpg"] }],
                "slides": [{ "image": "1.jpg", "title": "1" }, { "image": "2.jpg", "title": "2" }],
                "faq": [{ "question": "q", "answer": "a" }]
            }"#,
        )
        .unwrap();
        let cart = CartStore::open(Arc::new(MemorySlotStore::new()), CART_SLOT_KEY);
        StorefrontSession::new(cart, Arc::new(catalog))
    }

    #[test]
    fn test_widgets_sized_from_catalog() {
        let mut session = session();
        assert_eq!(session.slider.len(), 2);
        session.faq.toggle(0);
        assert!(session.faq.is_open(0));
    }

    #[test]
    fn test_product_page_state_persists() {
        let mut session = session();
        let id = ProductId::new("b1");

        let page = session.product_page(&id).unwrap();
        assert!(page.tabs.is_active("descripcion"));
        page.tabs.select("detalles");
        page.gallery.select(1);

        let page = session.product_page(&id).unwrap();
        assert!(page.tabs.is_active("detalles"));
        assert_eq!(page.gallery.main_image(), "c-scaled.jpg");
    }

    #[test]
    fn test_unknown_product_page() {
        let mut session = session();
        assert!(session.product_page(&ProductId::new("nope")).is_none());
    }
}
