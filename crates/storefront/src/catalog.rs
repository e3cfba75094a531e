//! Static storefront content: books, home slides and FAQ entries.
//!
//! Loaded once at start-up from a JSON file. The catalog only feeds page
//! rendering and the add-to-cart form; prices are copied into the cart at add
//! time and never looked up again.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use bookinest_core::{Price, ProductId, Variant};

/// Errors loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A book listed on the storefront.
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    pub price: Price,
    pub image: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
    #[serde(default = "default_variants")]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
}

fn default_variants() -> Vec<Variant> {
    vec![Variant::physical_book()]
}

/// A home page slide.
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub image: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// A question and answer on the FAQ page.
#[derive(Debug, Clone, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// All static storefront content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the JSON does not match the catalog
    /// layout.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the catalog at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            books = catalog.books.len(),
            slides = catalog.slides.len(),
            faq = catalog.faq.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Look up a book by id.
    #[must_use]
    pub fn book(&self, id: &ProductId) -> Option<&Book> {
        self.books.iter().find(|book| &book.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "books": [
            {
                "id": "rayuela",
                "name": "Rayuela",
                "author": "Julio Cortázar",
                "price": 25900,
                "image": "img/rayuela-scaled.jpg",
                "thumbnails": ["img/rayuela-80x80.jpg"],
                "variants": ["Libro Físico", "E-book"]
            },
            { "id": "ficciones", "name": "Ficciones", "price": 18000, "image": "img/f.jpg" }
        ],
        "slides": [{ "image": "img/s1.jpg", "title": "Novedades" }],
        "faq": [{ "question": "¿Hacen envíos?", "answer": "Sí, a todo el país." }]
    }"#;

    #[test]
    fn test_parse_sample() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.books.len(), 2);
        assert_eq!(catalog.slides.len(), 1);
        assert_eq!(catalog.faq.len(), 1);
    }

    #[test]
    fn test_default_variant() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let book = catalog.book(&ProductId::new("ficciones")).unwrap();
        assert_eq!(book.variants, vec![Variant::physical_book()]);
    }

    #[test]
    fn test_book_fields() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let book = catalog.book(&ProductId::new("rayuela")).unwrap();
        assert_eq!(book.price, Price::new(25_900));
        assert_eq!(book.author.as_deref(), Some("Julio Cortázar"));
        assert_eq!(book.variants[1].as_str(), "E-book");
    }

    #[test]
    fn test_empty_document() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.books.is_empty());
        assert!(catalog.book(&ProductId::new("x")).is_none());
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            Catalog::from_json("[]"),
            Err(CatalogError::Parse(_))
        ));
    }
}
