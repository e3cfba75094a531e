//! Product image thumbnails.

/// Thumbnail strip with one active image driving the main product image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThumbnailGallery {
    thumbnails: Vec<String>,
    active: Option<usize>,
    main_image: String,
}

/// Size suffixes of generated thumbnails, replaced by the full-size suffix.
const THUMBNAIL_SUFFIXES: [&str; 2] = ["-80x80", "-150x150"];
const FULL_SIZE_SUFFIX: &str = "-scaled";

/// Full-size image URL for a thumbnail URL.
#[must_use]
pub fn full_size_source(thumbnail: &str) -> String {
    let mut src = thumbnail.to_string();
    for suffix in THUMBNAIL_SUFFIXES {
        if let Some(pos) = src.find(suffix) {
            src.replace_range(pos..pos + suffix.len(), FULL_SIZE_SUFFIX);
        }
    }
    src
}

impl ThumbnailGallery {
    /// A gallery showing `main_image` with no thumbnail selected.
    #[must_use]
    pub fn new(main_image: impl Into<String>, thumbnails: Vec<String>) -> Self {
        Self {
            thumbnails,
            active: None,
            main_image: main_image.into(),
        }
    }

    /// Make thumbnail `index` the only active one and show its full-size
    /// image. Returns `false` for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(thumb) = self.thumbnails.get(index) else {
            return false;
        };
        self.main_image = full_size_source(thumb);
        self.active = Some(index);
        true
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[String] {
        &self.thumbnails
    }

    #[must_use]
    pub fn main_image(&self) -> &str {
        &self.main_image
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_size_source() {
        assert_eq!(full_size_source("img/tapa-80x80.jpg"), "img/tapa-scaled.jpg");
        assert_eq!(full_size_source("img/tapa-150x150.jpg"), "img/tapa-scaled.jpg");
        assert_eq!(full_size_source("img/tapa.jpg"), "img/tapa.jpg");
    }

    #[test]
    fn test_select_swaps_main_image() {
        let mut gallery = ThumbnailGallery::new(
            "img/a-scaled.jpg",
            vec!["img/a-80x80.jpg".to_string(), "img/b-150x150.jpg".to_string()],
        );
        assert!(gallery.select(1));
        assert_eq!(gallery.main_image(), "img/b-scaled.jpg");
        assert!(gallery.is_active(1));
        assert!(!gallery.is_active(0));

        assert!(gallery.select(0));
        assert!(!gallery.is_active(1));
        assert_eq!(gallery.main_image(), "img/a-scaled.jpg");
    }

    #[test]
    fn test_select_out_of_range() {
        let mut gallery = ThumbnailGallery::new("main.jpg", Vec::new());
        assert!(!gallery.select(0));
        assert_eq!(gallery.main_image(), "main.jpg");
    }
}
