//! State for the storefront's small interactive widgets.
//!
//! Each widget is plain state plus the transitions a click can cause. The
//! HTTP layer renders them; nothing here knows about markup.

pub mod accordion;
pub mod gallery;
pub mod slider;
pub mod tabs;
pub mod toggle;

pub use accordion::Accordion;
pub use gallery::ThumbnailGallery;
pub use slider::Slider;
pub use tabs::TabSet;
pub use toggle::{NavMenu, SearchBar};
