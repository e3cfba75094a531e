//! Newtype keys for type-safe cart references.
//!
//! Use the `define_key!` macro to create string-backed wrappers that prevent
//! accidentally mixing a product id with a variant label.

/// Macro to define a type-safe string key wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use bookinest_core::define_key;
/// define_key!(IsbnKey);
/// define_key!(ShelfKey);
///
/// let isbn = IsbnKey::new("978-0");
/// let shelf = ShelfKey::new("978-0");
///
/// assert_eq!(isbn.as_str(), shelf.as_str());
/// // These are different types, so this won't compile:
/// // let _: IsbnKey = shelf;
/// ```
#[macro_export]
macro_rules! define_key {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new key from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the key and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_key!(ProductId);
define_key!(Variant);

impl Variant {
    /// Label used when a product page offers no explicit variant choice.
    pub const PHYSICAL_BOOK: &'static str = "Libro Físico";

    /// The default physical-edition variant.
    #[must_use]
    pub fn physical_book() -> Self {
        Self::new(Self::PHYSICAL_BOOK)
    }
}
