//! UI action registry.
//!
//! Every interactive control on the storefront names an [`ActionId`] (its
//! `data-action`). The [`ActionRegistry`] maps each id to a typed handler
//! closure, built once when the application state is created. Handlers
//! mutate the [`StorefrontSession`] and report an [`ActionOutcome`] telling
//! the caller what to re-render.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use bookinest_core::{LineKey, Price, Product, ProductId, Variant};

use crate::cart::Notification;
use crate::session::StorefrontSession;

/// Errors from action dispatch. None of these come from the cart itself;
/// they describe malformed requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("no handler registered for {0}")]
    Unregistered(&'static str),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("unknown product: {0}")]
    UnknownProduct(String),
}

/// Identifier of a UI action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    CartAdd,
    CartChangeQuantity,
    CartRemove,
    SliderGo,
    FaqToggle,
    SearchToggle,
    MenuToggle,
    TabSelect,
    ThumbnailSelect,
}

impl ActionId {
    /// Every action, in registration order.
    pub const ALL: [Self; 9] = [
        Self::CartAdd,
        Self::CartChangeQuantity,
        Self::CartRemove,
        Self::SliderGo,
        Self::FaqToggle,
        Self::SearchToggle,
        Self::MenuToggle,
        Self::TabSelect,
        Self::ThumbnailSelect,
    ];

    /// The `data-action` / URL name of this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CartAdd => "cart-add",
            Self::CartChangeQuantity => "cart-quantity",
            Self::CartRemove => "cart-remove",
            Self::SliderGo => "slider-go",
            Self::FaqToggle => "faq-toggle",
            Self::SearchToggle => "search-toggle",
            Self::MenuToggle => "menu-toggle",
            Self::TabSelect => "tab-select",
            Self::ThumbnailSelect => "thumbnail-select",
        }
    }
}

impl FromStr for ActionId {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ActionError::UnknownAction(s.to_string()))
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form fields submitted with an action.
#[derive(Debug, Clone, Default)]
pub struct ActionPayload {
    fields: HashMap<String, String>,
}

impl ActionPayload {
    /// Wrap submitted fields.
    #[must_use]
    pub const fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Builder-style field insertion.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// A field, treating blank values as absent.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// A field that must be present.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::MissingField` if the field is absent or blank.
    pub fn require(&self, field: &'static str) -> Result<&str, ActionError> {
        self.get(field).ok_or(ActionError::MissingField(field))
    }

    /// A required field parsed as `T`.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` or `InvalidField`.
    pub fn parse<T>(&self, field: &'static str) -> Result<T, ActionError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.require(field)?
            .trim()
            .parse()
            .map_err(|e: T::Err| ActionError::InvalidField {
                field,
                reason: e.to_string(),
            })
    }

    fn line_key(&self) -> Result<LineKey, ActionError> {
        Ok(LineKey::new(self.require("id")?, self.require("variant")?))
    }

    fn product_id(&self) -> Result<ProductId, ActionError> {
        self.require("product").map(ProductId::from)
    }
}

/// What a handler changed, so the caller knows what to re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// An item was added; refresh count indicators and show the notice.
    ItemAdded(Notification),
    /// Cart contents changed; re-render the cart and count indicators.
    CartChanged,
    /// The visible slide was chosen by hand; auto-advance restarts.
    SlideSelected,
    /// The FAQ accordion changed.
    FaqChanged,
    /// The search bar was toggled; `focus` is set when it opened.
    SearchToggled { focus: bool },
    /// The mobile menu was toggled.
    MenuToggled,
    /// Widget state on a product page changed.
    ProductPageChanged(ProductId),
}

type Handler =
    Box<dyn Fn(&mut StorefrontSession, &ActionPayload) -> Result<ActionOutcome, ActionError> + Send + Sync>;

/// Maps action ids to handler closures.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<ActionId, Handler>,
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ActionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handler for `id`.
    pub fn register<F>(&mut self, id: ActionId, handler: F)
    where
        F: Fn(&mut StorefrontSession, &ActionPayload) -> Result<ActionOutcome, ActionError>
            + Send
            + Sync
            + 'static,
    {
        self.handlers.insert(id, Box::new(handler));
    }

    /// Whether `id` has a handler.
    #[must_use]
    pub fn contains(&self, id: ActionId) -> bool {
        self.handlers.contains_key(&id)
    }

    /// Run the handler for `id` against `session`.
    ///
    /// # Errors
    ///
    /// Returns `Unregistered` if no handler exists, or the handler's own
    /// payload error.
    pub fn dispatch(
        &self,
        id: ActionId,
        session: &mut StorefrontSession,
        payload: &ActionPayload,
    ) -> Result<ActionOutcome, ActionError> {
        let handler = self
            .handlers
            .get(&id)
            .ok_or(ActionError::Unregistered(id.as_str()))?;
        let outcome = handler(session, payload);
        match &outcome {
            Ok(result) => tracing::debug!(action = %id, ?result, "Action handled"),
            Err(e) => tracing::debug!(action = %id, error = %e, "Action rejected"),
        }
        outcome
    }

    /// Registry with the standard storefront handlers for every action.
    #[must_use]
    pub fn storefront() -> Self {
        let mut registry = Self::new();

        registry.register(ActionId::CartAdd, |session, payload| {
            let product = Product {
                id: ProductId::from(payload.require("id")?),
                name: payload.require("name")?.to_string(),
                price: payload.parse::<Price>("price")?,
                image: payload.get("image").unwrap_or_default().to_string(),
                variant: payload
                    .get("variant")
                    .map_or_else(Variant::physical_book, Variant::from),
            };
            Ok(ActionOutcome::ItemAdded(session.cart.add_item(product)))
        });

        registry.register(ActionId::CartChangeQuantity, |session, payload| {
            let key = payload.line_key()?;
            let delta = payload.parse::<i64>("delta")?;
            session.cart.change_quantity(&key, delta);
            Ok(ActionOutcome::CartChanged)
        });

        registry.register(ActionId::CartRemove, |session, payload| {
            let key = payload.line_key()?;
            session.cart.remove_item(&key);
            Ok(ActionOutcome::CartChanged)
        });

        registry.register(ActionId::SliderGo, |session, payload| {
            session.slider.go_to(payload.parse::<usize>("index")?);
            Ok(ActionOutcome::SlideSelected)
        });

        registry.register(ActionId::FaqToggle, |session, payload| {
            session.faq.toggle(payload.parse::<usize>("index")?);
            Ok(ActionOutcome::FaqChanged)
        });

        registry.register(ActionId::SearchToggle, |session, _payload| {
            let focus = session.search.toggle();
            Ok(ActionOutcome::SearchToggled { focus })
        });

        registry.register(ActionId::MenuToggle, |session, _payload| {
            session.nav.toggle();
            Ok(ActionOutcome::MenuToggled)
        });

        registry.register(ActionId::TabSelect, |session, payload| {
            let id = payload.product_id()?;
            let tab = payload.require("tab")?;
            let page = session
                .product_page(&id)
                .ok_or_else(|| ActionError::UnknownProduct(id.to_string()))?;
            page.tabs.select(tab);
            Ok(ActionOutcome::ProductPageChanged(id))
        });

        registry.register(ActionId::ThumbnailSelect, |session, payload| {
            let id = payload.product_id()?;
            let index = payload.parse::<usize>("index")?;
            let page = session
                .product_page(&id)
                .ok_or_else(|| ActionError::UnknownProduct(id.to_string()))?;
            page.gallery.select(index);
            Ok(ActionOutcome::ProductPageChanged(id))
        });

        registry
    }
}
