//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::actions::{ActionId, ActionOutcome, ActionPayload, ActionRegistry};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::session::StorefrontSession;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It holds the single visitor
/// session behind a mutex: every handler runs its whole read-modify-persist
/// cycle under the lock.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    session: Mutex<StorefrontSession>,
    actions: ActionRegistry,
    slider_reset: Notify,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The action registry is built here, once.
    #[must_use]
    pub fn new(config: StorefrontConfig, session: StorefrontSession) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                session: Mutex::new(session),
                actions: ActionRegistry::storefront(),
                slider_reset: Notify::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Lock the visitor session.
    ///
    /// A poisoned lock is recovered: the session holds no invariant that a
    /// panicking handler could have left half-updated on disk.
    pub fn session(&self) -> MutexGuard<'_, StorefrontSession> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Dispatch `id` through the action registry, then let `render` read the
    /// resulting session while the lock is still held.
    ///
    /// # Errors
    ///
    /// Returns the action's error or the renderer's error.
    pub fn dispatch<R>(
        &self,
        id: ActionId,
        payload: &ActionPayload,
        render: impl FnOnce(&mut StorefrontSession, &ActionOutcome) -> Result<R>,
    ) -> Result<R> {
        let mut session = self.session();
        let outcome = self.inner.actions.dispatch(id, &mut session, payload)?;
        if outcome == ActionOutcome::SlideSelected {
            self.inner.slider_reset.notify_one();
        }
        render(&mut session, &outcome)
    }

    /// Spawn the slider auto-advance task.
    ///
    /// Advances one slide per configured interval. A manual slide selection
    /// restarts the interval.
    #[must_use]
    pub fn spawn_slider(&self) -> JoinHandle<()> {
        let state = self.clone();
        let interval = self.config().ui.slider_interval;
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = tokio::time::sleep(interval) => state.advance_slider(),
                    () = state.inner.slider_reset.notified() => {
                        tracing::trace!("Slider interval restarted");
                    }
                }
            }
        })
    }

    fn advance_slider(&self) {
        let mut session = self.session();
        session.slider.advance();
        tracing::trace!(slide = session.slider.current(), "Slider advanced");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::Catalog;
    use crate::storage::MemorySlotStore;

    fn state() -> AppState {
        let catalog = Catalog::from_json(
            r#"{"slides": [{"image": "a.jpg", "title": "A"}, {"image": "b.jpg", "title": "B"}]}"#,
        )
        .unwrap();
        let cart = CartStore::open(Arc::new(MemorySlotStore::new()), "bookinest_cart");
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        AppState::new(config, StorefrontSession::new(cart, Arc::new(catalog)))
    }

    #[test]
    fn test_advance_slider_wraps() {
        let state = state();

        state.advance_slider();
        assert_eq!(state.session().slider.current(), 1);
        state.advance_slider();
        assert_eq!(state.session().slider.current(), 0);
    }

    #[test]
    fn test_dispatch_renders_under_lock() {
        let state = state();
        let payload = ActionPayload::default().with("index", "1");

        let current = state
            .dispatch(ActionId::SliderGo, &payload, |session, outcome| {
                assert_eq!(outcome, &ActionOutcome::SlideSelected);
                Ok(session.slider.current())
            })
            .unwrap();

        assert_eq!(current, 1);
    }

    #[test]
    fn test_dispatch_skips_render_on_error() {
        let state = state();

        let result = state.dispatch(ActionId::SliderGo, &ActionPayload::default(), |_, _| -> Result<()> {
            panic!("render must not run")
        });

        assert!(result.is_err());
    }
}
