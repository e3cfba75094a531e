//! Transient add-to-cart confirmation.

use std::time::Duration;

/// A short-lived on-screen acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// How long the message stays visible before it slides out.
    pub visible_for: Duration,
}

impl Notification {
    /// Default time a notification stays on screen.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    /// Confirmation shown after `name` was added to the cart.
    #[must_use]
    pub fn item_added(name: &str, visible_for: Duration) -> Self {
        Self {
            message: format!("✓ \"{name}\" agregado al carrito"),
            visible_for,
        }
    }

    /// Visibility window in whole milliseconds, for client-side timers.
    #[must_use]
    pub fn visible_ms(&self) -> u64 {
        u64::try_from(self.visible_for.as_millis()).unwrap_or(u64::MAX)
    }
}
