//! Bookinest Storefront - local bookstore site.
//!
//! This binary serves the storefront on port 3000 by default.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - One visitor session whose cart is mirrored to a slot file
//! - Static catalog (books, slides, FAQ) loaded from JSON at start-up

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use bookinest_storefront::cart::{CartStore, TracingObserver};
use bookinest_storefront::catalog::Catalog;
use bookinest_storefront::config::StorefrontConfig;
use bookinest_storefront::routes;
use bookinest_storefront::session::StorefrontSession;
use bookinest_storefront::state::AppState;
use bookinest_storefront::storage::FileSlotStore;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Load the catalog, falling back to an empty one.
fn load_catalog(config: &StorefrontConfig) -> Catalog {
    let path = config.catalog_path.as_path();
    Catalog::load(path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to load catalog");
        Catalog::default()
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env()?;

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bookinest_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Open the cart slot
    let slots = Arc::new(FileSlotStore::new(&config.storage.data_dir));
    let mut cart = CartStore::open(slots, &config.storage.cart_key)
        .with_notification_duration(config.ui.notification_duration);
    cart.subscribe(Arc::new(TracingObserver));
    tracing::info!(
        data_dir = %config.storage.data_dir.display(),
        items = cart.cart().item_count(),
        "Cart loaded"
    );

    // Build application state
    let catalog = Arc::new(load_catalog(&config));
    let state = AppState::new(config.clone(), StorefrontSession::new(cart, catalog));

    // Start the slider ticker in background
    let _slider = state.spawn_slider();

    let app = routes::app(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
