//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use bookinest_core::Price;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a whole-peso amount the way the storefront shows prices.
///
/// Usage in templates: `{{ book.price_amount|price }}` renders `$ 12.900`.
#[askama::filter_fn]
pub fn price(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    amount
        .to_string()
        .parse::<Price>()
        .map(|price| price.to_string())
        .map_err(askama::Error::custom)
}

/// Returns the content hash for `bookinest.css`, computed by the build
/// script.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}
