//! Cart commands.
//!
//! Each command runs one cart operation against the opened store and writes
//! a short human-readable result to `out`. Persistence happens inside the
//! store, exactly as it does for the storefront.

use std::io::Write;

use bookinest_core::{LineKey, Price, Product, ProductId, QuantityChange, Variant};
use bookinest_storefront::cart::{CartStore, CartView};
use thiserror::Error;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Writing the command output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Print the cart table, or the empty-cart message.
pub fn show(store: &CartStore, out: &mut impl Write) -> Result<(), CartCommandError> {
    let view = CartView::from(store.cart());
    out.write_all(view.render_text().as_bytes())?;
    Ok(())
}

/// Print the number of copies in the cart.
pub fn count(store: &CartStore, out: &mut impl Write) -> Result<(), CartCommandError> {
    writeln!(out, "{}", store.cart().item_count())?;
    Ok(())
}

/// Add one copy of a product and print the confirmation.
pub fn add(
    store: &mut CartStore,
    out: &mut impl Write,
    id: String,
    name: String,
    price: Price,
    image: String,
    variant: String,
) -> Result<(), CartCommandError> {
    let notification = store.add_item(Product {
        id: ProductId::new(id),
        name,
        price,
        image,
        variant: Variant::new(variant),
    });
    writeln!(out, "{}", notification.message)?;
    Ok(())
}

/// Remove a line.
pub fn remove(
    store: &mut CartStore,
    out: &mut impl Write,
    id: String,
    variant: String,
) -> Result<(), CartCommandError> {
    let key = LineKey::new(id, variant);
    if store.remove_item(&key) {
        writeln!(out, "Eliminado: {} ({})", key.id, key.variant)?;
    } else {
        writeln!(out, "No está en el carrito: {} ({})", key.id, key.variant)?;
    }
    Ok(())
}

/// Change a line's quantity by `delta`.
pub fn change_quantity(
    store: &mut CartStore,
    out: &mut impl Write,
    id: String,
    variant: String,
    delta: i64,
) -> Result<(), CartCommandError> {
    let key = LineKey::new(id, variant);
    match store.change_quantity(&key, delta) {
        QuantityChange::Missing => {
            writeln!(out, "No está en el carrito: {} ({})", key.id, key.variant)?;
        }
        QuantityChange::Updated(qty) => {
            writeln!(out, "Cantidad: {qty}")?;
        }
        QuantityChange::Removed => {
            writeln!(out, "Eliminado: {} ({})", key.id, key.variant)?;
        }
    }
    Ok(())
}

/// Empty the cart.
pub fn clear(store: &mut CartStore, out: &mut impl Write) -> Result<(), CartCommandError> {
    store.clear();
    writeln!(out, "{}", CartView::EMPTY_MESSAGE)?;
    Ok(())
}
