//! Display projection of the cart.
//!
//! [`CartView`] is a pure read of a [`Cart`] with every price already
//! formatted. Templates and the CLI render from it; nothing here mutates the
//! cart.

use std::fmt;

use bookinest_core::{Cart, LineItem};

/// Cart line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub variant: String,
    pub name: String,
    pub image: String,
    pub quantity: u64,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: &'static str,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Shipping is never computed on the storefront.
    pub const SHIPPING_LABEL: &'static str = "A calcular";

    /// Message shown for an empty cart.
    pub const EMPTY_MESSAGE: &'static str = "Tu carrito está vacío.";

    /// Whether the empty-state message should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Plain-text rendering for terminals.
    #[must_use]
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{}", Self::EMPTY_MESSAGE);
        }

        writeln!(
            f,
            "{:<32} {:<14} {:>12} {:>5} {:>14}",
            "Producto", "Variante", "Precio", "Cant.", "Subtotal"
        )?;
        for item in &self.items {
            writeln!(
                f,
                "{:<32} {:<14} {:>12} {:>5} {:>14}",
                item.name, item.variant, item.price, item.quantity, item.line_price
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:<10} {}", "Subtotal", self.subtotal)?;
        writeln!(f, "{:<10} {}", "Envío", self.shipping)?;
        writeln!(f, "{:<10} {}", "Total", self.total)
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let total = cart.total().display();
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: total.clone(),
            shipping: Self::SHIPPING_LABEL,
            total,
            item_count: cart.item_count(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            variant: item.variant.to_string(),
            name: item.name.clone(),
            image: item.image.clone(),
            quantity: item.qty,
            price: item.price.display(),
            line_price: item.subtotal().display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookinest_core::{Price, Product, ProductId, Variant};

    fn cart_with(entries: &[(&str, &str, i64, u64)]) -> Cart {
        let mut cart = Cart::new();
        for (id, variant, price, qty) in entries {
            for _ in 0..*qty {
                cart.add(Product {
                    id: ProductId::new(*id),
                    name: format!("Libro {id}"),
                    price: Price::new(*price),
                    image: format!("img/{id}.jpg"),
                    variant: Variant::new(*variant),
                });
            }
        }
        cart
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.is_empty());
        assert_eq!(view.total, "$ 0");
        assert_eq!(view.item_count, 0);
        assert_eq!(view.render_text(), "Tu carrito está vacío.\n");
    }

    #[test]
    fn test_line_and_cart_totals() {
        let cart = cart_with(&[("B1", "Libro Físico", 12_500, 2), ("B2", "E-book", 800, 3)]);
        let view = CartView::from(&cart);

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].price, "$ 12.500");
        assert_eq!(view.items[0].line_price, "$ 25.000");
        assert_eq!(view.items[1].line_price, "$ 2.400");
        assert_eq!(view.subtotal, "$ 27.400");
        assert_eq!(view.total, "$ 27.400");
        assert_eq!(view.shipping, "A calcular");
        assert_eq!(view.item_count, 5);
    }

    #[test]
    fn test_render_text_lists_items_and_totals() {
        let cart = cart_with(&[("B1", "Libro Físico", 1000, 2)]);
        let text = CartView::from(&cart).render_text();
        assert!(text.contains("Libro B1"));
        assert!(text.contains("$ 2.000"));
        assert!(text.contains("A calcular"));
        assert!(text.ends_with("Total      $ 2.000\n"));
        assert_eq!(text.lines().count(), 6);
    }
}
