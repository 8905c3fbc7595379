//! Presentation projection of the cart.
//!
//! [`CartView::project`] is a pure function of [`Cart`] state: it formats
//! prices, decides which actions are enabled and picks the placeholder for an
//! empty cart. Projecting the same cart twice yields equal views.

use crate::cart::Cart;
use crate::currency::format_mxn;
use crate::types::ProductId;

/// Message shown in place of rows when the cart has no lines
pub const EMPTY_CART_MESSAGE: &str = "Tu carrito está vacío.";

/// One rendered cart row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    pub id: ProductId,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Everything the cart panel needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Rows in insertion order; empty when the cart is empty
    pub rows: Vec<CartRowView>,
    /// Formatted grand total
    pub total: String,
    /// Units in the cart, for the badge
    pub badge: u64,
    /// Placeholder text, present only for an empty cart
    pub placeholder: Option<&'static str>,
    pub checkout_enabled: bool,
    pub clear_enabled: bool,
}

impl CartView {
    /// Project the current cart state
    pub fn project(cart: &Cart) -> Self {
        let rows: Vec<CartRowView> = cart
            .lines()
            .iter()
            .map(|line| CartRowView {
                id: line.id.clone(),
                name: line.name.clone(),
                unit_price: format_mxn(line.unit_price),
                quantity: line.quantity,
                subtotal: format_mxn(line.subtotal()),
            })
            .collect();

        let has_rows = !rows.is_empty();
        Self {
            rows,
            total: format_mxn(cart.total()),
            badge: cart.item_count(),
            placeholder: (!has_rows).then_some(EMPTY_CART_MESSAGE),
            checkout_enabled: has_rows,
            clear_enabled: has_rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl std::fmt::Display for CartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(placeholder) = self.placeholder {
            return writeln!(f, "{}", placeholder);
        }

        let name_width = self.rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
        for row in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>12} x {:<4} {:>14}",
                row.name,
                row.unit_price,
                row.quantity,
                row.subtotal,
                width = name_width
            )?;
        }
        let unit = if self.badge == 1 { "artículo" } else { "artículos" };
        writeln!(f, "Total: {} ({} {})", self.total, self.badge, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_empty_projection() {
        let view = CartView::project(&Cart::new());
        assert!(view.is_empty());
        assert_eq!(view.placeholder, Some(EMPTY_CART_MESSAGE));
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.badge, 0);
        assert!(!view.checkout_enabled);
        assert!(!view.clear_enabled);
    }

    #[test]
    fn test_filled_projection() {
        let mut cart = Cart::new();
        cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
        cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
        cart.add_item("cap", "Gorra", Money::from_pesos(1500));

        let view = CartView::project(&cart);
        assert_eq!(view.placeholder, None);
        assert!(view.checkout_enabled);
        assert!(view.clear_enabled);
        assert_eq!(view.badge, 3);
        assert_eq!(view.rows.len(), 2);

        assert_eq!(view.rows[0].name, "Classic Tee");
        assert_eq!(view.rows[0].unit_price, "$250.00");
        assert_eq!(view.rows[0].quantity, 2);
        assert_eq!(view.rows[0].subtotal, "$500.00");
        assert_eq!(view.rows[1].subtotal, "$1,500.00");
        assert_eq!(view.total, "$2,000.00");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
        assert_eq!(CartView::project(&cart), CartView::project(&cart));
        assert_eq!(
            CartView::project(&cart).to_string(),
            CartView::project(&cart).to_string()
        );
    }

    #[test]
    fn test_cleared_cart_matches_empty() {
        let mut cart = Cart::new();
        cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
        cart.clear();
        assert_eq!(CartView::project(&cart), CartView::project(&Cart::new()));
    }

    #[test]
    fn test_text_rendering() {
        let mut cart = Cart::new();
        assert_eq!(CartView::project(&cart).to_string(), "Tu carrito está vacío.\n");

        cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
        let text = CartView::project(&cart).to_string();
        assert!(text.contains("Classic Tee"));
        assert!(text.contains("Total: $250.00 (1 artículo)"));

        cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
        let text = CartView::project(&cart).to_string();
        assert!(text.contains("Total: $500.00 (2 artículos)"));
    }
}
