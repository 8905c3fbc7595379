//! Shopping cart store.
//!
//! [`Cart`] owns an insertion-ordered list of [`CartLine`]s, one per distinct
//! product id. Every mutation keeps two invariants:
//!
//! - no two lines share an id
//! - every line has a quantity of at least 1 (a line reaching zero is removed)
//!
//! The cart never renders anything itself. Callers mutate it and then project
//! it with [`CartView::project`](crate::cart_view::CartView::project), so a
//! render always observes the mutation that preceded it.
//!
//! # Example
//!
//! ```
//! use teeshop_core::{Cart, Money, ProductId};
//!
//! let mut cart = Cart::new();
//! cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
//! cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), Money::from_pesos(500));
//!
//! cart.change_quantity(&ProductId::from("shirt-1"), -2);
//! assert!(cart.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::money::Money;
use crate::types::{Product, ProductId, ProductTag};

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// A user interaction with the cart, dispatched from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(Product),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    Clear,
}

/// Ordered collection of cart lines for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for `id`, or appends a new line with
    /// quantity 1. The name and price of an existing line are left as first added.
    pub fn add_item(&mut self, id: impl Into<ProductId>, name: impl Into<String>, unit_price: Money) {
        let id = id.into();
        if let Some(line) = self.line_mut(&id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(product = %id, quantity = line.quantity, "Incremented cart line");
            return;
        }

        debug!(product = %id, "Appended cart line");
        self.lines.push(CartLine {
            id,
            name: name.into(),
            unit_price,
            quantity: 1,
        });
    }

    /// Add one unit of an already validated product
    pub fn add_product(&mut self, product: &Product) {
        self.add_item(product.id.clone(), product.name.clone(), product.unit_price);
    }

    /// Add one unit from a raw add-to-cart tag.
    ///
    /// A tag without id, name or a readable price is skipped with a warning.
    /// Returns whether the cart changed.
    pub fn add_tagged(&mut self, tag: &ProductTag) -> bool {
        match tag.to_product() {
            Ok(product) => {
                self.add_product(&product);
                true
            }
            Err(e) => {
                warn!(?tag, "Skipping add to cart: {}", e);
                false
            }
        }
    }

    /// Adjust a line's quantity by `delta`.
    ///
    /// Unknown ids are ignored. A resulting quantity of zero or less removes
    /// the line; growth saturates at `u32::MAX`.
    pub fn change_quantity(&mut self, id: &ProductId, delta: i64) {
        let Some(index) = self.position(id) else {
            debug!(product = %id, "Quantity change for product not in cart");
            return;
        };

        let next = i64::from(self.lines[index].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(index);
            debug!(product = %id, "Removed cart line");
        } else {
            let quantity = u32::try_from(next).unwrap_or(u32::MAX);
            self.lines[index].quantity = quantity;
            debug!(product = %id, quantity, "Changed cart line quantity");
        }
    }

    /// Remove a line regardless of its quantity. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.lines.remove(index);
                debug!(product = %id, "Removed cart line");
                true
            }
            None => false,
        }
    }

    /// Remove every line
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "Cleared cart");
        self.lines.clear();
    }

    /// Apply a page action to the cart
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(product) => self.add_product(&product),
            CartAction::Increment(id) => self.change_quantity(&id, 1),
            CartAction::Decrement(id) => self.change_quantity(&id, -1),
            CartAction::Remove(id) => {
                self.remove_item(&id);
            }
            CartAction::Clear => self.clear(),
        }
    }

    /// Sum of every line's subtotal; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total number of units across all lines (the badge count).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct products
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by product id
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|l| &l.id == id)
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.id == id)
    }
}
