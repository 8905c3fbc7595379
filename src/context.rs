//! Shared page state for the storefront.
//!
//! The cart store, the order calculator and the notice slot live in signals
//! provided by [`crate::app::App`]; components reach them through the hooks
//! below.
//!
//! ## Usage
//!
//! ```ignore
//! let mut cart = use_cart();
//! cart.write().add_tagged(&tag);
//! let view = CartView::project(&cart.read());
//! ```

use dioxus::prelude::*;
use teeshop_core::{Cart, OrderCalculator, ShopConfig};

/// Get the shop configuration loaded at startup.
pub fn get_shop_config() -> ShopConfig {
    crate::get_shop_config()
}

/// A message shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Must be dismissed before the page can be used again
    Blocking(String),
    /// Short-lived toast that dismisses itself
    Toast(String),
}

/// Hook to access the cart store.
pub fn use_cart() -> Signal<Cart> {
    use_context::<Signal<Cart>>()
}

/// Hook to access the order calculator.
pub fn use_order() -> Signal<OrderCalculator> {
    use_context::<Signal<OrderCalculator>>()
}

/// Hook to access the current notice, if any.
pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

/// Hook to access the shop configuration from context.
pub fn use_shop_config() -> Signal<ShopConfig> {
    use_context::<Signal<ShopConfig>>()
}
