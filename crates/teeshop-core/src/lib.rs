//! Storefront Core Library
//!
//! Interactive behavior of a small t-shirt shop page, free of any UI toolkit.
//!
//! ## Overview
//!
//! - **Cart store**: ordered line items keyed by product id, with add,
//!   quantity change, removal and clear ([`Cart`])
//! - **Cart projection**: pure, idempotent view of the cart for rendering
//!   ([`CartView`])
//! - **Order calculator**: validates the custom-order form and prices it
//!   ([`OrderCalculator`])
//! - **Gradient painter**: cursor-reactive background, coalesced to one
//!   repaint per frame ([`paint`], [`FrameScheduler`])
//! - **Contact link**: WhatsApp deep link with business-hours wording
//!   ([`ContactLink`])
//!
//! Prices are [`Money`] (whole centavos) and display as Mexican pesos.
//!
//! ## Quick Start
//!
//! ```
//! use teeshop_core::{Cart, CartView, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
//! cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
//!
//! let view = CartView::project(&cart);
//! assert_eq!(view.total, "$500.00");
//! assert_eq!(view.badge, 2);
//! ```

pub mod activities;
pub mod cart;
pub mod cart_view;
pub mod config;
pub mod contact;
pub mod currency;
pub mod error;
pub mod gradient;
pub mod money;
pub mod order;
pub mod types;

// Re-exports
pub use activities::{Activity, ClassList};
pub use cart::{Cart, CartAction, CartLine};
pub use cart_view::{CartRowView, CartView, EMPTY_CART_MESSAGE};
pub use config::{OrderOptions, ShopConfig};
pub use contact::{floating_button_visible, whatsapp_url, Availability, ContactLink, ContactSettings};
pub use currency::format_mxn;
pub use error::{ShopError, ShopResult};
pub use gradient::{paint, FrameScheduler, GradientSpec, Hsl, Point, Viewport};
pub use money::Money;
pub use order::{
    parse_quantity, ExtraOption, ModelOption, OrderCalculator, OrderForm, OrderState,
    OrderSummary, ShippingOption, SummaryItem, INCOMPLETE_ORDER_NOTICE, NO_CUSTOMER,
    SUMMARY_PLACEHOLDER,
};
pub use types::{Product, ProductId, ProductTag};
