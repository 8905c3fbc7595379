//! Page components for the storefront.

mod storefront;

pub use storefront::Storefront;
