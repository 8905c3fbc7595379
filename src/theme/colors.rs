//! Color constants used from Rust code.
//!
//! Everything else lives as CSS custom properties in [`super::GLOBAL_STYLES`].

// === SLATE (behind the gradient) ===
pub const SLATE_DARK: &str = "hsl(219 30% 21%)";

// === BRAND ===
pub const WHATSAPP_GREEN: &str = "#25d366";
