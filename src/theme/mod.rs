//! Storefront look and feel.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
