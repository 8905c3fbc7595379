//! UI components for the storefront page.

mod cart_panel;
mod contact_form;
mod gradient_backdrop;
mod notice;
mod order_form;
mod order_summary;
mod product_grid;
mod promo_banner;
mod testimonials;
mod whatsapp_float;

pub use cart_panel::CartPanel;
pub use contact_form::ContactForm;
pub use gradient_backdrop::GradientBackdrop;
pub use notice::NoticeLayer;
pub use order_form::OrderFormPanel;
pub use order_summary::OrderSummaryPanel;
pub use product_grid::ProductGrid;
pub use promo_banner::PromoBanner;
pub use testimonials::Testimonials;
pub use whatsapp_float::WhatsAppFloat;
