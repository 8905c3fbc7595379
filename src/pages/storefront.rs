//! The single shop page.

use dioxus::prelude::*;

use crate::components::{
    CartPanel, ContactForm, GradientBackdrop, OrderFormPanel, OrderSummaryPanel, ProductGrid,
    PromoBanner, Testimonials, WhatsAppFloat,
};
use crate::context::use_shop_config;

/// Storefront layout.
///
/// - Header and promo banner
/// - Catalog beside the cart
/// - Custom order form beside its summary
/// - Testimonials and contact form
/// - Floating WhatsApp button outside the scrolling content
#[component]
pub fn Storefront() -> Element {
    let shop = use_shop_config();
    let mut scroll_y = use_signal(|| 0.0_f64);

    let shop_name = shop.read().shop_name.clone();

    rsx! {
        GradientBackdrop { on_scroll: move |y| scroll_y.set(y),
            div { class: "page",
                header { class: "site-header",
                    h1 { class: "site-title", "{shop_name}" }
                }
                PromoBanner {}
                div { class: "two-col",
                    ProductGrid {}
                    CartPanel {}
                }
                div { class: "two-col",
                    OrderFormPanel {}
                    OrderSummaryPanel {}
                }
                Testimonials {}
                ContactForm {}
            }
        }
        WhatsAppFloat { scroll_y: scroll_y() }
    }
}
