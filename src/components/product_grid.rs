//! Catalog cards with add-to-cart buttons.

use dioxus::prelude::*;
use teeshop_core::ProductTag;

use crate::context::{use_cart, use_shop_config};

/// A single catalog card.
///
/// The button carries the raw tag; it is validated only when clicked, and an
/// incomplete tag adds nothing.
#[component]
fn ProductCard(tag: ProductTag) -> Element {
    let mut cart = use_cart();

    let name = tag.name.clone().unwrap_or_default();
    let price = match tag.to_product() {
        Ok(product) => product.unit_price.to_string(),
        Err(_) => "—".to_string(),
    };

    rsx! {
        div { class: "card product-card",
            h3 { "{name}" }
            span { class: "product-price", "{price}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    cart.write().add_tagged(&tag);
                },
                "Agregar al carrito"
            }
        }
    }
}

/// Grid of every product in the configured catalog.
#[component]
pub fn ProductGrid() -> Element {
    let shop = use_shop_config();
    let catalog = shop.read().catalog.clone();

    rsx! {
        section { class: "card",
            h2 { "Playeras" }
            div { class: "product-grid",
                for (i, tag) in catalog.into_iter().enumerate() {
                    ProductCard { key: "{i}", tag }
                }
            }
        }
    }
}
