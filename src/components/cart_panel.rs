//! Cart panel.
//!
//! Everything shown here comes from [`CartView::project`]; the panel never
//! reads cart lines directly, so the table, total, badge and button states
//! always agree.
//!
//! ## Components
//!
//! - [`CartPanel`] - Table, total, clear and checkout
//! - [`CartRow`] - One line with quantity controls

use dioxus::prelude::*;
use teeshop_core::{CartAction, CartRowView, CartView};

use crate::context::{use_cart, use_notice, Notice};

/// One cart line with −/+ and remove controls.
///
/// # Props
///
/// * `row` - Pre-formatted line from the projection
/// * `on_action` - Called with the cart action for the pressed control
#[component]
pub fn CartRow(row: CartRowView, on_action: EventHandler<CartAction>) -> Element {
    let id = row.id.clone();
    let dec_id = id.clone();
    let inc_id = id.clone();

    rsx! {
        tr {
            td { "{row.name}" }
            td { "{row.unit_price}" }
            td {
                span { class: "cart-qty",
                    button {
                        class: "btn btn-outline-secondary btn-sm",
                        "aria-label": "Quitar uno",
                        onclick: move |_| on_action.call(CartAction::Decrement(dec_id.clone())),
                        "−"
                    }
                    span { "{row.quantity}" }
                    button {
                        class: "btn btn-outline-secondary btn-sm",
                        "aria-label": "Agregar uno",
                        onclick: move |_| on_action.call(CartAction::Increment(inc_id.clone())),
                        "+"
                    }
                }
            }
            td { "{row.subtotal}" }
            td {
                button {
                    class: "btn btn-danger btn-sm",
                    title: "Eliminar",
                    "aria-label": "Eliminar del carrito",
                    onclick: move |_| on_action.call(CartAction::Remove(id.clone())),
                    "\u{00D7}"
                }
            }
        }
    }
}

/// Cart table with total, clear and checkout.
#[component]
pub fn CartPanel() -> Element {
    let mut cart = use_cart();
    let mut notice = use_notice();

    let view = CartView::project(&cart.read());
    let total = view.total.clone();

    rsx! {
        section { class: "card",
            h2 {
                "Carrito "
                span { class: "cart-badge", "{view.badge}" }
            }

            if let Some(placeholder) = view.placeholder {
                p { class: "text-muted", "{placeholder}" }
            } else {
                table { class: "cart-table",
                    thead {
                        tr {
                            th { "Producto" }
                            th { "Precio" }
                            th { "Cantidad" }
                            th { "Subtotal" }
                            th {}
                        }
                    }
                    tbody {
                        for row in view.rows.iter().cloned() {
                            CartRow {
                                key: "{row.id}",
                                row,
                                on_action: move |action| cart.write().apply(action),
                            }
                        }
                    }
                }
            }

            div { class: "cart-total", "Total: {view.total}" }

            div { class: "cart-actions",
                button {
                    class: "btn btn-outline-secondary",
                    disabled: !view.clear_enabled,
                    onclick: move |_| cart.write().apply(CartAction::Clear),
                    "Vaciar carrito"
                }
                button {
                    class: "btn btn-success",
                    disabled: !view.checkout_enabled,
                    onclick: move |_| {
                        tracing::info!(total = %total, "Checkout requested");
                        notice.set(Some(Notice::Blocking(format!(
                            "¡Gracias por tu compra! Total a pagar: {}. Te contactaremos para coordinar el pago y la entrega.",
                            total
                        ))));
                    },
                    "Pagar ({view.badge})"
                }
            }
        }
    }
}
