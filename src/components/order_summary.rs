//! Order summary and confirmation.

use dioxus::prelude::*;
use teeshop_core::{OrderState, SUMMARY_PLACEHOLDER};

use crate::context::use_order;

/// Summary of the last valid order, with a confirm button that opens a
/// modal addressed to the customer.
#[component]
pub fn OrderSummaryPanel() -> Element {
    let order = use_order();
    let mut show_confirm = use_signal(|| false);

    let calc = order.read();
    let customer = calc.customer_label().to_string();
    let total = calc.total_label();
    let confirm_enabled = calc.confirm_enabled();
    let items = match calc.state() {
        OrderState::Summarized(summary) => summary.items(),
        OrderState::Unsubmitted => Vec::new(),
    };
    drop(calc);
    let has_items = !items.is_empty();

    rsx! {
        section { class: "card",
            h2 { "Resumen" }
            p { class: "text-muted", "Cliente: " strong { "{customer}" } }
            ul { class: "summary-list",
                if !has_items {
                    li { class: "text-muted", "{SUMMARY_PLACEHOLDER}" }
                }
                for item in items {
                    li { key: "{item.label}",
                        strong { "{item.label}: " }
                        "{item.value}"
                    }
                }
            }
            div { class: "summary-total", "Total: {total}" }
            div { class: "form-actions",
                button {
                    class: "btn btn-success",
                    disabled: !confirm_enabled,
                    onclick: move |_| show_confirm.set(true),
                    "Confirmar pedido"
                }
            }
        }

        if show_confirm() && confirm_enabled {
            div { class: "modal-backdrop",
                div { class: "modal", role: "dialog", "aria-modal": "true",
                    h3 { "¡Gracias, {customer}!" }
                    p { "Recibimos tu pedido por {total}. Te escribiremos para confirmar los detalles." }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_confirm.set(false),
                            "Cerrar"
                        }
                    }
                }
            }
        }
    }
}
