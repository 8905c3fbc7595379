//! Custom order form.
//!
//! Collects the order fields into an [`OrderForm`] on submit and hands it to
//! the shared [`OrderCalculator`](teeshop_core::OrderCalculator). A rejected
//! submit shows a blocking notice and leaves any earlier summary in place.

use dioxus::prelude::*;
use teeshop_core::{parse_quantity, OrderForm};

use crate::context::{use_notice, use_order, use_shop_config, Notice};

#[component]
pub fn OrderFormPanel() -> Element {
    let shop = use_shop_config();
    let mut order = use_order();
    let mut notice = use_notice();

    let mut customer_name = use_signal(String::new);
    let mut model = use_signal(String::new);
    let mut size = use_signal(String::new);
    let mut color = use_signal(String::new);
    let mut quantity = use_signal(|| "1".to_string());
    let mut extras: Signal<Vec<String>> = use_signal(Vec::new);
    let mut jersey_name = use_signal(String::new);
    let mut jersey_number = use_signal(String::new);
    let mut shipping = use_signal(String::new);
    let mut instructions = use_signal(String::new);

    let options = shop.read().order.clone();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let shop = shop.read();
        let options = &shop.order;

        let checked = extras.read();
        let form = OrderForm {
            customer_name: customer_name(),
            model: options.model(&model.read()).cloned(),
            size: size(),
            color: color(),
            quantity: parse_quantity(&quantity.read()),
            extras: options
                .extras
                .iter()
                .filter(|x| checked.contains(&x.id))
                .cloned()
                .collect(),
            jersey_name: jersey_name(),
            jersey_number: jersey_number(),
            shipping: options.shipping_option(&shipping.read()).cloned(),
            instructions: instructions(),
        };

        if let Err(e) = order.write().submit(&form) {
            notice.set(Some(Notice::Blocking(e.to_string())));
        }
    };

    let reset = move |_| {
        customer_name.set(String::new());
        model.set(String::new());
        size.set(String::new());
        color.set(String::new());
        quantity.set("1".to_string());
        extras.set(Vec::new());
        jersey_name.set(String::new());
        jersey_number.set(String::new());
        shipping.set(String::new());
        instructions.set(String::new());
        order.write().reset();
    };

    rsx! {
        section { class: "card",
            h2 { "Haz tu pedido" }
            form { onsubmit: submit,
                div { class: "form-grid",
                    div { class: "form-field wide",
                        label { class: "form-label", r#for: "nombreCliente", "Nombre" }
                        input {
                            id: "nombreCliente",
                            class: "form-control",
                            r#type: "text",
                            value: "{customer_name}",
                            oninput: move |e| customer_name.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", r#for: "selModelo", "Modelo" }
                        select {
                            id: "selModelo",
                            class: "form-control",
                            value: "{model}",
                            onchange: move |e| model.set(e.value()),
                            option { value: "", "Selecciona…" }
                            for m in options.models.iter() {
                                option { key: "{m.name}", value: "{m.name}", "{m.name} ({m.unit_price})" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", r#for: "inpCantidad", "Cantidad" }
                        input {
                            id: "inpCantidad",
                            class: "form-control",
                            r#type: "number",
                            min: "1",
                            value: "{quantity}",
                            oninput: move |e| quantity.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", r#for: "selTalla", "Talla" }
                        select {
                            id: "selTalla",
                            class: "form-control",
                            value: "{size}",
                            onchange: move |e| size.set(e.value()),
                            option { value: "", "Selecciona…" }
                            for s in options.sizes.iter() {
                                option { key: "{s}", value: "{s}", "{s}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", r#for: "selColor", "Color" }
                        select {
                            id: "selColor",
                            class: "form-control",
                            value: "{color}",
                            onchange: move |e| color.set(e.value()),
                            option { value: "", "Selecciona…" }
                            for c in options.colors.iter() {
                                option { key: "{c}", value: "{c}", "{c}" }
                            }
                        }
                    }
                    div { class: "form-field wide",
                        span { class: "form-label", "Extras" }
                        for x in options.extras.iter().cloned() {
                            label { key: "{x.id}", class: "form-check",
                                input {
                                    r#type: "checkbox",
                                    checked: extras.read().contains(&x.id),
                                    onchange: {
                                        let id = x.id.clone();
                                        move |_| {
                                            let mut list = extras.write();
                                            if let Some(pos) = list.iter().position(|c| *c == id) {
                                                list.remove(pos);
                                            } else {
                                                list.push(id.clone());
                                            }
                                        }
                                    },
                                }
                                "{x.label} (+{x.unit_price} c/u)"
                            }
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", r#for: "inpNombre", "Nombre en playera" }
                        input {
                            id: "inpNombre",
                            class: "form-control",
                            r#type: "text",
                            value: "{jersey_name}",
                            oninput: move |e| jersey_name.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", r#for: "inpNumero", "Número" }
                        input {
                            id: "inpNumero",
                            class: "form-control",
                            r#type: "text",
                            value: "{jersey_number}",
                            oninput: move |e| jersey_number.set(e.value()),
                        }
                    }
                    div { class: "form-field wide",
                        label { class: "form-label", r#for: "selEnvio", "Envío" }
                        select {
                            id: "selEnvio",
                            class: "form-control",
                            value: "{shipping}",
                            onchange: move |e| shipping.set(e.value()),
                            option { value: "", "Sin envío" }
                            for s in options.shipping.iter() {
                                option { key: "{s.label}", value: "{s.label}", "{s.label} ({s.cost})" }
                            }
                        }
                    }
                    div { class: "form-field wide",
                        label { class: "form-label", r#for: "txtInstrucciones", "Instrucciones" }
                        textarea {
                            id: "txtInstrucciones",
                            class: "form-control",
                            rows: "3",
                            value: "{instructions}",
                            oninput: move |e| instructions.set(e.value()),
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "btn btn-primary", r#type: "submit", "Calcular pedido" }
                    button {
                        class: "btn btn-outline-secondary",
                        r#type: "button",
                        onclick: reset,
                        "Limpiar"
                    }
                }
            }
        }
    }
}
