use dioxus::prelude::*;
use teeshop_core::{Activity, ClassList};

use crate::context::{use_notice, Notice};

/// Top banner; "Promo" repaints it yellow.
#[component]
pub fn PromoBanner() -> Element {
    let mut classes = use_signal(|| ClassList::from("banner bg-dark text-white"));
    let paragraph = use_hook(|| Activity::Paragraph.restyle(""));
    let mut notice = use_notice();

    rsx! {
        div { id: "banner", class: "{classes}",
            div {
                h2 { "Temporada de liga" }
                p { class: "{paragraph}", "Playeras personalizadas con tu nombre y número." }
            }
            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| Activity::PromoBanner.apply(&mut classes.write()),
                    "Promo"
                }
                button {
                    class: "btn btn-outline-secondary",
                    onclick: move |_| {
                        notice.set(Some(Notice::Toast(
                            "Envíos a todo México. Personalizados listos en 5 a 7 días.".to_string(),
                        )))
                    },
                    "Aviso"
                }
            }
        }
    }
}
