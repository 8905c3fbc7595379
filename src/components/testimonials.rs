//! Customer testimonials.
//!
//! VIP quotes are highlighted and every quote paragraph takes the paragraph
//! color, both applied once when the section is created.

use dioxus::prelude::*;
use teeshop_core::{Activity, ClassList};

struct Testimonial {
    author: &'static str,
    quote: &'static str,
    vip: bool,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Mariana G.",
        quote: "La tela es fresca y el estampado aguantó toda la temporada.",
        vip: false,
    },
    Testimonial {
        author: "Club Deportivo Toluca Norte",
        quote: "Pedimos 30 jerseys con nombre y número; llegaron a tiempo y perfectos.",
        vip: true,
    },
    Testimonial {
        author: "Luis R.",
        quote: "Buen precio y la talla quedó exacta.",
        vip: false,
    },
];

fn quote_classes(vip: bool) -> String {
    let mut classes = ClassList::from("testimonial");
    if vip {
        classes.add("testimonio-vip");
        Activity::VipTestimonial.apply(&mut classes);
    }
    Activity::Paragraph.apply(&mut classes);
    classes.to_string()
}

#[component]
pub fn Testimonials() -> Element {
    let classes: Vec<String> = use_hook(|| TESTIMONIALS.iter().map(|t| quote_classes(t.vip)).collect());

    rsx! {
        section { id: "testimonios", class: "card",
            h2 { "Lo que dicen" }
            div { class: "testimonials",
                for (t, class) in TESTIMONIALS.iter().zip(classes.iter()) {
                    figure { key: "{t.author}",
                        p { class: "{class}", "“{t.quote}”" }
                        figcaption { class: "text-muted", "— {t.author}" }
                    }
                }
            }
        }
    }
}
