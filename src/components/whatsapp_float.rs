use dioxus::prelude::*;
use teeshop_core::{floating_button_visible, Availability, ContactLink};

use crate::context::use_shop_config;
use crate::theme::colors::WHATSAPP_GREEN;

/// Floating WhatsApp button, shown once the page is scrolled far enough.
///
/// The link wording follows the local hour at render time.
#[component]
pub fn WhatsAppFloat(scroll_y: f64) -> Element {
    let shop = use_shop_config();
    let config = shop.read();
    let contact = &config.contact;

    let link = ContactLink::now(contact);
    let show = if floating_button_visible(scroll_y, contact.scroll_threshold) { " show" } else { "" };
    let offline = if link.availability == Availability::Offline { " offline" } else { "" };

    rsx! {
        a {
            class: "whatsapp-float{show}{offline}",
            style: "background: {WHATSAPP_GREEN};",
            href: "{link.href}",
            target: "_blank",
            rel: "noopener",
            title: "{link.title}",
            "aria-label": "{link.aria_label}",
            "\u{1F4AC}"
        }
    }
}
