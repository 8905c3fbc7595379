//! Floating WhatsApp contact button.
//!
//! Builds the `wa.me` deep link, picks the online/offline wording from the
//! local hour, and decides when the button is shown while scrolling.

use chrono::Timelike;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters `encodeURIComponent` leaves untouched, besides alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Contact settings, part of the shop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// Country code plus number, digits only
    pub phone: String,
    /// Chat prefill during business hours
    pub online_message: String,
    /// Chat prefill outside business hours
    pub offline_message: String,
    /// First hour (local, inclusive) considered online
    pub opens_at: u32,
    /// Hour (local, exclusive) at which the shop goes offline
    pub closes_at: u32,
    /// Scroll offset in pixels past which the floating button appears
    pub scroll_threshold: f64,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            phone: "527221234567".to_string(),
            online_message: "Hola, vengo del sitio de Profe Joako. Me interesa una playera."
                .to_string(),
            offline_message:
                "Hola, vengo del sitio de Profe Joako. Me interesa una playera. Quedo pendiente de su respuesta."
                    .to_string(),
            opens_at: 9,
            closes_at: 18,
            scroll_threshold: 300.0,
        }
    }
}

/// Build `https://wa.me/<phone>?text=<message>` with the message URI-encoded.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!(
        "https://wa.me/{}?text={}",
        digits,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// Whether someone is around to answer right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Online,
    Offline,
}

impl Availability {
    /// Online when `opens_at <= hour < closes_at`
    pub fn at_hour(hour: u32, opens_at: u32, closes_at: u32) -> Self {
        if hour >= opens_at && hour < closes_at {
            Availability::Online
        } else {
            Availability::Offline
        }
    }

    /// Short status shown in the button tooltip
    pub fn status(&self) -> &'static str {
        match self {
            Availability::Online => "¡Respondo ahora!",
            Availability::Offline => "Fuera de horario, te contesto pronto",
        }
    }
}

/// Everything the floating button renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub href: String,
    pub title: String,
    pub aria_label: String,
    pub availability: Availability,
}

impl ContactLink {
    /// Build the link for a given local hour
    pub fn for_hour(settings: &ContactSettings, hour: u32) -> Self {
        let availability = Availability::at_hour(hour, settings.opens_at, settings.closes_at);
        let message = match availability {
            Availability::Online => &settings.online_message,
            Availability::Offline => &settings.offline_message,
        };
        let status = availability.status();

        Self {
            href: whatsapp_url(&settings.phone, message),
            title: format!("WhatsApp — {}", status),
            aria_label: format!("Chatea por WhatsApp — {}", status),
            availability,
        }
    }

    /// Build the link for the current local time
    pub fn now(settings: &ContactSettings) -> Self {
        Self::for_hour(settings, chrono::Local::now().hour())
    }
}

/// The floating button shows once the page is scrolled past the threshold.
pub fn floating_button_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encoding_matches_uri_component() {
        assert_eq!(
            whatsapp_url("527221234567", "Hola, ¿hay talla M?"),
            "https://wa.me/527221234567?text=Hola%2C%20%C2%BFhay%20talla%20M%3F"
        );
        assert_eq!(
            whatsapp_url("52", "a-b_c.d!e~f*g'h(i)"),
            "https://wa.me/52?text=a-b_c.d!e~f*g'h(i)"
        );
    }

    #[test]
    fn test_phone_keeps_digits_only() {
        assert_eq!(whatsapp_url("+52 722 123", "x"), "https://wa.me/52722123?text=x");
    }

    #[test]
    fn test_business_hours() {
        assert_eq!(Availability::at_hour(8, 9, 18), Availability::Offline);
        assert_eq!(Availability::at_hour(9, 9, 18), Availability::Online);
        assert_eq!(Availability::at_hour(17, 9, 18), Availability::Online);
        assert_eq!(Availability::at_hour(18, 9, 18), Availability::Offline);
        assert_eq!(Availability::at_hour(23, 9, 18), Availability::Offline);
    }

    #[test]
    fn test_link_varies_by_hour() {
        let settings = ContactSettings::default();
        let day = ContactLink::for_hour(&settings, 10);
        let night = ContactLink::for_hour(&settings, 22);

        assert_eq!(day.availability, Availability::Online);
        assert_eq!(day.title, "WhatsApp — ¡Respondo ahora!");
        assert_eq!(night.aria_label, "Chatea por WhatsApp — Fuera de horario, te contesto pronto");
        assert!(day.href.starts_with("https://wa.me/527221234567?text=Hola%2C%20vengo"));
        assert_ne!(day.href, night.href);
    }

    #[test]
    fn test_floating_button_threshold() {
        assert!(!floating_button_visible(0.0, 300.0));
        assert!(!floating_button_visible(300.0, 300.0));
        assert!(floating_button_visible(300.5, 300.0));
    }
}
