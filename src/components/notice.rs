//! Blocking notices and toasts.

use std::time::Duration;

use dioxus::prelude::*;

use crate::context::{use_notice, Notice};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Renders the current [`Notice`], if any.
///
/// A blocking notice covers the page until "Aceptar" is pressed; a toast
/// dismisses itself after [`TOAST_DURATION`] unless replaced first.
#[component]
pub fn NoticeLayer() -> Element {
    let mut notice = use_notice();

    use_effect(move || {
        if let Some(Notice::Toast(message)) = notice() {
            spawn(async move {
                tokio::time::sleep(TOAST_DURATION).await;
                let unchanged = matches!(&*notice.peek(), Some(Notice::Toast(m)) if *m == message);
                if unchanged {
                    notice.set(None);
                }
            });
        }
    });

    match notice() {
        Some(Notice::Blocking(message)) => rsx! {
            div { class: "modal-backdrop",
                div {
                    class: "modal",
                    role: "alertdialog",
                    "aria-modal": "true",
                    p { "{message}" }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            autofocus: true,
                            onclick: move |_| notice.set(None),
                            "Aceptar"
                        }
                    }
                }
            }
        },
        Some(Notice::Toast(message)) => rsx! {
            div { class: "toast", role: "status", "{message}" }
        },
        None => rsx! {},
    }
}
