//! Contact form.
//!
//! On creation the first text input is tinted, every button becomes a danger
//! button, and the `nombre` field and its label turn yellow.

use dioxus::prelude::*;
use teeshop_core::{Activity, ClassList};

use crate::context::{use_notice, Notice};

/// Class lists for the contact form elements, with the activities applied
#[derive(Debug, Clone, PartialEq)]
struct ContactStyles {
    /// Text inputs in document order
    text_inputs: Vec<ClassList>,
    name_label: ClassList,
    message: ClassList,
    buttons: Vec<ClassList>,
}

impl ContactStyles {
    fn styled() -> Self {
        let mut styles = Self {
            text_inputs: vec![ClassList::from("form-control"), ClassList::from("form-control")],
            name_label: ClassList::from("form-label"),
            message: ClassList::from("form-control"),
            buttons: vec![
                ClassList::from("btn btn-primary"),
                ClassList::from("btn btn-outline-secondary"),
            ],
        };

        Activity::ContactFirstInput.apply_to(styles.text_inputs.first_mut());
        for button in &mut styles.buttons {
            Activity::ContactButton.apply(button);
        }
        // The name field is the first text input
        Activity::ContactNameField.apply_to(styles.text_inputs.first_mut());
        Activity::ContactNameField.apply(&mut styles.name_label);
        styles
    }

    fn input(&self, i: usize) -> String {
        self.text_inputs.get(i).map(ToString::to_string).unwrap_or_default()
    }

    fn button(&self, i: usize) -> String {
        self.buttons.get(i).map(ToString::to_string).unwrap_or_default()
    }
}

#[component]
pub fn ContactForm() -> Element {
    let styles = use_hook(ContactStyles::styled);
    let (name_class, email_class) = (styles.input(0), styles.input(1));
    let (send_class, clear_class) = (styles.button(0), styles.button(1));
    let mut notice = use_notice();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut clear = move || {
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if name.read().trim().is_empty() || message.read().trim().is_empty() {
            notice.set(Some(Notice::Blocking("Escribe tu nombre y tu mensaje.".to_string())));
            return;
        }
        tracing::info!(name = %name.read(), "Contact message sent");
        notice.set(Some(Notice::Toast("¡Gracias! Te responderemos pronto.".to_string())));
        clear();
    };

    rsx! {
        section { class: "card",
            h2 { "Contacto" }
            form { id: "formContacto", onsubmit: submit,
                div { class: "form-grid",
                    div { class: "form-field",
                        label { class: "{styles.name_label}", r#for: "cNombre", "Nombre" }
                        input {
                            id: "cNombre",
                            name: "nombre",
                            r#type: "text",
                            class: "{name_class}",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { class: "form-label", r#for: "cCorreo", "Correo" }
                        input {
                            id: "cCorreo",
                            name: "correo",
                            r#type: "text",
                            class: "{email_class}",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-field wide",
                        label { class: "form-label", r#for: "cMensaje", "Mensaje" }
                        textarea {
                            id: "cMensaje",
                            class: "{styles.message}",
                            rows: "3",
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "{send_class}", r#type: "submit", "Enviar" }
                    button {
                        class: "{clear_class}",
                        r#type: "button",
                        onclick: move |_| clear(),
                        "Limpiar"
                    }
                }
            }
        }
    }
}
