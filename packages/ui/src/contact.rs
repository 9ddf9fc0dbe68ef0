use cms::ContactForm;
use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// `wa.me` link for a phone number as authored (spaces, dashes and `+` allowed).
pub fn whatsapp_link(number: &str) -> Option<String> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{digits}"))
}

#[component]
pub fn ContactPage() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let info = ctx.cms().contact().contact_info();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);

    let whatsapp = info.whatsapp.as_deref().and_then(whatsapp_link);
    let address = texts.localized(&info.address);
    let hours = texts.localized(&info.working_hours);

    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {texts.t("contact.title")} }
            }
            p { class: "lead", {texts.t("contact.intro")} }

            div { class: "contact_layout",
                div { class: "panel contact_form",
                    label { {texts.t("contact.form.name")} }
                    input {
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    label { {texts.t("contact.form.email")} }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    label { {texts.t("contact.form.phone")} }
                    input {
                        r#type: "tel",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                    }
                    label { {texts.t("contact.form.subject")} }
                    input {
                        value: "{subject}",
                        oninput: move |e| subject.set(e.value()),
                    }
                    label { {texts.t("contact.form.message")} }
                    textarea {
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                        rows: 6,
                    }
                    button {
                        class: "btn primary",
                        onclick: {
                            let ctx = ctx.clone();
                            let texts = texts.clone();
                            move |_| {
                                let form = ContactForm {
                                    name: name(),
                                    email: email(),
                                    phone: phone(),
                                    subject: subject(),
                                    message: message(),
                                };
                                match ctx.cms().contact().submit(&form) {
                                    Ok(_) => {
                                        toasts.success(texts.t("contact.sent"), None);
                                        name.set(String::new());
                                        email.set(String::new());
                                        phone.set(String::new());
                                        subject.set(String::new());
                                        message.set(String::new());
                                    }
                                    Err(e) => {
                                        toasts.error(texts.t("common.error_prefix"), Some(texts.error(&e)));
                                    }
                                }
                            }
                        },
                        {texts.t("contact.form.send")}
                    }
                }

                div { class: "panel contact_info",
                    if !info.address.is_empty() {
                        h3 { {texts.t("contact.address")} }
                        p { "{address}" }
                    }
                    if !info.working_hours.is_empty() {
                        h3 { {texts.t("contact.hours")} }
                        p { "{hours}" }
                    }
                    for number in info.phones.iter() {
                        a { key: "{number}", class: "contact_line", href: "tel:{number}", "{number}" }
                    }
                    if !info.email.is_empty() {
                        a { class: "contact_line", href: "mailto:{info.email}", "{info.email}" }
                    }
                    if let Some(url) = whatsapp {
                        a { class: "btn whatsapp", href: "{url}", target: "_blank", {texts.t("contact.whatsapp")} }
                    }
                }
            }
        }
    }
}
