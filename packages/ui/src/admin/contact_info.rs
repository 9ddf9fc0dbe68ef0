use super::form::{report, BilingualField, TextField};
use super::AdminGate;
use cms::AdminScreen;
use dioxus::prelude::*;

fn some_text(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

#[component]
pub fn AdminContactInfoPage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::ContactInfo, ContactInfoForm {} }
    }
}

#[component]
fn ContactInfoForm() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();

    let mut info = use_signal({
        let ctx = ctx.clone();
        move || ctx.cms().contact().contact_info()
    });
    let mut phones = use_signal(move || info.peek().phones.join("\n"));
    let current = info();

    rsx! {
        div { class: "page_header",
            h1 { {texts.t("admin.menu.contact_info")} }
        }
        div { class: "panel",
            BilingualField {
                label: texts.t("contact.address"),
                ar: current.address.ar.clone(),
                en: current.address.en.clone(),
                on_ar: move |v| info.with_mut(|i| i.address.ar = v),
                on_en: move |v| info.with_mut(|i| i.address.en = v),
            }
            BilingualField {
                label: texts.t("contact.hours"),
                ar: current.working_hours.ar.clone(),
                en: current.working_hours.en.clone(),
                on_ar: move |v| info.with_mut(|i| i.working_hours.ar = v),
                on_en: move |v| info.with_mut(|i| i.working_hours.en = v),
            }
            label { class: "field",
                span { {texts.t("contact_info.phones")} }
                textarea {
                    value: "{phones}",
                    rows: 3,
                    oninput: move |e| phones.set(e.value()),
                }
            }
            TextField {
                label: texts.t("contact_info.email"),
                value: current.email.clone(),
                kind: "email".to_string(),
                on_input: move |v| info.with_mut(|i| i.email = v),
            }
            TextField {
                label: texts.t("contact_info.whatsapp"),
                value: current.whatsapp.clone().unwrap_or_default(),
                on_input: move |v| info.with_mut(|i| i.whatsapp = some_text(v)),
            }

            h3 { {texts.t("contact_info.social")} }
            TextField {
                label: "Facebook".to_string(),
                value: current.social.facebook.clone().unwrap_or_default(),
                on_input: move |v| info.with_mut(|i| i.social.facebook = some_text(v)),
            }
            TextField {
                label: "X".to_string(),
                value: current.social.twitter.clone().unwrap_or_default(),
                on_input: move |v| info.with_mut(|i| i.social.twitter = some_text(v)),
            }
            TextField {
                label: "LinkedIn".to_string(),
                value: current.social.linkedin.clone().unwrap_or_default(),
                on_input: move |v| info.with_mut(|i| i.social.linkedin = some_text(v)),
            }
            TextField {
                label: "Instagram".to_string(),
                value: current.social.instagram.clone().unwrap_or_default(),
                on_input: move |v| info.with_mut(|i| i.social.instagram = some_text(v)),
            }

            div { class: "form_actions",
                button {
                    class: "btn primary",
                    onclick: {
                        let ctx = ctx.clone();
                        let texts = texts.clone();
                        move |_| {
                            let mut input = info();
                            input.phones = phones().lines().map(str::to_string).collect();
                            let result = ctx.cms().contact().save_contact_info(&input);
                            report(toasts, &texts, result, "contact_info.saved");
                        }
                    },
                    {texts.t("common.save")}
                }
            }
        }
    }
}
