use super::form::{report, BilingualField, TextField};
use super::AdminGate;
use cms::{AdminScreen, HeroContent, LocalizedText};
use dioxus::prelude::*;

#[component]
pub fn AdminSiteContentPage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::SiteContent,
            SiteInfoForm {}
            HeroForm {}
            OverrideEditor {}
        }
    }
}

#[component]
fn SiteInfoForm() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let mut info = use_signal({
        let ctx = ctx.clone();
        move || ctx.cms().site_content().site_info()
    });
    let current = info();

    rsx! {
        div { class: "panel",
            h2 { {texts.t("site_content.firm")} }
            BilingualField {
                label: texts.t("site_content.firm_name"),
                ar: current.firm_name.ar.clone(),
                en: current.firm_name.en.clone(),
                on_ar: move |v| info.with_mut(|i| i.firm_name.ar = v),
                on_en: move |v| info.with_mut(|i| i.firm_name.en = v),
            }
            BilingualField {
                label: texts.t("site_content.tagline"),
                ar: current.tagline.ar.clone(),
                en: current.tagline.en.clone(),
                on_ar: move |v| info.with_mut(|i| i.tagline.ar = v),
                on_en: move |v| info.with_mut(|i| i.tagline.en = v),
            }
            div { class: "form_actions",
                button {
                    class: "btn primary",
                    onclick: {
                        let ctx = ctx.clone();
                        let texts = texts.clone();
                        move |_| {
                            let result = ctx.cms().site_content().save_site_info(&info());
                            report(toasts, &texts, result, "site_content.saved");
                        }
                    },
                    {texts.t("common.save")}
                }
            }
        }
    }
}

#[component]
fn HeroForm() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let mut hero = use_signal({
        let ctx = ctx.clone();
        move || ctx.cms().site_content().get().hero
    });
    let current: HeroContent = hero();

    rsx! {
        div { class: "panel",
            h2 { {texts.t("site_content.hero")} }
            BilingualField {
                label: texts.t("site_content.hero_title"),
                ar: current.title.ar.clone(),
                en: current.title.en.clone(),
                on_ar: move |v| hero.with_mut(|h| h.title.ar = v),
                on_en: move |v| hero.with_mut(|h| h.title.en = v),
            }
            BilingualField {
                label: texts.t("site_content.hero_subtitle"),
                ar: current.subtitle.ar.clone(),
                en: current.subtitle.en.clone(),
                multiline: true,
                on_ar: move |v| hero.with_mut(|h| h.subtitle.ar = v),
                on_en: move |v| hero.with_mut(|h| h.subtitle.en = v),
            }
            div { class: "form_actions",
                button {
                    class: "btn primary",
                    onclick: {
                        let ctx = ctx.clone();
                        let texts = texts.clone();
                        move |_| {
                            let result = ctx.cms().site_content().set_hero(&hero());
                            report(toasts, &texts, result, "site_content.saved");
                        }
                    },
                    {texts.t("common.save")}
                }
            }
        }
    }
}

/// Per-key text overrides. A key needs both languages; clearing both removes it.
#[component]
fn OverrideEditor() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let overrides: Vec<(String, LocalizedText)> = texts
        .content()
        .texts
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let mut key = use_signal(String::new);
    let mut value = use_signal(LocalizedText::default);
    let current = value();

    rsx! {
        div { class: "panel",
            h2 { {texts.t("site_content.overrides")} }
            TextField {
                label: texts.t("site_content.key"),
                value: key(),
                on_input: move |v| key.set(v),
            }
            BilingualField {
                label: texts.t("site_content.value"),
                ar: current.ar.clone(),
                en: current.en.clone(),
                multiline: true,
                on_ar: move |v| value.with_mut(|t| t.ar = v),
                on_en: move |v| value.with_mut(|t| t.en = v),
            }
            div { class: "form_actions",
                button {
                    class: "btn primary",
                    onclick: {
                        let ctx = ctx.clone();
                        let texts = texts.clone();
                        move |_| {
                            let text = value();
                            let result = ctx.cms().site_content().set_override(&key(), &text.ar, &text.en);
                            if report(toasts, &texts, result, "site_content.saved") {
                                key.set(String::new());
                                value.set(LocalizedText::default());
                            }
                        }
                    },
                    {texts.t("common.save")}
                }
            }

            div { class: "admin_list",
                for (name, text) in overrides {
                    div { key: "{name}", class: "admin_row",
                        div { class: "admin_row_main",
                            code { "{name}" }
                            span { class: "hint", {texts.localized(&text)} }
                        }
                        div { class: "admin_row_actions",
                            button {
                                class: "btn",
                                onclick: {
                                    let name = name.clone();
                                    let text = text.clone();
                                    move |_| {
                                        key.set(name.clone());
                                        value.set(text.clone());
                                    }
                                },
                                {texts.t("common.edit")}
                            }
                            button {
                                class: "btn danger",
                                onclick: {
                                    let ctx = ctx.clone();
                                    let texts = texts.clone();
                                    let name = name.clone();
                                    move |_| {
                                        let result = ctx.cms().site_content().clear_override(&name);
                                        report(toasts, &texts, result, "site_content.saved");
                                    }
                                },
                                {texts.t("common.delete")}
                            }
                        }
                    }
                }
            }
        }
    }
}
