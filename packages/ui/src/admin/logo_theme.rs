use super::form::{report, TextField};
use super::AdminGate;
use cms::{AdminScreen, ThemeColors};
use dioxus::prelude::*;

#[component]
pub fn AdminLogoThemePage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::LogoTheme, LogoThemeForm {} }
    }
}

#[component]
fn ColorField(label: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        label { class: "field color_field",
            span { "{label}" }
            span { class: "swatch", style: "background: {value}" }
            input { value: "{value}", oninput: move |e| on_input.call(e.value()) }
        }
    }
}

#[component]
fn LogoThemeForm() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();

    let mut logo = use_signal({
        let ctx = ctx.clone();
        move || ctx.cms().site_content().get().logo.unwrap_or_default()
    });
    let mut theme = use_signal({
        let ctx = ctx.clone();
        move || ctx.cms().site_content().get().theme
    });
    let colors = theme();
    let preview = logo();

    rsx! {
        div { class: "page_header",
            h1 { {texts.t("admin.menu.logo_theme")} }
        }
        div { class: "panel",
            TextField {
                label: texts.t("logo.url"),
                value: preview.clone(),
                on_input: move |v| logo.set(v),
            }
            if !preview.trim().is_empty() {
                img { class: "logo_preview", src: "{preview}", alt: "" }
            }

            ColorField {
                label: texts.t("theme.primary"),
                value: colors.primary.clone(),
                on_input: move |v| theme.with_mut(|t| t.primary = v),
            }
            ColorField {
                label: texts.t("theme.secondary"),
                value: colors.secondary.clone(),
                on_input: move |v| theme.with_mut(|t| t.secondary = v),
            }
            ColorField {
                label: texts.t("theme.accent"),
                value: colors.accent.clone(),
                on_input: move |v| theme.with_mut(|t| t.accent = v),
            }
            ColorField {
                label: texts.t("theme.background"),
                value: colors.background.clone(),
                on_input: move |v| theme.with_mut(|t| t.background = v),
            }
            ColorField {
                label: texts.t("theme.text"),
                value: colors.text.clone(),
                on_input: move |v| theme.with_mut(|t| t.text = v),
            }

            div { class: "form_actions",
                button {
                    class: "btn primary",
                    onclick: {
                        let ctx = ctx.clone();
                        let texts = texts.clone();
                        move |_| {
                            let site = ctx.cms().site_content();
                            let result = site.set_logo(&logo()).and_then(|_| site.set_theme(&theme()));
                            report(toasts, &texts, result, "theme.saved");
                        }
                    },
                    {texts.t("common.save")}
                }
                button {
                    class: "btn",
                    onclick: move |_| theme.set(ThemeColors::default()),
                    {texts.t("theme.reset")}
                }
            }
        }
    }
}
