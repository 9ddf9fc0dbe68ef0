use cms::{ThemeColors, ThemePreference};
use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// CSS custom properties for the authored palette. Values are free text, so anything
/// that could close the declaration is stripped.
pub fn theme_css(colors: &ThemeColors) -> String {
    let clean = |value: &str| -> String {
        value
            .chars()
            .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\\'))
            .collect::<String>()
            .trim()
            .to_string()
    };
    format!(
        ":root {{ --color-primary: {}; --color-secondary: {}; --color-accent: {}; --color-background: {}; --color-text: {}; }}",
        clean(&colors.primary),
        clean(&colors.secondary),
        clean(&colors.accent),
        clean(&colors.background),
        clean(&colors.text),
    )
}

/// Stylesheet, authored palette and the visitor's light/dark choice around `children`.
#[component]
pub fn SiteTheme(children: Element) -> Element {
    let ctx = crate::use_cms();
    ctx.track();
    let css = theme_css(&ctx.cms().site_content().get().theme);
    let preference = ctx.cms().preferences().theme_preference();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        style { "{css}" }
        div { class: "site_root", "data-theme": preference.as_str(), {children} }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let ctx = crate::use_cms();
    let toasts = crate::use_toasts();
    let texts = crate::use_texts();
    let label = texts.t("theme.toggle");
    let dark = ctx.cms().preferences().theme_preference() == ThemePreference::Dark;
    let class = if dark { "btn theme_toggle active" } else { "btn theme_toggle" };

    rsx! {
        button {
            class: class,
            onclick: move |_| {
                let prefs = ctx.cms().preferences();
                let next = prefs.theme_preference().toggled();
                if let Err(e) = prefs.set_theme_preference(next) {
                    toasts.error(texts.t("common.error_prefix"), Some(texts.t(e.message_key())));
                }
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_renders_variables() {
        let css = theme_css(&ThemeColors::default());
        assert!(css.contains("--color-primary: #1f3a5f;"));
        assert!(css.starts_with(":root {"));
    }

    #[test]
    fn declaration_breakers_are_stripped() {
        let colors = ThemeColors {
            primary: "red; } body { display: none".to_string(),
            ..ThemeColors::default()
        };
        let css = theme_css(&colors);
        assert!(css.contains("--color-primary: red  body  display: none;"));
        assert_eq!(css.matches('}').count(), 1);
    }
}
