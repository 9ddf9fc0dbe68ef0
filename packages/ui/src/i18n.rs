use cms::{CmsError, Language, LocalizedText, Resolver, SiteContent};
use dioxus::prelude::*;

/// Provide `Signal<Language>` to the component tree, starting from the stored preference.
///
/// Must sit inside the CMS provider. Renders a wrapper carrying `lang` and `dir`, so
/// switching to Arabic flips the layout to right-to-left without a reload.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let ctx = crate::use_cms();
    let lang = use_signal(move || ctx.cms().preferences().language());
    use_context_provider(|| lang);

    // Keep <html lang dir> in step for the browser's own text handling.
    use_effect(move || {
        let current = lang();
        spawn(async move {
            let _ = document::eval(&format!(
                r#"(function(){{
                    document.documentElement.lang = "{}";
                    document.documentElement.dir = "{}";
                    return "";
                }})()"#,
                current.code(),
                current.dir()
            ))
            .await;
        });
    });

    let current = lang();
    rsx! {
        div { class: "lang_root", lang: current.code(), dir: current.dir(), {children} }
    }
}

pub fn use_lang() -> Signal<Language> {
    if let Some(sig) = try_use_context::<Signal<Language>>() {
        return sig;
    }

    tracing::warn!("startup: missing I18nProvider context, using local Language::Ar signal");
    use_signal(|| Language::Ar)
}

/// Resolved texts for one render: the active language plus the site's override document.
#[derive(Clone, PartialEq)]
pub struct Texts {
    lang: Language,
    content: SiteContent,
}

impl Texts {
    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.lang, Some(&self.content))
    }

    pub fn t(&self, key: &str) -> String {
        self.resolver().text(key)
    }

    pub fn localized(&self, value: &LocalizedText) -> String {
        self.resolver().localized(value)
    }

    pub fn error(&self, err: &CmsError) -> String {
        self.t(err.message_key())
    }
}

/// Hook returning [`Texts`]; re-renders the caller on language change or store write.
pub fn use_texts() -> Texts {
    let lang = use_lang()();
    let ctx = crate::use_cms();
    ctx.track();
    Texts {
        lang,
        content: ctx.cms().site_content().get(),
    }
}

#[component]
pub fn LanguageToggle() -> Element {
    let mut lang = use_lang();
    let ctx = crate::use_cms();
    let toasts = crate::use_toasts();
    let texts = use_texts();
    let label = texts.t("lang.toggle");

    rsx! {
        button {
            class: "btn lang_toggle",
            onclick: move |_| {
                let next = lang().other();
                if let Err(e) = ctx.cms().preferences().set_language(next) {
                    toasts.error(texts.t("common.error_prefix"), Some(texts.t(e.message_key())));
                }
                lang.set(next);
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lang: Language) -> Texts {
        let mut content = SiteContent::default();
        content.texts.insert(
            "about.title".to_string(),
            LocalizedText {
                ar: "قصتنا".to_string(),
                en: "Our story".to_string(),
            },
        );
        Texts { lang, content }
    }

    #[test]
    fn texts_prefer_overrides() {
        assert_eq!(texts(Language::En).t("about.title"), "Our story");
        assert_eq!(texts(Language::Ar).t("about.title"), "قصتنا");
        assert_eq!(texts(Language::En).t("nav.home"), "Home");
        assert_eq!(texts(Language::En).t("missing.key"), "missing.key");
    }

    #[test]
    fn bilingual_values_follow_the_language() {
        let value = LocalizedText {
            ar: "القاهرة".to_string(),
            en: "Cairo".to_string(),
        };
        assert_eq!(texts(Language::Ar).localized(&value), "القاهرة");
        assert_eq!(texts(Language::En).localized(&value), "Cairo");
        assert_eq!(texts(Language::En).resolver().lang(), Language::En);
    }

    #[test]
    fn errors_are_localized() {
        let err = CmsError::LastSuperadmin;
        assert_eq!(
            texts(Language::En).error(&err),
            "The last superadmin cannot be removed."
        );
    }
}
