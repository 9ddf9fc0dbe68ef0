use crate::{Texts, Toasts};
use cms::CmsError;
use dioxus::prelude::*;

/// Toast the outcome of an admin action. Returns whether it succeeded.
pub(crate) fn report<T>(
    toasts: Toasts,
    texts: &Texts,
    result: Result<T, CmsError>,
    success_key: &str,
) -> bool {
    match result {
        Ok(_) => {
            toasts.success(texts.t(success_key), None);
            true
        }
        Err(e) => {
            tracing::info!("admin.save: rejected: {}", e);
            toasts.error(texts.t("common.error_prefix"), Some(texts.error(&e)));
            false
        }
    }
}

/// Arabic and English inputs for one bilingual field.
#[component]
pub fn BilingualField(
    label: String,
    ar: String,
    en: String,
    on_ar: EventHandler<String>,
    on_en: EventHandler<String>,
    #[props(default)] multiline: bool,
) -> Element {
    let texts = crate::use_texts();
    let arabic = texts.t("form.arabic");
    let english = texts.t("form.english");

    rsx! {
        fieldset { class: "bilingual",
            legend { "{label}" }
            div { class: "bilingual_row",
                div { class: "bilingual_side", dir: "rtl", lang: "ar",
                    span { class: "side_label", "{arabic}" }
                    if multiline {
                        textarea { value: "{ar}", rows: 8, oninput: move |e| on_ar.call(e.value()) }
                    } else {
                        input { value: "{ar}", oninput: move |e| on_ar.call(e.value()) }
                    }
                }
                div { class: "bilingual_side", dir: "ltr", lang: "en",
                    span { class: "side_label", "{english}" }
                    if multiline {
                        textarea { value: "{en}", rows: 8, oninput: move |e| on_en.call(e.value()) }
                    } else {
                        input { value: "{en}", oninput: move |e| on_en.call(e.value()) }
                    }
                }
            }
        }
    }
}

/// Single-language input row.
#[component]
pub fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
) -> Element {
    rsx! {
        label { class: "field",
            span { "{label}" }
            input { r#type: "{kind}", value: "{value}", oninput: move |e| on_input.call(e.value()) }
        }
    }
}
