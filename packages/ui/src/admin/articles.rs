use super::form::{report, BilingualField, TextField};
use super::AdminGate;
use cms::{AdminScreen, ArticleCategory, ArticleDraft};
use dioxus::prelude::*;

fn blank_draft() -> ArticleDraft {
    ArticleDraft {
        is_active: true,
        ..ArticleDraft::default()
    }
}

#[component]
pub fn AdminArticlesPage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::Articles, ArticleManager {} }
    }
}

#[component]
fn ArticleManager() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let articles = ctx.cms().articles().list();

    let mut editing = use_signal(|| None::<String>);
    let mut draft = use_signal(blank_draft);
    let d = draft();

    rsx! {
        div { class: "page_header",
            h1 { {texts.t("admin.menu.articles")} }
            button {
                class: "btn",
                onclick: move |_| {
                    editing.set(None);
                    draft.set(blank_draft());
                },
                {texts.t("articles.new")}
            }
        }

        div { class: "panel",
            BilingualField {
                label: texts.t("articles.form.title"),
                ar: d.title_ar.clone(),
                en: d.title_en.clone(),
                on_ar: move |v| draft.with_mut(|d| d.title_ar = v),
                on_en: move |v| draft.with_mut(|d| d.title_en = v),
            }
            BilingualField {
                label: texts.t("articles.form.excerpt"),
                ar: d.excerpt_ar.clone(),
                en: d.excerpt_en.clone(),
                on_ar: move |v| draft.with_mut(|d| d.excerpt_ar = v),
                on_en: move |v| draft.with_mut(|d| d.excerpt_en = v),
            }
            BilingualField {
                label: texts.t("articles.form.content"),
                ar: d.content_ar.clone(),
                en: d.content_en.clone(),
                multiline: true,
                on_ar: move |v| draft.with_mut(|d| d.content_ar = v),
                on_en: move |v| draft.with_mut(|d| d.content_en = v),
            }
            label { class: "field",
                span { {texts.t("articles.form.category")} }
                select {
                    value: d.category.as_str(),
                    onchange: move |e| {
                        if let Some(category) = ArticleCategory::from_str_opt(&e.value()) {
                            draft.with_mut(|d| d.category = category);
                        }
                    },
                    for category in ArticleCategory::ALL {
                        option {
                            key: "{category.as_str()}",
                            value: category.as_str(),
                            selected: category == d.category,
                            {texts.t(&category.label_key())}
                        }
                    }
                }
            }
            TextField {
                label: texts.t("articles.form.image"),
                value: d.image.clone(),
                on_input: move |v| draft.with_mut(|d| d.image = v),
            }
            label { class: "field checkbox",
                input {
                    r#type: "checkbox",
                    checked: d.is_active,
                    onchange: move |e| draft.with_mut(|d| d.is_active = e.checked()),
                }
                span { {texts.t("articles.form.active")} }
            }
            div { class: "form_actions",
                button {
                    class: "btn primary",
                    onclick: {
                        let ctx = ctx.clone();
                        let texts = texts.clone();
                        move |_| {
                            let input = draft();
                            let result = match editing() {
                                Some(id) => ctx.cms().articles().update(&id, &input),
                                None => ctx.cms().articles().create(&input),
                            };
                            if report(toasts, &texts, result, "articles.saved") {
                                editing.set(None);
                                draft.set(blank_draft());
                            }
                        }
                    },
                    {texts.t("common.save")}
                }
                if editing().is_some() {
                    button {
                        class: "btn",
                        onclick: move |_| {
                            editing.set(None);
                            draft.set(blank_draft());
                        },
                        {texts.t("common.cancel")}
                    }
                }
            }
        }

        div { class: "admin_list",
            for article in articles {
                div { key: "{article.id}", class: "admin_row",
                    div { class: "admin_row_main",
                        strong { {texts.localized(&article.title)} }
                        span { class: "tag", {texts.t(&article.category.label_key())} }
                        if !article.is_active {
                            span { class: "tag muted", {texts.t("articles.draft")} }
                        }
                    }
                    div { class: "admin_row_actions",
                        button {
                            class: "btn",
                            onclick: {
                                let article = article.clone();
                                move |_| {
                                    editing.set(Some(article.id.clone()));
                                    draft.set(ArticleDraft::from_article(&article));
                                }
                            },
                            {texts.t("common.edit")}
                        }
                        button {
                            class: "btn",
                            onclick: {
                                let ctx = ctx.clone();
                                let texts = texts.clone();
                                let id = article.id.clone();
                                let next = !article.is_active;
                                move |_| {
                                    let result = ctx.cms().articles().set_active(&id, next);
                                    report(toasts, &texts, result, "articles.saved");
                                }
                            },
                            if article.is_active {
                                {texts.t("articles.unpublish")}
                            } else {
                                {texts.t("articles.publish")}
                            }
                        }
                        button {
                            class: "btn danger",
                            onclick: {
                                let ctx = ctx.clone();
                                let texts = texts.clone();
                                let id = article.id.clone();
                                move |_| {
                                    let result = ctx.cms().articles().delete(&id);
                                    if report(toasts, &texts, result, "articles.deleted") && editing() == Some(id.clone()) {
                                        editing.set(None);
                                        draft.set(blank_draft());
                                    }
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
