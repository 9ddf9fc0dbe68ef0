use super::form::{report, BilingualField, TextField};
use super::AdminGate;
use cms::{AdminScreen, LawyerDraft};
use dioxus::prelude::*;

#[component]
pub fn AdminLawyersPage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::Lawyers, LawyerManager {} }
    }
}

#[component]
fn LawyerManager() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let lawyers = ctx.cms().lawyers().list_or_default();

    let mut editing = use_signal(|| None::<String>);
    let mut draft = use_signal(LawyerDraft::default);
    let d = draft();

    rsx! {
        div { class: "page_header",
            h1 { {texts.t("admin.menu.lawyers")} }
            button {
                class: "btn",
                onclick: move |_| {
                    editing.set(None);
                    draft.set(LawyerDraft::default());
                },
                {texts.t("lawyers.new")}
            }
        }

        div { class: "panel",
            BilingualField {
                label: texts.t("lawyers.form.name"),
                ar: d.name_ar.clone(),
                en: d.name_en.clone(),
                on_ar: move |v| draft.with_mut(|d| d.name_ar = v),
                on_en: move |v| draft.with_mut(|d| d.name_en = v),
            }
            BilingualField {
                label: texts.t("lawyers.form.title"),
                ar: d.title_ar.clone(),
                en: d.title_en.clone(),
                on_ar: move |v| draft.with_mut(|d| d.title_ar = v),
                on_en: move |v| draft.with_mut(|d| d.title_en = v),
            }
            BilingualField {
                label: texts.t("lawyers.form.specialty"),
                ar: d.specialty_ar.clone(),
                en: d.specialty_en.clone(),
                on_ar: move |v| draft.with_mut(|d| d.specialty_ar = v),
                on_en: move |v| draft.with_mut(|d| d.specialty_en = v),
            }
            BilingualField {
                label: texts.t("lawyers.form.bio"),
                ar: d.bio_ar.clone(),
                en: d.bio_en.clone(),
                multiline: true,
                on_ar: move |v| draft.with_mut(|d| d.bio_ar = v),
                on_en: move |v| draft.with_mut(|d| d.bio_en = v),
            }
            TextField {
                label: texts.t("lawyers.form.experience"),
                value: d.experience.clone(),
                on_input: move |v| draft.with_mut(|d| d.experience = v),
            }
            TextField {
                label: texts.t("lawyers.form.image"),
                value: d.image.clone(),
                on_input: move |v| draft.with_mut(|d| d.image = v),
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
                                Some(id) => ctx.cms().lawyers().update(&id, &input),
                                None => ctx.cms().lawyers().create(&input),
                            };
                            if report(toasts, &texts, result, "lawyers.saved") {
                                editing.set(None);
                                draft.set(LawyerDraft::default());
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
                            draft.set(LawyerDraft::default());
                        },
                        {texts.t("common.cancel")}
                    }
                }
            }
        }

        div { class: "admin_list",
            for lawyer in lawyers {
                div { key: "{lawyer.id}", class: "admin_row",
                    div { class: "admin_row_main",
                        strong { {texts.localized(&lawyer.name)} }
                        span { class: "hint", {texts.localized(&lawyer.title)} }
                    }
                    div { class: "admin_row_actions",
                        button {
                            class: "btn",
                            onclick: {
                                let lawyer = lawyer.clone();
                                move |_| {
                                    editing.set(Some(lawyer.id.clone()));
                                    draft.set(LawyerDraft::from_lawyer(&lawyer));
                                }
                            },
                            {texts.t("common.edit")}
                        }
                        button {
                            class: "btn danger",
                            onclick: {
                                let ctx = ctx.clone();
                                let texts = texts.clone();
                                let id = lawyer.id.clone();
                                move |_| {
                                    let result = ctx.cms().lawyers().delete(&id);
                                    if report(toasts, &texts, result, "lawyers.deleted") && editing() == Some(id.clone()) {
                                        editing.set(None);
                                        draft.set(LawyerDraft::default());
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
