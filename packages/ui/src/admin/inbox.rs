use super::form::report;
use super::AdminGate;
use cms::AdminScreen;
use dioxus::prelude::*;

#[component]
pub fn AdminInboxPage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::Inbox, Inbox {} }
    }
}

#[component]
fn Inbox() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let submissions = ctx.cms().contact().list();
    let unread = ctx.cms().contact().unread_count();

    rsx! {
        div { class: "page_header",
            h1 { {texts.t("admin.menu.inbox")} }
            if unread > 0 {
                span { class: "badge", {texts.t("inbox.unread")} " {unread}" }
            }
        }

        if submissions.is_empty() {
            p { class: "hint", {texts.t("inbox.empty")} }
        }

        div { class: "admin_list",
            for item in submissions {
                div {
                    key: "{item.id}",
                    class: if item.is_read { "panel message" } else { "panel message unread" },
                    div { class: "card_top",
                        strong { "{item.subject}" }
                        span { class: "date", {item.submitted_at.format("%Y-%m-%d %H:%M").to_string()} }
                    }
                    p { class: "hint",
                        "{item.name} · "
                        a { href: "mailto:{item.email}", "{item.email}" }
                        if !item.phone.is_empty() {
                            " · "
                            a { href: "tel:{item.phone}", "{item.phone}" }
                        }
                    }
                    p { class: "message_body", "{item.message}" }
                    div { class: "admin_row_actions",
                        if !item.is_read {
                            button {
                                class: "btn",
                                onclick: {
                                    let ctx = ctx.clone();
                                    let texts = texts.clone();
                                    let id = item.id.clone();
                                    move |_| {
                                        let result = ctx.cms().contact().mark_as_read(&id);
                                        report(toasts, &texts, result, "inbox.marked");
                                    }
                                },
                                {texts.t("inbox.mark_read")}
                            }
                        }
                        button {
                            class: "btn danger",
                            onclick: {
                                let ctx = ctx.clone();
                                let texts = texts.clone();
                                let id = item.id.clone();
                                move |_| {
                                    let result = ctx.cms().contact().delete(&id);
                                    report(toasts, &texts, result, "inbox.deleted");
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
