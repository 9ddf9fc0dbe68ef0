use super::form::{report, TextField};
use super::AdminGate;
use cms::AdminScreen;
use dioxus::prelude::*;

#[component]
pub fn AdminAccountPage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::Account, PasswordForm {} }
    }
}

#[component]
fn PasswordForm() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();

    let mut current = use_signal(String::new);
    let mut next = use_signal(String::new);
    let mut confirm = use_signal(String::new);

    rsx! {
        div { class: "page_header",
            h1 { {texts.t("admin.menu.account")} }
        }
        div { class: "panel",
            TextField {
                label: texts.t("account.current"),
                value: current(),
                kind: "password".to_string(),
                on_input: move |v| current.set(v),
            }
            TextField {
                label: texts.t("account.new"),
                value: next(),
                kind: "password".to_string(),
                on_input: move |v| next.set(v),
            }
            TextField {
                label: texts.t("account.confirm"),
                value: confirm(),
                kind: "password".to_string(),
                on_input: move |v| confirm.set(v),
            }
            div { class: "form_actions",
                button {
                    class: "btn primary",
                    onclick: {
                        let ctx = ctx.clone();
                        let texts = texts.clone();
                        move |_| {
                            let Some(username) = ctx.cms().session().check().username().map(str::to_string) else {
                                return;
                            };
                            let result = ctx
                                .cms()
                                .admins()
                                .change_password(&username, &current(), &next(), &confirm());
                            if report(toasts, &texts, result, "account.saved") {
                                current.set(String::new());
                                next.set(String::new());
                                confirm.set(String::new());
                            }
                        }
                    },
                    {texts.t("common.save")}
                }
            }
        }
    }
}
