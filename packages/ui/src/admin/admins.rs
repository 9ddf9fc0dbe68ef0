use super::form::{report, TextField};
use super::{role_key, AdminGate};
use cms::{AdminScreen, NewAdmin, Role};
use dioxus::prelude::*;

fn blank_admin() -> NewAdmin {
    NewAdmin {
        username: String::new(),
        password: String::new(),
        confirm_password: String::new(),
        role: Role::Admin,
    }
}

#[component]
pub fn AdminAdminsPage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::Admins, AdminUserManager {} }
    }
}

#[component]
fn AdminUserManager() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let current = ctx.cms().session().check().username().map(str::to_string);
    let admins = match ctx.cms().admins().list() {
        Ok(admins) => admins,
        Err(e) => {
            tracing::warn!("admins.list: {}", e);
            Vec::new()
        }
    };

    let mut form = use_signal(blank_admin);
    let f = form();

    rsx! {
        div { class: "page_header",
            h1 { {texts.t("admin.menu.admins")} }
        }

        div { class: "admin_list",
            for admin in admins {
                div { key: "{admin.username}", class: "admin_row",
                    div { class: "admin_row_main",
                        strong { "{admin.username}" }
                        span { class: "tag", {texts.t(role_key(admin.role))} }
                    }
                    if current.as_deref() != Some(admin.username.as_str()) {
                        div { class: "admin_row_actions",
                            button {
                                class: "btn danger",
                                onclick: {
                                    let ctx = ctx.clone();
                                    let texts = texts.clone();
                                    let username = admin.username.clone();
                                    move |_| {
                                        let result = ctx.cms().admins().delete(&username);
                                        report(toasts, &texts, result, "admins.deleted");
                                    }
                                },
                                {texts.t("common.delete")}
                            }
                        }
                    }
                }
            }
        }

        div { class: "panel",
            h2 { {texts.t("admins.new")} }
            TextField {
                label: texts.t("login.username"),
                value: f.username.clone(),
                on_input: move |v| form.with_mut(|f| f.username = v),
            }
            TextField {
                label: texts.t("login.password"),
                value: f.password.clone(),
                kind: "password".to_string(),
                on_input: move |v| form.with_mut(|f| f.password = v),
            }
            TextField {
                label: texts.t("account.confirm"),
                value: f.confirm_password.clone(),
                kind: "password".to_string(),
                on_input: move |v| form.with_mut(|f| f.confirm_password = v),
            }
            label { class: "field",
                span { {texts.t("admins.role")} }
                select {
                    value: f.role.as_str(),
                    onchange: move |e| {
                        let role = if e.value() == Role::Superadmin.as_str() {
                            Role::Superadmin
                        } else {
                            Role::Admin
                        };
                        form.with_mut(|f| f.role = role);
                    },
                    for role in [Role::Admin, Role::Superadmin] {
                        option {
                            key: "{role.as_str()}",
                            value: role.as_str(),
                            selected: role == f.role,
                            {texts.t(role_key(role))}
                        }
                    }
                }
            }
            div { class: "form_actions",
                button {
                    class: "btn primary",
                    onclick: {
                        let ctx = ctx.clone();
                        let texts = texts.clone();
                        move |_| {
                            let result = ctx.cms().admins().create(&form());
                            if report(toasts, &texts, result, "admins.saved") {
                                form.set(blank_admin());
                            }
                        }
                    },
                    {texts.t("common.save")}
                }
            }
        }
    }
}
