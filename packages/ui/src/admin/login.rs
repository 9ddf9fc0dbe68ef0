use dioxus::prelude::*;

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

#[component]
pub fn AdminLoginPage() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let access = ctx.cms().session().check();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_CSS }
        div { class: "auth_signin",
            h1 { {texts.t("login.title")} }

            if let Some(name) = access.username() {
                div { class: "panel",
                    p { {texts.t("admin.signed_in_as")} " {name}" }
                    a { class: "btn primary", href: "/admin", {texts.t("admin.dashboard")} }
                }
            } else {
                div { class: "panel",
                    label { {texts.t("login.username")} }
                    input {
                        value: "{username}",
                        autocomplete: "username",
                        oninput: move |e| username.set(e.value()),
                    }
                    label { {texts.t("login.password")} }
                    input {
                        r#type: "password",
                        value: "{password}",
                        autocomplete: "current-password",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        class: "btn primary",
                        disabled: busy(),
                        onclick: {
                            let ctx = ctx.clone();
                            let texts = texts.clone();
                            move |_| {
                                busy.set(true);
                                match ctx.cms().session().login(&username(), &password()) {
                                    Ok(_) => {
                                        password.set(String::new());
                                        spawn(async move {
                                            let _ = document::eval("window.location.assign('/admin')").await;
                                        });
                                    }
                                    Err(e) => {
                                        toasts.error(texts.t("common.error_prefix"), Some(texts.t(e.message_key())));
                                    }
                                }
                                busy.set(false);
                            }
                        },
                        {texts.t("login.submit")}
                    }
                }
            }
        }
    }
}
