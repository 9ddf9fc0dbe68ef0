//! Admin screens. Every page is wrapped in [`AdminGate`], which asks the session gate
//! for access to its [`AdminScreen`] and renders nothing else on refusal.

mod account;
mod admins;
mod articles;
mod contact_info;
mod form;
mod inbox;
mod lawyers;
mod login;
mod logo_theme;
mod site_content;

pub use account::AdminAccountPage;
pub use admins::AdminAdminsPage;
pub use articles::AdminArticlesPage;
pub use contact_info::AdminContactInfoPage;
pub use form::{BilingualField, TextField};
pub use inbox::AdminInboxPage;
pub use lawyers::AdminLawyersPage;
pub use login::AdminLoginPage;
pub use logo_theme::AdminLogoThemePage;
pub use site_content::AdminSiteContentPage;

use cms::{Access, AdminScreen, GateError, Role};
use dioxus::prelude::*;

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

/// Dashboard entries the current access may open.
pub fn visible_screens(access: &Access) -> Vec<AdminScreen> {
    AdminScreen::ALL
        .into_iter()
        .filter(|screen| *screen != AdminScreen::Dashboard && access.can_open(*screen))
        .collect()
}

fn role_key(role: Role) -> &'static str {
    match role {
        Role::Admin => "role.admin",
        Role::Superadmin => "role.superadmin",
    }
}

#[component]
pub fn AdminGate(screen: AdminScreen, children: Element) -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let access = ctx.cms().session().check();

    match access.require(screen) {
        Err(GateError::NotSignedIn) => rsx! {
            document::Link { rel: "stylesheet", href: ADMIN_CSS }
            div { class: "auth_gate",
                h2 { {texts.t("auth.required")} }
                a { class: "btn primary", href: "/admin/login", {texts.t("auth.go_login")} }
            }
        },
        Err(GateError::Forbidden { .. }) => rsx! {
            document::Link { rel: "stylesheet", href: ADMIN_CSS }
            div { class: "auth_gate",
                h2 { {texts.t("auth.forbidden")} }
                a { class: "btn", href: "/admin", {texts.t("admin.dashboard")} }
            }
        },
        Ok(session) => rsx! {
            document::Link { rel: "stylesheet", href: ADMIN_CSS }
            AdminBar { username: session.username, role: session.role }
            div { class: "page admin_page", {children} }
        },
    }
}

#[component]
fn AdminBar(username: String, role: Role) -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let toasts = crate::use_toasts();
    let login_time = ctx
        .cms()
        .session()
        .login_time()
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string());

    rsx! {
        div { class: "admin_bar",
            a { class: "btn", href: "/admin", {texts.t("admin.dashboard")} }
            span { class: "admin_user",
                {texts.t("admin.signed_in_as")}
                " "
                strong { "{username}" }
                span { class: "tag", {texts.t(role_key(role))} }
            }
            if let Some(at) = login_time {
                span { class: "hint", {texts.t("admin.login_time")} " {at}" }
            }
            button {
                class: "btn",
                onclick: {
                    let ctx = ctx.clone();
                    let texts = texts.clone();
                    move |_| {
                        if let Err(e) = ctx.cms().session().logout() {
                            toasts.error(texts.t("common.error_prefix"), Some(texts.t(e.message_key())));
                            return;
                        }
                        spawn(async move {
                            let _ = document::eval("window.location.assign('/admin/login')").await;
                        });
                    }
                },
                {texts.t("admin.logout")}
            }
        }
    }
}

#[component]
pub fn AdminDashboardPage() -> Element {
    rsx! {
        AdminGate { screen: AdminScreen::Dashboard, DashboardMenu {} }
    }
}

#[component]
fn DashboardMenu() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let access = ctx.cms().session().check();
    let unread = ctx.cms().contact().unread_count();
    let screens = visible_screens(&access);

    rsx! {
        div { class: "page_header",
            h1 { {texts.t("admin.dashboard")} }
        }
        div { class: "card_grid admin_menu",
            for screen in screens {
                a { key: "{screen.path()}", class: "card admin_tile", href: screen.path(),
                    h3 { {texts.t(screen.menu_key())} }
                    if screen == AdminScreen::Inbox && unread > 0 {
                        span { class: "badge", "{unread}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_sees_no_screens() {
        assert!(visible_screens(&Access::Anonymous).is_empty());
    }

    #[test]
    fn admin_menu_hides_superadmin_screens() {
        let screens = visible_screens(&Access::Admin {
            username: "editor".to_string(),
        });
        assert!(screens.contains(&AdminScreen::Articles));
        assert!(screens.contains(&AdminScreen::Inbox));
        assert!(!screens.contains(&AdminScreen::Admins));
        assert!(!screens.contains(&AdminScreen::LogoTheme));
        assert!(!screens.contains(&AdminScreen::Dashboard));
    }

    #[test]
    fn superadmin_menu_lists_every_screen() {
        let screens = visible_screens(&Access::Superadmin {
            username: "admin".to_string(),
        });
        assert_eq!(screens.len(), AdminScreen::ALL.len() - 1);
    }
}
