use dioxus::prelude::*;

#[component]
pub fn AdminLogin() -> Element {
    rsx! { ui::AdminLoginPage {} }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { ui::AdminDashboardPage {} }
}

#[component]
pub fn AdminArticles() -> Element {
    rsx! { ui::AdminArticlesPage {} }
}

#[component]
pub fn AdminLawyers() -> Element {
    rsx! { ui::AdminLawyersPage {} }
}

#[component]
pub fn AdminAdmins() -> Element {
    rsx! { ui::AdminAdminsPage {} }
}

#[component]
pub fn AdminContactInfo() -> Element {
    rsx! { ui::AdminContactInfoPage {} }
}

#[component]
pub fn AdminSiteContent() -> Element {
    rsx! { ui::AdminSiteContentPage {} }
}

#[component]
pub fn AdminLogoTheme() -> Element {
    rsx! { ui::AdminLogoThemePage {} }
}

#[component]
pub fn AdminAccount() -> Element {
    rsx! { ui::AdminAccountPage {} }
}

#[component]
pub fn AdminInbox() -> Element {
    rsx! { ui::AdminInboxPage {} }
}
