use cms::storage::memory::MemoryStorage;
use cms::{AppConfig, Cms, StorageConfig};
use dioxus::prelude::*;
use std::sync::Arc;

use views::{
    About, AdminAccount, AdminAdmins, AdminArticles, AdminContactInfo, AdminDashboard,
    AdminInbox, AdminLawyers, AdminLogin, AdminLogoTheme, AdminSiteContent, Blog, BlogPost,
    Contact, Home, PageNotFound, Services,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/blog")]
    Blog {},
    #[route("/blog/:id")]
    BlogPost { id: String },
    #[route("/contact")]
    Contact {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/articles")]
    AdminArticles {},
    #[route("/admin/lawyers")]
    AdminLawyers {},
    #[route("/admin/admins")]
    AdminAdmins {},
    #[route("/admin/contact-info")]
    AdminContactInfo {},
    #[route("/admin/site-content")]
    AdminSiteContent {},
    #[route("/admin/logo-theme")]
    AdminLogoTheme {},
    #[route("/admin/account")]
    AdminAccount {},
    #[route("/admin/inbox")]
    AdminInbox {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Content services for this build. A bad configuration falls back to an in-memory
/// store so the public pages still render.
fn build_cms() -> Cms {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("startup: invalid configuration, using in-memory store: {e:#}");
            return in_memory();
        }
    };

    match config.storage {
        StorageConfig::Browser => Cms::new(Arc::new(ui::BrowserStorage), config),
        _ => Cms::from_config(config).unwrap_or_else(|e| {
            tracing::error!("startup: could not open store, using in-memory store: {e:#}");
            in_memory()
        }),
    }
}

fn in_memory() -> Cms {
    Cms::new(
        Arc::new(MemoryStorage::new()),
        AppConfig::local(StorageConfig::Memory),
    )
}

#[component]
fn App() -> Element {
    ui::use_cms_provider(build_cms);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::I18nProvider {
            ui::ToastProvider {
                ui::SiteTheme {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let texts = ui::use_texts();

    rsx! {
        ui::Navbar {
            Link { class: "nav_link", to: Route::Home {}, {texts.t("nav.home")} }
            Link { class: "nav_link", to: Route::About {}, {texts.t("nav.about")} }
            Link { class: "nav_link", to: Route::Services {}, {texts.t("nav.services")} }
            Link { class: "nav_link", to: Route::Blog {}, {texts.t("nav.blog")} }
            Link { class: "nav_link", to: Route::Contact {}, {texts.t("nav.contact")} }
            Link { class: "nav_link", to: Route::AdminDashboard {}, {texts.t("nav.admin")} }
        }
        div { class: "route_view", Outlet::<Route> {} }
        ui::Footer {}
    }
}
