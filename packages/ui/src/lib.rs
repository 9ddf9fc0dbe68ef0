//! This crate contains all shared UI for the workspace.

mod context;
pub use context::{use_cms, use_cms_provider, CmsContext};

mod storage;
pub use storage::BrowserStorage;

mod i18n;
pub use i18n::{use_lang, use_texts, I18nProvider, LanguageToggle, Texts};

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};

mod theme;
pub use theme::{theme_css, SiteTheme, ThemeToggle};

mod navbar;
pub use navbar::{Footer, Navbar};

mod hero;
pub use hero::Hero;

mod team;
pub use team::TeamSection;

mod blog;
pub use blog::{ArticlePage, BlogPage, LatestArticles};

mod about;
pub use about::{AboutPage, ServicesPage};

mod contact;
pub use contact::ContactPage;

pub mod admin;
pub use admin::{
    AdminAccountPage, AdminAdminsPage, AdminArticlesPage, AdminContactInfoPage,
    AdminDashboardPage, AdminGate, AdminInboxPage, AdminLawyersPage, AdminLoginPage,
    AdminLogoThemePage, AdminSiteContentPage,
};
