mod admin;
pub use admin::{
    AdminAccount, AdminAdmins, AdminArticles, AdminContactInfo, AdminDashboard, AdminInbox,
    AdminLawyers, AdminLogin, AdminLogoTheme, AdminSiteContent,
};

mod home;
pub use home::Home;

mod pages;
pub use pages::{About, Blog, BlogPost, Contact, PageNotFound, Services};
