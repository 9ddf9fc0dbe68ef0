//! Bilingual content resolution.
//!
//! A display string is resolved from (logical key, active language, optional site-authored
//! override). A complete override wins; otherwise the built-in table; otherwise the key
//! itself leaks to the UI, which is a visible but harmless degradation.
use crate::types::{LocalizedText, SiteContent};
use serde::{Deserialize, Serialize};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" | "ar-sa" | "ar-eg" | "ar-ae" => Some(Language::Ar),
            "en" | "en-us" | "en-gb" => Some(Language::En),
            _ => None,
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

/// Resolve `key` for `lang`, preferring a complete site-authored override.
///
/// A partial override (one language blank) is ignored for both languages, so authored
/// Arabic is never shown beside default English.
pub fn resolve(key: &str, lang: Language, overrides: Option<&SiteContent>) -> String {
    if let Some(text) = overrides.and_then(|content| content.complete_override(key)) {
        return text.get(lang).to_string();
    }
    t(lang, key)
}

/// Translate a key with the built-in table only. Falls back to the key itself.
pub fn t(lang: Language, key: &str) -> String {
    builtin(lang, key).unwrap_or(key).to_string()
}

/// A language plus the override document, for components resolving many keys.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    lang: Language,
    overrides: Option<&'a SiteContent>,
}

impl<'a> Resolver<'a> {
    pub fn new(lang: Language, overrides: Option<&'a SiteContent>) -> Self {
        Self { lang, overrides }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn text(&self, key: &str) -> String {
        resolve(key, self.lang, self.overrides)
    }

    /// Render a stored bilingual value in the active language.
    pub fn localized(&self, value: &LocalizedText) -> String {
        value.display(self.lang).to_string()
    }
}

/// Built-in translation table.
pub fn builtin(lang: Language, key: &str) -> Option<&'static str> {
    use Language::{Ar, En};

    let text = match (lang, key) {
        // Nav / common
        (Ar, "app.name") => "مكتب العدل للمحاماة والاستشارات القانونية",
        (En, "app.name") => "Al-Adl Law Firm & Legal Consultancy",
        (Ar, "nav.home") => "الرئيسية",
        (En, "nav.home") => "Home",
        (Ar, "nav.about") => "من نحن",
        (En, "nav.about") => "About",
        (Ar, "nav.services") => "خدماتنا",
        (En, "nav.services") => "Services",
        (Ar, "nav.blog") => "المقالات",
        (En, "nav.blog") => "Blog",
        (Ar, "nav.contact") => "اتصل بنا",
        (En, "nav.contact") => "Contact",
        (Ar, "nav.admin") => "لوحة التحكم",
        (En, "nav.admin") => "Admin",
        (Ar, "lang.toggle") => "English",
        (En, "lang.toggle") => "العربية",
        (Ar, "common.save") => "حفظ",
        (En, "common.save") => "Save",
        (Ar, "common.cancel") => "إلغاء",
        (En, "common.cancel") => "Cancel",
        (Ar, "common.delete") => "حذف",
        (En, "common.delete") => "Delete",
        (Ar, "common.edit") => "تعديل",
        (En, "common.edit") => "Edit",
        (Ar, "common.back") => "رجوع",
        (En, "common.back") => "Back",
        (Ar, "common.loading") => "جارٍ التحميل…",
        (En, "common.loading") => "Loading…",
        (Ar, "common.error_prefix") => "خطأ:",
        (En, "common.error_prefix") => "Error:",
        (Ar, "common.dismiss") => "إغلاق",
        (En, "common.dismiss") => "Dismiss",
        (Ar, "footer.rights") => "جميع الحقوق محفوظة",
        (En, "footer.rights") => "All rights reserved",

        // Home
        (Ar, "home.hero.title") => "نحمي حقوقك بخبرة وأمانة",
        (En, "home.hero.title") => "Protecting your rights with expertise and integrity",
        (Ar, "home.hero.subtitle") => "فريق من المحامين المتخصصين يقدم حلولاً قانونية متكاملة للأفراد والشركات.",
        (En, "home.hero.subtitle") => "A team of specialist lawyers delivering complete legal solutions for individuals and businesses.",
        (Ar, "home.cta.contact") => "احجز استشارة",
        (En, "home.cta.contact") => "Book a consultation",
        (Ar, "home.cta.services") => "تعرّف على خدماتنا",
        (En, "home.cta.services") => "Explore our services",
        (Ar, "home.team.title") => "فريق المحامين",
        (En, "home.team.title") => "Our lawyers",
        (Ar, "home.latest.title") => "أحدث المقالات",
        (En, "home.latest.title") => "Latest articles",
        (Ar, "team.experience") => "سنوات الخبرة:",
        (En, "team.experience") => "Experience:",

        // About
        (Ar, "about.title") => "من نحن",
        (En, "about.title") => "About us",
        (Ar, "about.body") => "تأسس مكتبنا على مبادئ النزاهة والالتزام، ويضم نخبة من المحامين والمستشارين ذوي الخبرة الطويلة أمام مختلف المحاكم.",
        (En, "about.body") => "Our firm was founded on integrity and commitment, bringing together experienced lawyers and counsel who appear before every level of court.",
        (Ar, "about.mission.title") => "رسالتنا",
        (En, "about.mission.title") => "Our mission",
        (Ar, "about.mission.body") => "تقديم خدمة قانونية دقيقة وسريعة تحفظ مصالح موكلينا.",
        (En, "about.mission.body") => "Deliver precise, timely legal service that safeguards our clients' interests.",
        (Ar, "about.vision.title") => "رؤيتنا",
        (En, "about.vision.title") => "Our vision",
        (Ar, "about.vision.body") => "أن نكون الخيار الأول للاستشارات القانونية في المنطقة.",
        (En, "about.vision.body") => "To be the region's first choice for legal counsel.",

        // Services
        (Ar, "services.title") => "مجالات الممارسة",
        (En, "services.title") => "Practice areas",
        (Ar, "services.intro") => "نغطي طيفاً واسعاً من القضايا والاستشارات القانونية.",
        (En, "services.intro") => "We cover a broad range of cases and legal advisory work.",
        (Ar, "category.corporate") => "قانون الشركات",
        (En, "category.corporate") => "Corporate law",
        (Ar, "category.criminal") => "القانون الجنائي",
        (En, "category.criminal") => "Criminal law",
        (Ar, "category.family") => "قانون الأسرة",
        (En, "category.family") => "Family law",
        (Ar, "category.real_estate") => "القانون العقاري",
        (En, "category.real_estate") => "Real estate law",
        (Ar, "category.labor") => "قانون العمل",
        (En, "category.labor") => "Labor law",
        (Ar, "category.commercial") => "القانون التجاري",
        (En, "category.commercial") => "Commercial law",
        (Ar, "category.administrative") => "القانون الإداري",
        (En, "category.administrative") => "Administrative law",
        (Ar, "category.intellectual_property") => "الملكية الفكرية",
        (En, "category.intellectual_property") => "Intellectual property",

        // Blog
        (Ar, "blog.title") => "المقالات القانونية",
        (En, "blog.title") => "Legal articles",
        (Ar, "blog.empty") => "لا توجد مقالات حالياً.",
        (En, "blog.empty") => "No articles yet.",
        (Ar, "blog.read_more") => "اقرأ المزيد",
        (En, "blog.read_more") => "Read more",
        (Ar, "blog.not_found") => "المقال غير موجود.",
        (En, "blog.not_found") => "Article not found.",
        (Ar, "blog.all_categories") => "كل التصنيفات",
        (En, "blog.all_categories") => "All categories",

        // Contact
        (Ar, "contact.title") => "تواصل معنا",
        (En, "contact.title") => "Get in touch",
        (Ar, "contact.intro") => "أرسل لنا رسالتك وسيتواصل معك أحد محامينا في أقرب وقت.",
        (En, "contact.intro") => "Send us a message and one of our lawyers will get back to you shortly.",
        (Ar, "contact.form.name") => "الاسم",
        (En, "contact.form.name") => "Name",
        (Ar, "contact.form.email") => "البريد الإلكتروني",
        (En, "contact.form.email") => "Email",
        (Ar, "contact.form.phone") => "رقم الهاتف",
        (En, "contact.form.phone") => "Phone",
        (Ar, "contact.form.subject") => "الموضوع",
        (En, "contact.form.subject") => "Subject",
        (Ar, "contact.form.message") => "الرسالة",
        (En, "contact.form.message") => "Message",
        (Ar, "contact.form.send") => "إرسال",
        (En, "contact.form.send") => "Send",
        (Ar, "contact.sent") => "تم إرسال رسالتك بنجاح.",
        (En, "contact.sent") => "Your message has been sent.",
        (Ar, "contact.address") => "العنوان",
        (En, "contact.address") => "Address",
        (Ar, "contact.hours") => "ساعات العمل",
        (En, "contact.hours") => "Working hours",
        (Ar, "contact.whatsapp") => "تواصل عبر واتساب",
        (En, "contact.whatsapp") => "Chat on WhatsApp",

        // Auth
        (Ar, "login.title") => "تسجيل دخول المشرف",
        (En, "login.title") => "Admin sign in",
        (Ar, "login.username") => "اسم المستخدم",
        (En, "login.username") => "Username",
        (Ar, "login.password") => "كلمة المرور",
        (En, "login.password") => "Password",
        (Ar, "login.submit") => "دخول",
        (En, "login.submit") => "Sign in",
        (Ar, "login.invalid") => "اسم المستخدم أو كلمة المرور غير صحيحة.",
        (En, "login.invalid") => "Invalid username or password.",
        (Ar, "login.failed") => "تعذّر تسجيل الدخول، حاول مرة أخرى.",
        (En, "login.failed") => "Sign in failed, please try again.",
        (Ar, "auth.required") => "يجب تسجيل الدخول للوصول إلى هذه الصفحة.",
        (En, "auth.required") => "You need to sign in to open this page.",
        (Ar, "auth.forbidden") => "هذه الصفحة متاحة للمشرف العام فقط.",
        (En, "auth.forbidden") => "This page is restricted to superadmins.",
        (Ar, "auth.go_login") => "الذهاب لتسجيل الدخول",
        (En, "auth.go_login") => "Go to sign in",
        (Ar, "role.admin") => "مشرف",
        (En, "role.admin") => "Admin",
        (Ar, "role.superadmin") => "مشرف عام",
        (En, "role.superadmin") => "Superadmin",

        // Admin
        (Ar, "admin.dashboard") => "لوحة التحكم",
        (En, "admin.dashboard") => "Dashboard",
        (Ar, "admin.logout") => "تسجيل الخروج",
        (En, "admin.logout") => "Sign out",
        (Ar, "admin.signed_in_as") => "مسجل الدخول باسم",
        (En, "admin.signed_in_as") => "Signed in as",
        (Ar, "admin.menu.articles") => "إدارة المقالات",
        (En, "admin.menu.articles") => "Manage articles",
        (Ar, "admin.menu.lawyers") => "إدارة المحامين",
        (En, "admin.menu.lawyers") => "Manage lawyers",
        (Ar, "admin.menu.admins") => "إدارة المشرفين",
        (En, "admin.menu.admins") => "Manage admins",
        (Ar, "admin.menu.contact_info") => "معلومات الاتصال",
        (En, "admin.menu.contact_info") => "Contact info",
        (Ar, "admin.menu.site_content") => "محتوى الموقع",
        (En, "admin.menu.site_content") => "Site content",
        (Ar, "admin.menu.logo_theme") => "الشعار والألوان",
        (En, "admin.menu.logo_theme") => "Logo & theme",
        (Ar, "admin.menu.account") => "إعدادات الحساب",
        (En, "admin.menu.account") => "Account settings",
        (Ar, "admin.menu.inbox") => "رسائل التواصل",
        (En, "admin.menu.inbox") => "Contact inbox",
        (Ar, "articles.new") => "مقال جديد",
        (En, "articles.new") => "New article",
        (Ar, "articles.form.title") => "العنوان",
        (En, "articles.form.title") => "Title",
        (Ar, "articles.form.excerpt") => "المقتطف",
        (En, "articles.form.excerpt") => "Excerpt",
        (Ar, "articles.form.content") => "المحتوى",
        (En, "articles.form.content") => "Content",
        (Ar, "articles.form.category") => "التصنيف",
        (En, "articles.form.category") => "Category",
        (Ar, "articles.form.image") => "رابط الصورة (اختياري)",
        (En, "articles.form.image") => "Image URL (optional)",
        (Ar, "articles.form.active") => "منشور",
        (En, "articles.form.active") => "Published",
        (Ar, "articles.saved") => "تم حفظ المقال.",
        (En, "articles.saved") => "Article saved.",
        (Ar, "articles.deleted") => "تم حذف المقال.",
        (En, "articles.deleted") => "Article deleted.",
        (Ar, "form.arabic") => "بالعربية",
        (En, "form.arabic") => "Arabic",
        (Ar, "form.english") => "بالإنجليزية",
        (En, "form.english") => "English",
        (Ar, "inbox.empty") => "لا توجد رسائل.",
        (En, "inbox.empty") => "No messages.",
        (Ar, "inbox.mark_read") => "تعليم كمقروءة",
        (En, "inbox.mark_read") => "Mark as read",
        (Ar, "inbox.unread") => "غير مقروءة",
        (En, "inbox.unread") => "Unread",
        (Ar, "account.current") => "كلمة المرور الحالية",
        (En, "account.current") => "Current password",
        (Ar, "account.new") => "كلمة المرور الجديدة",
        (En, "account.new") => "New password",
        (Ar, "account.confirm") => "تأكيد كلمة المرور",
        (En, "account.confirm") => "Confirm password",
        (Ar, "account.saved") => "تم تغيير كلمة المرور.",
        (En, "account.saved") => "Password changed.",
        (Ar, "admins.last_superadmin") => "لا يمكن حذف آخر مشرف عام.",
        (En, "admins.last_superadmin") => "The last superadmin cannot be removed.",
        (Ar, "admins.new") => "إضافة مشرف",
        (En, "admins.new") => "Add admin",
        (Ar, "admins.role") => "الصلاحية",
        (En, "admins.role") => "Role",
        (Ar, "admins.saved") => "تمت إضافة المشرف.",
        (En, "admins.saved") => "Admin added.",
        (Ar, "admins.deleted") => "تم حذف المشرف.",
        (En, "admins.deleted") => "Admin removed.",
        (Ar, "lawyers.new") => "إضافة محامٍ",
        (En, "lawyers.new") => "Add lawyer",
        (Ar, "lawyers.form.name") => "الاسم",
        (En, "lawyers.form.name") => "Name",
        (Ar, "lawyers.form.title") => "المسمى الوظيفي",
        (En, "lawyers.form.title") => "Job title",
        (Ar, "lawyers.form.specialty") => "التخصص",
        (En, "lawyers.form.specialty") => "Specialty",
        (Ar, "lawyers.form.bio") => "نبذة",
        (En, "lawyers.form.bio") => "Biography",
        (Ar, "lawyers.form.experience") => "سنوات الخبرة",
        (En, "lawyers.form.experience") => "Years of experience",
        (Ar, "lawyers.form.image") => "رابط الصورة (اختياري)",
        (En, "lawyers.form.image") => "Photo URL (optional)",
        (Ar, "lawyers.saved") => "تم حفظ بيانات المحامي.",
        (En, "lawyers.saved") => "Lawyer saved.",
        (Ar, "lawyers.deleted") => "تم حذف المحامي.",
        (En, "lawyers.deleted") => "Lawyer removed.",
        (Ar, "contact_info.phones") => "أرقام الهاتف (سطر لكل رقم)",
        (En, "contact_info.phones") => "Phone numbers (one per line)",
        (Ar, "contact_info.email") => "البريد الإلكتروني",
        (En, "contact_info.email") => "Email",
        (Ar, "contact_info.saved") => "تم حفظ معلومات الاتصال.",
        (En, "contact_info.saved") => "Contact info saved.",
        (Ar, "site_content.key") => "مفتاح النص",
        (En, "site_content.key") => "Text key",
        (Ar, "site_content.hero") => "الواجهة الرئيسية",
        (En, "site_content.hero") => "Hero banner",
        (Ar, "site_content.firm") => "بيانات المكتب",
        (En, "site_content.firm") => "Firm details",
        (Ar, "site_content.firm_name") => "اسم المكتب",
        (En, "site_content.firm_name") => "Firm name",
        (Ar, "site_content.tagline") => "الشعار النصي",
        (En, "site_content.tagline") => "Tagline",
        (Ar, "site_content.overrides") => "النصوص المخصصة",
        (En, "site_content.overrides") => "Custom texts",
        (Ar, "site_content.saved") => "تم حفظ المحتوى.",
        (En, "site_content.saved") => "Content saved.",
        (Ar, "logo.url") => "رابط الشعار",
        (En, "logo.url") => "Logo URL",
        (Ar, "theme.primary") => "اللون الأساسي",
        (En, "theme.primary") => "Primary color",
        (Ar, "theme.secondary") => "اللون الثانوي",
        (En, "theme.secondary") => "Secondary color",
        (Ar, "theme.accent") => "لون التمييز",
        (En, "theme.accent") => "Accent color",
        (Ar, "theme.background") => "لون الخلفية",
        (En, "theme.background") => "Background color",
        (Ar, "theme.text") => "لون النص",
        (En, "theme.text") => "Text color",
        (Ar, "theme.saved") => "تم حفظ الشعار والألوان.",
        (En, "theme.saved") => "Logo and theme saved.",
        (Ar, "theme.toggle") => "الوضع الليلي",
        (En, "theme.toggle") => "Dark mode",
        (Ar, "contact_info.whatsapp") => "رقم واتساب",
        (En, "contact_info.whatsapp") => "WhatsApp number",
        (Ar, "contact_info.social") => "روابط التواصل الاجتماعي",
        (En, "contact_info.social") => "Social links",
        (Ar, "site_content.value") => "النص",
        (En, "site_content.value") => "Text",
        (Ar, "articles.publish") => "نشر",
        (En, "articles.publish") => "Publish",
        (Ar, "articles.unpublish") => "إلغاء النشر",
        (En, "articles.unpublish") => "Unpublish",
        (Ar, "articles.draft") => "مسودة",
        (En, "articles.draft") => "Draft",
        (Ar, "admin.login_time") => "وقت تسجيل الدخول:",
        (En, "admin.login_time") => "Signed in at:",
        (Ar, "inbox.marked") => "تم تعليم الرسالة كمقروءة.",
        (En, "inbox.marked") => "Message marked as read.",
        (Ar, "inbox.deleted") => "تم حذف الرسالة.",
        (En, "inbox.deleted") => "Message deleted.",
        (Ar, "site_content.hero_title") => "العنوان الرئيسي",
        (En, "site_content.hero_title") => "Headline",
        (Ar, "site_content.hero_subtitle") => "النص التعريفي",
        (En, "site_content.hero_subtitle") => "Subheading",
        (Ar, "theme.reset") => "استعادة الألوان الافتراضية",
        (En, "theme.reset") => "Restore default colors",

        // Validation / store errors
        (Ar, "validation.required") => "يرجى تعبئة جميع الحقول المطلوبة.",
        (En, "validation.required") => "Please fill in all required fields.",
        (Ar, "validation.both_languages") => "يجب تعبئة الحقل باللغتين العربية والإنجليزية.",
        (En, "validation.both_languages") => "Fill in the field in both Arabic and English.",
        (Ar, "validation.email") => "البريد الإلكتروني غير صالح.",
        (En, "validation.email") => "Invalid email address.",
        (Ar, "validation.url") => "الرابط غير صالح.",
        (En, "validation.url") => "Invalid URL.",
        (Ar, "validation.password_short") => "كلمة المرور قصيرة جداً.",
        (En, "validation.password_short") => "Password is too short.",
        (Ar, "validation.username_taken") => "اسم المستخدم مستخدم بالفعل.",
        (En, "validation.username_taken") => "Username already exists.",
        (Ar, "validation.password_mismatch") => "كلمتا المرور غير متطابقتين.",
        (En, "validation.password_mismatch") => "Passwords do not match.",
        (Ar, "error.store.quota") => "مساحة التخزين ممتلئة، لم يتم الحفظ.",
        (En, "error.store.quota") => "Storage is full; nothing was saved.",
        (Ar, "error.store.unavailable") => "التخزين غير متاح في هذا المتصفح.",
        (En, "error.store.unavailable") => "Storage is not available in this browser.",
        (Ar, "error.store.corrupt") => "البيانات المحفوظة تالفة ولا يمكن قراءتها.",
        (En, "error.store.corrupt") => "The saved data is damaged and cannot be read.",
        (Ar, "error.store.write") => "تعذّر حفظ البيانات.",
        (En, "error.store.write") => "Could not save the data.",
        (Ar, "error.not_found") => "العنصر غير موجود.",
        (En, "error.not_found") => "Item not found.",
        (Ar, "page.not_found") => "الصفحة غير موجودة.",
        (En, "page.not_found") => "Page not found.",

        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArticleCategory;

    fn content_with(key: &str, ar: &str, en: &str) -> SiteContent {
        let mut content = SiteContent::default();
        content.texts.insert(
            key.to_string(),
            LocalizedText {
                ar: ar.to_string(),
                en: en.to_string(),
            },
        );
        content
    }

    #[test]
    fn full_override_wins_in_both_languages() {
        let content = content_with("about.title", "عنا", "Who we are");
        assert_eq!(resolve("about.title", Language::Ar, Some(&content)), "عنا");
        assert_eq!(resolve("about.title", Language::En, Some(&content)), "Who we are");
    }

    #[test]
    fn no_override_uses_builtin() {
        assert_eq!(resolve("about.title", Language::En, None), "About us");
        let unrelated = content_with("services.title", "أ", "B");
        assert_eq!(resolve("about.title", Language::Ar, Some(&unrelated)), "من نحن");
    }

    #[test]
    fn partial_override_is_ignored_for_both_languages() {
        let content = content_with("about.title", "عنا", "   ");
        assert_eq!(resolve("about.title", Language::Ar, Some(&content)), "من نحن");
        assert_eq!(resolve("about.title", Language::En, Some(&content)), "About us");
    }

    #[test]
    fn unknown_key_leaks_raw_key() {
        assert_eq!(resolve("nope.missing", Language::En, None), "nope.missing");
        assert_eq!(t(Language::Ar, "nope.missing"), "nope.missing");
    }

    #[test]
    fn override_for_unknown_key_still_resolves() {
        let content = content_with("home.banner", "عرض", "Offer");
        assert_eq!(resolve("home.banner", Language::En, Some(&content)), "Offer");
    }

    #[test]
    fn every_category_label_is_translated() {
        for category in ArticleCategory::ALL {
            let key = category.label_key();
            for lang in [Language::Ar, Language::En] {
                assert!(builtin(lang, &key).is_some(), "missing {key} for {lang:?}");
            }
        }
    }

    #[test]
    fn every_admin_menu_entry_is_translated() {
        for screen in crate::session::AdminScreen::ALL {
            for lang in [Language::Ar, Language::En] {
                assert!(builtin(lang, screen.menu_key()).is_some(), "missing {:?}", screen);
            }
        }
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("EN-us"), Some(Language::En));
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.other(), Language::Ar);
        assert_eq!(Language::default(), Language::Ar);
    }

    #[test]
    fn resolver_renders_stored_text_with_fallback() {
        let resolver = Resolver::new(Language::En, None);
        let partial = LocalizedText {
            ar: "نص".to_string(),
            en: String::new(),
        };
        assert_eq!(resolver.localized(&partial), "نص");
        assert_eq!(resolver.text("nav.blog"), "Blog");
    }
}
