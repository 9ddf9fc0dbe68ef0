use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Site header. Platform crates pass their router links as `children`.
#[component]
pub fn Navbar(children: Element) -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let info = ctx.cms().site_content().site_info();
    let logo = texts.content().logo.clone();
    let firm_name = texts.localized(&info.firm_name);
    let tagline = texts.localized(&info.tagline);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "site_nav",
            div { class: "site_nav_inner",
                a { class: "brand", href: "/",
                    if let Some(src) = logo {
                        img { class: "brand_logo", src: "{src}", alt: "{firm_name}" }
                    } else {
                        span { class: "brand_mark" }
                    }
                    span { class: "brand_text",
                        span { class: "brand_name", "{firm_name}" }
                        span { class: "brand_tagline", "{tagline}" }
                    }
                }
                nav { class: "nav_links", {children} }
                div { class: "nav_actions",
                    crate::LanguageToggle {}
                    crate::ThemeToggle {}
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let info = ctx.cms().contact().contact_info();
    let site = ctx.cms().site_content().site_info();

    rsx! {
        footer { class: "site_footer",
            div { class: "footer_inner",
                div { class: "footer_col",
                    strong { {texts.localized(&site.firm_name)} }
                    p { {texts.localized(&info.address)} }
                    p { {texts.localized(&info.working_hours)} }
                }
                div { class: "footer_col",
                    for phone in info.phones.iter() {
                        a { key: "{phone}", href: "tel:{phone}", "{phone}" }
                    }
                    if !info.email.is_empty() {
                        a { href: "mailto:{info.email}", "{info.email}" }
                    }
                }
                div { class: "footer_col social",
                    if let Some(url) = info.social.facebook.clone() {
                        a { href: "{url}", target: "_blank", "Facebook" }
                    }
                    if let Some(url) = info.social.twitter.clone() {
                        a { href: "{url}", target: "_blank", "X" }
                    }
                    if let Some(url) = info.social.linkedin.clone() {
                        a { href: "{url}", target: "_blank", "LinkedIn" }
                    }
                    if let Some(url) = info.social.instagram.clone() {
                        a { href: "{url}", target: "_blank", "Instagram" }
                    }
                }
            }
            p { class: "footer_rights", {texts.t("footer.rights")} }
        }
    }
}
