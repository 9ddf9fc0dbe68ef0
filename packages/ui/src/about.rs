use cms::ArticleCategory;
use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

#[component]
pub fn AboutPage() -> Element {
    let texts = crate::use_texts();
    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {texts.t("about.title")} }
            }
            p { class: "lead", {texts.t("about.body")} }
            div { class: "card_grid two",
                div { class: "panel",
                    h2 { {texts.t("about.mission.title")} }
                    p { {texts.t("about.mission.body")} }
                }
                div { class: "panel",
                    h2 { {texts.t("about.vision.title")} }
                    p { {texts.t("about.vision.body")} }
                }
            }
        }
        crate::TeamSection {}
    }
}

#[component]
pub fn ServicesPage() -> Element {
    let texts = crate::use_texts();
    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {texts.t("services.title")} }
            }
            p { class: "lead", {texts.t("services.intro")} }
            div { class: "card_grid",
                for category in ArticleCategory::ALL {
                    div { key: "{category.as_str()}", class: "card service_card",
                        h3 { {texts.t(&category.label_key())} }
                        a { class: "read_more", href: "/blog", {texts.t("blog.read_more")} }
                    }
                }
            }
            div { class: "cta_row",
                a { class: "btn primary", href: "/contact", {texts.t("home.cta.contact")} }
            }
        }
    }
}
