use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let texts = crate::use_texts();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            div { class: "hero_inner",
                h1 { {texts.t("home.hero.title")} }
                p { {texts.t("home.hero.subtitle")} }

                div { class: "cta_row",
                    a { class: "btn primary", href: "/contact", {texts.t("home.cta.contact")} }
                    a { class: "btn", href: "/services", {texts.t("home.cta.services")} }
                }
            }
        }
    }
}
