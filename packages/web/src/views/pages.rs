use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! { ui::AboutPage {} }
}

#[component]
pub fn Services() -> Element {
    rsx! { ui::ServicesPage {} }
}

#[component]
pub fn Blog() -> Element {
    rsx! { ui::BlogPage {} }
}

#[component]
pub fn BlogPost(id: String) -> Element {
    rsx! { ui::ArticlePage { id } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { ui::ContactPage {} }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let texts = ui::use_texts();
    let path = segments.join("/");
    tracing::info!("router: no route for /{}", path);

    rsx! {
        div { class: "page",
            h1 { {texts.t("page.not_found")} }
            a { class: "btn primary", href: "/", {texts.t("nav.home")} }
        }
    }
}
