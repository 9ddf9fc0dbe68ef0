use cms::{Article, ArticleCategory, Language};
use dioxus::prelude::*;

const BLOG_CSS: Asset = asset!("/assets/styling/blog.css");

const SUMMARY_CHARS: usize = 160;

/// Card text: the excerpt, or the start of the body when there is no excerpt.
pub fn summary(article: &Article, lang: Language) -> String {
    let excerpt = article.excerpt.display(lang);
    if !article.excerpt.is_empty() {
        return excerpt.to_string();
    }
    truncate(article.content.display(lang), SUMMARY_CHARS)
}

fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[component]
fn ArticleCard(article: Article) -> Element {
    let texts = crate::use_texts();
    let lang = texts.lang();
    let date = article.created_at.format("%Y-%m-%d").to_string();

    rsx! {
        a { class: "card article_card", href: "/blog/{article.id}",
            if let Some(src) = article.image.clone() {
                img { class: "card_image", src: "{src}", alt: "" }
            }
            div { class: "card_top",
                span { class: "tag", {texts.t(&article.category.label_key())} }
                span { class: "date", "{date}" }
            }
            h3 { {texts.localized(&article.title)} }
            p { class: "summary", {summary(&article, lang)} }
            span { class: "read_more", {texts.t("blog.read_more")} }
        }
    }
}

/// The newest published articles, for the home page.
#[component]
pub fn LatestArticles(limit: usize) -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let articles: Vec<Article> = ctx
        .cms()
        .articles()
        .list_published()
        .into_iter()
        .take(limit)
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: BLOG_CSS }
        if !articles.is_empty() {
            section { class: "page_section",
                h2 { {texts.t("home.latest.title")} }
                div { class: "card_grid",
                    for article in articles {
                        ArticleCard { key: "{article.id}", article: article.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlogPage() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let mut filter = use_signal(|| None::<ArticleCategory>);

    let articles = match filter() {
        Some(category) => ctx.cms().articles().by_category(category),
        None => ctx.cms().articles().list_published(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: BLOG_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {texts.t("blog.title")} }
            }

            div { class: "filter_row",
                button {
                    class: if filter().is_none() { "chip active" } else { "chip" },
                    onclick: move |_| filter.set(None),
                    {texts.t("blog.all_categories")}
                }
                for category in ArticleCategory::ALL {
                    button {
                        key: "{category.as_str()}",
                        class: if filter() == Some(category) { "chip active" } else { "chip" },
                        onclick: move |_| filter.set(Some(category)),
                        {texts.t(&category.label_key())}
                    }
                }
            }

            if articles.is_empty() {
                p { class: "hint", {texts.t("blog.empty")} }
            }
            div { class: "card_grid",
                for article in articles {
                    ArticleCard { key: "{article.id}", article: article.clone() }
                }
            }
        }
    }
}

#[component]
pub fn ArticlePage(id: String) -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let article = ctx.cms().articles().get(&id).filter(|a| a.is_active);

    rsx! {
        document::Link { rel: "stylesheet", href: BLOG_CSS }
        div { class: "page article_page",
            a { class: "btn", href: "/blog", {texts.t("common.back")} }
            match article {
                None => rsx! {
                    p { class: "hint", {texts.t("blog.not_found")} }
                },
                Some(article) => {
                    let paragraphs: Vec<String> = texts
                        .localized(&article.content)
                        .split("\n\n")
                        .map(|p| p.trim().to_string())
                        .filter(|p| !p.is_empty())
                        .collect();
                    rsx! {
                    article {
                        if let Some(src) = article.image.clone() {
                            img { class: "article_image", src: "{src}", alt: "" }
                        }
                        div { class: "card_top",
                            span { class: "tag", {texts.t(&article.category.label_key())} }
                            span { class: "date", {article.created_at.format("%Y-%m-%d").to_string()} }
                        }
                        h1 { {texts.localized(&article.title)} }
                        for (i, paragraph) in paragraphs.iter().enumerate() {
                            p { key: "{i}", "{paragraph}" }
                        }
                    }
                    }
                }
            }
        }
    }
}
