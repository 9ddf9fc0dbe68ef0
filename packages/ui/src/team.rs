use cms::Lawyer;
use dioxus::prelude::*;

const TEAM_CSS: Asset = asset!("/assets/styling/team.css");

/// Initials shown when a lawyer has no photo.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[component]
fn LawyerCard(lawyer: Lawyer) -> Element {
    let texts = crate::use_texts();
    let name = texts.localized(&lawyer.name);
    let fallback = initials(&name);

    rsx! {
        div { class: "card lawyer_card",
            if let Some(src) = lawyer.image.clone() {
                img { class: "lawyer_photo", src: "{src}", alt: "{name}" }
            } else {
                div { class: "lawyer_photo placeholder", "{fallback}" }
            }
            h3 { "{name}" }
            p { class: "lawyer_title", {texts.localized(&lawyer.title)} }
            span { class: "tag", {texts.localized(&lawyer.specialty)} }
            if !lawyer.experience.trim().is_empty() {
                p { class: "lawyer_experience",
                    {texts.t("team.experience")}
                    " {lawyer.experience}"
                }
            }
            p { class: "summary", {texts.localized(&lawyer.bio)} }
        }
    }
}

#[component]
pub fn TeamSection() -> Element {
    let ctx = crate::use_cms();
    let texts = crate::use_texts();
    let lawyers = ctx.cms().lawyers().list_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: TEAM_CSS }
        section { class: "page_section team",
            h2 { {texts.t("home.team.title")} }
            div { class: "card_grid",
                for lawyer in lawyers {
                    LawyerCard { key: "{lawyer.id}", lawyer: lawyer.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Sara Al Amin"), "SA");
        assert_eq!(initials("  محمد  "), "م");
        assert_eq!(initials(""), "");
    }
}
