use dioxus::prelude::*;
use ui::{Hero, LatestArticles, TeamSection};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        TeamSection {}
        LatestArticles { limit: 3 }
    }
}
