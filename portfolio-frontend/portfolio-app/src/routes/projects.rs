use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{fade_in::FadeIn, search_box::SearchBox};
use crate::i18n::{self, use_language};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let lang = use_language();

    view! {
        <Title text="Projects" />
        <FadeIn class="container py-5">
            <h1>{i18n::projects_heading(lang)}</h1>
            <p class="text-muted">{i18n::search_hint(lang)}</p>
            <SearchBox />
        </FadeIn>
    }
}
