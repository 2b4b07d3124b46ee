use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{anchor_link::AnchorLink, fade_in::FadeIn};
use crate::i18n::{self, use_language};

#[component]
pub fn HomePage() -> impl IntoView {
    let lang = use_language();

    view! {
        <Title text="Portfolio" />
        <section class="hero text-center py-5">
            <h1>{i18n::home_heading(lang)}</h1>
            <p class="lead">{i18n::home_tagline(lang)}</p>
            <AnchorLink href="#projects".to_string() class="btn btn-primary">
                {i18n::browse_projects(lang)}
            </AnchorLink>
        </section>
        <FadeIn class="container py-5">
            <section id="projects">
                <h2>{i18n::projects_heading(lang)}</h2>
                <p class="text-muted">{i18n::search_hint(lang)}</p>
            </section>
        </FadeIn>
        <FadeIn class="container py-5">
            <section id="contact">
                <h2>{i18n::contact_heading(lang)}</h2>
                <a href="/contact" class="btn btn-outline-primary">
                    {i18n::nav_contact(lang)}
                </a>
            </section>
        </FadeIn>
    }
}
