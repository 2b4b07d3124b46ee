use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{contact_form::ContactForm, fade_in::FadeIn};
use crate::i18n::{self, use_language};

#[component]
pub fn ContactPage() -> impl IntoView {
    let lang = use_language();

    view! {
        <Title text="Contact" />
        <FadeIn class="container py-5">
            <h1>{i18n::contact_heading(lang)}</h1>
            <ContactForm />
        </FadeIn>
    }
}
