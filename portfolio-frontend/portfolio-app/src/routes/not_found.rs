use leptos::prelude::*;
use leptos_meta::Title;

use crate::i18n::{self, use_language};

#[component]
pub fn NotFound() -> impl IntoView {
    let lang = use_language();

    view! {
        <Title text="404" />
        <div class="container py-5 text-center">
            <h1>"404"</h1>
            <p class="text-muted">{i18n::page_not_found(lang)}</p>
        </div>
    }
}
