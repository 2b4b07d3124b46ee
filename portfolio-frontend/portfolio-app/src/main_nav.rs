use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{dark_mode::DarkModeToggle, search_box::SearchBox};
use crate::i18n::{self, use_language};

#[component]
pub fn MainNav() -> impl IntoView {
    let lang = use_language();

    view! {
        <header>
            <nav class="navbar navbar-expand-lg header">
                <A href="/" attr:class="nav-item">
                    {i18n::nav_home(lang)}
                </A>
                <A href="/projects" attr:class="nav-item">
                    {i18n::nav_projects(lang)}
                </A>
                <A href="/contact" attr:class="nav-item">
                    {i18n::nav_contact(lang)}
                </A>
                <SearchBox />
                <DarkModeToggle />
            </nav>
        </header>
    }
}
