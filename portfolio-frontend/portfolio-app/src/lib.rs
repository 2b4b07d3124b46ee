pub(crate) mod api;
pub mod components;
pub(crate) mod error;
pub mod global_state;
pub mod i18n;
pub(crate) mod main_nav;
pub mod routes;
pub mod validation;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{scroll_to_top::ScrollToTop, toast::ToastContainer};
use crate::global_state::toasts::provide_toast_context;
use crate::i18n::Language;
use crate::main_nav::MainNav;
use crate::routes::{
    contact::ContactPage, home_page::HomePage, not_found::NotFound,
    project_edit::ProjectEditPage, projects::ProjectsPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toast_context();
    let lang = i18n::provide_language();
    let dir = if lang == Language::Ar { "rtl" } else { "ltr" };

    view! {
        <Title text="Portfolio" />
        <Stylesheet id="main" href="/static/css/style.css" />
        <Router>
            <MainNav />
            <main dir=dir>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/admin/project/edit/:id") view=ProjectEditPage />
                </Routes>
            </main>
            <ScrollToTop />
            <ToastContainer />
        </Router>
    }
}
