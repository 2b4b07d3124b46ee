use icondata as i;
use leptos::{prelude::*, task::spawn_local};
use leptos_icons::Icon;

use crate::api;

/// The server owns the rendered theme, so a successful toggle reloads the
/// page instead of patching styles locally.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let on_click = move |_| {
        spawn_local(async move {
            match api::toggle_dark().await {
                Ok(true) => {
                    if let Err(e) = window().location().reload() {
                        log::error!("reload failed: {e:?}");
                    }
                }
                Ok(false) => {}
                Err(e) => log::error!("dark mode toggle failed: {e}"),
            }
        });
    };

    view! {
        <button class="nav-item btn btn-link" aria-label="Toggle dark mode" on:click=on_click>
            <Icon icon=i::BsMoon />
        </button>
    }
}
