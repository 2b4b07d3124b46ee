use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_window_scroll;

const SHOW_AFTER_PX: f64 = 300.0;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_x, y) = use_window_scroll();

    let scroll_up = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <button
            class="scroll-to-top"
            class:show=move || { y.get() > SHOW_AFTER_PX }
            aria-label="Scroll to top"
            on:click=scroll_up
        >
            <Icon icon=i::FaArrowUpSolid />
        </button>
    }
}
