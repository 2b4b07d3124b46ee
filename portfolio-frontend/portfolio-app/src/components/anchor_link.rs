use leptos::prelude::*;

/// A same-page `#fragment` link that smooth-scrolls to its target instead of
/// jumping.
#[component]
pub fn AnchorLink(
    href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = StoredValue::new(href.clone());
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let selector = target.get_value();
        let Ok(Some(element)) = document().query_selector(&selector) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
