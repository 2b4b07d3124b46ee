use leptos::{html::Div, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Adds a `fade-in` class the first time the block scrolls into view, then
/// stops watching it.
#[component]
pub fn FadeIn(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let (shown, set_shown) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                if entry.is_intersecting() {
                    set_shown.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![0.1])
            .root_margin("0px 0px -50px 0px"),
    );

    view! {
        <div node_ref=target class=class class=("fade-in", shown)>
            {children()}
        </div>
    }
}
