use leptos::{html::Img, prelude::*};
use leptos_use::use_intersection_observer;

/// An image whose `src` is only attached once the element is near the
/// viewport. The component owns the real source instead of stashing it in a
/// `data-src` attribute.
#[component]
pub fn LazyImage(
    src: String,
    #[prop(optional, into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let target = NodeRef::<Img>::new();
    let (visible, set_visible) = signal(false);
    let src = StoredValue::new(src);

    use_intersection_observer(target, move |entries, observer| {
        for entry in entries {
            if entry.is_intersecting() {
                set_visible.set(true);
                observer.unobserve(&entry.target());
            }
        }
    });

    view! {
        <img
            node_ref=target
            src=move || visible.get().then(|| src.get_value())
            alt=alt
            class=class
            class:lazy=move || !visible.get()
        />
    }
}
