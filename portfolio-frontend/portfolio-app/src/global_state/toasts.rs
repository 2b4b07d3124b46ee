use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use uuid::Uuid;

/// Flash messages layered over the page, the client-side counterpart of the
/// server's flashed messages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Clone, Debug)]
pub struct Toasts(pub RwSignal<Vec<Toast>>);

impl Copy for Toasts {}

const TOAST_DURATION_MS: u64 = 5000;

pub fn provide_toast_context() {
    provide_context(Toasts(RwSignal::new(Vec::new())));
}

pub fn use_toast() -> Option<Toasts> {
    use_context::<Toasts>()
}

impl Toasts {
    pub fn add(&self, message: impl Into<String>, level: ToastLevel) {
        let id = Uuid::new_v4();
        let toast = Toast {
            id,
            message: message.into(),
            level,
        };
        self.0.update(|toasts| toasts.push(toast));

        let toasts = *self;
        set_timeout(
            move || {
                toasts.remove(id);
            },
            std::time::Duration::from_millis(TOAST_DURATION_MS),
        );
    }

    pub fn remove(&self, id: Uuid) {
        self.0.update(|toasts| {
            if let Some(index) = toasts.iter().position(|t| t.id == id) {
                toasts.remove(index);
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(message, ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(message, ToastLevel::Error);
    }
}
