use leptos::leptos_dom::helpers::set_timeout;
use leptos::{prelude::*, task::spawn_local};
use portfolio_api_types::ContactResponse;

use crate::api::{self, ContactSubmission};
use crate::components::search_box::Generation;
use crate::error::AppError;
use crate::i18n::{self, use_language, Language};
use crate::validation::{validate_field, Field, Violation};

const BANNER_HIDE_MS: u64 = 5000;

/// What the form shows after a submission settles.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Banner {
    Success,
    Error(String),
}

/// Maps a settled submission to its banner: success, the server's verbatim
/// rejection message (or a localized default), or a generic network error.
pub(crate) fn submit_outcome(
    result: Result<ContactResponse, AppError>,
    lang: Language,
) -> Banner {
    match result {
        Ok(ContactResponse { success: true, .. }) => Banner::Success,
        Ok(ContactResponse { message, .. }) => Banner::Error(
            message.unwrap_or_else(|| i18n::contact_default_error(lang).to_string()),
        ),
        Err(_) => Banner::Error(i18n::network_error(lang).to_string()),
    }
}

/// One field's value and validation state, owned by the form rather than
/// re-queried from the DOM on every event.
#[derive(Clone, Copy)]
struct FieldState {
    field: Field,
    value: RwSignal<String>,
    error: RwSignal<Option<Violation>>,
}

impl FieldState {
    fn new(field: Field) -> Self {
        Self {
            field,
            value: RwSignal::new(String::new()),
            error: RwSignal::new(None),
        }
    }

    fn validate(&self) -> bool {
        let violation = validate_field(self.field, &self.value.get_untracked());
        self.error.set(violation);
        violation.is_none()
    }

    fn clear(&self) {
        self.value.set(String::new());
        self.error.set(None);
    }
}

#[component]
fn ContactField(state: FieldState, #[prop(optional)] textarea: bool) -> impl IntoView {
    let lang = use_language();
    let on_blur = move |_| {
        state.validate();
    };
    let on_input = move |ev| {
        state.value.set(event_target_value(&ev));
        state.error.set(None);
    };
    let input_type = if state.field == Field::Email {
        "email"
    } else {
        "text"
    };

    let control = if textarea {
        view! {
            <textarea
                name=state.field.name()
                rows=5
                class="form-control"
                class:error=move || state.error.get().is_some()
                prop:value=state.value
                on:blur=on_blur
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                name=state.field.name()
                class="form-control"
                class:error=move || state.error.get().is_some()
                prop:value=state.value
                on:blur=on_blur
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-3">
            {control}
            {move || {
                state
                    .error
                    .get()
                    .map(|violation| {
                        view! {
                            <div class="error-message text-danger small mt-1">
                                {i18n::field_error(lang, state.field, violation)}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let lang = use_language();
    let name = FieldState::new(Field::Name);
    let email = FieldState::new(Field::Email);
    let subject = FieldState::new(Field::Subject);
    let message = FieldState::new(Field::Message);
    let fields = [name, email, subject, message];

    let (banner, set_banner) = signal(None::<Banner>);
    let (pending, set_pending) = signal(false);
    // each shown banner takes a ticket so a stale hide timer from an
    // earlier submission cannot dismiss a fresh banner
    let banners = StoredValue::new(Generation::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // validate every field so all errors show at once
        let mut all_valid = true;
        for field in fields {
            all_valid &= field.validate();
        }
        if !all_valid || pending.get_untracked() {
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            let submission = ContactSubmission {
                name: name.value.get_untracked(),
                email: email.value.get_untracked(),
                subject: subject.value.get_untracked(),
                message: message.value.get_untracked(),
            };
            let outcome = submit_outcome(api::send_contact(&submission).await, lang);
            set_pending.set(false);
            if outcome == Banner::Success {
                for field in fields {
                    field.clear();
                }
            }
            set_banner.set(Some(outcome));
            banners.update_value(|g| g.advance());
            let shown = banners.with_value(|g| g.current());
            set_timeout(
                move || {
                    if banners.with_value(|g| g.is_current(shown)) {
                        set_banner.set(None);
                    }
                },
                std::time::Duration::from_millis(BANNER_HIDE_MS),
            );
        });
    };

    view! {
        <form id="contactForm" novalidate=true on:submit=on_submit>
            {move || {
                banner
                    .get()
                    .map(|banner| match banner {
                        Banner::Success => {
                            view! {
                                <div class="alert alert-success" role="alert">
                                    {i18n::contact_success(lang)}
                                </div>
                            }
                                .into_any()
                        }
                        Banner::Error(message) => {
                            view! {
                                <div class="alert alert-danger" role="alert">
                                    {message}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
            <ContactField state=name />
            <ContactField state=email />
            <ContactField state=subject />
            <ContactField state=message textarea=true />
            <button type="submit" class="btn btn-primary" disabled=pending>
                <Show
                    when=move || pending.get()
                    fallback=move || i18n::send_label(lang)
                >
                    <span class="spinner-border spinner-border-sm me-2" role="status"></span>
                    {i18n::sending_label(lang)}
                </Show>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SystemError;

    #[test]
    fn success_resets_into_a_success_banner() {
        let outcome = submit_outcome(
            Ok(ContactResponse {
                success: true,
                message: None,
            }),
            Language::En,
        );
        assert_eq!(outcome, Banner::Success);
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let outcome = submit_outcome(
            Ok(ContactResponse {
                success: false,
                message: Some("X".to_string()),
            }),
            Language::En,
        );
        assert_eq!(outcome, Banner::Error("X".to_string()));
    }

    #[test]
    fn missing_message_falls_back_to_the_localized_default() {
        let outcome = submit_outcome(
            Ok(ContactResponse {
                success: false,
                message: None,
            }),
            Language::Ar,
        );
        assert_eq!(
            outcome,
            Banner::Error(i18n::contact_default_error(Language::Ar).to_string())
        );
    }

    #[test]
    fn a_resubmission_outlives_the_previous_hide_timer() {
        let mut banners = Generation::default();
        // first banner shown, its hide timer holds ticket 1
        banners.advance();
        let first_timer = banners.current();
        // a second submission settles within the hide window
        banners.advance();
        let second_timer = banners.current();
        // the stale timer fires and must leave the fresh banner alone
        assert!(!banners.is_current(first_timer));
        // the fresh banner's own timer still dismisses it
        assert!(banners.is_current(second_timer));
    }

    #[test]
    fn transport_failures_show_the_network_message() {
        let outcome = submit_outcome(
            Err(SystemError::Message("connection refused".to_string()).into()),
            Language::En,
        );
        assert_eq!(
            outcome,
            Banner::Error(i18n::network_error(Language::En).to_string())
        );
    }
}
