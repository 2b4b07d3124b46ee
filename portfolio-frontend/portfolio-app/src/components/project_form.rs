use icondata as i;
use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::{
    html::{Form, Input},
    prelude::*,
    task::spawn_local,
};
use leptos_icons::Icon;
use portfolio_api_types::ProjectImage;

use crate::api;
use crate::global_state::toasts::use_toast;
use crate::i18n::{self, use_language};

const PROGRESS_TICK_MS: u64 = 200;
const PROGRESS_CAP: f64 = 90.0;

/// The progress bar is cosmetic: it advances by a random step every tick and
/// freezes at the cap until the upload actually resolves.
pub(crate) fn advance_progress(current: f64, step: f64) -> f64 {
    (current + step).min(PROGRESS_CAP)
}

#[derive(Clone, Debug, PartialEq)]
struct ImagePreview {
    // position within the selection; names alone can collide when two
    // selected files share one
    index: u32,
    name: String,
    data_url: String,
}

#[component]
pub fn ProjectForm(
    action: String,
    #[prop(optional)] images: Vec<ProjectImage>,
    children: Children,
) -> impl IntoView {
    let lang = use_language();
    let toasts = use_toast().expect("Toast context not found");
    let form_ref = NodeRef::<Form>::new();
    let file_input = NodeRef::<Input>::new();

    let existing = RwSignal::new(images);
    let previews = RwSignal::new(Vec::<ImagePreview>::new());
    // readers must stay alive until their callbacks fire
    let readers = StoredValue::new_local(Vec::<gloo::file::callbacks::FileReader>::new());
    let (progress, set_progress) = signal(None::<f64>);
    let interval = StoredValue::new(None::<IntervalHandle>);
    let action = StoredValue::new(action);

    let on_files_selected = move |_| {
        previews.set(Vec::new());
        readers.update_value(|r| r.clear());
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };
        for index in 0..files.length() {
            let Some(file) = files.get(index) else {
                continue;
            };
            if !file.type_().starts_with("image/") {
                continue;
            }
            let name = file.name();
            let file = gloo::file::File::from(file);
            let reader = gloo::file::callbacks::read_as_data_url(&file, move |result| {
                match result {
                    Ok(data_url) => previews.update(|p| {
                        p.push(ImagePreview {
                            index,
                            name,
                            data_url,
                        })
                    }),
                    Err(e) => log::error!("failed to read selected image: {e}"),
                }
            });
            readers.update_value(|r| r.push(reader));
        }
    };

    let start_progress = move || {
        set_progress.set(Some(0.0));
        let handle = set_interval_with_handle(
            move || {
                set_progress.update(|progress| {
                    if let Some(value) = progress {
                        *value = advance_progress(*value, js_sys::Math::random() * 10.0);
                    }
                });
            },
            std::time::Duration::from_millis(PROGRESS_TICK_MS),
        );
        if let Ok(handle) = handle {
            interval.set_value(Some(handle));
        }
    };

    let stop_progress = move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
        interval.set_value(None);
        set_progress.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            return;
        };
        if progress.get_untracked().is_some() {
            // an upload is already running
            return;
        }
        start_progress();
        spawn_local(async move {
            match api::submit_project(&action.get_value(), &form).await {
                Ok(redirect) => {
                    if let Err(e) = window().location().set_href(&redirect) {
                        log::error!("redirect failed: {e:?}");
                    }
                }
                Err(e) => {
                    log::error!("project upload failed: {e}");
                    toasts.error(i18n::upload_failed(lang));
                    stop_progress();
                }
            }
        });
    };

    let delete_image = move |image: ProjectImage| {
        let confirmed = window()
            .confirm_with_message(i18n::confirm_delete_image(lang))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_project_image(&image).await {
                Ok(()) => {
                    existing.update(|images| images.retain(|i| i.id != image.id));
                    toasts.success(i18n::image_deleted(lang));
                }
                Err(e) => {
                    log::error!("image delete failed: {e}");
                    toasts.error(i18n::image_delete_failed(lang));
                }
            }
        });
    };

    view! {
        <form id="projectForm" node_ref=form_ref on:submit=on_submit>
            {children()}

            <div class="row" id="currentImages">
                <For
                    each=move || existing.get()
                    key=|image| image.id
                    children=move |image| {
                        let target = image.clone();
                        view! {
                            <div class="col-md-3 mb-3">
                                <div class="card">
                                    <img src=image.url class="card-img-top" alt="" />
                                    <div class="card-body p-2 text-center">
                                        <button
                                            type="button"
                                            class="btn btn-sm btn-outline-danger btn-delete-image"
                                            on:click=move |_| delete_image(target.clone())
                                        >
                                            <Icon icon=i::BsX />
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="mb-3">
                <input
                    type="file"
                    name="additional_images"
                    class="form-control"
                    multiple=true
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_files_selected
                />
            </div>

            <Show when=move || !previews.get().is_empty()>
                <div class="row" id="imagePreview">
                    <h6>{i18n::new_images_preview(lang)}</h6>
                    <For
                        each=move || previews.get()
                        key=|preview| preview.index
                        children=|preview| {
                            view! {
                                <div class="col-md-3 mb-3">
                                    <div class="card">
                                        <img src=preview.data_url class="card-img-top" alt="Preview" />
                                        <div class="card-body p-2">
                                            <small class="text-muted">{preview.name}</small>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            {move || {
                progress
                    .get()
                    .map(|value| {
                        let percent = value.round() as u32;
                        view! {
                            <div id="progressContainer" class="mt-3">
                                <div class="progress">
                                    <div
                                        class="progress-bar progress-bar-striped progress-bar-animated"
                                        style=format!("width: {percent}%")
                                    >
                                        {format!("{percent}%")}
                                    </div>
                                </div>
                                <p id="progressText" class="text-muted small mt-1">
                                    {i18n::uploading(lang, percent)}
                                </p>
                            </div>
                        }
                    })
            }}

            <button
                type="submit"
                id="submitBtn"
                class="btn btn-primary"
                disabled=move || progress.get().is_some()
            >
                {i18n::save_label(lang)}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_advances_but_never_passes_the_cap() {
        let mut progress = 0.0;
        for _ in 0..100 {
            let next = advance_progress(progress, 8.5);
            assert!(next >= progress);
            progress = next;
        }
        assert_eq!(progress, PROGRESS_CAP);
    }

    #[test]
    fn progress_freezes_at_the_cap() {
        assert_eq!(advance_progress(PROGRESS_CAP, 10.0), PROGRESS_CAP);
        assert_eq!(advance_progress(85.0, 3.0), 88.0);
    }

    #[test]
    fn duplicate_file_names_keep_distinct_preview_keys() {
        let first = ImagePreview {
            index: 0,
            name: "photo.png".to_string(),
            data_url: "data:image/png;base64,AAAA".to_string(),
        };
        let second = ImagePreview {
            index: 1,
            name: "photo.png".to_string(),
            data_url: "data:image/png;base64,BBBB".to_string(),
        };
        assert_ne!(first.index, second.index);
        assert_ne!(first, second);
    }
}
