use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::project_form::ProjectForm;

/// Admin project editing. The project fields mirror the server-side form;
/// image previews, uploads, and deletions are handled by `ProjectForm`.
#[component]
pub fn ProjectEditPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        <Title text="Edit project" />
        <div class="container py-5">
            {move || {
                let id = params.get().get("id").unwrap_or_default();
                view! {
                    <ProjectForm action=format!("/admin/project/edit/{id}")>
                        <div class="mb-3">
                            <input type="text" name="title_en" class="form-control" placeholder="Title (English)" />
                        </div>
                        <div class="mb-3">
                            <input type="text" name="title_ar" class="form-control" placeholder="العنوان (عربي)" dir="rtl" />
                        </div>
                        <div class="mb-3">
                            <textarea name="description_en" class="form-control" rows=4 placeholder="Description (English)"></textarea>
                        </div>
                        <div class="mb-3">
                            <textarea name="description_ar" class="form-control" rows=4 placeholder="الوصف (عربي)" dir="rtl"></textarea>
                        </div>
                        <div class="mb-3">
                            <input type="url" name="link" class="form-control" placeholder="https://" />
                        </div>
                        <div class="mb-3">
                            <input type="text" name="technologies" class="form-control" placeholder="Flask, SQLite, Bootstrap" />
                        </div>
                    </ProjectForm>
                }
            }}
        </div>
    }
}
