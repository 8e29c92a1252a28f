//! Catalog Form Component
//!
//! Editable book fields shared by the add and database sections of the
//! ISBN tool.

use leptos::prelude::*;

use crate::catalog::CatalogForm;

#[component]
pub fn CatalogFormFields(form: RwSignal<CatalogForm>) -> impl IntoView {
    let has_cover = move || form.with(|f| !f.cover.trim().is_empty());

    view! {
        <div class="catalog-form">
            // Live cover preview
            <Show when=has_cover>
                <img class="cover-preview" src=move || form.with(|f| f.cover.clone()) alt="Cover preview" />
            </Show>
            <label class="field">
                <span>"Cover URL"</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.cover.clone())
                    on:input=move |ev| form.update(|f| f.cover = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Title"</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Authors"</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.authors.clone())
                    on:input=move |ev| form.update(|f| f.authors = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Genres (comma separated)"</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.genres.clone())
                    on:input=move |ev| form.update(|f| f.genres = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Synopsis"</span>
                <textarea
                    rows="6"
                    prop:value=move || form.with(|f| f.synopsis.clone())
                    on:input=move |ev| form.update(|f| f.synopsis = event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}
