//! Preferences Screen
//!
//! Onboarding form: age, exactly three genres and reading frequency.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::preferences::{GenreSelection, ToggleOutcome, FREQUENCIES, GENRES, TOO_MANY_GENRES};
use crate::profile::{self, PreferencesUpdate};
use crate::routes;

#[component]
pub fn PreferencesView() -> impl IntoView {
    let ctx = use_app_context();
    ctx.require_sign_in();

    let editing = routes::has_query_flag(&browser::current_search(), "edit");

    let age = RwSignal::new(String::new());
    let selection = RwSignal::new(GenreSelection::default());
    let frequency = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);

    // Onboarded users skip the form unless they came to edit it
    Effect::new(move |_| {
        let Some(principal) = ctx.principal() else { return };
        spawn_local(async move {
            match profile::load_profile(&principal.uid).await {
                Ok(Some(existing)) if existing.preferences_done && !editing => {
                    browser::navigate(&routes::swipe_href(&principal.uid));
                }
                Ok(Some(existing)) => {
                    age.set(existing.age.clone().unwrap_or_default());
                    selection.set(GenreSelection::from_genres(&existing.genres));
                    frequency.set(existing.frequency.clone());
                }
                Ok(None) => {}
                Err(e) => tracing::error!("[PREFS] could not load profile: {}", e),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(principal) = ctx.principal_untracked() else {
            browser::alert("You must be logged in to save preferences.");
            return;
        };
        let genres = match selection.with_untracked(|s| s.validate()) {
            Ok(genres) => genres,
            Err(message) => {
                browser::alert(message);
                return;
            }
        };
        let update = PreferencesUpdate {
            age: age.get_untracked().trim().to_string(),
            genres,
            frequency: frequency.get_untracked(),
            preferences_done: true,
            updated_at: browser::now_iso(),
        };

        set_saving.set(true);
        spawn_local(async move {
            match profile::save_preferences(&principal.uid, &update).await {
                Ok(()) => {
                    tracing::info!("[PREFS] saved for {}", principal.uid);
                    browser::navigate(&routes::swipe_href(&principal.uid));
                }
                Err(e) => {
                    tracing::error!("[PREFS] save failed: {}", e);
                    browser::alert(&format!("Error saving preferences: {}", e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <main class="preferences-page">
            <h2>"Tell us about your reading"</h2>
            <form class="preferences-form" id="preferencesForm" on:submit=on_submit>
                <label class="field">
                    <span>"Age"</span>
                    <input
                        type="number"
                        id="age"
                        min="1"
                        prop:value=move || age.get()
                        on:input=move |ev| age.set(event_target_value(&ev))
                    />
                </label>

                <fieldset class="genre-options">
                    <legend>"Pick exactly 3 genres"</legend>
                    {GENRES.iter().map(|genre| {
                        let genre: &'static str = *genre;
                        view! {
                            <label class="genre-option">
                                <input
                                    type="checkbox"
                                    name="genre"
                                    value=genre
                                    prop:checked=move || selection.with(|s| s.contains(genre))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        let outcome = selection.try_update(|s| s.toggle(genre, checked));
                                        if outcome == Some(ToggleOutcome::Rejected) {
                                            event_target::<web_sys::HtmlInputElement>(&ev).set_checked(false);
                                            browser::alert(TOO_MANY_GENRES);
                                        }
                                    }
                                />
                                {genre}
                            </label>
                        }
                    }).collect_view()}
                </fieldset>

                <fieldset class="frequency-options">
                    <legend>"How often do you read?"</legend>
                    {FREQUENCIES.iter().map(|(value, label)| {
                        let value: &'static str = *value;
                        view! {
                            <label class="frequency-option">
                                <input
                                    type="radio"
                                    name="frequency"
                                    value=value
                                    prop:checked=move || frequency.with(|f| f.as_deref() == Some(value))
                                    on:change=move |_| frequency.set(Some(value.to_string()))
                                />
                                {*label}
                            </label>
                        }
                    }).collect_view()}
                </fieldset>

                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Preferences" }}
                </button>
            </form>
        </main>
    }
}
