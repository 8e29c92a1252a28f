//! Homepage
//!
//! Signed-in user summary, saved preferences and the explore list.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::book_row::BookRow;
use crate::components::nav_bar::NavBar;
use crate::context::use_app_context;
use crate::models::BookSummary;
use crate::profile::{self, UserProfile};
use crate::routes;

/// How long a failed like shows "Error" before the button resets
const LIKE_ERROR_RESET_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq)]
enum ProfileState {
    Loading,
    Missing,
    Loaded(UserProfile),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LikeState {
    Idle,
    Liking,
    Liked,
    Failed,
}

impl LikeState {
    fn label(self) -> &'static str {
        match self {
            LikeState::Idle => "Like Book",
            LikeState::Liking => "Liking...",
            LikeState::Liked => "Liked!",
            LikeState::Failed => "Error",
        }
    }

    fn disabled(self) -> bool {
        self != LikeState::Idle
    }
}

#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_app_context();
    ctx.require_sign_in();

    let (profile_state, set_profile_state) = signal(ProfileState::Loading);
    let (explore, set_explore) = signal(Vec::<BookSummary>::new());

    Effect::new(move |_| {
        let Some(principal) = ctx.principal() else { return };
        spawn_local(async move {
            match profile::load_profile(&principal.uid).await {
                Ok(Some(existing)) => set_profile_state.set(ProfileState::Loaded(existing)),
                Ok(None) => {
                    set_profile_state.set(ProfileState::Missing);
                    return;
                }
                Err(e) => {
                    tracing::error!("[HOME] could not load profile: {}", e);
                    set_profile_state.set(ProfileState::Missing);
                    return;
                }
            }
            match ctx.api().explore(&principal.uid).await {
                Ok(books) => {
                    tracing::debug!("[HOME] {} explore picks", books.len());
                    set_explore.set(books);
                }
                Err(e) => tracing::error!("[HOME] explore failed: {}", e),
            }
        });
    });

    let user_info = move || {
        ctx.principal()
            .map(|p| format!("Logged in as: {}", p.label()))
            .unwrap_or_default()
    };
    let genre_list = move || match profile_state.get() {
        ProfileState::Loading => String::new(),
        ProfileState::Missing => "No preferences found.".to_string(),
        ProfileState::Loaded(p) => p.genres_label(),
    };
    let frequency_info = move || match profile_state.get() {
        ProfileState::Loading => String::new(),
        ProfileState::Missing => "Unknown.".to_string(),
        ProfileState::Loaded(p) => p.frequency_label(),
    };

    let go_to_recommendations = move |_| {
        if let Some(principal) = ctx.principal_untracked() {
            browser::navigate(&routes::swipe_href(&principal.uid));
        }
    };

    view! {
        <NavBar />
        <main class="homepage">
            <p id="userInfo" class="user-info">{user_info}</p>
            <section class="prefs-summary">
                <p>"Favorite genres: " <span id="genreList">{genre_list}</span></p>
                <p>"Reading frequency: " <span id="freqInfo">{frequency_info}</span></p>
            </section>
            <div class="home-actions">
                <button class="btn btn--primary" id="goToRecs" on:click=go_to_recommendations>
                    "Get Recommendations"
                </button>
                <button
                    class="btn"
                    id="editPrefsBtn"
                    on:click=move |_| browser::navigate(routes::EDIT_PREFERENCES)
                >
                    "Edit Preferences"
                </button>
            </div>
            <Show when=move || explore.with(|books| !books.is_empty())>
                <section id="exploreContainer" class="explore">
                    <h3>"Explore Something New"</h3>
                    <div id="exploreList">
                        <For
                            each=move || explore.get()
                            key=|book| book.book_id.clone()
                            children=move |book| view! { <ExploreCard book=book /> }
                        />
                    </div>
                </section>
            </Show>
        </main>
    }
}

/// Explore entry with its own like button
#[component]
fn ExploreCard(book: BookSummary) -> impl IntoView {
    let ctx = use_app_context();
    let (like_state, set_like_state) = signal(LikeState::Idle);
    let book_id = StoredValue::new(book.book_id.clone());

    let like = move |_| {
        let Some(principal) = ctx.principal_untracked() else { return };
        set_like_state.set(LikeState::Liking);
        let book_id = book_id.get_value();
        spawn_local(async move {
            match ctx.api().like_book(&principal.uid, &book_id).await {
                Ok(()) => {
                    tracing::info!("[HOME] liked {}", book_id);
                    set_like_state.set(LikeState::Liked);
                }
                Err(e) => {
                    tracing::error!("[HOME] like {} failed: {}", book_id, e);
                    set_like_state.set(LikeState::Failed);
                    TimeoutFuture::new(LIKE_ERROR_RESET_MS).await;
                    set_like_state.set(LikeState::Idle);
                }
            }
        });
    };

    view! {
        <BookRow book=book>
            <button
                class="btn btn--like"
                disabled=move || like_state.get().disabled()
                on:click=like
            >
                {move || like_state.get().label()}
            </button>
        </BookRow>
    }
}
