//! Swipe Screen
//!
//! One recommendation card driven by arrow keys and horizontal touch swipes.
//! The first card is rendered by the server into `#initial-book`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_swipe::{bind_global_keydown, bind_global_touch, create_swipe_signals, SwipeDirection};

use crate::browser;
use crate::components::nav_bar::NavBar;
use crate::context::use_app_context;
use crate::models::SwipeResponse;
use crate::swipe::{
    indicator_css, run_reset, CardView, Rejection, SwipeScreen, SIGNED_OUT_MESSAGE,
    SWIPE_FAILED_MESSAGE,
};

const INITIAL_BOOK_ELEMENT_ID: &str = "initial-book";

fn seed_card() -> CardView {
    match browser::read_json_script::<SwipeResponse>(INITIAL_BOOK_ELEMENT_ID) {
        Some(resp) => CardView::from_response(&resp),
        None => {
            tracing::warn!("[SWIPE] no seeded card in #{}", INITIAL_BOOK_ELEMENT_ID);
            CardView::default()
        }
    }
}

#[component]
pub fn SwipeView() -> impl IntoView {
    let ctx = use_app_context();
    ctx.require_sign_in();

    let screen = RwSignal::new(SwipeScreen::new(seed_card()));
    let card = Memo::new(move |_| screen.with(|s| s.engine().card().clone()));
    let pose = Memo::new(move |_| screen.with(|s| s.pose().clone()));
    let indicator = Memo::new(move |_| screen.with(|s| s.indicator()));

    // Returns whether the gesture was accepted
    let on_swipe = move |direction: SwipeDirection| -> bool {
        let principal = ctx.principal_untracked();
        let begun = screen
            .try_update(|s| s.accept(direction, principal.is_some()))
            .unwrap_or(Err(Rejection::Locked));
        let ticket = match begun {
            Ok(ticket) => ticket,
            Err(Rejection::SignedOut) => {
                browser::alert(SIGNED_OUT_MESSAGE);
                return false;
            }
            Err(rejection) => {
                tracing::debug!("[SWIPE] {:?} dropped: {:?}", direction, rejection);
                return false;
            }
        };
        let user_id = principal.map(|p| p.uid).unwrap_or_default();
        tracing::info!("[SWIPE] #{} {:?} book={}", ticket.seq, ticket.action(), ticket.book_id);

        // Network and animation run independently
        let request = ticket.request(&user_id);
        let seq = ticket.seq;
        let api = ctx.api();
        spawn_local(async move {
            match api.submit_swipe(&request).await {
                Ok(resp) => {
                    let applied = screen.try_update(|s| s.apply(seq, &resp)).unwrap_or(false);
                    if applied {
                        tracing::debug!("[SWIPE] #{} applied, next book={}", seq, resp.book_id);
                    } else {
                        tracing::debug!("[SWIPE] #{} stale response discarded", seq);
                    }
                }
                Err(e) => {
                    tracing::error!("[SWIPE] #{} request failed: {}", seq, e);
                    browser::alert(SWIPE_FAILED_MESSAGE);
                }
            }
        });

        spawn_local(run_reset(TimeoutFuture::new, move |step| {
            screen.update(|s| s.advance(step));
        }));

        true
    };

    bind_global_keydown(on_swipe);
    bind_global_touch(
        create_swipe_signals(),
        move || screen.with_untracked(|s| s.engine().is_locked()),
        on_swipe,
    );

    let has_image = move || card.with(|c| !c.image_url.is_empty());
    let has_liked_by = move || card.with(|c| !c.liked_by_text.is_empty());

    view! {
        <NavBar />
        <main class="swipe-page">
            <div
                id="xmark"
                class="swipe-indicator dislike"
                style=move || indicator_css(indicator.get() == Some(SwipeDirection::Left))
            >
                "✗"
            </div>
            <div
                id="checkmark"
                class="swipe-indicator like"
                style=move || indicator_css(indicator.get() == Some(SwipeDirection::Right))
            >
                "✓"
            </div>

            <div
                id="book-card"
                class="book-card"
                data-book-id=move || card.with(|c| c.book_id.clone())
                style=move || pose.with(|p| p.css())
            >
                <Show when=has_image>
                    <img
                        id="image"
                        class="book-cover"
                        src=move || card.with(|c| c.image_url.clone())
                        alt=move || card.with(|c| c.title.clone())
                    />
                </Show>
                <h2 id="title">{move || card.with(|c| c.title.clone())}</h2>
                <p id="author">{move || card.with(|c| c.author.clone())}</p>
                <p id="similarityScore" class="score">{move || card.with(|c| c.score_text.clone())}</p>
                <p
                    id="likedByContainer"
                    class="liked-by"
                    style=move || if has_liked_by() { "display: block;" } else { "display: none;" }
                >
                    {move || card.with(|c| c.liked_by_text.clone())}
                </p>
                <p id="description" class="description">{move || card.with(|c| c.description.clone())}</p>
            </div>

            <p class="swipe-hint">"← Dislike   ·   Like →"</p>
        </main>
    }
}
