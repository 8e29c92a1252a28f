//! Liked Books Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::book_row::BookRow;
use crate::components::nav_bar::NavBar;
use crate::context::use_app_context;
use crate::models::BookSummary;

#[component]
pub fn LikedView() -> impl IntoView {
    let ctx = use_app_context();
    ctx.require_sign_in();

    // None while loading
    let liked = RwSignal::new(None::<Vec<BookSummary>>);

    Effect::new(move |_| {
        let Some(principal) = ctx.principal() else { return };
        spawn_local(async move {
            match ctx.api().liked_books(&principal.uid).await {
                Ok(books) => liked.set(Some(books)),
                Err(e) => {
                    tracing::error!("[LIKED] could not load liked books: {}", e);
                    liked.set(Some(Vec::new()));
                }
            }
        });
    });

    let unlike = move |book_id: String| {
        let Some(principal) = ctx.principal_untracked() else { return };
        spawn_local(async move {
            match ctx.api().unlike(&principal.uid, &book_id).await {
                Ok(()) => {
                    tracing::info!("[LIKED] unliked {}", book_id);
                    liked.update(|books| {
                        if let Some(books) = books {
                            books.retain(|b| b.book_id != book_id);
                        }
                    });
                }
                Err(e) => {
                    tracing::error!("[LIKED] unlike {} failed: {}", book_id, e);
                    browser::alert("Could not unlike book.");
                }
            }
        });
    };

    view! {
        <NavBar />
        <main class="liked-page">
            <h2>"Books You Liked"</h2>
            <div id="likedList">
                {move || match liked.get() {
                    None => view! { <p class="status">"Loading liked books..."</p> }.into_any(),
                    Some(books) if books.is_empty() => {
                        view! { <p class="status">"You haven't liked any books yet."</p> }.into_any()
                    }
                    Some(books) => books
                        .into_iter()
                        .map(|book| {
                            let book_id = book.book_id.clone();
                            view! {
                                <BookRow book=book>
                                    <button class="btn btn--unlike" on:click=move |_| unlike(book_id.clone())>
                                        "Unlike"
                                    </button>
                                </BookRow>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </main>
    }
}
