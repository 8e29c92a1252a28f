//! Book Search Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::book_row::BookRow;
use crate::components::nav_bar::NavBar;
use crate::context::use_app_context;
use crate::models::BookSummary;

#[derive(Clone, Debug, Default, PartialEq)]
enum BookSearchState {
    #[default]
    Idle,
    Searching,
    Results(Vec<BookSummary>),
    Message(&'static str),
}

fn results_state(books: Vec<BookSummary>) -> BookSearchState {
    if books.is_empty() {
        BookSearchState::Message("No books found.")
    } else {
        BookSearchState::Results(books)
    }
}

#[component]
pub fn BookSearchView() -> impl IntoView {
    let ctx = use_app_context();
    ctx.require_sign_in();

    let (query, set_query) = signal(String::new());
    let (state, set_state) = signal(BookSearchState::Idle);

    let search = move || {
        let q = query.get_untracked().trim().to_string();
        if q.is_empty() {
            return;
        }
        set_state.set(BookSearchState::Searching);
        spawn_local(async move {
            let next = match ctx.api().search_books(&q).await {
                Ok(books) => results_state(books),
                Err(e) => {
                    tracing::error!("[SEARCH] book search failed: {}", e);
                    BookSearchState::Message("Error searching books.")
                }
            };
            set_state.set(next);
        });
    };

    view! {
        <NavBar />
        <main class="search-page">
            <h2>"Search Books"</h2>
            <div class="search-row">
                <input
                    type="text"
                    id="bookSearchInput"
                    placeholder="Title, author or genre"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            search();
                        }
                    }
                />
                <button class="btn" id="bookSearchBtn" on:click=move |_| search()>"Search"</button>
            </div>
            <div id="bookResults">
                {move || match state.get() {
                    BookSearchState::Idle => view! { <div></div> }.into_any(),
                    BookSearchState::Searching => view! { <p class="status">"Searching..."</p> }.into_any(),
                    BookSearchState::Message(message) => view! { <p class="status">{message}</p> }.into_any(),
                    BookSearchState::Results(books) => books
                        .into_iter()
                        .map(|book| view! { <BookRow book=book /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </main>
    }
}
