//! Friends Screen
//!
//! User search, incoming requests and the friends list with top books.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::browser;
use crate::components::nav_bar::NavBar;
use crate::context::use_app_context;
use crate::error::AppError;
use crate::models::RequestStatus;
use crate::store::{
    search_results_for, store_apply_overview, store_remove_request, FriendsState,
    FriendsStateStoreFields, SearchState,
};

/// Covers shown per friend
const TOP_BOOKS_SHOWN: usize = 3;

const RESPOND_FAILED: &str = "Error responding.";

/// Alert after sending a friend request
fn request_alert(result: &Result<(), AppError>) -> &str {
    match result {
        Ok(()) => "Request sent!",
        Err(e @ AppError::Http { .. }) => e.server_message().unwrap_or("Failed to send request."),
        Err(_) => "Error sending request.",
    }
}

/// Alert after accepting or declining; `None` on success
fn respond_alert(result: &Result<(), AppError>) -> Option<&'static str> {
    result.as_ref().err().map(|_| RESPOND_FAILED)
}

#[component]
pub fn FriendsView() -> impl IntoView {
    let ctx = use_app_context();
    ctx.require_sign_in();

    let store = Store::new(FriendsState::default());
    let (query, set_query) = signal(String::new());

    // ========================
    // Loading
    // ========================

    let reload = move |uid: String| {
        spawn_local(async move {
            match ctx.api().friends_overview(&uid).await {
                Ok(overview) => {
                    tracing::debug!(
                        "[FRIENDS] {} requests, {} friends",
                        overview.requests.len(),
                        overview.friends.len()
                    );
                    store_apply_overview(&store, overview);
                }
                Err(e) => tracing::error!("[FRIENDS] could not load friends: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        if let Some(principal) = ctx.principal() {
            reload(principal.uid);
        }
    });

    // ========================
    // Actions
    // ========================

    let search = move || {
        let q = query.get_untracked().trim().to_string();
        if q.is_empty() {
            return;
        }
        store.search().set(SearchState::Searching);
        spawn_local(async move {
            let state = match ctx.api().search_users(&q).await {
                Ok(hits) => {
                    let me = ctx.principal_untracked();
                    search_results_for(hits, me.as_ref().map(|p| p.uid.as_str()))
                }
                Err(e) => {
                    tracing::error!("[FRIENDS] user search failed: {}", e);
                    SearchState::Message("Error searching users.".to_string())
                }
            };
            store.search().set(state);
        });
    };

    let send_request = move |to_uid: String| {
        let Some(me) = ctx.principal_untracked() else { return };
        spawn_local(async move {
            let result = ctx.api().send_friend_request(&me.uid, &to_uid).await;
            if let Err(e) = &result {
                tracing::error!("[FRIENDS] friend request failed: {}", e);
            }
            browser::alert(request_alert(&result));
        });
    };

    let respond = move |request_id: String, status: RequestStatus| {
        spawn_local(async move {
            let result = ctx.api().respond_to_request(&request_id, status).await;
            match respond_alert(&result) {
                None => {
                    store_remove_request(&store, &request_id);
                    if let Some(me) = ctx.principal_untracked() {
                        reload(me.uid);
                    }
                }
                Some(message) => {
                    if let Err(e) = &result {
                        tracing::error!("[FRIENDS] respond failed: {}", e);
                    }
                    browser::alert(message);
                }
            }
        });
    };

    // ========================
    // Rendering
    // ========================

    let search_results = move || match store.search().get() {
        SearchState::Idle => view! { <div></div> }.into_any(),
        SearchState::Searching => view! { <p class="status">"Searching..."</p> }.into_any(),
        SearchState::Message(message) => view! { <p class="status">{message}</p> }.into_any(),
        SearchState::Results(hits) => hits
            .into_iter()
            .map(|hit| {
                let uid = hit.user_id.clone();
                view! {
                    <div class="search-result">
                        <span class="username">{hit.username}</span>
                        <button class="btn btn--small" on:click=move |_| send_request(uid.clone())>
                            "Add Friend"
                        </button>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <NavBar />
        <main class="friends-page">
            <section class="friend-search">
                <h3>"Find Friends"</h3>
                <div class="search-row">
                    <input
                        type="text"
                        id="userSearchInput"
                        placeholder="Search by username"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                search();
                            }
                        }
                    />
                    <button class="btn" id="userSearchBtn" on:click=move |_| search()>"Search"</button>
                </div>
                <div id="searchResults">{search_results}</div>
            </section>

            <Show when=move || store.requests().with(|r| !r.is_empty())>
                <section id="requestsSection" class="friend-requests">
                    <h3>"Friend Requests"</h3>
                    <For
                        each=move || store.requests().get()
                        key=|request| request.id.clone()
                        children=move |request| {
                            let accept_id = request.id.clone();
                            let decline_id = request.id.clone();
                            view! {
                                <div class="friend-request">
                                    <span><b>{request.sender_username}</b>" wants to be friends."</span>
                                    <div class="request-actions">
                                        <button
                                            class="btn btn--accept"
                                            on:click=move |_| respond(accept_id.clone(), RequestStatus::Accepted)
                                        >
                                            "Accept"
                                        </button>
                                        <button
                                            class="btn btn--decline"
                                            on:click=move |_| respond(decline_id.clone(), RequestStatus::Rejected)
                                        >
                                            "Decline"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </section>
            </Show>

            <section class="friends-list">
                <h3>"Your Friends"</h3>
                <div id="friendsList">
                    {move || {
                        if !store.loaded().get() {
                            return view! { <p class="status">"Loading friends..."</p> }.into_any();
                        }
                        let friends = store.friends().get();
                        if friends.is_empty() {
                            return view! {
                                <p class="status">"No friends yet. Search for someone above!"</p>
                            }
                            .into_any();
                        }
                        friends
                            .into_iter()
                            .map(|friend| view! {
                                <div class="friend-card" data-user-id=friend.user_id.clone()>
                                    <h4>{friend.username}</h4>
                                    <div class="top-books">
                                        {friend
                                            .top_books
                                            .into_iter()
                                            .take(TOP_BOOKS_SHOWN)
                                            .map(|book| view! {
                                                <img class="top-book-cover" src=book.image_url title=book.title.clone() alt=book.title />
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_failures_always_alert() {
        assert_eq!(respond_alert(&Ok(())), None);
        let rejected = Err(AppError::Http { status: 400, message: None });
        assert_eq!(respond_alert(&rejected), Some("Error responding."));
        let offline = Err(AppError::Transport("connection refused".to_string()));
        assert_eq!(respond_alert(&offline), Some("Error responding."));
    }

    #[test]
    fn test_request_alert_prefers_server_message() {
        assert_eq!(request_alert(&Ok(())), "Request sent!");
        let already = Err(AppError::Http { status: 400, message: Some("Already friends".to_string()) });
        assert_eq!(request_alert(&already), "Already friends");
        let bare = Err(AppError::Http { status: 500, message: None });
        assert_eq!(request_alert(&bare), "Failed to send request.");
        let offline = Err(AppError::Transport("timeout".to_string()));
        assert_eq!(request_alert(&offline), "Error sending request.");
    }
}
