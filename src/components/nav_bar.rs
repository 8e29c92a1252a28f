//! Navigation Bar Component
//!
//! Links between the signed-in screens plus the logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::firebase;
use crate::routes;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let swipe_href = move || {
        ctx.principal()
            .map(|p| routes::swipe_href(&p.uid))
            .unwrap_or_else(|| routes::LOGIN.to_string())
    };

    let logout = move |_| {
        spawn_local(async {
            if let Err(e) = firebase::sign_out().await {
                tracing::error!("[AUTH] sign out failed: {}", e);
            }
            browser::navigate(routes::LOGIN);
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-link" href=routes::HOME>"Home"</a>
            <a class="nav-link" id="navSwipe" href=swipe_href>"Swipe"</a>
            <a class="nav-link" href=routes::LIKED>"Liked"</a>
            <a class="nav-link" href=routes::SEARCH>"Search"</a>
            <a class="nav-link" href=routes::FRIENDS>"Friends"</a>
            <button class="btn nav-logout" id="logoutBtn" on:click=logout>"Logout"</button>
        </nav>
    }
}
