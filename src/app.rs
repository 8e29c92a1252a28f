//! BookTinder Frontend App
//!
//! Root component: auth subscription, shared context and page selection.

use leptos::prelude::*;

use crate::browser;
use crate::components::{
    BookSearchView, FriendsView, HomeView, IsbnAdminView, LikedView, LoginView, PreferencesView,
    SignupView, SwipeView,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::firebase;
use crate::models::AuthState;
use crate::routes::Page;

#[component]
pub fn App() -> impl IntoView {
    // Pending until the identity provider reports the first state
    let (auth, set_auth) = signal(AuthState::Pending);

    // Provide context to all children
    provide_context(AppContext::new(auth, AppConfig::load()));

    firebase::watch_auth_state(set_auth);

    let page = Page::from_path(&browser::current_path());
    tracing::info!("[APP] page {:?}", page);

    // Protected pages wait until the first auth state is known
    let resolved = move || auth.with(|state| *state != AuthState::Pending);

    match page {
        Page::Login => view! { <LoginView /> }.into_any(),
        Page::Signup => view! { <SignupView /> }.into_any(),
        Page::IsbnAdmin => view! { <IsbnAdminView /> }.into_any(),
        protected => view! {
            <Show when=resolved>
                {move || protected_view(protected)}
            </Show>
        }
        .into_any(),
    }
}

fn protected_view(page: Page) -> AnyView {
    match page {
        Page::Preferences => view! { <PreferencesView /> }.into_any(),
        Page::Home => view! { <HomeView /> }.into_any(),
        Page::Friends => view! { <FriendsView /> }.into_any(),
        Page::Liked => view! { <LikedView /> }.into_any(),
        Page::Search => view! { <BookSearchView /> }.into_any(),
        Page::Swipe => view! { <SwipeView /> }.into_any(),
        Page::Login | Page::Signup | Page::IsbnAdmin => view! { <LoginView /> }.into_any(),
    }
}
