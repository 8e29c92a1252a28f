//! Login Screen
//!
//! Google sign-in, first-login profile creation and the admin entry point.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::error::AppError;
use crate::firebase;
use crate::models::Principal;
use crate::profile;
use crate::routes;

const ADMIN_PROMPT: &str = "Enter admin password:";
const ADMIN_DENIED: &str = "Incorrect password. Access denied.";

/// Landing page for a principal who is already signed in
pub(crate) async fn landing_for(principal: &Principal) -> Result<String, AppError> {
    let existing = profile::load_profile(&principal.uid).await?;
    Ok(profile::landing_href(existing.as_ref(), &principal.uid))
}

/// Popup sign-in; creates the profile document on first login
pub(crate) async fn sign_in_and_route() -> Result<String, AppError> {
    let principal = firebase::sign_in_with_google().await?;
    let existing = profile::load_profile(&principal.uid).await?;
    if existing.is_none() {
        tracing::info!("[AUTH] first login, creating profile for {}", principal.uid);
        profile::create_profile(
            &principal.uid,
            principal.email.as_deref(),
            principal.display_name.as_deref(),
        )
        .await?;
    }
    Ok(profile::landing_href(existing.as_ref(), &principal.uid))
}

/// Forward an already signed-in visitor, unless a popup sign-in is in flight
pub(crate) fn redirect_when_signed_in(busy: ReadSignal<bool>) {
    let ctx = use_app_context();
    Effect::new(move |_| {
        let Some(principal) = ctx.principal() else { return };
        if busy.get_untracked() {
            return;
        }
        spawn_local(async move {
            match landing_for(&principal).await {
                Ok(href) => browser::navigate(&href),
                Err(e) => tracing::error!("[AUTH] could not load profile: {}", e),
            }
        });
    });
}

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_app_context();
    let (busy, set_busy) = signal(false);

    redirect_when_signed_in(busy);

    let google_sign_in = move |_| {
        set_busy.set(true);
        spawn_local(async move {
            match sign_in_and_route().await {
                Ok(href) => browser::navigate(&href),
                Err(e) => {
                    tracing::error!("[AUTH] Google sign-in failed: {}", e);
                    browser::alert(&format!("Google Sign-In failed: {}", e));
                    set_busy.set(false);
                }
            }
        });
    };

    let admin_login = move |_| {
        let passcode = ctx.config().admin_passcode;
        match browser::prompt(ADMIN_PROMPT) {
            Some(entered) if entered == passcode => browser::navigate(routes::ISBN),
            _ => browser::alert(ADMIN_DENIED),
        }
    };

    view! {
        <main class="login-page">
            <div class="login-card">
                <h1 class="brand">"BookTinder"</h1>
                <p class="tagline">"Swipe your way to your next favorite book."</p>
                <button
                    class="btn btn--google"
                    id="googleSignInBtn"
                    disabled=move || busy.get()
                    on:click=google_sign_in
                >
                    {move || if busy.get() { "Signing in..." } else { "Sign in with Google" }}
                </button>
                <p class="login-alt">
                    "New here? "
                    <a href="/signup">"Create an account"</a>
                </p>
                <button class="btn btn--link" id="adminLoginBtn" on:click=admin_login>
                    "Admin"
                </button>
            </div>
            <footer class="login-footer">
                "© " <span id="year">{browser::current_year()}</span> " BookTinder"
            </footer>
        </main>
    }
}
