//! Signup Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::login_view::{redirect_when_signed_in, sign_in_and_route};
use crate::routes;

#[component]
pub fn SignupView() -> impl IntoView {
    let (busy, set_busy) = signal(false);

    redirect_when_signed_in(busy);

    let google_sign_up = move |_| {
        set_busy.set(true);
        spawn_local(async move {
            match sign_in_and_route().await {
                Ok(_) => browser::navigate(routes::PREFERENCES),
                Err(e) => {
                    tracing::error!("[AUTH] Google sign-up failed: {}", e);
                    browser::alert(&format!("Signup failed: {}", e));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <main class="login-page">
            <div class="login-card">
                <h1 class="brand">"Join BookTinder"</h1>
                <p class="tagline">"Tell us what you like and we'll find your next read."</p>
                <button
                    class="btn btn--google"
                    id="googleSignUpBtn"
                    disabled=move || busy.get()
                    on:click=google_sign_up
                >
                    {move || if busy.get() { "Signing up..." } else { "Sign up with Google" }}
                </button>
                <p class="login-alt">
                    "Already have an account? "
                    <a href=routes::LOGIN>"Log in"</a>
                </p>
            </div>
        </main>
    }
}
