//! Identity Binding
//!
//! Current principal, sign-in/sign-out and auth state subscription.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{firebase_auth, GoogleAuthProvider, User};
use crate::error::AppError;
use crate::models::{AuthState, Principal};

fn principal_from(user: &User) -> Principal {
    Principal {
        uid: user.uid(),
        display_name: user.display_name(),
        email: user.email(),
    }
}

fn principal_from_value(value: &JsValue) -> Option<Principal> {
    if value.is_null() || value.is_undefined() {
        None
    } else {
        Some(principal_from(value.unchecked_ref::<User>()))
    }
}

pub fn current_principal() -> Option<Principal> {
    firebase_auth().current_user().map(|user| principal_from(&user))
}

/// Push every sign-in/sign-out transition into `set_auth`
pub fn watch_auth_state(set_auth: WriteSignal<AuthState>) {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
        let state = match principal_from_value(&user) {
            Some(principal) => {
                tracing::info!("[AUTH] signed in uid={}", principal.uid);
                AuthState::SignedIn(principal)
            }
            None => {
                tracing::info!("[AUTH] signed out");
                AuthState::SignedOut
            }
        };
        set_auth.set(state);
    });
    let _unsubscribe = firebase_auth().on_auth_state_changed(callback.as_ref().unchecked_ref());
    // Subscription lives for the page lifetime
    callback.forget();
}

/// Google popup sign-in
pub async fn sign_in_with_google() -> Result<Principal, AppError> {
    let provider = GoogleAuthProvider::new();
    let credential = JsFuture::from(firebase_auth().sign_in_with_popup(&provider)).await?;
    let user = js_sys::Reflect::get(&credential, &JsValue::from_str("user"))?;
    principal_from_value(&user).ok_or(AppError::NotSignedIn)
}

pub async fn sign_out() -> Result<(), AppError> {
    JsFuture::from(firebase_auth().sign_out()).await?;
    Ok(())
}
