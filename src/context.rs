//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::config::AppConfig;
use crate::models::{AuthState, Principal};
use crate::openlibrary::OpenLibraryClient;
use crate::routes;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Identity provider state - read
    pub auth: ReadSignal<AuthState>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(auth: ReadSignal<AuthState>, config: AppConfig) -> Self {
        Self {
            auth,
            config: StoredValue::new(config),
        }
    }

    /// Signed-in principal (tracked)
    pub fn principal(&self) -> Option<Principal> {
        self.auth.with(|state| state.principal().cloned())
    }

    /// Signed-in principal for use inside event handlers
    pub fn principal_untracked(&self) -> Option<Principal> {
        self.auth.with_untracked(|state| state.principal().cloned())
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.config.with_value(|c| ApiClient::new(c.api_base.clone()))
    }

    pub fn open_library(&self) -> OpenLibraryClient {
        self.config
            .with_value(|c| OpenLibraryClient::new(c.open_library_base.clone(), c.covers_base.clone()))
    }

    /// Send signed-out visitors back to the login page
    pub fn require_sign_in(&self) {
        let auth = self.auth;
        Effect::new(move |_| {
            if auth.get() == AuthState::SignedOut {
                tracing::info!("[AUTH] not signed in, redirecting to login");
                browser::navigate(routes::LOGIN);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
