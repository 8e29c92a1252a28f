//! Browser Helpers
//!
//! Thin wrappers over `window` APIs used by the views.

use serde::de::DeserializeOwned;

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn prompt(message: &str) -> Option<String> {
    web_sys::window().and_then(|win| win.prompt_with_message(message).ok().flatten())
}

/// Full page navigation
pub fn navigate(href: &str) {
    tracing::debug!("[NAV] -> {}", href);
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(href);
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_search() -> String {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

pub fn origin() -> Option<String> {
    web_sys::window().and_then(|win| win.location().origin().ok())
}

/// Text content of an element by id
pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}

/// Parse a server-rendered `<script type="application/json">` block
pub fn read_json_script<T: DeserializeOwned>(id: &str) -> Option<T> {
    let raw = element_text(id)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("[PAGE] could not parse #{}: {}", id, e);
            None
        }
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
