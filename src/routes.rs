//! Page Routing
//!
//! Every path is served the same HTML shell; the path picks the screen.
//! Navigation is a full page load.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub const LOGIN: &str = "/";
pub const PREFERENCES: &str = "/preferences";
/// Preferences form for a user who has already onboarded
pub const EDIT_PREFERENCES: &str = "/preferences?edit=1";
pub const HOME: &str = "/home";
pub const FRIENDS: &str = "/friends";
pub const LIKED: &str = "/liked";
pub const SEARCH: &str = "/search";
pub const ISBN: &str = "/isbn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    Preferences,
    Home,
    Swipe,
    Friends,
    Liked,
    Search,
    IsbnAdmin,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches(".html");
        let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        match path {
            "/signup" => Page::Signup,
            "/preferences" => Page::Preferences,
            "/home" | "/homepage" => Page::Home,
            "/recommendation" => Page::Swipe,
            "/friends" => Page::Friends,
            "/liked" => Page::Liked,
            "/search" => Page::Search,
            "/isbn" => Page::IsbnAdmin,
            _ => Page::Login,
        }
    }
}

/// Swipe page URL; the server renders the first card for `uid`
pub fn swipe_href(uid: &str) -> String {
    format!("/recommendation?user_id={}", utf8_percent_encode(uid, NON_ALPHANUMERIC))
}

/// Whether `name=1` (or bare `name`) appears in a `location.search` string
pub fn has_query_flag(search: &str, name: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            Some((parts.next()?, parts.next().unwrap_or("1")))
        })
        .any(|(key, value)| key == name && value != "0" && !value.is_empty())
}
