//! Friends Panel State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Friend, FriendRequest, FriendsOverview, UserHit};

/// What the user-search box currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Results(Vec<UserHit>),
    /// Literal message in place of results
    Message(String),
}

/// Friends panel state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FriendsState {
    /// Incoming requests
    pub requests: Vec<FriendRequest>,
    /// Accepted friends
    pub friends: Vec<Friend>,
    /// User-search box
    pub search: SearchState,
    /// Set once the first overview has loaded
    pub loaded: bool,
}

/// Type alias for the store
pub type FriendsStore = Store<FriendsState>;

// ========================
// Store Helper Functions
// ========================

/// Replace requests and friends wholesale from a fresh overview
pub fn store_apply_overview(store: &FriendsStore, overview: FriendsOverview) {
    store.requests().set(overview.requests);
    store.friends().set(overview.friends);
    store.loaded().set(true);
}

/// Remove a request by ID once answered
pub fn store_remove_request(store: &FriendsStore, request_id: &str) {
    store.requests().write().retain(|r| r.id != request_id);
}

/// Search results without the searching user
pub fn search_results_for(hits: Vec<UserHit>, self_uid: Option<&str>) -> SearchState {
    if hits.is_empty() {
        return SearchState::Message("No users found.".to_string());
    }
    let hits: Vec<UserHit> = hits
        .into_iter()
        .filter(|hit| Some(hit.user_id.as_str()) != self_uid)
        .collect();
    SearchState::Results(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str) -> UserHit {
        UserHit { user_id: id.to_string(), username: format!("user-{}", id) }
    }

    #[test]
    fn test_empty_search_shows_message() {
        assert_eq!(search_results_for(vec![], Some("me")), SearchState::Message("No users found.".to_string()));
    }

    #[test]
    fn test_search_hides_self() {
        let state = search_results_for(vec![hit("me"), hit("you")], Some("me"));
        assert_eq!(state, SearchState::Results(vec![hit("you")]));
    }

    #[test]
    fn test_only_self_leaves_empty_results() {
        let state = search_results_for(vec![hit("me")], Some("me"));
        assert_eq!(state, SearchState::Results(vec![]));
    }
}
