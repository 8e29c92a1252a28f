//! Frontend Models
//!
//! Data structures matching backend API payloads.

use serde::{Deserialize, Serialize};

/// Book id the backend returns once a user has swiped everything
pub const DONE_BOOK_ID: &str = "DONE";

/// Authenticated user from the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl Principal {
    /// Display name, falling back to email
    pub fn label(&self) -> String {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.email.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Sign-in state as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// First auth callback has not fired yet
    #[default]
    Pending,
    SignedOut,
    SignedIn(Principal),
}

impl AuthState {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            AuthState::SignedIn(principal) => Some(principal),
            _ => None,
        }
    }
}

// ========================
// Swipes
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Dislike,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwipeRequest {
    pub book_id: String,
    pub action: SwipeAction,
    pub user_id: String,
}

/// Score as sent by the backend: a number on swipe responses, a
/// preformatted string ("87.5% Match") on list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
}

/// Next recommendation (also the shape of the server-rendered seed card)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SwipeResponse {
    pub book_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default)]
    pub liked_by: Vec<String>,
}

// ========================
// Book lists (explore, liked, search)
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookSummary {
    pub book_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub score: Option<Score>,
}

impl BookSummary {
    pub fn author_or_unknown(&self) -> String {
        self.author.clone().unwrap_or_else(|| "Unknown".to_string())
    }

    /// Score as displayed in lists (already formatted by the backend)
    pub fn score_label(&self) -> String {
        match &self.score {
            Some(Score::Text(text)) => text.clone(),
            Some(Score::Number(n)) => format!("{:.1}% Match", n),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnlikeRequest {
    pub user_id: String,
    pub book_id: String,
}

// ========================
// Friends
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserHit {
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FriendRequest {
    pub id: String,
    #[serde(default)]
    pub sender_username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Friend {
    #[serde(default)]
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub top_books: Vec<TopBook>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FriendsOverview {
    #[serde(default)]
    pub requests: Vec<FriendRequest>,
    #[serde(default)]
    pub friends: Vec<Friend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FriendRequestBody {
    pub from_uid: String,
    pub to_uid: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondBody {
    pub request_id: String,
    pub status: RequestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_request_wire_format() {
        let req = SwipeRequest {
            book_id: "9780141439518".to_string(),
            action: SwipeAction::Dislike,
            user_id: "u1".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({
            "book_id": "9780141439518",
            "action": "dislike",
            "user_id": "u1"
        }));
    }

    #[test]
    fn test_done_response_parses_without_optional_fields() {
        let resp: SwipeResponse = serde_json::from_str(
            r#"{"book_id":"DONE","title":"No More Recommendations!","description":"You have swiped all books."}"#,
        ).unwrap();
        assert_eq!(resp.book_id, DONE_BOOK_ID);
        assert!(resp.liked_by.is_empty());
        assert!(resp.score.is_none());
    }

    #[test]
    fn test_score_accepts_number_and_text() {
        let book: BookSummary = serde_json::from_str(
            r#"{"book_id":"1","title":"T","author":"A","description":"D","image_url":"i","score":"87.5% Match"}"#,
        ).unwrap();
        assert_eq!(book.score_label(), "87.5% Match");

        let resp: SwipeResponse = serde_json::from_str(r#"{"book_id":"42","title":"X","score":87.456}"#).unwrap();
        assert_eq!(resp.score, Some(Score::Number(87.456)));
    }

    #[test]
    fn test_friends_overview_defaults() {
        let overview: FriendsOverview = serde_json::from_str(
            r#"{"friends":[{"username":"ana","top_books":[{"title":"Dune","image_url":"d.jpg"}]}]}"#,
        ).unwrap();
        assert!(overview.requests.is_empty());
        assert_eq!(overview.friends[0].top_books[0].title, "Dune");
    }

    #[test]
    fn test_respond_body_status_is_lowercase() {
        let body = RespondBody { request_id: "r1".to_string(), status: RequestStatus::Accepted };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"request_id":"r1","status":"accepted"}"#);
    }

    #[test]
    fn test_principal_label_prefers_display_name() {
        let mut p = Principal {
            uid: "u".to_string(),
            display_name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
        };
        assert_eq!(p.label(), "Ana");
        p.display_name = None;
        assert_eq!(p.label(), "ana@example.com");
    }
}
