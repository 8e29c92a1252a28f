//! Book List Endpoints
//!
//! Explore, liked list, unlike and catalog search.

use super::ApiClient;
use crate::error::AppError;
use crate::models::{BookSummary, SwipeAction, SwipeRequest, UnlikeRequest};

impl ApiClient {
    /// Up to three picks outside the user's preferred genres
    pub async fn explore(&self, user_id: &str) -> Result<Vec<BookSummary>, AppError> {
        self.get_json("/api/explore", &[("user_id", user_id)]).await
    }

    /// Like a book from a list; the next recommendation in the response is not needed
    pub async fn like_book(&self, user_id: &str, book_id: &str) -> Result<(), AppError> {
        let request = SwipeRequest {
            book_id: book_id.to_string(),
            action: SwipeAction::Like,
            user_id: user_id.to_string(),
        };
        self.post_ack("/api/swipe", &request).await
    }

    pub async fn liked_books(&self, user_id: &str) -> Result<Vec<BookSummary>, AppError> {
        self.get_json("/api/liked_books", &[("user_id", user_id)]).await
    }

    pub async fn unlike(&self, user_id: &str, book_id: &str) -> Result<(), AppError> {
        let body = UnlikeRequest {
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
        };
        self.post_ack("/api/unlike", &body).await
    }

    pub async fn search_books(&self, query: &str) -> Result<Vec<BookSummary>, AppError> {
        self.get_json("/api/search", &[("q", query)]).await
    }
}
