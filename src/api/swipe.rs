//! Swipe Endpoint

use super::ApiClient;
use crate::error::AppError;
use crate::models::{SwipeRequest, SwipeResponse};

impl ApiClient {
    /// Report a decision and receive the next recommendation
    pub async fn submit_swipe(&self, request: &SwipeRequest) -> Result<SwipeResponse, AppError> {
        self.post_json("/api/swipe", request).await
    }
}
