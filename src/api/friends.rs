//! Friends Endpoints

use super::ApiClient;
use crate::error::AppError;
use crate::models::{FriendRequestBody, FriendsOverview, RequestStatus, RespondBody, UserHit};

impl ApiClient {
    pub async fn friends_overview(&self, user_id: &str) -> Result<FriendsOverview, AppError> {
        self.get_json("/api/friends", &[("user_id", user_id)]).await
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<UserHit>, AppError> {
        self.get_json("/api/users/search", &[("q", query)]).await
    }

    pub async fn send_friend_request(&self, from_uid: &str, to_uid: &str) -> Result<(), AppError> {
        let body = FriendRequestBody {
            from_uid: from_uid.to_string(),
            to_uid: to_uid.to_string(),
        };
        self.post_ack("/api/friends/request", &body).await
    }

    pub async fn respond_to_request(&self, request_id: &str, status: RequestStatus) -> Result<(), AppError> {
        let body = RespondBody {
            request_id: request_id.to_string(),
            status,
        };
        self.post_ack("/api/friends/respond", &body).await
    }
}
