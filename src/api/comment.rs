//! Comment endpoints.

use serde::de::IgnoredAny;

use crate::core::client::{ApiClient, QueryParams};
use crate::core::error::ApiResult;
use crate::core::transport::Transport;
use crate::models::{Comment, CommentTarget, CreateCommentRequest, Paginated, ReplyRequest};

/// Comments attached to one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentQuery {
    pub target_id: u64,
    pub target_type: CommentTarget,
    pub page: Option<u32>,
}

impl CommentQuery {
    pub fn on(target_type: CommentTarget, target_id: u64) -> Self {
        Self {
            target_id,
            target_type,
            page: None,
        }
    }
}

impl QueryParams for CommentQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("targetId", self.target_id.to_string()),
            ("targetType", self.target_type.to_string()),
        ];
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

pub struct CommentApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> CommentApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `POST /comment`
    pub async fn create(&self, request: &CreateCommentRequest) -> ApiResult<Comment> {
        self.client.post("/comment", request).await
    }

    /// `GET /comments`
    pub async fn list(&self, query: &CommentQuery) -> ApiResult<Paginated<Comment>> {
        self.client.get("/comments", query).await
    }

    /// `GET /comment/:id`
    pub async fn detail(&self, id: u64) -> ApiResult<Comment> {
        self.client.get(&format!("/comment/{id}"), &()).await
    }

    /// `POST /comment/:id/like`
    pub async fn like(&self, id: u64) -> ApiResult<()> {
        self.client
            .post_empty::<IgnoredAny>(&format!("/comment/{id}/like"))
            .await
            .map(|_| ())
    }

    /// `POST /comment/:id/unlike`
    pub async fn unlike(&self, id: u64) -> ApiResult<()> {
        self.client
            .post_empty::<IgnoredAny>(&format!("/comment/{id}/unlike"))
            .await
            .map(|_| ())
    }

    /// `DELETE /comment/:id`
    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/comment/{id}"))
            .await
            .map(|_| ())
    }

    /// `POST /comment/:id/reply`
    pub async fn reply(&self, id: u64, request: &ReplyRequest) -> ApiResult<Comment> {
        self.client
            .post(&format!("/comment/{id}/reply"), request)
            .await
    }
}
