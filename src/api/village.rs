//! Earth village (community) and post endpoints.

use serde::de::IgnoredAny;

use crate::api::PageQuery;
use crate::core::client::ApiClient;
use crate::core::error::ApiResult;
use crate::core::transport::Transport;
use crate::models::{
    CreatePostRequest, Created, Paginated, Post, ReplyRequest, Village, VillageMembership,
};

pub struct VillageApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> VillageApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /earth-villages`
    pub async fn list(&self, query: &PageQuery) -> ApiResult<Paginated<Village>> {
        self.client.get("/earth-villages", query).await
    }

    /// `GET /earth-village/:id`
    pub async fn detail(&self, id: u64) -> ApiResult<Village> {
        self.client.get(&format!("/earth-village/{id}"), &()).await
    }

    /// `POST /earth-village/join`
    pub async fn join(&self, village_id: u64) -> ApiResult<()> {
        self.client
            .post::<IgnoredAny, _>("/earth-village/join", &VillageMembership { village_id })
            .await
            .map(|_| ())
    }

    /// `POST /earth-village/leave`
    pub async fn leave(&self, village_id: u64) -> ApiResult<()> {
        self.client
            .post::<IgnoredAny, _>("/earth-village/leave", &VillageMembership { village_id })
            .await
            .map(|_| ())
    }

    // =========================================================================
    // Posts
    // =========================================================================

    /// `GET /earth-village/:id/posts`
    pub async fn posts(&self, village_id: u64, query: &PageQuery) -> ApiResult<Paginated<Post>> {
        self.client
            .get(&format!("/earth-village/{village_id}/posts"), query)
            .await
    }

    /// `POST /earth-village/:id/post`
    pub async fn create_post(
        &self,
        village_id: u64,
        request: &CreatePostRequest,
    ) -> ApiResult<Created> {
        self.client
            .post(&format!("/earth-village/{village_id}/post"), request)
            .await
    }

    /// `POST /earth-village/:id/post/:postId/like`
    pub async fn like_post(&self, village_id: u64, post_id: u64) -> ApiResult<()> {
        self.client
            .post_empty::<IgnoredAny>(&post_path(village_id, post_id, "/like"))
            .await
            .map(|_| ())
    }

    /// `POST /earth-village/:id/post/:postId/unlike`
    pub async fn unlike_post(&self, village_id: u64, post_id: u64) -> ApiResult<()> {
        self.client
            .post_empty::<IgnoredAny>(&post_path(village_id, post_id, "/unlike"))
            .await
            .map(|_| ())
    }

    /// `DELETE /earth-village/:id/post/:postId`
    pub async fn delete_post(&self, village_id: u64, post_id: u64) -> ApiResult<()> {
        self.client
            .delete::<IgnoredAny>(&post_path(village_id, post_id, ""))
            .await
            .map(|_| ())
    }

    /// `POST /earth-village/:id/post/:postId/reply`
    pub async fn reply_post(
        &self,
        village_id: u64,
        post_id: u64,
        request: &ReplyRequest,
    ) -> ApiResult<Created> {
        self.client
            .post(&post_path(village_id, post_id, "/reply"), request)
            .await
    }

    /// `GET /earth-village/:id/post/:postId/replies`
    pub async fn replies(
        &self,
        village_id: u64,
        post_id: u64,
        query: &PageQuery,
    ) -> ApiResult<Paginated<Post>> {
        self.client
            .get(&post_path(village_id, post_id, "/replies"), query)
            .await
    }
}

fn post_path(village_id: u64, post_id: u64, suffix: &str) -> String {
    format!("/earth-village/{village_id}/post/{post_id}{suffix}")
}
