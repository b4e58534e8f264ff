//! Chat endpoints.

use crate::api::PageQuery;
use crate::core::client::ApiClient;
use crate::core::error::ApiResult;
use crate::core::transport::Transport;
use crate::models::{Created, Message, Paginated, SendMessageRequest};

pub struct ChatApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ChatApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /chat/:id`: message history of one conversation.
    pub async fn history(&self, id: u64, query: &PageQuery) -> ApiResult<Paginated<Message>> {
        self.client.get(&format!("/chat/{id}"), query).await
    }

    /// `POST /chat`
    pub async fn send(&self, request: &SendMessageRequest) -> ApiResult<Created> {
        self.client.post("/chat", request).await
    }
}
