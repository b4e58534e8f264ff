//! Note endpoints.

use crate::api::PageQuery;
use crate::core::client::{ApiClient, QueryParams};
use crate::core::error::ApiResult;
use crate::core::transport::Transport;
use crate::models::{CreateNoteRequest, Created, Note, NoteCategory, Paginated};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteQuery {
    pub page: Option<u32>,
    pub category: Option<String>,
}

impl QueryParams for NoteQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        pairs
    }
}

pub struct NoteApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> NoteApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /notes`
    pub async fn list(&self, query: &NoteQuery) -> ApiResult<Paginated<Note>> {
        self.client.get("/notes", query).await
    }

    /// `GET /note/:id`
    pub async fn detail(&self, id: u64) -> ApiResult<Note> {
        self.client.get(&format!("/note/{id}"), &()).await
    }

    /// `POST /note`
    pub async fn create(&self, request: &CreateNoteRequest) -> ApiResult<Created> {
        self.client.post("/note", request).await
    }

    /// `GET /note/categories`
    pub async fn categories(&self) -> ApiResult<Vec<NoteCategory>> {
        self.client.get("/note/categories", &()).await
    }

    /// `GET /note/category/:id`
    pub async fn by_category(&self, id: u64, query: &PageQuery) -> ApiResult<Paginated<Note>> {
        self.client
            .get(&format!("/note/category/{id}"), query)
            .await
    }
}
