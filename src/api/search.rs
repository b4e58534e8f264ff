//! Full-text search endpoints.

use crate::core::client::{ApiClient, QueryParams};
use crate::core::error::ApiResult;
use crate::core::transport::Transport;
use crate::models::{Note, Paginated, Question};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl SearchQuery {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for SearchQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("keyword", self.keyword.clone())];
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pageSize", size.to_string()));
        }
        pairs
    }
}

pub struct SearchApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SearchApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /search/questions`
    pub async fn questions(&self, query: &SearchQuery) -> ApiResult<Paginated<Question>> {
        self.client.get("/search/questions", query).await
    }

    /// `GET /search/notes`
    pub async fn notes(&self, query: &SearchQuery) -> ApiResult<Paginated<Note>> {
        self.client.get("/search/notes", query).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::{Harness, envelope};

    #[tokio::test]
    async fn test_search_query_string() {
        let h = Harness::logged_in("t");
        h.transport
            .push_ok(envelope(200, "", json!({"list": [], "total": 0})));
        h.transport
            .push_ok(envelope(200, "", json!({"list": [], "total": 0})));

        let query = SearchQuery {
            page: Some(1),
            page_size: Some(20),
            ..SearchQuery::keyword("rust async")
        };
        h.api.search().questions(&query).await.unwrap();
        h.api
            .search()
            .notes(&SearchQuery::keyword("笔记"))
            .await
            .unwrap();

        let sent = h.transport.requests();
        assert_eq!(
            sent[0].url,
            "/api/search/questions?keyword=rust+async&page=1&pageSize=20"
        );
        assert_eq!(sent[1].url, "/api/search/notes?keyword=%E7%AC%94%E8%AE%B0");
    }
}
