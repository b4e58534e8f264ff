//! Question and answer endpoints.

use serde::de::IgnoredAny;

use crate::core::client::{ApiClient, QueryParams};
use crate::core::error::ApiResult;
use crate::core::transport::Transport;
use crate::models::{
    CreateAnswerRequest, CreateQuestionRequest, Created, Paginated, Question,
};

/// Filter for the question feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionQuery {
    pub page: Option<u32>,
    pub category: Option<String>,
}

impl QuestionQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            category: None,
        }
    }
}

impl QueryParams for QuestionQuery {
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

pub struct QuestionApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> QuestionApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /questions`
    pub async fn list(&self, query: &QuestionQuery) -> ApiResult<Paginated<Question>> {
        self.client.get("/questions", query).await
    }

    /// `GET /question/:id`
    pub async fn detail(&self, id: u64) -> ApiResult<Question> {
        self.client.get(&format!("/question/{id}"), &()).await
    }

    /// `POST /question`
    pub async fn create(&self, request: &CreateQuestionRequest) -> ApiResult<Created> {
        self.client.post("/question", request).await
    }

    /// `POST /answer`
    pub async fn answer(&self, request: &CreateAnswerRequest) -> ApiResult<Created> {
        self.client.post("/answer", request).await
    }

    /// `POST /question/:id/like`
    pub async fn like(&self, id: u64) -> ApiResult<()> {
        self.client
            .post_empty::<IgnoredAny>(&format!("/question/{id}/like"))
            .await
            .map(|_| ())
    }

    /// `POST /question/:id/unlike`
    pub async fn unlike(&self, id: u64) -> ApiResult<()> {
        self.client
            .post_empty::<IgnoredAny>(&format!("/question/{id}/unlike"))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::transport::Method;
    use crate::testing::{Harness, envelope};

    #[tokio::test]
    async fn test_list_with_category() {
        let h = Harness::logged_in("t");
        h.transport.push_ok(envelope(
            200,
            "",
            json!({
                "list": [{"id": 1, "title": "t", "content": "c", "authorId": 2, "tags": [], "likes": 0}],
                "total": 1,
                "page": 1,
                "pageSize": 10
            }),
        ));

        let query = QuestionQuery {
            page: Some(1),
            category: Some("tech".into()),
        };
        let page = h.api.questions().list(&query).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "t");
        assert_eq!(
            h.transport.requests()[0].url,
            "/api/questions?page=1&category=tech"
        );
    }

    #[tokio::test]
    async fn test_like_and_unlike_paths() {
        let h = Harness::logged_in("t");
        h.transport.push_ok(envelope(200, "", json!(null)));
        h.transport.push_ok(envelope(200, "", json!({"likes": 3})));

        h.api.questions().like(9).await.unwrap();
        h.api.questions().unlike(9).await.unwrap();

        let sent = h.transport.requests();
        assert_eq!(sent[0].url, "/api/question/9/like");
        assert_eq!(sent[1].url, "/api/question/9/unlike");
        assert!(sent.iter().all(|r| r.method == Method::Post && r.body.is_none()));
    }

    #[tokio::test]
    async fn test_create_answer() {
        let h = Harness::logged_in("t");
        h.transport.push_ok(envelope(200, "", json!({"id": 77})));

        let created = h
            .api
            .questions()
            .answer(&CreateAnswerRequest {
                question_id: 9,
                content: "用 Rust".into(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 77);
        assert_eq!(h.transport.requests()[0].url, "/api/answer");
    }

    #[tokio::test]
    async fn test_list_backend_records() {
        let h = Harness::logged_in("t");
        h.transport.push_ok(envelope(
            200,
            "",
            json!({
                "list": [{
                    "id": 1,
                    "created_at": "2024-05-01T08:00:00Z",
                    "title": "t",
                    "content": "c",
                    "author_id": 2,
                    "author": {"id": 2, "username": "lin", "email": "", "avatar": "", "bio": ""},
                    "category": "tech",
                    "tags": "[\"rust\"]",
                    "likes": 0,
                    "status": 1
                }],
                "total": 1
            }),
        ));

        let page = h.api.questions().list(&QuestionQuery::page(1)).await.unwrap();

        assert_eq!(page.items[0].author_id, 2);
        assert_eq!(page.items[0].tags, ["rust"]);
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_detail() {
        let h = Harness::logged_in("t");
        h.transport.push_ok(envelope(
            200,
            "",
            json!({"id": 9, "title": "t", "content": "c", "author_id": 2, "tags": ""}),
        ));

        let question = h.api.questions().detail(9).await.unwrap();

        assert_eq!(question.id, 9);
        assert!(question.tags.is_empty());
        let sent = &h.transport.requests()[0];
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "/api/question/9");
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_create_sends_tags() {
        let h = Harness::logged_in("t");
        h.transport.push_ok(envelope(200, "发布成功", json!({"id": 12})));

        let created = h
            .api
            .questions()
            .create(&CreateQuestionRequest {
                title: "怎么学 Rust".into(),
                content: "求推荐".into(),
                tags: Some(vec!["rust".into(), "入门".into()]),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 12);
        let sent = &h.transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "/api/question");
        assert_eq!(
            sent.body.as_deref(),
            Some(r#"{"title":"怎么学 Rust","content":"求推荐","tags":["rust","入门"]}"#)
        );
    }
}
