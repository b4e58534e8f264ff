//! Typed endpoint catalog.
//!
//! One handle per backend resource, borrowed from the [`ApiClient`]:
//!
//! ```ignore
//! let page = api.questions().list(&QuestionQuery::page(1)).await?;
//! api.villages().like_post(village_id, post_id).await?;
//! ```
//!
//! Handles add no behavior of their own: each method maps its arguments to
//! exactly one client call.

mod chat;
mod comment;
mod note;
mod question;
mod search;
mod user;
mod village;

pub use chat::ChatApi;
pub use comment::{CommentApi, CommentQuery};
pub use note::{NoteApi, NoteQuery};
pub use question::{QuestionApi, QuestionQuery};
pub use search::{SearchApi, SearchQuery};
pub use user::UserApi;
pub use village::VillageApi;

use crate::core::client::{ApiClient, QueryParams};
use crate::core::transport::Transport;

/// Page selector shared by the plain listing endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn page(page: u32) -> Self {
        Self { page: Some(page) }
    }
}

impl QueryParams for PageQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.page
            .map(|page| vec![("page", page.to_string())])
            .unwrap_or_default()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn users(&self) -> UserApi<'_, T> {
        UserApi::new(self)
    }

    pub fn questions(&self) -> QuestionApi<'_, T> {
        QuestionApi::new(self)
    }

    pub fn notes(&self) -> NoteApi<'_, T> {
        NoteApi::new(self)
    }

    pub fn chat(&self) -> ChatApi<'_, T> {
        ChatApi::new(self)
    }

    pub fn villages(&self) -> VillageApi<'_, T> {
        VillageApi::new(self)
    }

    pub fn comments(&self) -> CommentApi<'_, T> {
        CommentApi::new(self)
    }

    pub fn search(&self) -> SearchApi<'_, T> {
        SearchApi::new(self)
    }
}
