use serde::{Deserialize, Serialize};

use super::User;
use super::wire::string_list;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default, alias = "author_id")]
    pub author_id: u64,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default, deserialize_with = "string_list")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub comments: Option<u64>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default, alias = "is_liked")]
    pub is_liked: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: u64,
    #[serde(default, alias = "question_id")]
    pub question_id: u64,
    pub content: String,
    #[serde(default, alias = "author_id")]
    pub author_id: u64,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub likes: u64,
    /// Set when the answer was generated by the assistant.
    #[serde(default, rename = "isAI", alias = "is_ai")]
    pub is_ai: Option<bool>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnswerRequest {
    pub question_id: u64,
    pub content: String,
}
