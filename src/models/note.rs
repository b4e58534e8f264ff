use serde::{Deserialize, Serialize};

use super::User;
use super::wire::string_list;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default, alias = "author_id")]
    pub author_id: u64,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "string_list")]
    pub tags: Vec<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCategory {
    pub id: u64,
    pub name: String,
    #[serde(default, alias = "user_id")]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub sort: Option<i32>,
}
