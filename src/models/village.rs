use serde::{Deserialize, Serialize};

use super::User;
use super::wire::string_list;

/// A community ("earth village") users can join and post in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "member_count")]
    pub member_count: u64,
    #[serde(default, alias = "post_count")]
    pub post_count: Option<u64>,
    #[serde(default, alias = "is_joined")]
    pub is_joined: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    #[serde(default, alias = "village_id")]
    pub village_id: u64,
    #[serde(default, alias = "author_id")]
    pub author_id: u64,
    #[serde(default)]
    pub author: Option<User>,
    pub content: String,
    #[serde(default, deserialize_with = "string_list")]
    pub images: Vec<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default, alias = "is_liked")]
    pub is_liked: Option<bool>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// Body of the join/leave endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageMembership {
    pub village_id: u64,
}
