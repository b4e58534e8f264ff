use std::fmt;

use serde::{Deserialize, Serialize};

use super::User;

/// Kind of record a comment is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentTarget {
    Question,
    Answer,
    Note,
    Post,
}

impl CommentTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Note => "note",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    #[serde(default, alias = "target_id")]
    pub target_id: u64,
    #[serde(alias = "target_type")]
    pub target_type: CommentTarget,
    pub content: String,
    #[serde(default, alias = "author_id")]
    pub author_id: u64,
    #[serde(default)]
    pub author: Option<User>,
    /// Comment this one replies to.
    #[serde(default, alias = "parent_id")]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub target_id: u64,
    pub target_type: CommentTarget,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

/// Body of the reply endpoints for comments and posts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_wire_format() {
        let req = CreateCommentRequest {
            target_id: 4,
            target_type: CommentTarget::Note,
            content: "赞".into(),
            parent_id: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"targetId": 4, "targetType": "note", "content": "赞"})
        );

        let c: Comment = serde_json::from_value(json!({
            "id": 1, "targetId": 4, "targetType": "post", "content": "hi",
            "authorId": 2, "parentId": 9, "likes": 0
        }))
        .unwrap();
        assert_eq!(c.target_type, CommentTarget::Post);
        assert_eq!(c.parent_id, Some(9));
    }

    #[test]
    fn test_comment_backend_shape() {
        let c: Comment = serde_json::from_value(json!({
            "id": 2, "created_at": "2024-05-03T10:00:00Z", "target_id": 7,
            "target_type": "question", "content": "好问题", "author_id": 3,
            "parent_id": null, "likes": 0, "status": 1
        }))
        .unwrap();
        assert_eq!(c.target_id, 7);
        assert_eq!(c.target_type, CommentTarget::Question);
        assert_eq!(c.author_id, 3);
        assert_eq!(c.parent_id, None);
    }
}
