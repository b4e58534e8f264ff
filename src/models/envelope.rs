//! Wire shapes shared by every endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SUCCESS_CODE;
use crate::core::error::{ApiResult, domain_error};

/// Uniform response wrapper: `{ code, message, data }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl Envelope<Value> {
    /// Payload of a successful envelope, or the domain error it carries.
    pub fn into_payload(self) -> ApiResult<Value> {
        let data = self.data.unwrap_or(Value::Null);
        if self.code == SUCCESS_CODE {
            Ok(data)
        } else {
            Err(domain_error(self.code, self.message, data))
        }
    }
}

/// One page of a listing endpoint. The items travel as `list`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(rename = "list", default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, alias = "page_size")]
    pub page_size: Option<u32>,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether more items exist beyond this page.
    pub fn has_more(&self) -> bool {
        match (self.page, self.page_size) {
            (Some(page), Some(size)) => u64::from(page) * u64::from(size) < self.total,
            _ => (self.items.len() as u64) < self.total,
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: None,
            page_size: None,
        }
    }
}

/// Identifier returned by create endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let env: Envelope<Value> =
            serde_json::from_value(json!({"code": 200, "message": "ok", "data": {"id": 7}}))
                .unwrap();
        assert!(env.is_success());
        assert_eq!(env.into_payload().unwrap(), json!({"id": 7}));
    }

    #[test]
    fn test_failure_envelope_keeps_fields() {
        let env: Envelope<Value> =
            serde_json::from_value(json!({"code": 400, "message": "标题不能为空", "data": null}))
                .unwrap();
        match env.into_payload() {
            Err(ApiError::Domain { code, message, data }) => {
                assert_eq!(code, 400);
                assert_eq!(message.as_deref(), Some("标题不能为空"));
                assert_eq!(data, Value::Null);
            }
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_message_and_data() {
        let env: Envelope<Value> = serde_json::from_value(json!({"code": 200})).unwrap();
        assert_eq!(env.message, None);
        assert_eq!(env.into_payload().unwrap(), Value::Null);
    }

    #[test]
    fn test_paginated_wire_names() {
        let page: Paginated<u32> =
            serde_json::from_value(json!({"list": [1, 2], "total": 5, "page": 1, "pageSize": 2}))
                .unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.page_size, Some(2));
        assert!(page.has_more());

        let last: Paginated<u32> =
            serde_json::from_value(json!({"list": [5], "total": 5, "page": 3, "pageSize": 2}))
                .unwrap();
        assert!(!last.has_more());

        let search: Paginated<u32> =
            serde_json::from_value(json!({"list": [], "total": 0})).unwrap();
        assert!(search.is_empty());
        assert!(!search.has_more());
    }
}
