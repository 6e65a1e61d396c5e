//! Query Builder
//!
//! Maps a case plus the process-wide defaults onto the parameter set of a
//! single search attempt.

use crate::cases::{IMAGE_MEDIA_TYPE, TestCase, value_to_text};
use serde_json::{Value, json};

pub const DEFAULT_THRESHOLD: &str = "low";
pub const DEFAULT_OPERATOR: &str = "or";
pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const DEFAULT_GROUP_BY: &str = "clip";
pub const DEFAULT_SEARCH_OPTIONS: &[&str] = &["visual", "audio"];

/// Parameters for exactly one search call
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub threshold: Value,
    pub operator: Value,
    pub page_limit: Value,
    pub group_by: Value,
    pub search_options: Value,
    /// Always `None` for media queries
    pub query_text: Option<String>,
    pub query_media_type: Option<String>,
    pub query_media_url: Option<String>,
    /// Only textual filters are forwarded
    pub filter: Option<String>,
}

pub fn build_params(case: &TestCase) -> QueryParams {
    let or_default = |value: &Option<Value>, default: Value| value.clone().unwrap_or(default);

    let mut params = QueryParams {
        threshold: or_default(&case.threshold, json!(DEFAULT_THRESHOLD)),
        operator: or_default(&case.operator, json!(DEFAULT_OPERATOR)),
        page_limit: or_default(&case.page_limit, json!(DEFAULT_PAGE_LIMIT)),
        group_by: or_default(&case.group_by, json!(DEFAULT_GROUP_BY)),
        search_options: or_default(&case.search_options, json!(DEFAULT_SEARCH_OPTIONS)),
        query_text: None,
        query_media_type: None,
        query_media_url: None,
        filter: match &case.filter {
            Some(Value::String(expr)) => Some(expr.clone()),
            _ => None,
        },
    };

    if case.is_image_query() {
        params.query_media_type = Some(IMAGE_MEDIA_TYPE.to_string());
        params.query_media_url = case.query_media_url.clone().filter(|url| !url.is_empty());
    } else {
        params.query_text = case.query_text.as_ref().and_then(value_to_text);
    }

    params
}

impl QueryParams {
    /// Flatten into multipart form fields; arrays become repeated fields
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        let mut push = |name: &str, value: &Value| match value {
            Value::Null => {}
            Value::Array(values) => {
                for v in values {
                    if let Some(text) = value_to_text(v) {
                        fields.push((name.to_string(), text));
                    }
                }
            }
            other => {
                if let Some(text) = value_to_text(other) {
                    fields.push((name.to_string(), text));
                }
            }
        };

        if let Some(text) = &self.query_text {
            push("query_text", &Value::String(text.clone()));
        }
        if let Some(media_type) = &self.query_media_type {
            push("query_media_type", &Value::String(media_type.clone()));
        }
        if let Some(url) = &self.query_media_url {
            push("query_media_url", &Value::String(url.clone()));
        }
        push("search_options", &self.search_options);
        push("threshold", &self.threshold);
        push("operator", &self.operator);
        push("page_limit", &self.page_limit);
        push("group_by", &self.group_by);
        if let Some(filter) = &self.filter {
            push("filter", &Value::String(filter.clone()));
        }

        fields
    }
}
