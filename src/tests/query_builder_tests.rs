// Query Builder Tests

use crate::search::params::{
    DEFAULT_GROUP_BY, DEFAULT_OPERATOR, DEFAULT_PAGE_LIMIT, DEFAULT_THRESHOLD, build_params,
};
use crate::tests::helpers::case;
use serde_json::json;

#[cfg(test)]
mod build_params_tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let params = build_params(&case(json!({"query_text": "sunset"})));

        assert_eq!(params.threshold, json!(DEFAULT_THRESHOLD));
        assert_eq!(params.operator, json!(DEFAULT_OPERATOR));
        assert_eq!(params.page_limit, json!(DEFAULT_PAGE_LIMIT));
        assert_eq!(params.group_by, json!(DEFAULT_GROUP_BY));
        assert_eq!(params.search_options, json!(["visual", "audio"]));
        assert_eq!(params.query_text.as_deref(), Some("sunset"));
        assert_eq!(params.filter, None);
        assert_eq!(params.query_media_type, None);
    }

    #[test]
    fn test_case_values_are_carried_verbatim() {
        let params = build_params(&case(json!({
            "query_text": "dog",
            "threshold": "high",
            "operator": "and",
            "page_limit": "not-a-number",
            "group_by": "video",
            "search_options": ["audio"]
        })));

        assert_eq!(params.threshold, json!("high"));
        assert_eq!(params.operator, json!("and"));
        assert_eq!(params.page_limit, json!("not-a-number"), "invalid values pass through");
        assert_eq!(params.group_by, json!("video"));
        assert_eq!(params.search_options, json!(["audio"]));
    }

    #[test]
    fn test_textual_filter_is_forwarded() {
        let params = build_params(&case(json!({"filter": "{\"duration\": {\"gte\": 10}}"})));
        assert_eq!(params.filter.as_deref(), Some("{\"duration\": {\"gte\": 10}}"));
    }

    #[test]
    fn test_structured_filter_is_dropped() {
        let params = build_params(&case(json!({"query_text": "x", "filter": {"duration": 10}})));
        assert_eq!(params.filter, None);
    }

    #[test]
    fn test_image_query_drops_text() {
        let params = build_params(&case(json!({
            "query_text": "ignored for media queries",
            "query_media_type": "image",
            "query_media_url": "https://example.com/cat.png"
        })));

        assert_eq!(params.query_text, None);
        assert_eq!(params.query_media_type.as_deref(), Some("image"));
        assert_eq!(params.query_media_url.as_deref(), Some("https://example.com/cat.png"));
    }

    #[test]
    fn test_image_query_without_url() {
        let params = build_params(&case(json!({"query_media_type": "image", "query_media_url": ""})));

        assert_eq!(params.query_media_type.as_deref(), Some("image"));
        assert_eq!(params.query_media_url, None);
        assert_eq!(params.query_text, None);
    }

    #[test]
    fn test_other_media_types_are_text_queries() {
        let params = build_params(&case(json!({
            "query_text": "rain",
            "query_media_type": "audio",
            "query_media_url": "https://example.com/rain.mp3"
        })));

        assert_eq!(params.query_text.as_deref(), Some("rain"));
        assert_eq!(params.query_media_type, None);
        assert_eq!(params.query_media_url, None);
    }

    #[test]
    fn test_absent_text_does_not_become_a_word() {
        let params = build_params(&case(json!({"description": "no query"})));
        assert_eq!(params.query_text, None);
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        let params = build_params(&case(json!({"query_text": 1984})));
        assert_eq!(params.query_text.as_deref(), Some("1984"));
    }

    #[test]
    fn test_boolean_text_is_capitalized() {
        let params = build_params(&case(json!({"query_text": true, "expected_outcome": "error"})));
        assert_eq!(params.query_text.as_deref(), Some("True"));

        let params = build_params(&case(json!({"query_text": false})));
        assert_eq!(params.query_text.as_deref(), Some("False"));
    }
}

#[cfg(test)]
mod form_field_tests {
    use super::*;

    #[test]
    fn test_form_fields_repeat_search_options() {
        let params = build_params(&case(json!({"query_text": "sunset", "filter": "{\"id\": [\"a\"]}"})));
        let fields = params.form_fields();

        let options: Vec<&str> = fields
            .iter()
            .filter(|(name, _)| name == "search_options")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(options, vec!["visual", "audio"]);

        assert!(fields.contains(&("query_text".to_string(), "sunset".to_string())));
        assert!(fields.contains(&("page_limit".to_string(), "50".to_string())));
        assert!(fields.contains(&("filter".to_string(), "{\"id\": [\"a\"]}".to_string())));
    }

    #[test]
    fn test_form_fields_omit_absent_values() {
        let params = build_params(&case(json!({"query_media_type": "image"})));
        let names: Vec<String> = params.form_fields().into_iter().map(|(n, _)| n).collect();

        assert!(!names.contains(&"query_text".to_string()));
        assert!(!names.contains(&"query_media_url".to_string()));
        assert!(!names.contains(&"filter".to_string()));
        assert!(names.contains(&"query_media_type".to_string()));
    }
}
