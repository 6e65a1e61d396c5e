//! Result Normalizer
//!
//! The search endpoint answers with one of several shapes. The adapter
//! decides which one it received; `extract_items` flattens any of them into
//! the list of result items.

use serde_json::{Map, Value};

/// Keys probed, in order, on a raw mapping response
pub const RAW_ITEM_KEYS: &[&str] = &["data", "clips"];

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    /// A single result container
    Container { items: Vec<Value> },
    /// A paginated sequence of containers (or bare items)
    Pages(Vec<PageEntry>),
    /// A mapping that uses one of the alternate item keys
    Raw(Map<String, Value>),
    /// No body at all
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEntry {
    Page { items: Vec<Value> },
    Item(Value),
}

impl SearchResponse {
    /// Decide the response shape of a decoded JSON body
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Null => Self::Empty,
            Value::Array(entries) => Self::Pages(entries.into_iter().map(PageEntry::from_json).collect()),
            // An empty `items` list falls through to the alternate keys
            Value::Object(mut map) => {
                let has_items = matches!(map.get("items"), Some(Value::Array(items)) if !items.is_empty());
                match map.remove("items") {
                    Some(Value::Array(items)) if has_items => Self::Container { items },
                    Some(other) => {
                        map.insert("items".to_string(), other);
                        Self::Raw(map)
                    }
                    None => Self::Raw(map),
                }
            }
            // A bare scalar is a single item, not a container
            scalar => Self::Pages(vec![PageEntry::Item(scalar)]),
        }
    }
}

impl PageEntry {
    fn from_json(entry: Value) -> Self {
        match entry {
            Value::Object(mut map) if matches!(map.get("items"), Some(Value::Array(_))) => {
                match map.remove("items") {
                    Some(Value::Array(items)) => Self::Page { items },
                    _ => Self::Item(Value::Object(map)),
                }
            }
            other => Self::Item(other),
        }
    }
}

pub fn extract_items(response: &SearchResponse) -> Vec<Value> {
    match response {
        SearchResponse::Container { items } if !items.is_empty() => items.clone(),
        SearchResponse::Container { .. } | SearchResponse::Empty => Vec::new(),
        SearchResponse::Pages(entries) => {
            let mut collected = Vec::new();
            for entry in entries {
                match entry {
                    PageEntry::Page { items } => collected.extend(items.iter().cloned()),
                    PageEntry::Item(item) => collected.push(item.clone()),
                }
            }
            collected
        }
        SearchResponse::Raw(map) => RAW_ITEM_KEYS
            .iter()
            .find_map(|key| match map.get(*key) {
                Some(Value::Array(values)) if !values.is_empty() => Some(values.clone()),
                _ => None,
            })
            .unwrap_or_default(),
    }
}
