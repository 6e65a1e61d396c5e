/// Scripted search backend for validator tests
///
/// Answers every call through a closure and records the parameters it was
/// called with, so tests can assert on call order.
use serde_json::Value;
use std::cell::RefCell;

use crate::cases::TestCase;
use crate::config::ValidatorConfig;
use crate::search::{QueryParams, SearchClient, SearchFailure, SearchResponse};
use crate::validation::CaseValidator;

type Responder = Box<dyn Fn(&QueryParams) -> Result<SearchResponse, SearchFailure>>;

pub struct ScriptedClient {
    responder: Responder,
    calls: RefCell<Vec<QueryParams>>,
}

impl ScriptedClient {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&QueryParams) -> Result<SearchResponse, SearchFailure> + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Client that never finds anything
    pub fn empty() -> Self {
        Self::new(|_| Ok(no_hits()))
    }

    pub fn calls(&self) -> Vec<QueryParams> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// `(query_text, search_options)` of every call, in order
    pub fn attempted(&self) -> Vec<(Option<String>, Vec<String>)> {
        self.calls
            .borrow()
            .iter()
            .map(|p| {
                let options = p
                    .search_options
                    .as_array()
                    .map(|opts| {
                        opts.iter()
                            .filter_map(|o| o.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default();
                (p.query_text.clone(), options)
            })
            .collect()
    }
}

impl SearchClient for ScriptedClient {
    fn search(&self, _index_id: &str, params: &QueryParams) -> Result<SearchResponse, SearchFailure> {
        self.calls.borrow_mut().push(params.clone());
        (self.responder)(params)
    }
}

pub fn case(value: Value) -> TestCase {
    serde_json::from_value(value).expect("fixture should be a valid test case")
}

pub fn hits(items: Vec<Value>) -> SearchResponse {
    SearchResponse::Container { items }
}

pub fn no_hits() -> SearchResponse {
    SearchResponse::Container { items: Vec::new() }
}

pub fn validator(client: &ScriptedClient) -> CaseValidator<&ScriptedClient> {
    validator_with(client, ValidatorConfig::default())
}

pub fn validator_with(
    client: &ScriptedClient,
    config: ValidatorConfig,
) -> CaseValidator<&ScriptedClient> {
    CaseValidator::new(client, "test-index", config)
}
