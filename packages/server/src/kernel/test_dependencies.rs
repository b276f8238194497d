// Mock implementations for testing
//
// Provides mock upstreams that can be injected into ServerDeps for tests.
// Both mocks record their calls so tests can assert on call counts and
// arguments.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use exa_client::{ExaError, SearchRequest, SearchResult};
use openai_client::{ChatRequest, ChatResponse, OpenAIError};

use super::{BaseAI, BaseScholarSearch};

// =============================================================================
// Mock AI
// =============================================================================

/// Mock LLM that returns a canned completion (or always fails).
pub struct MockAI {
    reply: Option<String>,
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockAI {
    /// Mock that replies to every completion with the given text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock whose every completion fails with an API error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All chat requests received so far.
    pub fn calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of chat requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn chat_completion(&self, request: ChatRequest) -> openai_client::Result<ChatResponse> {
        self.calls.lock().unwrap().push(request);
        match &self.reply {
            Some(content) => Ok(ChatResponse {
                content: content.clone(),
                usage: None,
            }),
            None => Err(OpenAIError::Api("mock completion failure".into())),
        }
    }
}

// =============================================================================
// Mock Scholar Search
// =============================================================================

/// Mock search service with per-query canned results and failures.
pub struct MockScholarSearch {
    results: Mutex<HashMap<String, Vec<SearchResult>>>,
    failing_queries: Mutex<HashSet<String>>,
    default_results: Mutex<Vec<SearchResult>>,
    calls: Arc<Mutex<Vec<SearchRequest>>>,
}

impl MockScholarSearch {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(HashMap::new()),
            failing_queries: Mutex::new(HashSet::new()),
            default_results: Mutex::new(Vec::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Return these results for an exact query.
    pub fn with_results(self, query: &str, results: Vec<SearchResult>) -> Self {
        self.results
            .lock()
            .unwrap()
            .insert(query.to_string(), results);
        self
    }

    /// Fail with an API error for an exact query.
    pub fn failing_for(self, query: &str) -> Self {
        self.failing_queries.lock().unwrap().insert(query.to_string());
        self
    }

    /// Results returned for queries without a specific entry.
    pub fn with_default_results(self, results: Vec<SearchResult>) -> Self {
        *self.default_results.lock().unwrap() = results;
        self
    }

    /// All search requests received so far.
    pub fn calls(&self) -> Vec<SearchRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of search requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockScholarSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseScholarSearch for MockScholarSearch {
    async fn search(&self, request: SearchRequest) -> exa_client::Result<Vec<SearchResult>> {
        let query = request.query.clone();
        self.calls.lock().unwrap().push(request);

        if self.failing_queries.lock().unwrap().contains(&query) {
            return Err(ExaError::Api {
                status: 503,
                message: "mock search failure".to_string(),
            });
        }

        if let Some(results) = self.results.lock().unwrap().get(&query) {
            return Ok(results.clone());
        }

        Ok(self.default_results.lock().unwrap().clone())
    }
}
