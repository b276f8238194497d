//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to the pipeline. Both external
//! services sit behind trait objects so tests can inject mocks.

use std::sync::Arc;

use async_trait::async_trait;
use exa_client::{ExaClient, SearchRequest, SearchResult};
use openai_client::{ChatRequest, ChatResponse, OpenAIClient};

use super::{BaseAI, BaseScholarSearch};

#[async_trait]
impl BaseAI for OpenAIClient {
    async fn chat_completion(&self, request: ChatRequest) -> openai_client::Result<ChatResponse> {
        OpenAIClient::chat_completion(self, request).await
    }
}

#[async_trait]
impl BaseScholarSearch for ExaClient {
    async fn search(&self, request: SearchRequest) -> exa_client::Result<Vec<SearchResult>> {
        ExaClient::search(self, request).await.map(|r| r.results)
    }
}

/// Server dependencies accessible to the pipeline.
///
/// Built once at startup from process configuration and cloned per handler;
/// no mutable state lives here.
#[derive(Clone)]
pub struct ServerDeps {
    /// LLM client for claim extraction
    pub ai: Arc<dyn BaseAI>,
    /// Search client for supporting-article lookup
    pub scholar_search: Arc<dyn BaseScholarSearch>,
}

impl ServerDeps {
    pub fn new(ai: Arc<dyn BaseAI>, scholar_search: Arc<dyn BaseScholarSearch>) -> Self {
        Self { ai, scholar_search }
    }
}
