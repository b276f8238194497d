// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The pipeline
// functions take these traits so tests can substitute mock upstreams.
//
// Naming convention: Base* for trait names (e.g., BaseAI)

use async_trait::async_trait;
use exa_client::{SearchRequest, SearchResult};
use openai_client::{ChatRequest, ChatResponse};

/// Generic LLM chat completion capability.
#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Run a chat completion, returning the assistant's text response.
    async fn chat_completion(&self, request: ChatRequest) -> openai_client::Result<ChatResponse>;
}

/// Scholarly document search capability.
#[async_trait]
pub trait BaseScholarSearch: Send + Sync {
    /// Run a search, returning result documents in provider order.
    async fn search(&self, request: SearchRequest) -> exa_client::Result<Vec<SearchResult>>;
}
