//! Essay claim verifier.
//!
//! Accepts an essay over HTTP, extracts its factual claims with an LLM, then
//! searches scholarly sources for supporting articles per claim. The whole
//! pipeline is best-effort: a failed upstream call degrades the output rather
//! than failing the request.

pub mod config;
pub mod kernel;
pub mod pipeline;
pub mod server;

pub use config::Config;
