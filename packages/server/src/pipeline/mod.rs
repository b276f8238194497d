//! The analysis pipeline: claims out of the essay, then articles per claim.

pub mod articles;
pub mod claims;

pub use articles::{find_supporting_articles, Article};
pub use claims::{extract_claims, parse_claims};

use anyhow::Result;
use serde::Serialize;

use crate::kernel::ServerDeps;

/// One claim paired with its supporting articles.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub claim: String,
    pub articles: Vec<Article>,
}

/// Full analysis of one essay.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub claims: Vec<String>,
    pub results: Vec<AnalysisResult>,
}

/// Run the full pipeline for one essay.
///
/// One claim-extraction call, then one search call per claim, strictly in
/// claim order. Both upstream failure classes are absorbed at their call
/// sites, so today this only returns `Ok`; the `Result` feeds the handler's
/// 500 branch.
pub async fn analyze_essay(deps: &ServerDeps, essay: &str) -> Result<AnalyzeResponse> {
    let claims = extract_claims(deps.ai.as_ref(), essay).await;

    let mut results = Vec::with_capacity(claims.len());
    for claim in &claims {
        let articles = find_supporting_articles(deps.scholar_search.as_ref(), claim).await;
        results.push(AnalysisResult {
            claim: claim.clone(),
            articles,
        });
    }

    Ok(AnalyzeResponse { claims, results })
}
