//! Exa search API request and response types.
//!
//! The Exa API uses camelCase field names throughout.

use serde::{Deserialize, Serialize};

/// Search request for the Exa `/search` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Query string
    pub query: String,

    /// Search type: "keyword" or "neural"
    #[serde(rename = "type")]
    pub search_type: String,

    /// Let Exa rewrite the query for better results
    #[serde(rename = "useAutoprompt")]
    pub use_autoprompt: bool,

    /// Result cap
    #[serde(rename = "numResults")]
    pub num_results: usize,

    /// Restrict results to these domains
    #[serde(rename = "includeDomains", skip_serializing_if = "Vec::is_empty")]
    pub include_domains: Vec<String>,

    /// Content retrieval options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<ContentsSpec>,
}

impl SearchRequest {
    /// Create a keyword search request.
    pub fn keyword(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_type: "keyword".to_string(),
            use_autoprompt: false,
            num_results: 10,
            include_domains: Vec::new(),
            contents: None,
        }
    }

    /// Enable autoprompt query expansion.
    pub fn use_autoprompt(mut self, enabled: bool) -> Self {
        self.use_autoprompt = enabled;
        self
    }

    /// Set the result cap.
    pub fn num_results(mut self, count: usize) -> Self {
        self.num_results = count;
        self
    }

    /// Restrict results to the given domains.
    pub fn include_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Request document contents alongside the results.
    pub fn contents(mut self, contents: ContentsSpec) -> Self {
        self.contents = Some(contents);
        self
    }
}

/// What document content to return with each result.
#[derive(Debug, Clone, Serialize)]
pub struct ContentsSpec {
    /// Return full page text
    pub text: bool,

    /// Return highlighted excerpts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<HighlightsSpec>,
}

/// Highlight extraction options.
#[derive(Debug, Clone, Serialize)]
pub struct HighlightsSpec {
    /// Sentences per highlight
    #[serde(rename = "numSentences")]
    pub num_sentences: u32,

    /// Highlights per result URL
    #[serde(rename = "highlightsPerUrl")]
    pub highlights_per_url: u32,
}

/// Exa search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// A single search result document.
///
/// Every field is optional; Exa omits what it does not have for a document.
/// `highlights` is distinct from an empty list: `None` means the field was
/// absent from the response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub title: Option<String>,

    pub url: Option<String>,

    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,

    pub text: Option<String>,

    pub highlights: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let req = SearchRequest::keyword("fluoride tooth decay")
            .use_autoprompt(true)
            .num_results(10)
            .include_domains(["pubmed.ncbi.nlm.nih.gov", "arxiv.org"])
            .contents(ContentsSpec {
                text: true,
                highlights: Some(HighlightsSpec {
                    num_sentences: 3,
                    highlights_per_url: 2,
                }),
            });

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "keyword");
        assert_eq!(json["useAutoprompt"], true);
        assert_eq!(json["numResults"], 10);
        assert_eq!(json["includeDomains"][0], "pubmed.ncbi.nlm.nih.gov");
        assert_eq!(json["contents"]["text"], true);
        assert_eq!(json["contents"]["highlights"]["numSentences"], 3);
        assert_eq!(json["contents"]["highlights"]["highlightsPerUrl"], 2);
    }

    #[test]
    fn test_contents_omitted_when_not_requested() {
        let req = SearchRequest::keyword("anything");
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("contents").is_none());
        assert!(json.get("includeDomains").is_none());
    }

    #[test]
    fn test_result_with_sparse_fields() {
        let json = r#"{
            "results": [
                {"url": "https://arxiv.org/abs/1234.5678", "highlights": ["An excerpt."]},
                {"title": "Untitled", "text": "Body text only."}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);

        let first = &response.results[0];
        assert!(first.title.is_none());
        assert_eq!(first.highlights.as_deref(), Some(&["An excerpt.".to_string()][..]));

        let second = &response.results[1];
        assert!(second.highlights.is_none());
        assert_eq!(second.text.as_deref(), Some("Body text only."));
    }
}
