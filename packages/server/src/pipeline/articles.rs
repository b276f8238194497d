//! Scholarly article search for a single claim.

use exa_client::{ContentsSpec, HighlightsSpec, SearchRequest, SearchResult};
use serde::Serialize;

use crate::kernel::BaseScholarSearch;

/// Domains the search is restricted to.
const SCHOLARLY_DOMAINS: [&str; 4] = [
    "scholar.google.com",
    "pubmed.ncbi.nlm.nih.gov",
    "jstor.org",
    "arxiv.org",
];

/// Result cap per claim.
const NUM_RESULTS: usize = 10;

/// Longest synthetic quote taken from full text, in characters.
const MAX_QUOTE_CHARS: usize = 1000;

/// A supporting article for one claim.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    #[serde(rename = "publishedDate")]
    pub published_date: String,
    pub quotes: Vec<String>,
}

/// Search scholarly sources for articles supporting one claim.
///
/// Best-effort: any client error is logged and downgraded to an empty article
/// list for this claim; other claims are unaffected.
pub async fn find_supporting_articles(
    search: &dyn BaseScholarSearch,
    claim: &str,
) -> Vec<Article> {
    let request = SearchRequest::keyword(claim)
        .use_autoprompt(true)
        .num_results(NUM_RESULTS)
        .include_domains(SCHOLARLY_DOMAINS)
        .contents(ContentsSpec {
            text: true,
            highlights: Some(HighlightsSpec {
                num_sentences: 3,
                highlights_per_url: 2,
            }),
        });

    match search.search(request).await {
        Ok(results) => results.into_iter().map(article_from_result).collect(),
        Err(e) => {
            tracing::warn!(claim, error = %e, "Article search failed, continuing with no articles");
            Vec::new()
        }
    }
}

/// Build an `Article` from one search result document.
///
/// Quotes prefer the provider's `highlights` verbatim whenever the field is
/// present (even if empty); otherwise the first `MAX_QUOTE_CHARS` characters
/// of the full text stand in as a single quote.
fn article_from_result(result: SearchResult) -> Article {
    let quotes = match (result.highlights, result.text) {
        (Some(highlights), _) => highlights,
        (None, Some(text)) => vec![truncate_chars(&text, MAX_QUOTE_CHARS).to_string()],
        (None, None) => Vec::new(),
    };

    Article {
        title: result.title.unwrap_or_default(),
        url: result.url.unwrap_or_default(),
        published_date: result.published_date.unwrap_or_default(),
        quotes,
    }
}

/// First `max_chars` characters of `s` (characters, not bytes).
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(
        title: Option<&str>,
        url: Option<&str>,
        text: Option<String>,
        highlights: Option<Vec<String>>,
    ) -> SearchResult {
        SearchResult {
            title: title.map(String::from),
            url: url.map(String::from),
            published_date: None,
            text,
            highlights,
        }
    }

    #[test]
    fn highlights_are_used_verbatim() {
        let article = article_from_result(result(
            Some("Fluoride and caries"),
            Some("https://pubmed.ncbi.nlm.nih.gov/123"),
            Some("Full text that should be ignored".to_string()),
            Some(vec!["First excerpt.".to_string(), "Second excerpt.".to_string()]),
        ));

        assert_eq!(article.quotes, vec!["First excerpt.", "Second excerpt."]);
    }

    #[test]
    fn present_but_empty_highlights_win_over_text() {
        let article = article_from_result(result(
            None,
            None,
            Some("Full text".to_string()),
            Some(Vec::new()),
        ));

        assert!(article.quotes.is_empty());
    }

    #[test]
    fn text_fallback_is_capped_at_1000_chars() {
        let text = "x".repeat(1500);
        let article = article_from_result(result(None, None, Some(text), None));

        assert_eq!(article.quotes.len(), 1);
        assert_eq!(article.quotes[0].chars().count(), 1000);
    }

    #[test]
    fn text_fallback_counts_characters_not_bytes() {
        // 1200 three-byte characters
        let text = "語".repeat(1200);
        let article = article_from_result(result(None, None, Some(text), None));

        assert_eq!(article.quotes[0].chars().count(), 1000);
    }

    #[test]
    fn short_text_is_kept_whole() {
        let article =
            article_from_result(result(None, None, Some("Short body.".to_string()), None));

        assert_eq!(article.quotes, vec!["Short body."]);
    }

    #[test]
    fn no_content_means_no_quotes() {
        let article = article_from_result(result(Some("Title only"), None, None, None));
        assert!(article.quotes.is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let article = article_from_result(result(None, None, None, None));
        assert_eq!(article.title, "");
        assert_eq!(article.url, "");
        assert_eq!(article.published_date, "");
    }
}
