//! HTTP API Client
//!
//! Posts text to the analysis service and decodes the result.

use gloo_net::http::Request;

use crate::state::AnalysisResult;

/// Default analysis endpoint
pub const DEFAULT_API_URL: &str = "http://localhost:5000/analyze";

const API_URL_KEY: &str = "sentiment_api_url";

/// Get the analysis endpoint from local storage or use default
pub fn get_api_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Set the analysis endpoint in local storage
pub fn set_api_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

#[derive(serde::Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Analyze a piece of text.
///
/// Any non-success status is reported as "Failed to analyze text"; the
/// service's own error body is not surfaced.
pub async fn analyze_text(text: &str) -> Result<AnalysisResult, String> {
    let response = Request::post(&get_api_url())
        .json(&AnalyzeRequest { text })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Failed to analyze text".to_string());
    }

    let result: AnalysisResult = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    validate(&result)?;
    Ok(result)
}

/// Reject scores outside [0, 1]
fn validate(result: &AnalysisResult) -> Result<(), String> {
    if result
        .scores
        .values()
        .iter()
        .all(|s| s.is_finite() && (0.0..=1.0).contains(s))
    {
        Ok(())
    } else {
        Err("Parse error: scores must be between 0 and 1".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Scores;

    fn result_with(scores: Scores) -> AnalysisResult {
        AnalysisResult {
            sentiment: "neutral".to_string(),
            scores,
            word_count: 2,
            char_count: 9,
        }
    }

    #[test]
    fn test_scores_in_range_pass() {
        let result = result_with(Scores { positive: 0.0, neutral: 1.0, negative: 0.5 });
        assert!(validate(&result).is_ok());
    }

    #[test]
    fn test_scores_out_of_range_fail() {
        let result = result_with(Scores { positive: 1.2, neutral: 0.0, negative: 0.0 });
        assert!(validate(&result).unwrap_err().starts_with("Parse error"));

        let result = result_with(Scores { positive: f64::NAN, neutral: 0.0, negative: 0.0 });
        assert!(validate(&result).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(AnalyzeRequest { text: "hi there" }).unwrap();
        assert_eq!(body, serde_json::json!({"text": "hi there"}));
    }
}
