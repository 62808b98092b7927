//! Session State
//!
//! Reactive state for one dashboard session using Leptos signals.

use leptos::*;

use crate::api;

/// Message shown when the input is blank
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to analyze";

/// Prefix for service and network failures
pub const ERROR_PREFIX: &str = "Error analyzing text: ";

/// Session state provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Text being edited
    pub input: RwSignal<String>,
    /// Most recent successful analysis
    pub analysis: RwSignal<Option<AnalysisResult>>,
    /// Completed analyses in submission order
    pub history: RwSignal<Vec<HistoryEntry>>,
    /// True while a request is in flight
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Score distribution from the service
#[derive(Clone, Copy, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Scores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl Scores {
    /// Values in display order: positive, neutral, negative
    pub fn values(&self) -> [f64; 3] {
        [self.positive, self.neutral, self.negative]
    }
}

/// Analysis result from the service
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct AnalysisResult {
    pub sentiment: String,
    pub scores: Scores,
    pub word_count: u64,
    pub char_count: u64,
}

/// A recorded analysis
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    /// 1-based position
    pub id: usize,
    /// Local time the result arrived, in milliseconds
    pub recorded_at: i64,
    pub result: AnalysisResult,
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    provide_context(SessionState::new());
}

impl SessionState {
    fn new() -> Self {
        Self {
            input: create_rw_signal(String::new()),
            analysis: create_rw_signal(None),
            history: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }
}

/// Why a submission could not start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Blank input; the error message is set
    EmptyInput,
    /// A request is already in flight
    Busy,
}

impl SessionState {
    /// Submit the current input to the analysis service.
    ///
    /// Rejected while a request is pending or when the input is blank.
    pub fn submit(&self) -> Result<(), SubmitRejection> {
        let text = self.begin()?;

        let state = *self;
        spawn_local(async move {
            let outcome = api::analyze_text(&text).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Analysis failed: {}", e).into());
            }
            state.settle(outcome);
        });

        Ok(())
    }

    /// Validate the input and enter the loading state, returning the text to send
    fn begin(&self) -> Result<String, SubmitRejection> {
        let text = self.input.get_untracked();
        if let Err(rejection) = check_submission(&text, self.loading.get_untracked()) {
            if rejection == SubmitRejection::EmptyInput {
                self.error.set(Some(EMPTY_INPUT_MESSAGE.to_string()));
            }
            return Err(rejection);
        }

        self.loading.set(true);
        self.error.set(None);
        Ok(text)
    }

    /// Apply the outcome of a request and leave the loading state
    fn settle(&self, outcome: Result<AnalysisResult, String>) {
        match outcome {
            Ok(result) => self.record(result),
            Err(e) => self.error.set(Some(format_error(&e))),
        }
        self.loading.set(false);
    }

    /// Store a result as current and append it to history
    fn record(&self, result: AnalysisResult) {
        self.analysis.set(Some(result.clone()));
        self.history.update(|history| {
            let id = history.len() + 1;
            history.push(HistoryEntry {
                id,
                recorded_at: chrono::Utc::now().timestamp_millis(),
                result,
            });
        });
    }
}

/// Decide whether a submission may start
pub fn check_submission(text: &str, loading: bool) -> Result<(), SubmitRejection> {
    if loading {
        Err(SubmitRejection::Busy)
    } else if text.trim().is_empty() {
        Err(SubmitRejection::EmptyInput)
    } else {
        Ok(())
    }
}

/// User-facing message for a failed request
pub fn format_error(description: &str) -> String {
    format!("{}{}", ERROR_PREFIX, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(positive: f64) -> AnalysisResult {
        AnalysisResult {
            sentiment: "positive".to_string(),
            scores: Scores { positive, neutral: 0.2, negative: 0.1 },
            word_count: 2,
            char_count: 10,
        }
    }

    /// Run `f` with a fresh session inside a reactive runtime
    fn with_session(f: impl FnOnce(SessionState)) {
        let runtime = create_runtime();
        f(SessionState::new());
        runtime.dispose();
    }

    #[test]
    fn test_begin_enters_loading_and_clears_error() {
        with_session(|state| {
            state.error.set(Some("old".to_string()));
            state.input.set("nice day".to_string());

            assert_eq!(state.begin(), Ok("nice day".to_string()));
            assert!(state.loading.get_untracked());
            assert!(state.error.get_untracked().is_none());

            assert_eq!(state.begin(), Err(SubmitRejection::Busy));
        });
    }

    #[test]
    fn test_blank_submission_sets_message_without_loading() {
        with_session(|state| {
            state.input.set("   ".to_string());

            assert_eq!(state.begin(), Err(SubmitRejection::EmptyInput));
            assert!(!state.loading.get_untracked());
            assert_eq!(
                state.error.get_untracked().as_deref(),
                Some(EMPTY_INPUT_MESSAGE)
            );
        });
    }

    #[test]
    fn test_successes_append_numbered_history() {
        with_session(|state| {
            state.input.set("text".to_string());
            for positive in [0.7, 0.4] {
                state.begin().unwrap();
                state.settle(Ok(result(positive)));
                assert!(!state.loading.get_untracked());
            }

            let history = state.history.get_untracked();
            let ids: Vec<usize> = history.iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![1, 2]);
            assert_eq!(history[0].result.scores.positive, 0.7);
            assert_eq!(state.analysis.get_untracked(), Some(result(0.4)));
        });
    }

    #[test]
    fn test_failure_keeps_history_and_sets_prefixed_error() {
        with_session(|state| {
            state.input.set("text".to_string());
            state.begin().unwrap();
            state.settle(Ok(result(0.7)));

            state.begin().unwrap();
            state.settle(Err("Failed to analyze text".to_string()));

            assert!(!state.loading.get_untracked());
            assert_eq!(state.history.get_untracked().len(), 1);
            assert_eq!(state.analysis.get_untracked(), Some(result(0.7)));
            assert_eq!(
                state.error.get_untracked().as_deref(),
                Some("Error analyzing text: Failed to analyze text")
            );
        });
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(check_submission("", false), Err(SubmitRejection::EmptyInput));
        assert_eq!(check_submission(" \n\t", false), Err(SubmitRejection::EmptyInput));
    }

    #[test]
    fn test_pending_request_blocks_submission() {
        assert_eq!(check_submission("hello", true), Err(SubmitRejection::Busy));
        assert_eq!(check_submission("", true), Err(SubmitRejection::Busy));
    }

    #[test]
    fn test_text_is_accepted_when_idle() {
        assert_eq!(check_submission("hello", false), Ok(()));
    }

    #[test]
    fn test_error_prefix() {
        assert_eq!(
            format_error("Failed to analyze text"),
            "Error analyzing text: Failed to analyze text"
        );
    }

    #[test]
    fn test_result_deserializes_service_body() {
        let body = r#"{
            "text": "great",
            "sentiment": "positive",
            "scores": {"positive": 0.7, "neutral": 0.2, "negative": 0.1},
            "word_count": 1,
            "char_count": 5
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.scores.values(), [0.7, 0.2, 0.1]);
        assert_eq!(result.word_count, 1);
    }
}
