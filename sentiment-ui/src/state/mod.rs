//! State Management
//!
//! Session state shared by every component.

pub mod session;

pub use session::{provide_session_state, AnalysisResult, HistoryEntry, Scores, SessionState};
