//! UI Components
//!
//! Leptos components for the dashboard.

pub mod analysis_form;
pub mod charts;
pub mod loading;
pub mod palette;
pub mod result_panel;

pub use analysis_form::AnalysisForm;
pub use charts::{HistoryChart, ScoreChart};
pub use loading::InlineLoading;
pub use result_panel::ResultPanel;
