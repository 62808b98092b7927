//! Result Panel Component
//!
//! Sentiment badge, metric tiles and the charts for the current result.

use leptos::*;

use super::palette::sentiment_color;
use super::{HistoryChart, ScoreChart};
use crate::state::SessionState;

/// Panel shown once an analysis has completed
#[component]
pub fn ResultPanel() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    move || {
        state.analysis.get().map(|result| {
            let color = sentiment_color(&result.sentiment);
            view! {
                <section class="space-y-6">
                    <div class="bg-gray-800 rounded-lg p-6 flex flex-col items-center">
                        <h2 class="text-lg text-gray-400 mb-3">"Sentiment"</h2>
                        <span
                            class="px-6 py-2 rounded-full text-xl font-bold text-white"
                            style=format!("background-color: {}", color)
                        >
                            {result.sentiment.to_uppercase()}
                        </span>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <MetricTile title="Word Count" value=result.word_count />
                        <MetricTile title="Character Count" value=result.char_count />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="bg-gray-800 rounded-lg p-4">
                            <h3 class="text-lg font-semibold mb-2">"Sentiment Scores"</h3>
                            <ScoreChart scores=result.scores />
                        </div>
                        <div class="bg-gray-800 rounded-lg p-4">
                            <h3 class="text-lg font-semibold mb-2">"Analysis History"</h3>
                            <HistoryChart />
                        </div>
                    </div>
                </section>
            }
        })
    }
}

/// Single numeric tile
#[component]
fn MetricTile(title: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 text-center">
            <div class="text-sm text-gray-400">{title}</div>
            <div class="text-3xl font-bold mt-1">{value}</div>
        </div>
    }
}
