//! App Root Component
//!
//! Main application component and session provider.

use leptos::*;

use crate::api;
use crate::components::{AnalysisForm, ResultPanel};
use crate::state::{provide_session_state, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 py-6 text-center">
                <h1 class="text-3xl font-bold">"Sentiment Analysis Dashboard"</h1>
                <p class="text-gray-400 mt-2">
                    "Enter text to analyze its sentiment using machine learning"
                </p>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 pb-24 space-y-8 max-w-4xl">
                <AnalysisForm />
                <ResultPanel />
            </main>

            <Footer />
        </div>
    }
}

/// Footer with the service endpoint and session count
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");
    let endpoint = create_rw_signal(api::get_api_url());

    let save_endpoint = move |_| {
        let url = endpoint.get_untracked();
        api::set_api_url(url.trim());
        endpoint.set(api::get_api_url());
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm gap-4">
                <div class="flex items-center space-x-2 flex-1">
                    <span class="text-gray-400">"Service:"</span>
                    <input
                        type="text"
                        class="flex-1 bg-gray-700 border border-gray-600 rounded px-2 py-1 text-white"
                        prop:value=move || endpoint.get()
                        on:input=move |ev| endpoint.set(event_target_value(&ev))
                    />
                    <button
                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded transition-colors"
                        on:click=save_endpoint
                    >
                        "Save"
                    </button>
                </div>

                <div class="text-gray-400">
                    {move || {
                        let history = state.history.get();
                        match history.last() {
                            Some(entry) => {
                                let at = chrono::DateTime::from_timestamp_millis(entry.recorded_at)
                                    .map(|dt| dt.format("%H:%M:%S").to_string())
                                    .unwrap_or_default();
                                format!("{} analyses, last at {}", history.len(), at)
                            }
                            None => "No analyses yet".to_string(),
                        }
                    }}
                </div>
            </div>
        </footer>
    }
}
