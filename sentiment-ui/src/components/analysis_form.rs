//! Analysis Form Component
//!
//! Text entry, submit button and the error region.

use leptos::*;

use super::InlineLoading;
use crate::state::SessionState;

/// Text entry form
#[component]
pub fn AnalysisForm() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // Rejections are reflected in state; nothing else to do here
        let _ = state.submit();
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-lg p-6 space-y-4">
            <textarea
                class="w-full h-40 bg-gray-700 border border-gray-600 rounded-lg p-3 text-white focus:outline-none focus:border-primary-500"
                placeholder="Enter text to analyze..."
                prop:value=move || state.input.get()
                on:input=move |ev| state.input.set(event_target_value(&ev))
            />

            <button
                type="submit"
                disabled=move || state.loading.get()
                class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-lg font-medium transition-colors flex items-center justify-center space-x-2"
            >
                {move || {
                    if state.loading.get() {
                        view! {
                            <InlineLoading />
                            <span>"Analyzing..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Analyze Sentiment"</span> }.into_view()
                    }
                }}
            </button>

            {move || {
                state.error.get().map(|message| view! {
                    <div class="p-3 bg-red-900/50 border border-red-700 rounded-lg text-red-300 text-sm">
                        {message}
                    </div>
                })
            }}
        </form>
    }
}
