//! Sentiment Dashboard
//!
//! Sentiment analysis dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Free-form text entry with a single in-flight analysis
//! - Sentiment badge, word and character counts
//! - Score proportion chart and a history chart across submissions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It posts text to the analysis service over HTTP and keeps
//! all state in memory for the lifetime of the page.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
