//! API Module
//!
//! HTTP client for the sentiment analysis service.

mod client;

pub use client::*;
