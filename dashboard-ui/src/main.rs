//! Bridge Analytics Dashboard
//!
//! Cross-chain bridge dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Headline metric cards and bridge status
//! - Activity chart filtered by a timeline slider
//! - Hourly transaction chart
//! - Token distribution by TVL
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is the static snapshot from the `bridge-analytics`
//! crate; the timeline filter and view models come from there as well.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
