//! Marquee
//!
//! A single-view front-end built with Leptos (WASM). On mount it fetches
//! a message from the Marquee API and displays it, showing a loading
//! placeholder until the request settles.
//!
//! This is a client-side rendered (CSR) application that compiles to
//! WebAssembly and communicates with the Marquee API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
