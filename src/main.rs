//! Club Analysis Dashboard
//!
//! Operator dashboard for the club analysis backend, built with Leptos (WASM).
//!
//! # Features
//!
//! - One-click triggers for the email, WhatsApp, and Instagram scraping jobs
//! - Club clustering and ranking with inline result rendering
//! - Configurable backend URL
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every interesting computation (scraping, clustering, ranking)
//! happens in the external backend; this crate is the thin HTTP client and
//! the screens around it.

use leptos::*;

mod api;
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
