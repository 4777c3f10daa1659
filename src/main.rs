//! ERP Console
//!
//! Browser frontend for the five-module ERP demo, built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and registration against the ERP REST API
//! - Aggregate dashboard: stats cards, revenue and pipeline charts, activity feed
//! - Generic tabular views for the CRM, inventory, accounting, HR and sales modules
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the ERP backend over HTTP with a bearer token held
//! in local storage for the lifetime of the session.

use leptos::*;

mod api;
mod app;
mod components;
mod modules;
mod pages;
mod session;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
