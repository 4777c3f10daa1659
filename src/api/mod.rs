//! API
//!
//! HTTP client for the ERP REST backend.

pub mod client;

pub use client::*;
