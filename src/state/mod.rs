//! State Management
//!
//! Global reactive state for the application.

pub mod global;
