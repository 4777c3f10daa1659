//! Pages
//!
//! Top-level page components for each route.

pub mod login;
pub mod workspace;

pub use login::LoginPage;
pub use workspace::WorkspacePage;
