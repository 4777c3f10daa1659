//! UI Components
//!
//! Reusable Leptos components for the console.

pub mod activity_feed;
pub mod chart;
pub mod loading;
pub mod module_table;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use activity_feed::ActivityFeed;
pub use chart::{PipelineChart, RevenueChart};
pub use loading::Loading;
pub use module_table::ModuleTable;
pub use nav::Nav;
pub use stat_card::StatCard;
pub use toast::Toast;
