//! Global Application State
//!
//! Reactive state management using Leptos signals. Each dashboard region
//! owns exactly one signal, so the four independent fetches never contend
//! for the same slot; a failed fetch leaves its region absent without
//! touching the siblings.

use leptos::*;
use std::collections::HashMap;
use serde_json::Value;

use crate::modules::{Cell, Module};
use crate::session::Session;

/// Which top-level content panel is visible. Exactly one at a time;
/// transitions happen only through explicit navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiMode {
    Dashboard,
    Module(Module),
}

/// Aggregate stats payload: three loosely typed metric sections
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub accounting: HashMap<String, Value>,
    #[serde(default)]
    pub sales: HashMap<String, Value>,
    #[serde(default)]
    pub hr: HashMap<String, Value>,
}

impl DashboardStats {
    fn metric_f64(section: &HashMap<String, Value>, name: &str) -> f64 {
        section.get(name).and_then(Value::as_f64).unwrap_or(0.0)
    }

    fn metric_u64(section: &HashMap<String, Value>, name: &str) -> u64 {
        section.get(name).and_then(Value::as_u64).unwrap_or(0)
    }

    pub fn total_revenue(&self) -> f64 {
        Self::metric_f64(&self.accounting, "total_revenue")
    }

    pub fn total_orders(&self) -> u64 {
        Self::metric_u64(&self.sales, "total_orders")
    }

    pub fn total_customers(&self) -> u64 {
        Self::metric_u64(&self.accounting, "total_customers")
    }

    pub fn total_employees(&self) -> u64 {
        Self::metric_u64(&self.hr, "total_employees")
    }
}

/// Revenue chart payload
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct RevenueSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// Sales pipeline chart payload
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct PipelineSeries {
    #[serde(default)]
    pub stages: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// One recent-activity entry
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Activity {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Authenticated session, mirrored from local storage
    pub session: RwSignal<Option<Session>>,
    /// Which content panel is visible
    pub mode: RwSignal<UiMode>,
    /// Stats cards region; `None` until loaded or after a failed fetch
    pub stats: RwSignal<Option<DashboardStats>>,
    /// Revenue chart region
    pub revenue: RwSignal<Option<RevenueSeries>>,
    /// Pipeline chart region
    pub pipeline: RwSignal<Option<PipelineSeries>>,
    /// Activity feed region
    pub activities: RwSignal<Option<Vec<Activity>>>,
    /// Projected rows for the current module table
    pub module_rows: RwSignal<Vec<Vec<Cell>>>,
    pub dashboard_loading: RwSignal<bool>,
    /// Loading flag owned by the activity-feed fetch; the stats fetch
    /// settling first must not blank the feed's skeleton
    pub activities_loading: RwSignal<bool>,
    pub module_loading: RwSignal<bool>,
    /// Request generation for dashboard fetches; completions from an older
    /// generation are discarded instead of mutating the regions
    dashboard_generation: RwSignal<u64>,
    /// Request generation for module fetches
    module_generation: RwSignal<u64>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Informational message (for toasts)
    pub info: RwSignal<Option<String>>,
}

impl GlobalState {
    pub fn new() -> Self {
        GlobalState {
            session: create_rw_signal(None),
            mode: create_rw_signal(UiMode::Dashboard),
            stats: create_rw_signal(None),
            revenue: create_rw_signal(None),
            pipeline: create_rw_signal(None),
            activities: create_rw_signal(None),
            module_rows: create_rw_signal(Vec::new()),
            dashboard_loading: create_rw_signal(false),
            activities_loading: create_rw_signal(false),
            module_loading: create_rw_signal(false),
            dashboard_generation: create_rw_signal(0),
            module_generation: create_rw_signal(0),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            info: create_rw_signal(None),
        }
    }

    /// Start a new dashboard load; returns the generation that completion
    /// handlers must present before writing any region.
    pub fn begin_dashboard_fetch(&self) -> u64 {
        self.dashboard_generation.update(|g| *g += 1);
        self.dashboard_generation.get_untracked()
    }

    pub fn dashboard_generation_is_current(&self, generation: u64) -> bool {
        self.dashboard_generation.get_untracked() == generation
    }

    /// Start a new module load; see [`Self::begin_dashboard_fetch`].
    pub fn begin_module_fetch(&self) -> u64 {
        self.module_generation.update(|g| *g += 1);
        self.module_generation.get_untracked()
    }

    pub fn module_generation_is_current(&self, generation: u64) -> bool {
        self.module_generation.get_untracked() == generation
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show an informational message (auto-clears after timeout)
    pub fn show_info(&self, message: &str) {
        self.info.set(Some(message.to_string()));

        let info_signal = self.info;
        gloo_timers::callback::Timeout::new(4000, move || {
            info_signal.set(None);
        })
        .forget();
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stats_default_to_zero() {
        let stats: DashboardStats = serde_json::from_value(json!({})).unwrap();
        assert_eq!(stats.total_revenue(), 0.0);
        assert_eq!(stats.total_orders(), 0);
        assert_eq!(stats.total_customers(), 0);
        assert_eq!(stats.total_employees(), 0);
    }

    #[test]
    fn stats_pull_named_metrics() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "accounting": { "total_revenue": 1250.5, "total_customers": 12 },
            "sales": { "total_orders": 34 },
            "hr": { "total_employees": 7 },
        }))
        .unwrap();
        assert_eq!(stats.total_revenue(), 1250.5);
        assert_eq!(stats.total_orders(), 34);
        assert_eq!(stats.total_customers(), 12);
        assert_eq!(stats.total_employees(), 7);
    }

    #[test]
    fn series_tolerate_missing_fields() {
        let revenue: RevenueSeries = serde_json::from_value(json!({})).unwrap();
        assert!(revenue.labels.is_empty());
        assert!(revenue.data.is_empty());

        let pipeline: PipelineSeries =
            serde_json::from_value(json!({ "stages": ["New"] })).unwrap();
        assert_eq!(pipeline.stages, vec!["New"]);
        assert!(pipeline.values.is_empty());
    }

    #[test]
    fn region_loading_flags_are_independent() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.dashboard_loading.set(true);
        state.activities_loading.set(true);

        // Stats settling clears only its own flag; the feed keeps its skeleton
        state.dashboard_loading.set(false);
        assert!(state.activities_loading.get_untracked());

        state.activities_loading.set(false);
        assert!(!state.activities_loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn stale_generations_are_rejected() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        let first = state.begin_module_fetch();
        assert!(state.module_generation_is_current(first));

        let second = state.begin_module_fetch();
        assert!(!state.module_generation_is_current(first));
        assert!(state.module_generation_is_current(second));

        let dash = state.begin_dashboard_fetch();
        assert!(state.dashboard_generation_is_current(dash));
        state.begin_dashboard_fetch();
        assert!(!state.dashboard_generation_is_current(dash));

        runtime.dispose();
    }
}
