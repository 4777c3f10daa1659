//! Workspace Page
//!
//! The authenticated surface: verifies the session on entry, then renders
//! either the aggregate dashboard or one module's table. The four dashboard
//! fetches run independently; each owns one region and a failure degrades
//! only that region.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::{ActivityFeed, ModuleTable, Nav, PipelineChart, RevenueChart, StatCard};
use crate::modules::{self, Module};
use crate::session;
use crate::state::global::{GlobalState, UiMode};

/// Reload the four dashboard regions.
///
/// Each fetch is spawned separately and may complete in any order. A
/// completion from a superseded load is discarded without touching state.
pub fn load_dashboard(state: &GlobalState) {
    let token = match state.session.get_untracked() {
        Some(session) => session.token().to_string(),
        None => return,
    };
    let generation = state.begin_dashboard_fetch();
    state.dashboard_loading.set(true);
    state.activities_loading.set(true);

    // Stats cards; the only region whose failure is surfaced to the user
    {
        let state = state.clone();
        let token = token.clone();
        spawn_local(async move {
            let fetched = api::fetch_stats(&token).await;
            if !state.dashboard_generation_is_current(generation) {
                return;
            }
            match fetched {
                Ok(stats) => state.stats.set(Some(stats)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load dashboard stats: {}", e).into(),
                    );
                    state.stats.set(None);
                    state.show_error("Error loading dashboard data");
                }
            }
            state.dashboard_loading.set(false);
        });
    }

    // Revenue chart
    {
        let state = state.clone();
        let token = token.clone();
        spawn_local(async move {
            let fetched = api::fetch_revenue_series(&token).await;
            if !state.dashboard_generation_is_current(generation) {
                return;
            }
            match fetched {
                Ok(series) => state.revenue.set(Some(series)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load revenue chart: {}", e).into(),
                    );
                    state.revenue.set(None);
                }
            }
        });
    }

    // Pipeline chart
    {
        let state = state.clone();
        let token = token.clone();
        spawn_local(async move {
            let fetched = api::fetch_pipeline_series(&token).await;
            if !state.dashboard_generation_is_current(generation) {
                return;
            }
            match fetched {
                Ok(series) => state.pipeline.set(Some(series)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load pipeline chart: {}", e).into(),
                    );
                    state.pipeline.set(None);
                }
            }
        });
    }

    // Activity feed
    {
        let state = state.clone();
        spawn_local(async move {
            let fetched = api::fetch_recent_activities(&token).await;
            if !state.dashboard_generation_is_current(generation) {
                return;
            }
            match fetched {
                Ok(activities) => state.activities.set(Some(activities)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load recent activities: {}", e).into(),
                    );
                    state.activities.set(None);
                }
            }
            state.activities_loading.set(false);
        });
    }
}

/// Switch to one module's table and fetch its records.
pub fn switch_module(state: &GlobalState, module: Module) {
    state.mode.set(UiMode::Module(module));
    let token = match state.session.get_untracked() {
        Some(session) => session.token().to_string(),
        None => return,
    };
    let generation = state.begin_module_fetch();
    state.module_loading.set(true);
    state.module_rows.set(Vec::new());

    let state = state.clone();
    spawn_local(async move {
        let fetched = api::fetch_module_records(&token, module).await;
        if !state.module_generation_is_current(generation) {
            return;
        }
        match fetched {
            Ok(records) => {
                let rows = records
                    .iter()
                    .map(|record| modules::project_row(module, record))
                    .collect();
                state.module_rows.set(rows);
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to load {} records: {}", module.slug(), e).into(),
                );
                state.show_error(&format!("Error loading {} data", module.label()));
            }
        }
        state.module_loading.set(false);
    });
}

/// Return to the aggregate dashboard and refresh it.
pub fn show_dashboard(state: &GlobalState) {
    state.mode.set(UiMode::Dashboard);
    load_dashboard(state);
}

/// Re-run whichever loader matches the current panel.
pub fn refresh(state: &GlobalState) {
    match state.mode.get_untracked() {
        UiMode::Dashboard => load_dashboard(state),
        UiMode::Module(module) => switch_module(state, module),
    }
}

/// What the URL fragment asks for on entry
enum ModuleRequest {
    Dashboard,
    Known(Module),
    Unknown(String),
}

fn requested_module() -> ModuleRequest {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let slug = hash.trim_start_matches('#');
    if slug.is_empty() {
        ModuleRequest::Dashboard
    } else {
        match Module::from_slug(slug) {
            Some(module) => ModuleRequest::Known(module),
            None => ModuleRequest::Unknown(slug.to_string()),
        }
    }
}

/// Workspace page component
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    // Set when the URL fragment names a module we have no configuration for
    let (missing_config, set_missing_config) = create_signal(None::<String>);

    // Session gate on entry: nothing stored goes straight to login, a stored
    // token that fails verification is cleared first (fail-closed).
    let state_for_enter = state.clone();
    create_effect(move |_| {
        let state = state_for_enter.clone();
        let navigate = navigate.clone();
        match session::load_session() {
            None => navigate("/login", Default::default()),
            Some(stored) => {
                state.session.set(Some(stored.clone()));
                spawn_local(async move {
                    if api::verify_session(stored.token()).await {
                        match requested_module() {
                            ModuleRequest::Dashboard => load_dashboard(&state),
                            ModuleRequest::Known(module) => switch_module(&state, module),
                            ModuleRequest::Unknown(slug) => set_missing_config.set(Some(slug)),
                        }
                    } else {
                        session::clear_session();
                        state.session.set(None);
                        navigate("/login", Default::default());
                    }
                });
            }
        }
    });

    let state_for_nav_dashboard = state.clone();
    let state_for_nav_module = state.clone();
    let state_for_refresh = state.clone();
    let state_for_title = state.clone();
    let state_for_content = state.clone();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav
                on_dashboard=Callback::new(move |_| {
                    set_missing_config.set(None);
                    show_dashboard(&state_for_nav_dashboard);
                })
                on_module=Callback::new(move |module| {
                    set_missing_config.set(None);
                    switch_module(&state_for_nav_module, module);
                })
            />

            <main class="flex-1 container mx-auto px-4 py-8 space-y-8">
                // Page header with title and refresh
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">
                        {move || match state_for_title.mode.get() {
                            UiMode::Dashboard => "Dashboard".to_string(),
                            UiMode::Module(module) => module.label().to_string(),
                        }}
                    </h1>
                    <button
                        on:click=move |_| {
                            set_missing_config.set(None);
                            refresh(&state_for_refresh);
                        }
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm
                               font-medium transition-colors"
                    >
                        "↻ Refresh"
                    </button>
                </div>

                // Exactly one content panel is visible at a time
                {move || {
                    if let Some(slug) = missing_config.get() {
                        view! { <MissingModuleConfig slug=slug /> }.into_view()
                    } else {
                        match state_for_content.mode.get() {
                            UiMode::Dashboard => view! { <DashboardView /> }.into_view(),
                            UiMode::Module(module) => {
                                view! { <ModuleTable module=module /> }.into_view()
                            }
                        }
                    }
                }}
            </main>
        </div>
    }
}

/// Aggregate dashboard: stats cards, both charts, activity feed
#[component]
fn DashboardView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let stats = state.stats;

    view! {
        <div class="space-y-8">
            // Stats cards
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="Total Revenue"
                    icon="💰"
                    value=Signal::derive(move || {
                        stats.get()
                            .map(|s| crate::components::stat_card::format_money(s.total_revenue()))
                            .unwrap_or_else(|| "—".to_string())
                    })
                />
                <StatCard
                    label="Total Orders"
                    icon="🛒"
                    value=Signal::derive(move || {
                        stats.get()
                            .map(|s| crate::components::stat_card::format_count(s.total_orders()))
                            .unwrap_or_else(|| "—".to_string())
                    })
                />
                <StatCard
                    label="Customers"
                    icon="🤝"
                    value=Signal::derive(move || {
                        stats.get()
                            .map(|s| crate::components::stat_card::format_count(s.total_customers()))
                            .unwrap_or_else(|| "—".to_string())
                    })
                />
                <StatCard
                    label="Employees"
                    icon="👥"
                    value=Signal::derive(move || {
                        stats.get()
                            .map(|s| crate::components::stat_card::format_count(s.total_employees()))
                            .unwrap_or_else(|| "—".to_string())
                    })
                />
            </section>

            // Charts
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Revenue"</h2>
                    <RevenueChart />
                </section>
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Sales Pipeline"</h2>
                    <PipelineChart />
                </section>
            </div>

            // Recent activity
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>
                <ActivityFeed />
            </section>
        </div>
    }
}

/// Placeholder for module identifiers with no configuration
#[component]
fn MissingModuleConfig(slug: String) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-12 text-center">
            <div class="text-5xl mb-4">"🗂️"</div>
            <h2 class="text-xl font-semibold mb-2">"Module configuration not found"</h2>
            <p class="text-gray-400">
                "There is no module named \"" {slug} "\"."
            </p>
        </div>
    }
}
