//! Navigation Component
//!
//! Header bar with the brand, dashboard and module links, the signed-in
//! user's name and the logout button. Module links dispatch through the
//! closed `Module` enum; there is no string-keyed lookup to miss.

use leptos::*;
use leptos_router::use_navigate;

use crate::modules::Module;
use crate::session;
use crate::state::global::{GlobalState, UiMode};

/// Navigation header component
#[component]
pub fn Nav(
    #[prop(into)] on_dashboard: Callback<()>,
    #[prop(into)] on_module: Callback<Module>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let state_for_logout = state.clone();
    let logout = move |_| {
        session::clear_session();
        state_for_logout.session.set(None);
        navigate("/login", Default::default());
    };

    let state_for_user = state.clone();
    let state_for_active = state.clone();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <button
                        on:click=move |_| on_dashboard.call(())
                        class="flex items-center space-x-3"
                    >
                        <span class="text-2xl">"🏢"</span>
                        <span class="text-xl font-bold text-white">"ERP Console"</span>
                    </button>

                    // Module links
                    <div class="flex items-center space-x-1">
                        <button
                            on:click=move |_| on_dashboard.call(())
                            class=move || nav_link_class(
                                state_for_active.mode.get() == UiMode::Dashboard
                            )
                        >
                            "Dashboard"
                        </button>
                        {Module::ALL
                            .into_iter()
                            .map(|module| {
                                let state = state.clone();
                                view! {
                                    <button
                                        on:click=move |_| on_module.call(module)
                                        class=move || nav_link_class(
                                            state.mode.get() == UiMode::Module(module)
                                        )
                                    >
                                        <span class="mr-1">{module.icon()}</span>
                                        {module.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    // User and logout
                    <div class="flex items-center space-x-3">
                        <span class="text-sm text-gray-300">
                            {move || {
                                state_for_user
                                    .session
                                    .get()
                                    .map(|s| s.display_name())
                                    .unwrap_or_default()
                            }}
                        </span>
                        <button
                            on:click=logout
                            class="px-3 py-2 rounded-lg text-sm text-gray-300
                                   hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

fn nav_link_class(active: bool) -> String {
    let base = "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors";
    if active {
        format!("{} bg-gray-700 text-white", base)
    } else {
        base.to_string()
    }
}
