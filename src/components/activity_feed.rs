//! Activity Feed Component
//!
//! Recent-activity list for the dashboard.

use leptos::*;

use crate::components::loading::ListSkeleton;
use crate::modules;
use crate::state::global::GlobalState;

/// Recent activity list component
#[component]
pub fn ActivityFeed() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let activities = state.activities;
    let loading = state.activities_loading;

    view! {
        <div class="space-y-2">
            {move || {
                match activities.get() {
                    None if loading.get() => view! { <ListSkeleton /> }.into_view(),
                    None => view! {
                        <p class="text-gray-400 text-sm">"Recent activity unavailable"</p>
                    }.into_view(),
                    Some(items) if items.is_empty() => view! {
                        <p class="text-gray-400 text-sm">"No recent activities"</p>
                    }.into_view(),
                    Some(items) => {
                        items.into_iter().map(|activity| {
                            let time = activity
                                .timestamp
                                .as_deref()
                                .map(modules::format_date)
                                .unwrap_or_else(|| "-".to_string());

                            view! {
                                <div class="flex items-start justify-between py-3 border-b border-gray-700 last:border-0">
                                    <div>
                                        <h3 class="font-medium">{activity.title}</h3>
                                        <p class="text-gray-400 text-sm">{activity.description}</p>
                                        <span class="inline-block mt-1 px-2 py-0.5 bg-blue-600 text-white
                                                     rounded text-xs capitalize">
                                            {activity.module}
                                        </span>
                                    </div>
                                    <span class="text-gray-400 text-sm whitespace-nowrap ml-4">{time}</span>
                                </div>
                            }
                        }).collect_view()
                    }
                }
            }}
        </div>
    }
}
