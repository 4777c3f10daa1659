//! Module Table Component
//!
//! Generic table for one business module: columns and cells come from the
//! module's static descriptor and row projection.

use leptos::*;

use crate::modules::{Cell, Module};
use crate::components::loading::Loading;
use crate::pages::workspace::switch_module;
use crate::state::global::GlobalState;

/// Generic module table component
#[component]
pub fn ModuleTable(module: Module) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let descriptor = module.descriptor();
    let rows = state.module_rows;
    let loading = state.module_loading;

    let state_for_create = state.clone();
    let state_for_refresh = state.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
            // Module header
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">{descriptor.title}</h2>
                <div class="flex items-center space-x-2">
                    <button
                        on:click=move |_| {
                            state_for_create.show_info(&format!(
                                "Create {} functionality not implemented in demo",
                                module.label()
                            ));
                        }
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "+ Add New"
                    </button>
                    <button
                        on:click=move |_| switch_module(&state_for_refresh, module)
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "↻ Refresh"
                    </button>
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    let rows = rows.get();
                    if rows.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-8">"No data available"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="overflow-x-auto">
                                <table class="w-full text-left text-sm">
                                    <thead>
                                        <tr class="border-b border-gray-700 text-gray-400">
                                            {descriptor.columns.iter().map(|col| view! {
                                                <th class="py-3 pr-4 font-medium">{*col}</th>
                                            }).collect_view()}
                                            <th class="py-3 font-medium">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows.into_iter().map(|row| view! {
                                            <TableRow module=module row=row />
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn TableRow(module: Module, row: Vec<Cell>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_view = state.clone();
    let state_for_edit = state;

    view! {
        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30 transition-colors">
            {row.into_iter().map(|cell| view! {
                <td class="py-3 pr-4">{render_cell(cell)}</td>
            }).collect_view()}
            <td class="py-3">
                <div class="flex items-center space-x-2">
                    <button
                        on:click=move |_| {
                            state_for_view.show_info(&format!(
                                "View {} item functionality not implemented in demo",
                                module.label()
                            ));
                        }
                        class="px-2 py-1 bg-gray-700 hover:bg-gray-600 rounded text-xs transition-colors"
                    >
                        "View"
                    </button>
                    <button
                        on:click=move |_| {
                            state_for_edit.show_info(&format!(
                                "Edit {} item functionality not implemented in demo",
                                module.label()
                            ));
                        }
                        class="px-2 py-1 bg-gray-700 hover:bg-gray-600 rounded text-xs transition-colors"
                    >
                        "Edit"
                    </button>
                </div>
            </td>
        </tr>
    }
}

fn render_cell(cell: Cell) -> View {
    match cell {
        Cell::Text(text) => view! { <span>{text}</span> }.into_view(),
        Cell::Badge { label, tone } => view! {
            <span class=format!(
                "inline-block px-2 py-0.5 rounded text-xs capitalize {}",
                tone.badge_class()
            )>
                {label}
            </span>
        }
        .into_view(),
    }
}
