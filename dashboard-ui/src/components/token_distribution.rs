//! Token Distribution Component
//!
//! TVL per token with its change and share bar.

use leptos::*;

use crate::state::use_dashboard_state;

#[component]
pub fn TokenDistribution() -> impl IntoView {
    let state = use_dashboard_state();
    let rows = state.snapshot.with_untracked(|s| s.tokens.clone());

    view! {
        <div class="space-y-6">
            {rows
                .into_iter()
                .map(|row| {
                    let change_color = if row.is_gain { "text-green-500" } else { "text-red-500" };

                    view! {
                        <div class="space-y-2">
                            <div class="flex justify-between items-center">
                                <div>
                                    <span class="font-medium text-lg">{row.name}</span>
                                    <span class="ml-4 text-gray-500">{row.tvl_label}</span>
                                </div>
                                <span class=change_color>{row.change}</span>
                            </div>
                            <div class="w-full bg-gray-100 dark:bg-gray-700 rounded-full h-2.5">
                                <div
                                    class="bg-blue-600 h-2.5 rounded-full transition-all duration-500"
                                    style=format!("width: {}%", row.width_percent)
                                />
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
