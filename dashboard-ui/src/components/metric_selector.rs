//! Metric Selector Component
//!
//! Buttons choosing which flow the activity chart plots.

use bridge_analytics::SeriesMetric;
use leptos::*;

use crate::state::use_dashboard_state;

#[component]
pub fn MetricSelector() -> impl IntoView {
    view! {
        <div class="flex gap-2 mb-4">
            {SeriesMetric::all()
                .iter()
                .map(|metric| view! { <MetricButton metric=*metric /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn MetricButton(metric: SeriesMetric) -> impl IntoView {
    let state = use_dashboard_state();
    let is_active = create_memo(move |_| state.metric.get() == metric);

    view! {
        <button
            on:click=move |_| state.metric.set(metric)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} bg-gray-100 dark:bg-gray-700 hover:bg-gray-200", base)
                }
            }
        >
            {metric.title()}
        </button>
    }
}
