//! Metric Card Component
//!
//! Displays one headline metric with its change and trend.

use bridge_analytics::{MetricSummary, Trend};
use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Card contents
    summary: MetricSummary,
) -> impl IntoView {
    let (text_color, badge_bg, icon_color, arrow) = match summary.trend {
        Trend::Positive => ("text-green-500", "bg-green-100", "text-green-600", "↗"),
        Trend::Negative => ("text-red-500", "bg-red-100", "text-red-600", "↘"),
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-6 border border-gray-200 dark:border-gray-700 hover:shadow-lg transition-shadow duration-200">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-500 dark:text-gray-400">
                        {summary.title}
                    </p>
                    <h3 class="text-2xl font-bold mt-2">{summary.value}</h3>
                    <p class=format!("text-sm mt-1 flex items-center gap-1 {}", text_color)>
                        {summary.change}
                        " "
                        {arrow}
                    </p>
                    <p class="text-xs text-gray-500 mt-2">{summary.description}</p>
                </div>

                // Icon badge
                <div class=format!("p-4 rounded-full {}", badge_bg)>
                    <span class=format!("text-xl {}", icon_color)>{summary.icon.glyph()}</span>
                </div>
            </div>
        </div>
    }
}

/// Row of headline cards
#[component]
pub fn MetricCards() -> impl IntoView {
    let state = crate::state::use_dashboard_state();
    let cards = state.dashboard.with_value(|d| d.dataset().cards.clone());

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
            {cards
                .into_iter()
                .map(|summary| view! { <MetricCard summary=summary /> })
                .collect_view()}
        </div>
    }
}
