//! Dashboard Page
//!
//! Header, metric cards, the timeline-filtered activity chart, hourly
//! transactions and token distribution.

use leptos::*;

use crate::components::{
    AreaChart, Card, HourlyBarChart, MetricCards, MetricSelector, StatusAlert, TimelineSlider,
    TokenDistribution,
};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="p-6 max-w-7xl mx-auto space-y-6">
            // Page header
            <div class="flex flex-col lg:flex-row justify-between items-start lg:items-center gap-4 mb-8">
                <div>
                    <h1 class="text-4xl font-bold mb-2 bg-gradient-to-r from-blue-600 to-purple-600 text-transparent bg-clip-text">
                        "Sui Bridge Analytics"
                    </h1>
                    <p class="text-gray-500 dark:text-gray-400">
                        "Real-time analytics for cross-chain bridge activity"
                    </p>
                </div>

                <StatusAlert />
            </div>

            <MetricCards />

            // Main chart
            <Card
                title="Bridge Activity Analysis"
                description="Historical trends with interactive timeline"
                actions=view! {
                    <div class="flex items-center gap-4 text-gray-500">
                        <span title="Timeline">"📅"</span>
                        <span title="Filter">"⏷"</span>
                    </div>
                }.into_view()
            >
                <MetricSelector />
                <AreaChart />
                <TimelineSlider />
            </Card>

            // Secondary charts
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Card
                    title="24h Transaction Activity"
                    description="Hourly transaction distribution"
                >
                    <HourlyBarChart />
                </Card>

                <Card
                    title="Token Distribution"
                    description="Total Value Locked by Token"
                >
                    <TokenDistribution />
                </Card>
            </div>
        </div>
    }
}
