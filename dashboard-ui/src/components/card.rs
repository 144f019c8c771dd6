//! Card Component
//!
//! Panel frame with a title row shared by every chart.

use leptos::*;

/// Titled panel
#[component]
pub fn Card(
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
    /// Extra content for the right side of the title row
    #[prop(optional)]
    actions: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-white dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700 hover:shadow-lg transition-shadow duration-200">
            <div class="flex justify-between items-center mb-4">
                <div>
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{description}</p>
                </div>
                {actions}
            </div>
            {children()}
        </section>
    }
}
