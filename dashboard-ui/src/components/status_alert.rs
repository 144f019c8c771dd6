//! Status Alert Component
//!
//! Bridge health banner shown next to the page title.

use leptos::*;

use crate::state::use_dashboard_state;

#[component]
pub fn StatusAlert() -> impl IntoView {
    let state = use_dashboard_state();
    let status = state.dashboard.with_value(|d| d.dataset().status.clone());

    let (icon, border) = if status.operational {
        ("🛡", "border-green-500")
    } else {
        ("⚠", "border-red-500")
    };

    view! {
        <div class=format!(
            "w-full lg:w-auto flex items-start space-x-3 rounded-lg border {} bg-white dark:bg-gray-800 px-4 py-3",
            border
        )>
            <span class="text-lg">{icon}</span>
            <div>
                <p class="font-medium">{status.title}</p>
                <p class="text-sm text-gray-500 dark:text-gray-400">{status.description}</p>
            </div>
        </div>
    }
}
