//! App Root Component
//!
//! Provides dashboard state and lays out the single page.

use leptos::*;

use crate::pages::Dashboard;
use crate::state::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white">
            <Dashboard />
        </div>
    }
}
