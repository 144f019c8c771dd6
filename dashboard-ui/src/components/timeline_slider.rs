//! Timeline Slider Component
//!
//! Range input driving the end of the timeline selection.

use leptos::*;

use crate::state::use_dashboard_state;

#[component]
pub fn TimelineSlider() -> impl IntoView {
    let state = use_dashboard_state();
    let (start_label, end_label) = state.dashboard.with_value(|d| d.slider_labels());

    view! {
        <div class="w-full px-4 py-2">
            <input
                type="range"
                min="0"
                max="100"
                prop:value=move || state.end_percent().to_string()
                on:input=move |ev| state.set_end_from_input(&event_target_value(&ev))
                class="w-full h-2 bg-blue-200 rounded-lg appearance-none cursor-pointer"
            />
            <div class="flex justify-between text-sm text-gray-500 mt-1">
                <span>{start_label}</span>
                <span>
                    {move || format!("through {}", state.snapshot.get().cutoff_label)}
                </span>
                <span>{end_label}</span>
            </div>

            {move || {
                state.input_error.get().map(|msg| view! {
                    <p class="text-xs text-red-500 mt-1">{msg}</p>
                })
            }}
        </div>
    }
}
