//! Global Application State
//!
//! Reactive state management using Leptos signals. The slider position and
//! chosen metric are the only writable values; everything drawn is a memo
//! over them.

use bridge_analytics::report::{Dashboard, DashboardSnapshot};
use bridge_analytics::{Percent, RangeError, RangeSelection, SeriesMetric};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Static dataset and its timeline
    pub dashboard: StoredValue<Dashboard>,
    /// Current timeline selection (end follows the slider)
    pub selection: RwSignal<RangeSelection>,
    /// Series shown in the activity chart
    pub metric: RwSignal<SeriesMetric>,
    /// Last rejected slider input
    pub input_error: RwSignal<Option<String>>,
    /// Every panel, recomputed when selection or metric change
    pub snapshot: Memo<DashboardSnapshot>,
}

/// Provide global state to the component tree
pub fn provide_dashboard_state() {
    let dashboard = store_value(Dashboard::bridge().expect("built-in bridge data is ordered"));
    let selection = create_rw_signal(RangeSelection::full());
    let metric = create_rw_signal(SeriesMetric::default());

    let snapshot = create_memo(move |_| {
        let selection = selection.get();
        let metric = metric.get();
        dashboard.with_value(|d| d.snapshot(selection, metric))
    });

    provide_context(DashboardState {
        dashboard,
        selection,
        metric,
        input_error: create_rw_signal(None),
        snapshot,
    });
}

/// Fetch the state provided by [`provide_dashboard_state`]
pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found")
}

/// Move the selection end to a raw slider value
pub fn apply_slider_input(
    selection: RangeSelection,
    raw: &str,
) -> Result<RangeSelection, RangeError> {
    let end: Percent = raw.parse()?;
    Ok(selection.with_end(end))
}

impl DashboardState {
    /// Handle a slider event value
    ///
    /// Bad input leaves the selection untouched and is reported instead.
    pub fn set_end_from_input(&self, raw: &str) {
        match apply_slider_input(self.selection.get_untracked(), raw) {
            Ok(selection) => {
                self.selection.set(selection);
                self.input_error.set(None);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Ignoring slider input: {}", e).into());
                self.input_error.set(Some(e.to_string()));
            }
        }
    }

    pub fn end_percent(&self) -> f64 {
        self.selection.get().end().value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_input_moves_end() {
        let moved = apply_slider_input(RangeSelection::full(), "35").unwrap();
        assert_eq!(moved.end().value(), 35.0);
        assert_eq!(moved.start(), Percent::ZERO);
    }

    #[test]
    fn test_slider_input_clamps() {
        let moved = apply_slider_input(RangeSelection::full(), "180").unwrap();
        assert_eq!(moved.end(), Percent::FULL);
    }

    #[test]
    fn test_slider_input_rejects_garbage() {
        assert!(apply_slider_input(RangeSelection::full(), "").is_err());
        assert!(apply_slider_input(RangeSelection::full(), "ten").is_err());
    }
}
