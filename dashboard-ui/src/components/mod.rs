//! UI Components
//!
//! Leptos components for the dashboard panels.

pub mod area_chart;
pub mod bar_chart;
pub mod card;
pub mod metric_card;
pub mod metric_selector;
pub mod status_alert;
pub mod timeline_slider;
pub mod token_distribution;

pub use area_chart::AreaChart;
pub use bar_chart::HourlyBarChart;
pub use card::Card;
pub use metric_card::MetricCards;
pub use metric_selector::MetricSelector;
pub use status_alert::StatusAlert;
pub use timeline_slider::TimelineSlider;
pub use token_distribution::TokenDistribution;
