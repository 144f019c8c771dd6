//! State Management
//!
//! Global dashboard state shared through Leptos context.

pub mod global;

pub use global::{provide_dashboard_state, use_dashboard_state};
