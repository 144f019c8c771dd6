//! Timeline Filtering
//!
//! The slider-driven range filter at the heart of the dashboard:
//!
//! - **range**: `Percent` slider positions and the `RangeSelection` pair
//! - **filter**: `Timeline`, `FilteredView` and `compute_filtered_view`
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use bridge_analytics::dataset::mock::historical_flows;
//! use bridge_analytics::timeline::{Percent, RangeSelection, Timeline};
//!
//! let timeline = Timeline::new(historical_flows()).unwrap();
//! let end: Percent = "50".parse().unwrap();
//! let view = timeline.view(RangeSelection::up_to(end));
//!
//! assert!(view.len() < timeline.records().len());
//! ```

pub mod error;
pub mod filter;
pub mod range;

pub use error::{RangeError, RangeResult, TimelineError, TimelineResult};
pub use filter::{compute_filtered_view, cutoff_timestamp, FilteredView, Timeline};
pub use range::{Percent, RangeSelection};
