//! Dollar-cost averaging simulator.
//!
//! - `schedule`: purchase intervals and inclusive date stepping.
//! - `simulator`: periodic purchases on the synthetic price path plus the lump-sum baseline.
//! - `summary`: totals and ROI for both strategies.

pub mod schedule;
pub mod simulator;
pub mod summary;

pub use schedule::{DateRange, DateSteps, Interval};
pub use simulator::{simulate, simulate_range, DcaParams, DcaSeries, DcaSeriesEntry};
pub use summary::{roi, DcaSummary};
