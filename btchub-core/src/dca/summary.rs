//! Headline statistics for a DCA run.

use serde::{Deserialize, Serialize};

use super::simulator::DcaSeries;

/// `final / invested − 1`, or 0 when nothing was invested.
pub fn roi(final_value: f64, invested: f64) -> f64 {
    if invested > 0.0 {
        final_value / invested - 1.0
    } else {
        0.0
    }
}

/// Totals at the last period of a series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DcaSummary {
    /// Number of purchases.
    pub periods: usize,
    /// Cash put in; identical for both strategies.
    pub total_invested: f64,
    /// Units held by the DCA strategy at the end.
    pub units_accumulated: f64,
    pub dca_final_value: f64,
    pub lump_final_value: f64,
    pub dca_roi: f64,
    pub lump_roi: f64,
}

impl DcaSummary {
    /// Summarize a series. Every field is zero for an empty series.
    pub fn from_series(series: &DcaSeries) -> Self {
        let Some(last) = series.last() else {
            return Self::default();
        };
        let invested = series.total_invested();
        Self {
            periods: series.len(),
            total_invested: invested,
            units_accumulated: last.cumulative_units,
            dca_final_value: last.dca_value,
            lump_final_value: last.lump_value,
            dca_roi: roi(last.dca_value, invested),
            lump_roi: roi(last.lump_value, invested),
        }
    }

    /// ROI advantage of DCA over the lump sum (positive when DCA did better).
    pub fn dca_edge(&self) -> f64 {
        self.dca_roi - self.lump_roi
    }
}
