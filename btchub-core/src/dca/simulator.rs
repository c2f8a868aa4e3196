//! DCA simulation against a lump-sum baseline.
//!
//! Each date in the range is one purchase period. The period index `t`
//! drives the price model, regardless of how many calendar days a period
//! spans. The lump sum invests the same total at the first period's price.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schedule::{DateRange, Interval};
use super::summary::DcaSummary;
use crate::error::{check_range, InputError};
use crate::price_model::{PriceModel, PricePoint};

pub const MIN_AMOUNT: f64 = 1.0;
pub const MAX_AMOUNT: f64 = 1e9;
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 10;
pub const MAX_FEE_PERCENT: f64 = 5.0;

/// Inputs for one DCA simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DcaParams {
    /// Cash invested at every period, in the display currency.
    pub amount_per_interval: f64,
    /// Spacing between purchases.
    pub interval: Interval,
    /// Length of the trailing window ending at `as_of`.
    pub duration_years: u32,
    /// When false, `fee_percent` is ignored.
    pub fee_enabled: bool,
    /// Purchase fee in percent (1.0 = 1%), taken from every buy.
    pub fee_percent: f64,
}

impl Default for DcaParams {
    fn default() -> Self {
        Self {
            amount_per_interval: 100.0,
            interval: Interval::Weekly,
            duration_years: 1,
            fee_enabled: true,
            fee_percent: 1.0,
        }
    }
}

impl DcaParams {
    /// Fee as a fraction, zero when fees are switched off.
    pub fn fee_rate(&self) -> f64 {
        if self.fee_enabled {
            self.fee_percent / 100.0
        } else {
            0.0
        }
    }

    /// Range checks matching the simulator form. The fee is only checked
    /// when fees are enabled.
    pub fn validate(&self) -> Result<(), InputError> {
        check_range(
            "amount_per_interval",
            self.amount_per_interval,
            MIN_AMOUNT,
            MAX_AMOUNT,
        )?;
        check_range(
            "duration_years",
            f64::from(self.duration_years),
            f64::from(MIN_YEARS),
            f64::from(MAX_YEARS),
        )?;
        if self.fee_enabled {
            check_range("fee_percent", self.fee_percent, 0.0, MAX_FEE_PERCENT)?;
        }
        Ok(())
    }
}

/// One purchase period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcaSeriesEntry {
    /// Purchase date.
    pub date: NaiveDate,
    /// Model price at this period.
    pub price: f64,
    /// Market value of all units bought so far.
    pub dca_value: f64,
    /// Market value of the lump-sum position.
    pub lump_value: f64,
    /// Units bought this period, after fees.
    pub units_bought: f64,
    /// Running total of `units_bought`.
    pub cumulative_units: f64,
}

/// Ordered simulation output, one entry per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcaSeries {
    pub amount_per_interval: f64,
    /// In date order.
    pub entries: Vec<DcaSeriesEntry>,
}

impl DcaSeries {
    pub fn empty(amount_per_interval: f64) -> Self {
        Self {
            amount_per_interval,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&DcaSeriesEntry> {
        self.entries.last()
    }

    /// Cash put in by the DCA strategy: one amount per period.
    pub fn total_invested(&self) -> f64 {
        self.amount_per_interval * self.entries.len() as f64
    }

    /// Cash put in by the lump sum. Always equal to `total_invested`.
    pub fn lump_sum_invested(&self) -> f64 {
        self.total_invested()
    }

    pub fn summary(&self) -> DcaSummary {
        DcaSummary::from_series(self)
    }
}

/// Simulate over the trailing `duration_years` ending at `as_of`.
///
/// A zero duration produces an empty series.
pub fn simulate(params: &DcaParams, as_of: NaiveDate) -> DcaSeries {
    if params.duration_years == 0 {
        return DcaSeries::empty(params.amount_per_interval);
    }
    let range = DateRange::trailing_years(as_of, params.duration_years, params.interval);
    simulate_range(params, &range, &PriceModel::default())
}

/// Simulate over an explicit date range and price model.
pub fn simulate_range(params: &DcaParams, range: &DateRange, model: &PriceModel) -> DcaSeries {
    let periods = range.len();
    let net = 1.0 - params.fee_rate();
    let amount = params.amount_per_interval;

    let lump_invested = amount * periods as f64;
    let lump_units = lump_invested * net / model.price_at(0);

    let mut cumulative_units = 0.0;
    let mut entries = Vec::with_capacity(periods);
    let points = model.path(u32::try_from(periods).unwrap_or(u32::MAX));
    for (date, PricePoint { price, .. }) in range.iter().zip(points) {
        let units_bought = amount * net / price;
        cumulative_units += units_bought;
        entries.push(DcaSeriesEntry {
            date,
            price,
            dca_value: cumulative_units * price,
            lump_value: lump_units * price,
            units_bought,
            cumulative_units,
        });
    }

    DcaSeries {
        amount_per_interval: amount,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 17).unwrap()
    }

    fn no_fee_weekly() -> DcaParams {
        DcaParams {
            amount_per_interval: 100.0,
            interval: Interval::Weekly,
            duration_years: 1,
            fee_enabled: false,
            fee_percent: 0.0,
        }
    }

    #[test]
    fn weekly_one_year_point_count() {
        let series = simulate(&no_fee_weekly(), as_of());
        assert_eq!(series.len(), 53);
        assert_eq!(series.entries[0].date, NaiveDate::from_ymd_opt(2024, 10, 17).unwrap());
        assert_eq!(
            series.last().unwrap().date,
            NaiveDate::from_ymd_opt(2025, 10, 16).unwrap()
        );
    }

    #[test]
    fn cumulative_units_strictly_increase() {
        let series = simulate(&no_fee_weekly(), as_of());
        for w in series.entries.windows(2) {
            assert!(w[1].cumulative_units > w[0].cumulative_units);
            assert!(w[1].date > w[0].date);
        }
    }

    #[test]
    fn first_period_buys_at_base_price() {
        let series = simulate(&no_fee_weekly(), as_of());
        let first = series.entries[0];
        assert_eq!(first.price, 60_000.0);
        assert!((first.units_bought - 100.0 / 60_000.0).abs() < 1e-15);
        assert!((first.dca_value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn period_index_not_calendar_days_drives_price() {
        let params = DcaParams {
            interval: Interval::Monthly,
            ..no_fee_weekly()
        };
        let series = simulate(&params, as_of());
        let model = PriceModel::default();
        assert_eq!(series.entries[1].price, model.price_at(1));
        assert_eq!(series.entries[12].price, model.price_at(12));
    }

    #[test]
    fn lump_sum_starts_with_full_total() {
        let series = simulate(&no_fee_weekly(), as_of());
        let first = series.entries[0];
        assert!((first.lump_value - series.total_invested()).abs() < 1e-6);
    }

    #[test]
    fn fee_reduces_units_proportionally() {
        let with_fee = DcaParams {
            fee_enabled: true,
            fee_percent: 1.0,
            ..no_fee_weekly()
        };
        let a = simulate(&no_fee_weekly(), as_of());
        let b = simulate(&with_fee, as_of());
        for (x, y) in a.entries.iter().zip(&b.entries) {
            assert!((y.units_bought - x.units_bought * 0.99).abs() < 1e-15);
        }
    }

    #[test]
    fn fee_ignored_when_disabled() {
        let params = DcaParams {
            fee_enabled: false,
            fee_percent: 3.0,
            ..no_fee_weekly()
        };
        assert_eq!(params.fee_rate(), 0.0);
    }

    #[test]
    fn zero_duration_is_empty() {
        let params = DcaParams {
            duration_years: 0,
            ..no_fee_weekly()
        };
        let series = simulate(&params, as_of());
        assert!(series.is_empty());
        assert_eq!(series.total_invested(), 0.0);
    }

    #[test]
    fn invested_totals_match() {
        let series = simulate(&DcaParams::default(), as_of());
        assert_eq!(series.total_invested(), series.lump_sum_invested());
        assert_eq!(series.total_invested(), 100.0 * series.len() as f64);
    }

    #[test]
    fn validate_rejects_out_of_range_inputs() {
        assert!(DcaParams::default().validate().is_ok());
        let bad_amount = DcaParams {
            amount_per_interval: 0.5,
            ..DcaParams::default()
        };
        assert!(bad_amount.validate().is_err());
        let bad_years = DcaParams {
            duration_years: 11,
            ..DcaParams::default()
        };
        assert!(bad_years.validate().is_err());
        let bad_fee = DcaParams {
            fee_percent: 6.0,
            ..DcaParams::default()
        };
        assert!(bad_fee.validate().is_err());
        let fee_off = DcaParams {
            fee_enabled: false,
            fee_percent: 6.0,
            ..DcaParams::default()
        };
        assert!(fee_off.validate().is_ok());
    }

    #[test]
    fn partial_params_keep_defaults_but_typos_fail() {
        let params: DcaParams = serde_json::from_str(r#"{"duration_years":3}"#).unwrap();
        assert_eq!(params.duration_years, 3);
        assert_eq!(params.amount_per_interval, 100.0);
        assert!(serde_json::from_str::<DcaParams>(r#"{"amount":250.0}"#).is_err());
    }

    #[test]
    fn prices_follow_model_path() {
        let model = PriceModel::new(50_000.0);
        let range = DateRange::trailing_years(
            NaiveDate::from_ymd_opt(2025, 10, 17).unwrap(),
            1,
            Interval::Monthly,
        );
        let series = simulate_range(&DcaParams::default(), &range, &model);
        for (t, entry) in series.entries.iter().enumerate() {
            assert_eq!(entry.price, model.price_at(t as u32));
        }
    }
}
