//! Synthetic price model — a smooth exponential trend modulated by two waves.
//!
//! `price(t) = base · e^(0.00045·t) · (1 + 0.12·sin(t/15) + 0.05·sin(t/3.7))`
//!
//! This is a deterministic stand-in for historical data, not a market model.
//! The wave factor never drops below `1 − 0.12 − 0.05 = 0.83`, so the price
//! stays strictly positive for any positive base.

use serde::{Deserialize, Serialize};

/// Base price used by the DCA simulator.
pub const DEFAULT_BASE_PRICE: f64 = 60_000.0;

const TREND_RATE: f64 = 0.00045;
const SLOW_WAVE_AMPLITUDE: f64 = 0.12;
const SLOW_WAVE_PERIOD: f64 = 15.0;
const FAST_WAVE_AMPLITUDE: f64 = 0.05;
const FAST_WAVE_PERIOD: f64 = 3.7;

/// Synthetic price `t` steps after the start of the path.
pub fn synthetic_price(base_price: f64, t: u32) -> f64 {
    let t = f64::from(t);
    let trend = (TREND_RATE * t).exp();
    let wave = 1.0
        + SLOW_WAVE_AMPLITUDE * (t / SLOW_WAVE_PERIOD).sin()
        + FAST_WAVE_AMPLITUDE * (t / FAST_WAVE_PERIOD).sin();
    base_price * trend * wave
}

/// A single point on the synthetic path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub t: u32,
    pub price: f64,
}

/// Synthetic price path anchored at a base price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceModel {
    base_price: f64,
}

impl PriceModel {
    pub fn new(base_price: f64) -> Self {
        Self { base_price }
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn price_at(&self, t: u32) -> f64 {
        synthetic_price(self.base_price, t)
    }

    pub fn point(&self, t: u32) -> PricePoint {
        PricePoint {
            t,
            price: self.price_at(t),
        }
    }

    /// Lazily evaluated path for `t = 0..len`.
    pub fn path(&self, len: u32) -> impl Iterator<Item = PricePoint> + '_ {
        (0..len).map(move |t| self.point(t))
    }
}

impl Default for PriceModel {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_base_price() {
        assert_eq!(synthetic_price(60_000.0, 0), 60_000.0);
        assert_eq!(PriceModel::new(123.45).price_at(0), 123.45);
    }

    #[test]
    fn deterministic() {
        let model = PriceModel::default();
        for t in [1, 7, 30, 365, 3650] {
            assert_eq!(model.price_at(t), model.price_at(t));
        }
    }

    #[test]
    fn stays_within_wave_envelope() {
        let base = 60_000.0;
        for t in 0..5_000u32 {
            let trend = base * (TREND_RATE * f64::from(t)).exp();
            let p = synthetic_price(base, t);
            assert!(p >= trend * 0.83 - 1e-9, "t={t}: {p} below envelope");
            assert!(p <= trend * 1.17 + 1e-9, "t={t}: {p} above envelope");
        }
    }

    #[test]
    fn scales_linearly_with_base() {
        for t in [3, 17, 250] {
            let a = synthetic_price(100.0, t);
            let b = synthetic_price(200.0, t);
            assert!((b - 2.0 * a).abs() < 1e-9);
        }
    }

    #[test]
    fn path_matches_point_evaluation() {
        let model = PriceModel::default();
        let path: Vec<PricePoint> = model.path(10).collect();
        assert_eq!(path.len(), 10);
        for (i, p) in path.iter().enumerate() {
            assert_eq!(p.t, i as u32);
            assert_eq!(p.price, model.price_at(i as u32));
        }
    }

    #[test]
    fn default_uses_sixty_thousand_base() {
        assert_eq!(PriceModel::default().base_price(), DEFAULT_BASE_PRICE);
    }
}
