//! Single buy/sell round trip with percentage fees on both legs.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, InputError};

pub const MIN_INITIAL: f64 = 1.0;
pub const MIN_PRICE: f64 = 1.0;
pub const MAX_VALUE: f64 = 1e9;
pub const MAX_FEE_PERCENT: f64 = 5.0;

/// Inputs for one trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TradeParams {
    /// Cash spent on the buy, before the entry fee.
    pub initial: f64,
    /// Price per unit at entry.
    pub buy_price: f64,
    /// Price per unit at exit.
    pub sell_price: f64,
    /// Percent of `initial` lost to the entry fee.
    pub entry_fee_percent: f64,
    /// Percent of the gross sale lost to the exit fee.
    pub exit_fee_percent: f64,
}

impl Default for TradeParams {
    fn default() -> Self {
        Self {
            initial: 1_000.0,
            buy_price: 60_000.0,
            sell_price: 65_000.0,
            entry_fee_percent: 0.1,
            exit_fee_percent: 0.1,
        }
    }
}

impl TradeParams {
    pub fn validate(&self) -> Result<(), InputError> {
        check_range("initial", self.initial, MIN_INITIAL, MAX_VALUE)?;
        check_range("buy_price", self.buy_price, MIN_PRICE, MAX_VALUE)?;
        check_range("sell_price", self.sell_price, MIN_PRICE, MAX_VALUE)?;
        check_range(
            "entry_fee_percent",
            self.entry_fee_percent,
            0.0,
            MAX_FEE_PERCENT,
        )?;
        check_range(
            "exit_fee_percent",
            self.exit_fee_percent,
            0.0,
            MAX_FEE_PERCENT,
        )?;
        Ok(())
    }

    /// Units bought after the entry fee. Zero when `buy_price <= 0`.
    pub fn quantity(&self) -> f64 {
        if self.buy_price <= 0.0 {
            return 0.0;
        }
        self.initial * (1.0 - self.entry_fee_percent / 100.0) / self.buy_price
    }

    /// Proceeds of selling `quantity` at `sell_price`, net of the exit fee.
    pub fn exit_value_at(&self, quantity: f64, sell_price: f64) -> f64 {
        quantity * sell_price * (1.0 - self.exit_fee_percent / 100.0)
    }

    /// Profit on `initial` when selling `quantity` at `sell_price`.
    pub fn profit_at(&self, quantity: f64, sell_price: f64) -> f64 {
        self.exit_value_at(quantity, sell_price) - self.initial
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeResult {
    /// Units held after the entry fee.
    pub quantity: f64,
    /// Sale proceeds after the exit fee.
    pub exit_value: f64,
    /// `exit_value - initial`.
    pub profit: f64,
    /// `profit / initial`; zero when `initial` is zero.
    pub roi: f64,
}

pub fn compute(params: &TradeParams) -> TradeResult {
    let quantity = params.quantity();
    let exit_value = params.exit_value_at(quantity, params.sell_price);
    let profit = params.profit_at(quantity, params.sell_price);
    let roi = if params.initial != 0.0 {
        profit / params.initial
    } else {
        0.0
    };
    TradeResult {
        quantity,
        exit_value,
        profit,
        roi,
    }
}
