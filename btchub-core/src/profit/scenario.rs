//! What-if sweep over the sell price.
//!
//! The entry side (initial, quantity) is held fixed; only the sell price
//! moves. Points are ordered by increasing offset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::trade::TradeParams;
use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioOffset {
    #[serde(rename = "-20%")]
    Down20,
    #[serde(rename = "-10%")]
    Down10,
    #[serde(rename = "Now")]
    Now,
    #[serde(rename = "+10%")]
    Up10,
    #[serde(rename = "+20%")]
    Up20,
}

impl ScenarioOffset {
    pub const ALL: [Self; 5] = [
        Self::Down20,
        Self::Down10,
        Self::Now,
        Self::Up10,
        Self::Up20,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Down20 => 0.8,
            Self::Down10 => 0.9,
            Self::Now => 1.0,
            Self::Up10 => 1.1,
            Self::Up20 => 1.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Down20 => "-20%",
            Self::Down10 => "-10%",
            Self::Now => "Now",
            Self::Up10 => "+10%",
            Self::Up20 => "+20%",
        }
    }

    pub fn tone(self) -> ScenarioTone {
        match self {
            Self::Down20 | Self::Down10 => ScenarioTone::Loss,
            Self::Now => ScenarioTone::Current,
            Self::Up10 | Self::Up20 => ScenarioTone::Gain,
        }
    }
}

impl fmt::Display for ScenarioOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScenarioOffset {
    type Err = InputError;

    /// Accepts the labels, case-insensitively: `-20%`, `-10%`, `now`, `+10%`, `+20%`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|o| o.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownChoice {
                question: "scenario",
                value: s.to_string(),
                expected: "-20%, -10%, Now, +10%, +20%".into(),
            })
    }
}

/// Display category of a scenario bar (by offset, not by sign of profit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioTone {
    Loss,
    Current,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPoint {
    pub offset: ScenarioOffset,
    pub sell_price: f64,
    pub profit: f64,
}

impl ScenarioPoint {
    pub fn label(&self) -> &'static str {
        self.offset.label()
    }

    pub fn tone(&self) -> ScenarioTone {
        self.offset.tone()
    }

    /// Sell price rounded to a whole unit, as applied when a scenario is
    /// picked as the new sell price.
    pub fn rounded_sell_price(&self) -> f64 {
        self.sell_price.round()
    }
}

/// Profit at each of the five fixed offsets from the current sell price.
pub fn sweep(params: &TradeParams) -> [ScenarioPoint; 5] {
    let quantity = params.quantity();
    ScenarioOffset::ALL.map(|offset| {
        let sell_price = params.sell_price * offset.multiplier();
        ScenarioPoint {
            offset,
            sell_price,
            profit: params.profit_at(quantity, sell_price),
        }
    })
}

/// `params` with the sell price replaced by the scenario's rounded price.
pub fn apply(params: &TradeParams, point: &ScenarioPoint) -> TradeParams {
    TradeParams {
        sell_price: point.rounded_sell_price(),
        ..*params
    }
}
