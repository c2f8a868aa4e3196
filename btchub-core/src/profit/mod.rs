//! Buy/sell profit calculator with a sell-price scenario sweep.

pub mod scenario;
pub mod trade;

use serde::{Deserialize, Serialize};

pub use scenario::{apply, sweep, ScenarioOffset, ScenarioPoint, ScenarioTone};
pub use trade::{compute, TradeParams, TradeResult};

/// Trade result together with its scenario sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAnalysis {
    pub params: TradeParams,
    pub result: TradeResult,
    pub scenarios: [ScenarioPoint; 5],
}

pub fn analyze(params: &TradeParams) -> TradeAnalysis {
    TradeAnalysis {
        params: *params,
        result: compute(params),
        scenarios: sweep(params),
    }
}
