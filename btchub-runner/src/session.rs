//! Session runner — validates inputs, calls the engine, packages reports.
//!
//! Reports are the serializable unit handed to the front end and the
//! exporters. Each carries a `schema_version` so persisted manifests from a
//! newer build are rejected on load.

use btchub_core::dca::{self, DcaParams, DcaSeriesEntry, DcaSummary};
use btchub_core::profit::{self, TradeAnalysis, TradeParams};
use btchub_core::quiz::{self, QuizOutcome, SurveyAnswers};
use btchub_core::InputError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SessionConfig;
use crate::format::Currency;

/// Current report schema version.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizReport {
    pub schema_version: u32,
    pub outcome: QuizOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcaReport {
    pub schema_version: u32,
    /// BLAKE3 of the inputs that determine the series.
    pub fingerprint: String,
    pub currency: Currency,
    pub as_of: NaiveDate,
    pub params: DcaParams,
    pub summary: DcaSummary,
    pub entries: Vec<DcaSeriesEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    pub schema_version: u32,
    pub currency: Currency,
    pub analysis: TradeAnalysis,
}

pub fn run_quiz(answers: &SurveyAnswers) -> QuizReport {
    let outcome = quiz::evaluate(answers);
    tracing::debug!(
        conservative = outcome.score.conservative,
        balanced = outcome.score.balanced,
        aggressive = outcome.score.aggressive,
        style = %outcome.style,
        "quiz scored"
    );
    QuizReport {
        schema_version: SCHEMA_VERSION,
        outcome,
    }
}

pub fn run_dca(
    params: &DcaParams,
    currency: Currency,
    as_of: NaiveDate,
) -> Result<DcaReport, RunError> {
    let _span = tracing::info_span!(
        "dca",
        interval = %params.interval,
        years = params.duration_years,
        %as_of
    )
    .entered();

    params.validate()?;
    let series = dca::simulate(params, as_of);
    let summary = series.summary();
    tracing::info!(
        periods = summary.periods,
        invested = summary.total_invested,
        dca_roi = summary.dca_roi,
        lump_roi = summary.lump_roi,
        "dca simulated"
    );

    Ok(DcaReport {
        schema_version: SCHEMA_VERSION,
        fingerprint: dca_fingerprint(params, as_of),
        currency,
        as_of,
        params: *params,
        summary,
        entries: series.entries,
    })
}

pub fn run_profit(params: &TradeParams, currency: Currency) -> Result<ProfitReport, RunError> {
    params.validate()?;
    let analysis = profit::analyze(params);
    tracing::info!(
        quantity = analysis.result.quantity,
        profit = analysis.result.profit,
        roi = analysis.result.roi,
        "trade computed"
    );
    Ok(ProfitReport {
        schema_version: SCHEMA_VERSION,
        currency,
        analysis,
    })
}

/// Run all three calculators from one config.
pub fn run_all(
    config: &SessionConfig,
    as_of: NaiveDate,
) -> Result<(QuizReport, DcaReport, ProfitReport), RunError> {
    Ok((
        run_quiz(&config.quiz),
        run_dca(&config.dca, config.currency, as_of)?,
        run_profit(&config.profit, config.currency)?,
    ))
}

fn dca_fingerprint(params: &DcaParams, as_of: NaiveDate) -> String {
    let canonical = serde_json::json!({
        "params": params,
        "as_of": as_of,
    });
    blake3::hash(canonical.to_string().as_bytes())
        .to_hex()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use btchub_core::quiz::InvestorStyle;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 17).unwrap()
    }

    #[test]
    fn quiz_report_carries_schema_version() {
        let report = run_quiz(&SurveyAnswers::default());
        assert_eq!(report.schema_version, SCHEMA_VERSION);
        assert_eq!(report.outcome.style, InvestorStyle::Balanced);
    }

    #[test]
    fn dca_report_matches_engine() {
        let params = DcaParams::default();
        let report = run_dca(&params, Currency::Eur, as_of()).unwrap();
        let series = dca::simulate(&params, as_of());
        assert_eq!(report.entries, series.entries);
        assert_eq!(report.summary, series.summary());
        assert_eq!(report.currency, Currency::Eur);
    }

    #[test]
    fn dca_rejects_invalid_params() {
        let params = DcaParams {
            duration_years: 0,
            ..DcaParams::default()
        };
        assert!(matches!(
            run_dca(&params, Currency::Usd, as_of()),
            Err(RunError::Input(_))
        ));
    }

    #[test]
    fn dca_fingerprint_ignores_currency_but_tracks_date() {
        let params = DcaParams::default();
        let a = run_dca(&params, Currency::Usd, as_of()).unwrap();
        let b = run_dca(&params, Currency::Gbp, as_of()).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        let later = as_of().succ_opt().unwrap();
        let c = run_dca(&params, Currency::Usd, later).unwrap();
        assert_ne!(a.fingerprint, c.fingerprint);
    }

    #[test]
    fn profit_report_includes_scenarios() {
        let report = run_profit(&TradeParams::default(), Currency::Usd).unwrap();
        assert_eq!(report.analysis.scenarios.len(), 5);
        assert_eq!(
            report.analysis.scenarios[2].profit,
            report.analysis.result.profit
        );
    }

    #[test]
    fn profit_rejects_zero_buy_price() {
        let params = TradeParams {
            buy_price: 0.0,
            ..TradeParams::default()
        };
        assert!(run_profit(&params, Currency::Usd).is_err());
    }

    #[test]
    fn run_all_uses_every_section() {
        let (quiz_report, dca_report, profit_report) =
            run_all(&SessionConfig::default(), as_of()).unwrap();
        assert_eq!(quiz_report.outcome.answers, SurveyAnswers::default());
        assert_eq!(dca_report.params, DcaParams::default());
        assert_eq!(profit_report.analysis.params, TradeParams::default());
    }
}
