//! Reporting and export — CSV, JSON, and Markdown artifact generation.
//!
//! - **CSV**: DCA breakdown, one row per purchase period
//! - **JSON**: full report round-trip with schema versioning
//! - **Markdown**: human-readable summaries for each calculator
//!
//! Persisted manifests carry `schema_version`; newer versions are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use btchub_core::dca::DcaSeriesEntry;
use serde::Serialize;

use crate::format::{format_currency, format_percent, format_units};
use crate::session::{DcaReport, ProfitReport, QuizReport, SCHEMA_VERSION};

/// File name of the DCA breakdown inside an artifact directory.
pub const DCA_CSV_FILE: &str = "bch_dca_breakdown.csv";
pub const MANIFEST_FILE: &str = "manifest.json";
pub const REPORT_FILE: &str = "report.md";

pub const DISCLAIMER: &str = "Not financial advice. Past performance ≠ future results.";

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the DCA breakdown.
///
/// Columns: Date, DCA Value, Lump Value, BTC Bought, BTC Cumulative.
/// Money columns use two decimals, unit columns eight.
pub fn export_dca_csv(entries: &[DcaSeriesEntry]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "Date",
        "DCA Value",
        "Lump Value",
        "BTC Bought",
        "BTC Cumulative",
    ])?;

    for e in entries {
        wtr.write_record([
            &e.date.format("%Y-%m-%d").to_string(),
            &format!("{:.2}", e.dca_value),
            &format!("{:.2}", e.lump_value),
            &format!("{:.8}", e.units_bought),
            &format!("{:.8}", e.cumulative_units),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize any report to pretty JSON.
pub fn export_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report to JSON")
}

/// Deserialize a `DcaReport`, rejecting unknown schema versions.
pub fn import_dca_json(json: &str) -> Result<DcaReport> {
    let report: DcaReport =
        serde_json::from_str(json).context("failed to deserialize DcaReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the artifact set for a DCA run.
///
/// Creates `dca_{fingerprint prefix}/` under `output_dir` containing:
/// - `bch_dca_breakdown.csv` — per-period breakdown
/// - `manifest.json` — the full `DcaReport`
/// - `report.md` — Markdown summary
///
/// The same inputs always map to the same directory; files are overwritten.
pub fn save_dca_artifacts(report: &DcaReport, output_dir: &Path) -> Result<PathBuf> {
    let prefix = report.fingerprint.get(..8).unwrap_or(&report.fingerprint);
    let run_dir = output_dir.join(format!("dca_{prefix}"));
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    let csv = export_dca_csv(&report.entries)?;
    std::fs::write(run_dir.join(DCA_CSV_FILE), csv)?;

    let json = export_json(report)?;
    std::fs::write(run_dir.join(MANIFEST_FILE), json)?;

    std::fs::write(run_dir.join(REPORT_FILE), generate_dca_report(report))?;

    tracing::info!(dir = %run_dir.display(), rows = report.entries.len(), "saved dca artifacts");
    Ok(run_dir)
}

/// Load a `DcaReport` from an artifact directory's manifest.json.
pub fn load_dca_artifacts(dir: &Path) -> Result<DcaReport> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let json = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    import_dca_json(&json)
}

// ─── Markdown reports ───────────────────────────────────────────────

pub fn generate_quiz_report(report: &QuizReport) -> String {
    let outcome = &report.outcome;
    let mut md = String::with_capacity(1024);

    md.push_str("# Investor Style\n\n");
    md.push_str(&format!("**You're {}.** {}\n\n", outcome.style, outcome.message));

    md.push_str("## Answers\n\n");
    md.push_str("| Question | Answer | Counts toward | Weight |\n");
    md.push_str("| --- | --- | --- | ---: |\n");
    for c in outcome.answers.contributions() {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            c.question, c.answer, c.style, c.weight
        ));
    }
    md.push('\n');

    md.push_str("## Style Breakdown\n\n");
    md.push_str("| Style | Share |\n");
    md.push_str("| --- | ---: |\n");
    for (style, share) in outcome.score.iter() {
        md.push_str(&format!("| {} | {} |\n", style, format_percent(share)));
    }
    md.push('\n');

    md.push_str(&format!(
        "Next step: **{}**\n\n",
        outcome.recommended_tool.name()
    ));
    md.push_str(&format!("_{DISCLAIMER}_\n"));
    md
}

pub fn generate_dca_report(report: &DcaReport) -> String {
    let c = report.currency;
    let p = &report.params;
    let s = &report.summary;
    let mut md = String::with_capacity(2048);

    md.push_str("# DCA Simulation\n\n");

    md.push_str("## Inputs\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!(
        "| Amount per Interval | {} |\n",
        format_currency(p.amount_per_interval, c)
    ));
    md.push_str(&format!("| Interval | {} |\n", p.interval));
    md.push_str(&format!(
        "| Duration | {} year{} |\n",
        p.duration_years,
        if p.duration_years > 1 { "s" } else { "" }
    ));
    let fee = if p.fee_enabled {
        format!("{}%", p.fee_percent)
    } else {
        "off".to_string()
    };
    md.push_str(&format!("| Fee | {fee} |\n"));
    md.push_str(&format!("| As of | {} |\n", report.as_of));
    if let (Some(first), Some(last)) = (report.entries.first(), report.entries.last()) {
        md.push_str(&format!("| Period | {} to {} |\n", first.date, last.date));
    }
    md.push('\n');

    md.push_str("## Results\n\n");
    md.push_str("| Metric | DCA | Lump Sum |\n");
    md.push_str("| --- | ---: | ---: |\n");
    md.push_str(&format!(
        "| Total Invested | {} | {} |\n",
        format_currency(s.total_invested, c),
        format_currency(s.total_invested, c)
    ));
    md.push_str(&format!(
        "| Current Value | {} | {} |\n",
        format_currency(s.dca_final_value, c),
        format_currency(s.lump_final_value, c)
    ));
    md.push_str(&format!(
        "| ROI | {} | {} |\n",
        format_percent(s.dca_roi),
        format_percent(s.lump_roi)
    ));
    md.push('\n');
    md.push_str(&format!(
        "BTC accumulated over {} purchases: {}\n\n",
        s.periods,
        format_units(s.units_accumulated, 6)
    ));

    md.push_str(&format!("_{DISCLAIMER}_\n"));
    md
}

pub fn generate_profit_report(report: &ProfitReport) -> String {
    let c = report.currency;
    let a = &report.analysis;
    let mut md = String::with_capacity(1536);

    md.push_str("# Profit Calculator\n\n");

    md.push_str("## Trade\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!(
        "| Initial Investment | {} |\n",
        format_currency(a.params.initial, c)
    ));
    md.push_str(&format!(
        "| Buy Price | {} |\n",
        format_currency(a.params.buy_price, c)
    ));
    md.push_str(&format!(
        "| Sell Price | {} |\n",
        format_currency(a.params.sell_price, c)
    ));
    md.push_str(&format!(
        "| Entry / Exit Fee | {}% / {}% |\n",
        a.params.entry_fee_percent, a.params.exit_fee_percent
    ));
    md.push_str(&format!(
        "| Quantity | {} |\n",
        format_units(a.result.quantity, 6)
    ));
    md.push_str(&format!(
        "| Exit Value | {} |\n",
        format_currency(a.result.exit_value, c)
    ));
    md.push_str(&format!(
        "| Profit / ROI | {} • {} |\n",
        format_currency(a.result.profit, c),
        format_percent(a.result.roi)
    ));
    md.push('\n');

    md.push_str("## Scenarios\n\n");
    md.push_str("| Scenario | Sell Price | Profit |\n");
    md.push_str("| --- | ---: | ---: |\n");
    for point in &a.scenarios {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            point.label(),
            format_currency(point.sell_price, c),
            format_currency(point.profit, c)
        ));
    }
    md.push('\n');

    md.push_str(&format!("_{DISCLAIMER}_\n"));
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Currency;
    use crate::session::{run_dca, run_profit, run_quiz};
    use btchub_core::dca::DcaParams;
    use btchub_core::profit::TradeParams;
    use btchub_core::quiz::SurveyAnswers;
    use chrono::NaiveDate;

    fn sample_entries() -> Vec<DcaSeriesEntry> {
        vec![
            DcaSeriesEntry {
                date: NaiveDate::from_ymd_opt(2024, 10, 17).unwrap(),
                price: 60_000.0,
                dca_value: 99.0,
                lump_value: 5_247.0,
                units_bought: 0.00165,
                cumulative_units: 0.00165,
            },
            DcaSeriesEntry {
                date: NaiveDate::from_ymd_opt(2024, 10, 24).unwrap(),
                price: 61_234.567,
                dca_value: 200.123456,
                lump_value: 5_355.5,
                units_bought: 0.001616747,
                cumulative_units: 0.003266747,
            },
        ]
    }

    #[test]
    fn csv_header_and_precision() {
        let csv = export_dca_csv(&sample_entries()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,DCA Value,Lump Value,BTC Bought,BTC Cumulative");
        assert_eq!(lines[1], "2024-10-17,99.00,5247.00,0.00165000,0.00165000");
        assert_eq!(lines[2], "2024-10-24,200.12,5355.50,0.00161675,0.00326675");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_of_empty_series_is_header_only() {
        let csv = export_dca_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn dca_json_round_trip() {
        let as_of = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        let report = run_dca(&DcaParams::default(), Currency::Usd, as_of).unwrap();
        let json = export_json(&report).unwrap();
        let back = import_dca_json(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn rejects_newer_schema() {
        let as_of = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        let mut report = run_dca(&DcaParams::default(), Currency::Usd, as_of).unwrap();
        report.schema_version = SCHEMA_VERSION + 1;
        let json = export_json(&report).unwrap();
        let err = import_dca_json(&json).unwrap_err();
        assert!(err.to_string().contains("unsupported schema version"));
    }

    #[test]
    fn quiz_report_lists_answers_and_next_step() {
        let md = generate_quiz_report(&run_quiz(&SurveyAnswers::default()));
        assert!(md.contains("**You're Balanced.**"));
        assert!(md.contains("| approach | Systematic | Balanced | 1 |"));
        assert!(md.contains("Next step: **DCA Simulator**"));
        assert!(md.contains(DISCLAIMER));
    }

    #[test]
    fn profit_report_has_all_scenarios() {
        let report = run_profit(&TradeParams::default(), Currency::Usd).unwrap();
        let md = generate_profit_report(&report);
        for label in ["-20%", "-10%", "Now", "+10%", "+20%"] {
            assert!(md.contains(&format!("| {label} |")), "missing {label}");
        }
        assert!(md.contains("| Exit Value | $1,081.17 |"));
        assert!(md.contains("| Quantity | 0.016650 BTC |"));
    }

    #[test]
    fn dca_report_uses_currency_label() {
        let as_of = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        let report = run_dca(&DcaParams::default(), Currency::Eur, as_of).unwrap();
        let md = generate_dca_report(&report);
        assert!(md.contains("| Amount per Interval | €100.00 |"));
        assert!(md.contains("| Total Invested | €5,300.00 | €5,300.00 |"));
        assert!(md.contains("| Duration | 1 year |"));
    }
}
