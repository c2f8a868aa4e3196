//! Bitcoin Culture Hub runner: sessions, configuration, formatting, export.
//!
//! This crate builds on `btchub-core` to provide:
//! - TOML session configuration with validation and fingerprinting
//! - Report assembly for the quiz, DCA, and profit calculators
//! - Display formatting (currency labels, percentages, unit quantities)
//! - CSV / JSON / Markdown export and on-disk artifact bundles

pub mod config;
pub mod export;
pub mod format;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use export::{
    export_dca_csv, export_json, generate_dca_report, generate_profit_report,
    generate_quiz_report, import_dca_json, load_dca_artifacts, save_dca_artifacts, DISCLAIMER,
};
pub use format::{format_currency, format_percent, format_units, Currency, UnknownCurrency};
pub use session::{
    run_all, run_dca, run_profit, run_quiz, DcaReport, ProfitReport, QuizReport, RunError,
    SCHEMA_VERSION,
};
