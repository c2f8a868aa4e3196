use btchub_core::dca::Interval;
use btchub_core::quiz::{Horizon, InvestorStyle, RiskTolerance, VolatilityComfort};
use btchub_runner::{run_all, ConfigError, Currency, SessionConfig};
use chrono::NaiveDate;

const FULL_CONFIG: &str = r#"
currency = "EUR"

[quiz]
horizon = "Long"
risk = "High"
experience = "Expert"
goal = "Max"
volatility = "Thrive"
approach = "Active"

[dca]
amount_per_interval = 50.0
interval = "Daily"
duration_years = 2
fee_enabled = false
fee_percent = 0.0

[profit]
initial = 5000.0
buy_price = 40000.0
sell_price = 48000.0
entry_fee_percent = 0.25
exit_fee_percent = 0.25
"#;

#[test]
fn test_full_config_file_drives_every_calculator() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, FULL_CONFIG).unwrap();

    let config = SessionConfig::from_file(&path).unwrap();
    assert_eq!(config.currency, Currency::Eur);
    assert_eq!(config.quiz.horizon, Horizon::Long);
    assert_eq!(config.quiz.risk, RiskTolerance::High);
    assert_eq!(config.quiz.volatility, VolatilityComfort::Thrive);
    assert_eq!(config.dca.interval, Interval::Daily);

    let as_of = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
    let (quiz, dca, profit) = run_all(&config, as_of).unwrap();
    assert_eq!(quiz.outcome.style, InvestorStyle::Aggressive);
    assert_eq!(quiz.outcome.score.aggressive, 1.0);
    assert_eq!(dca.currency, Currency::Eur);
    assert!(dca.summary.periods > 700);
    assert!(profit.analysis.result.profit > 0.0);
}

#[test]
fn test_invalid_file_is_rejected_with_context() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[profit]\nentry_fee_percent = 9.0\n").unwrap();

    let err = SessionConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("entry_fee_percent"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "currency = ").unwrap();

    let err = SessionConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_serializes_back_to_toml() {
    let config = SessionConfig::from_toml(FULL_CONFIG).unwrap();
    let text = toml::to_string(&config).unwrap();
    let back = SessionConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}
