//! Serializable session configuration.
//!
//! One TOML file can seed all three calculators. Every section is optional
//! and falls back to the calculators' starting values:
//!
//! ```toml
//! currency = "EUR"
//!
//! [dca]
//! amount_per_interval = 250.0
//! interval = "Monthly"
//! duration_years = 5
//! ```

use std::path::{Path, PathBuf};

use btchub_core::dca::DcaParams;
use btchub_core::profit::TradeParams;
use btchub_core::quiz::SurveyAnswers;
use btchub_core::InputError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::Currency;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] InputError),
}

/// Inputs for all three calculators plus the display currency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub currency: Currency,
    pub quiz: SurveyAnswers,
    pub dca: DcaParams,
    pub profit: TradeParams,
}

impl SessionConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        self.dca.validate()?;
        self.profit.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btchub_core::dca::Interval;
    use btchub_core::quiz::{Goal, RiskTolerance};

    #[test]
    fn empty_toml_gives_defaults() {
        let config = SessionConfig::from_toml("").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.currency, Currency::Usd);
        assert_eq!(config.dca.amount_per_interval, 100.0);
        assert_eq!(config.dca.interval, Interval::Weekly);
        assert!(config.dca.fee_enabled);
        assert_eq!(config.profit.sell_price, 65_000.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = SessionConfig::from_toml(
            r#"
currency = "GBP"

[quiz]
risk = "High"

[dca]
interval = "Monthly"
duration_years = 5
"#,
        )
        .unwrap();
        assert_eq!(config.currency, Currency::Gbp);
        assert_eq!(config.quiz.risk, RiskTolerance::High);
        assert_eq!(config.quiz.goal, Goal::Grow);
        assert_eq!(config.dca.interval, Interval::Monthly);
        assert_eq!(config.dca.duration_years, 5);
        assert_eq!(config.dca.amount_per_interval, 100.0);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = SessionConfig::from_toml("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = SessionConfig::from_toml("[dca]\nduration_years = 20").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("duration_years"));
    }

    #[test]
    fn rejects_unknown_answer() {
        let err = SessionConfig::from_toml("[quiz]\nhorizon = \"Forever\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SessionConfig::from_file(Path::new("/nonexistent/btchub.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/btchub.toml"));
    }

    #[test]
    fn rejects_unknown_keys_inside_sections() {
        for toml in [
            "[dca]\namount = 250.0",
            "[profit]\nsell = 70000.0",
            "[quiz]\nrisk_tolerance = \"High\"",
        ] {
            let err = SessionConfig::from_toml(toml).unwrap_err();
            assert!(matches!(err, ConfigError::Parse(_)), "accepted {toml:?}");
        }
    }
}
