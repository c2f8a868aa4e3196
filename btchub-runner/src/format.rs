//! Display formatting — currency labels, money, percentages, unit quantities.
//!
//! Currency is a label only: values are never converted between currencies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency '{0}'. Valid: USD, EUR, GBP")]
pub struct UnknownCurrency(pub String);

impl Currency {
    pub const ALL: [Self; 3] = [Self::Usd, Self::Eur, Self::Gbp];

    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// `$1,234.56` style: symbol prefix, thousands separators, two decimals.
/// Negative values get a leading minus (`-$81.24`).
pub fn format_currency(value: f64, currency: Currency) -> String {
    if !value.is_finite() {
        return format!("{}{value}", currency.symbol());
    }
    let cents = (value.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let frac = (cents - whole * 100.0) as u64;
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };
    format!(
        "{sign}{}{}.{frac:02}",
        currency.symbol(),
        group_thousands(&format!("{whole:.0}"))
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fraction as a one-decimal percentage: `0.0812` → `8.1%`.
pub fn format_percent(fraction: f64) -> String {
    // + 0.0 folds -0.0 into 0.0
    format!("{:.1}%", fraction * 100.0 + 0.0)
}

/// Asset quantity with a fixed number of decimals: `0.016650 BTC`.
pub fn format_units(units: f64, decimals: usize) -> String {
    format!("{units:.decimals$} BTC")
}
