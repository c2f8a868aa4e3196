//! Bitcoin Culture Hub CLI — quiz, DCA, and profit commands.
//!
//! Commands:
//! - `quiz` — score six answers into an investor style and suggest a tool
//! - `dca` — simulate recurring buys against a one-time lump sum
//! - `profit` — compute a buy/sell trade with a sell-price scenario table
//!
//! Inputs come from an optional TOML config; flags override single fields.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use btchub_core::dca::{DcaParams, Interval};
use btchub_core::profit::{self, ScenarioOffset, ScenarioTone, TradeParams};
use btchub_core::quiz::{
    Approach, Experience, Goal, Horizon, RiskTolerance, SurveyAnswers, Tool, VolatilityComfort,
};
use btchub_runner::{
    export_json, format_currency, format_percent, format_units, run_dca, run_profit, run_quiz,
    save_dca_artifacts, Currency, DcaReport, ProfitReport, QuizReport, SessionConfig, DISCLAIMER,
};

#[derive(Parser)]
#[command(
    name = "btchub",
    about = "Bitcoin Culture Hub — investor quiz, DCA simulator, profit calculator"
)]
struct Cli {
    /// Path to a TOML session config. Defaults to <config dir>/btchub/config.toml if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display currency label: USD, EUR, GBP. Values are not converted.
    #[arg(long, global = true)]
    currency: Option<Currency>,

    /// Print the report as JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the investor-style quiz.
    Quiz(QuizArgs),
    /// Simulate dollar-cost averaging against a lump sum.
    Dca(DcaArgs),
    /// Compute profit for a single buy/sell trade.
    Profit(ProfitArgs),
}

#[derive(Args)]
struct QuizArgs {
    /// Investment horizon: Short, Medium, Long.
    #[arg(long)]
    horizon: Option<Horizon>,

    /// Risk tolerance: Low, Medium, High.
    #[arg(long)]
    risk: Option<RiskTolerance>,

    /// Experience: Newbie, Intermediate, Expert.
    #[arg(long)]
    experience: Option<Experience>,

    /// Goal: Preserve, Grow, Max.
    #[arg(long)]
    goal: Option<Goal>,

    /// Volatility comfort: Hate, Tolerate, Thrive.
    #[arg(long)]
    volatility: Option<VolatilityComfort>,

    /// Approach: Passive, Active, Systematic.
    #[arg(long)]
    approach: Option<Approach>,
}

impl QuizArgs {
    fn apply(&self, answers: &mut SurveyAnswers) {
        if let Some(v) = self.horizon {
            answers.horizon = v;
        }
        if let Some(v) = self.risk {
            answers.risk = v;
        }
        if let Some(v) = self.experience {
            answers.experience = v;
        }
        if let Some(v) = self.goal {
            answers.goal = v;
        }
        if let Some(v) = self.volatility {
            answers.volatility = v;
        }
        if let Some(v) = self.approach {
            answers.approach = v;
        }
    }
}

#[derive(Args)]
struct DcaArgs {
    /// Amount invested each interval.
    #[arg(long)]
    amount: Option<f64>,

    /// Purchase interval: Daily, Weekly, Monthly.
    #[arg(long)]
    interval: Option<Interval>,

    /// Simulation length in years (1-10).
    #[arg(long)]
    years: Option<u32>,

    /// Disable the purchase fee.
    #[arg(long, default_value_t = false)]
    no_fees: bool,

    /// Purchase fee percent (0-5). Enables the fee.
    #[arg(long, conflicts_with = "no_fees")]
    fee_percent: Option<f64>,

    /// Last purchase date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Write CSV / JSON / Markdown artifacts under this directory.
    #[arg(long)]
    export: Option<PathBuf>,
}

impl DcaArgs {
    fn apply(&self, params: &mut DcaParams) {
        if let Some(v) = self.amount {
            params.amount_per_interval = v;
        }
        if let Some(v) = self.interval {
            params.interval = v;
        }
        if let Some(v) = self.years {
            params.duration_years = v;
        }
        if self.no_fees {
            params.fee_enabled = false;
        }
        if let Some(v) = self.fee_percent {
            params.fee_enabled = true;
            params.fee_percent = v;
        }
    }
}

#[derive(Args)]
struct ProfitArgs {
    /// Initial investment.
    #[arg(long)]
    initial: Option<f64>,

    /// Buy price per unit.
    #[arg(long)]
    buy: Option<f64>,

    /// Sell price per unit.
    #[arg(long)]
    sell: Option<f64>,

    /// Entry fee percent (0-5).
    #[arg(long)]
    entry_fee: Option<f64>,

    /// Exit fee percent (0-5).
    #[arg(long)]
    exit_fee: Option<f64>,

    /// Replace the sell price with a scenario's rounded price: -20%, -10%, Now, +10%, +20%.
    #[arg(long, allow_hyphen_values = true)]
    scenario: Option<ScenarioOffset>,
}

impl ProfitArgs {
    fn apply(&self, params: &mut TradeParams) {
        if let Some(v) = self.initial {
            params.initial = v;
        }
        if let Some(v) = self.buy {
            params.buy_price = v;
        }
        if let Some(v) = self.sell {
            params.sell_price = v;
        }
        if let Some(v) = self.entry_fee {
            params.entry_fee_percent = v;
        }
        if let Some(v) = self.exit_fee {
            params.exit_fee_percent = v;
        }
        if let Some(offset) = self.scenario {
            if let Some(point) = profit::sweep(params).iter().find(|p| p.offset == offset) {
                *params = profit::apply(params, point);
            }
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(currency) = cli.currency {
        config.currency = currency;
    }

    match cli.command {
        Commands::Quiz(args) => {
            args.apply(&mut config.quiz);
            let report = run_quiz(&config.quiz);
            if cli.json {
                println!("{}", export_json(&report)?);
            } else {
                print!("{}", render_quiz(&report));
            }
        }
        Commands::Dca(args) => {
            args.apply(&mut config.dca);
            let as_of = args
                .as_of
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            let report = run_dca(&config.dca, config.currency, as_of)?;
            if cli.json {
                println!("{}", export_json(&report)?);
            } else {
                print!("{}", render_dca(&report));
            }
            if let Some(dir) = &args.export {
                let run_dir = save_dca_artifacts(&report, dir)?;
                // stderr keeps --json output parseable
                eprintln!("Artifacts saved to: {}", run_dir.display());
            }
        }
        Commands::Profit(args) => {
            args.apply(&mut config.profit);
            let report = run_profit(&config.profit, config.currency)?;
            if cli.json {
                println!("{}", export_json(&report)?);
            } else {
                print!("{}", render_profit(&report));
            }
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<SessionConfig> {
    if let Some(path) = explicit {
        return SessionConfig::from_file(path)
            .with_context(|| format!("loading --config {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::info!(path = %path.display(), "using user config");
            Ok(SessionConfig::from_file(&path)?)
        }
        _ => Ok(SessionConfig::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("btchub").join("config.toml"))
}

fn tool_command(tool: Tool) -> &'static str {
    match tool {
        Tool::DcaSimulator => "btchub dca",
        Tool::ProfitCalculator => "btchub profit",
    }
}

/// One output line.
fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

fn render_quiz(report: &QuizReport) -> String {
    let outcome = &report.outcome;
    let mut out = String::new();
    line(&mut out, "");
    line(&mut out, "=== Investor Style ===");
    for (style, share) in outcome.score.iter() {
        let bar = "#".repeat((share * 20.0).round() as usize);
        line(
            &mut out,
            format!("{:<14}{:>7}  {bar}", format!("{style}:"), format_percent(share)),
        );
    }
    line(&mut out, "");
    line(&mut out, format!("You're {}. {}", outcome.style, outcome.message));
    line(
        &mut out,
        format!(
            "Next step:    {} ({})",
            outcome.recommended_tool.name(),
            tool_command(outcome.recommended_tool)
        ),
    );
    line(&mut out, "");
    line(&mut out, DISCLAIMER);
    out
}

fn render_dca(report: &DcaReport) -> String {
    let c = report.currency;
    let p = &report.params;
    let s = &report.summary;
    let mut out = String::new();
    line(&mut out, "");
    line(&mut out, "=== DCA Simulation ===");
    line(
        &mut out,
        format!(
            "Plan:           {} {} for {} year(s)",
            format_currency(p.amount_per_interval, c),
            p.interval,
            p.duration_years
        ),
    );
    if p.fee_enabled {
        line(&mut out, format!("Fee:            {}%", p.fee_percent));
    } else {
        line(&mut out, "Fee:            off");
    }
    if let (Some(first), Some(last)) = (report.entries.first(), report.entries.last()) {
        line(&mut out, format!("Period:         {} to {}", first.date, last.date));
    }
    line(&mut out, format!("Purchases:      {}", s.periods));
    line(
        &mut out,
        format!("Total Invested: {}", format_currency(s.total_invested, c)),
    );
    line(
        &mut out,
        format!("BTC Acquired:   {}", format_units(s.units_accumulated, 6)),
    );
    line(&mut out, "");
    line(&mut out, "--- Current Value ---");
    line(
        &mut out,
        format!(
            "DCA:            {} ({})",
            format_currency(s.dca_final_value, c),
            format_percent(s.dca_roi)
        ),
    );
    line(
        &mut out,
        format!(
            "Lump Sum:       {} ({})",
            format_currency(s.lump_final_value, c),
            format_percent(s.lump_roi)
        ),
    );
    let edge = s.dca_edge();
    let leader = if edge >= 0.0 { "DCA" } else { "Lump Sum" };
    line(
        &mut out,
        format!("Edge:           {leader} by {}", format_percent(edge.abs())),
    );
    line(&mut out, "");
    line(&mut out, DISCLAIMER);
    out
}

fn render_profit(report: &ProfitReport) -> String {
    let c = report.currency;
    let a = &report.analysis;
    let mut out = String::new();
    line(&mut out, "");
    line(&mut out, "=== Profit Calculator ===");
    line(
        &mut out,
        format!("Initial:        {}", format_currency(a.params.initial, c)),
    );
    line(
        &mut out,
        format!(
            "Buy / Sell:     {} / {}",
            format_currency(a.params.buy_price, c),
            format_currency(a.params.sell_price, c)
        ),
    );
    line(
        &mut out,
        format!(
            "Fees:           {}% entry, {}% exit",
            a.params.entry_fee_percent, a.params.exit_fee_percent
        ),
    );
    line(
        &mut out,
        format!("Quantity:       {}", format_units(a.result.quantity, 6)),
    );
    line(
        &mut out,
        format!("Exit Value:     {}", format_currency(a.result.exit_value, c)),
    );
    line(
        &mut out,
        format!(
            "Profit / ROI:   {} • {}",
            format_currency(a.result.profit, c),
            format_percent(a.result.roi)
        ),
    );
    line(&mut out, "");
    line(&mut out, "--- Scenarios ---");
    line(&mut out, format!("{:<6} {:>16} {:>16}", "Move", "Sell Price", "Profit"));
    line(&mut out, "-".repeat(40));
    for point in &a.scenarios {
        let marker = match point.tone() {
            ScenarioTone::Loss => "▼",
            ScenarioTone::Current => "•",
            ScenarioTone::Gain => "▲",
        };
        line(
            &mut out,
            format!(
                "{:<6} {:>16} {:>16} {marker}",
                point.label(),
                format_currency(point.rounded_sell_price(), c),
                format_currency(point.profit, c)
            ),
        );
    }
    line(&mut out, "");
    line(&mut out, DISCLAIMER);
    out
}
