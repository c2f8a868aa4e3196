//! Weighted style scoring.
//!
//! Every answer adds its question's weight to exactly one style bucket. The
//! answer → bucket mapping is spelled out per question below; it is not a
//! uniform "first answer is conservative" pattern (see `Approach`).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::answers::{
    Approach, Choice, Experience, Goal, Horizon, RiskTolerance, SurveyAnswers, VolatilityComfort,
};

/// Investor style buckets, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestorStyle {
    Conservative,
    Balanced,
    Aggressive,
}

impl InvestorStyle {
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Balanced, Self::Aggressive];

    pub fn name(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Balanced => "Balanced",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Advisory message shown for the winning style.
    pub fn message(self) -> &'static str {
        match self {
            Self::Conservative => "Steady Accumulator — DCA & preservation focused.",
            Self::Balanced => "Growth Seeker — blend DCA with opportunistic buys.",
            Self::Aggressive => {
                "High-Conviction — DCA plus tactical swings; comfortable with volatility."
            }
        }
    }

    /// Which calculator to open next for this style.
    pub fn recommended_tool(self) -> Tool {
        match self {
            Self::Aggressive => Tool::ProfitCalculator,
            Self::Conservative | Self::Balanced => Tool::DcaSimulator,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Conservative => 0,
            Self::Balanced => 1,
            Self::Aggressive => 2,
        }
    }
}

impl fmt::Display for InvestorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The calculators a quiz result can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    DcaSimulator,
    ProfitCalculator,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Self::DcaSimulator => "DCA Simulator",
            Self::ProfitCalculator => "Profit Calc",
        }
    }
}

// ─── Weight table ───────────────────────────────────────────────────

/// A question whose answers carry a fixed weight into one style bucket.
pub trait WeightedAnswer: Choice {
    const WEIGHT: u32;

    fn style(self) -> InvestorStyle;
}

impl WeightedAnswer for Horizon {
    const WEIGHT: u32 = 2;

    fn style(self) -> InvestorStyle {
        match self {
            Self::Short => InvestorStyle::Conservative,
            Self::Medium => InvestorStyle::Balanced,
            Self::Long => InvestorStyle::Aggressive,
        }
    }
}

impl WeightedAnswer for RiskTolerance {
    const WEIGHT: u32 = 3;

    fn style(self) -> InvestorStyle {
        match self {
            Self::Low => InvestorStyle::Conservative,
            Self::Medium => InvestorStyle::Balanced,
            Self::High => InvestorStyle::Aggressive,
        }
    }
}

impl WeightedAnswer for Experience {
    const WEIGHT: u32 = 1;

    fn style(self) -> InvestorStyle {
        match self {
            Self::Newbie => InvestorStyle::Conservative,
            Self::Intermediate => InvestorStyle::Balanced,
            Self::Expert => InvestorStyle::Aggressive,
        }
    }
}

impl WeightedAnswer for Goal {
    const WEIGHT: u32 = 3;

    fn style(self) -> InvestorStyle {
        match self {
            Self::Preserve => InvestorStyle::Conservative,
            Self::Grow => InvestorStyle::Balanced,
            Self::Max => InvestorStyle::Aggressive,
        }
    }
}

impl WeightedAnswer for VolatilityComfort {
    const WEIGHT: u32 = 2;

    fn style(self) -> InvestorStyle {
        match self {
            Self::Hate => InvestorStyle::Conservative,
            Self::Tolerate => InvestorStyle::Balanced,
            Self::Thrive => InvestorStyle::Aggressive,
        }
    }
}

impl WeightedAnswer for Approach {
    const WEIGHT: u32 = 1;

    fn style(self) -> InvestorStyle {
        match self {
            Self::Passive => InvestorStyle::Conservative,
            Self::Systematic => InvestorStyle::Balanced,
            Self::Active => InvestorStyle::Aggressive,
        }
    }
}

/// One answer's contribution to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub question: &'static str,
    pub answer: &'static str,
    pub style: InvestorStyle,
    pub weight: u32,
}

fn contribution<T: WeightedAnswer>(answer: T) -> Contribution {
    Contribution {
        question: T::QUESTION,
        answer: answer.name(),
        style: answer.style(),
        weight: T::WEIGHT,
    }
}

impl SurveyAnswers {
    /// Per-question contributions, in question order.
    pub fn contributions(&self) -> [Contribution; 6] {
        [
            contribution(self.horizon),
            contribution(self.risk),
            contribution(self.experience),
            contribution(self.goal),
            contribution(self.volatility),
            contribution(self.approach),
        ]
    }
}

// ─── StyleScore ─────────────────────────────────────────────────────

/// Normalized style distribution. Components are in [0, 1] and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleScore {
    pub conservative: f64,
    pub balanced: f64,
    pub aggressive: f64,
}

impl StyleScore {
    pub fn get(&self, style: InvestorStyle) -> f64 {
        match style {
            InvestorStyle::Conservative => self.conservative,
            InvestorStyle::Balanced => self.balanced,
            InvestorStyle::Aggressive => self.aggressive,
        }
    }

    /// `(style, weight)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (InvestorStyle, f64)> + '_ {
        InvestorStyle::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn total(&self) -> f64 {
        self.conservative + self.balanced + self.aggressive
    }

    /// Style with the strictly greatest weight; ties go to the earlier style.
    pub fn winner(&self) -> InvestorStyle {
        let mut best = InvestorStyle::Conservative;
        let mut best_value = self.conservative;
        for (style, value) in self.iter().skip(1) {
            if value > best_value {
                best = style;
                best_value = value;
            }
        }
        best
    }
}

/// Aggregate six answers into a normalized style distribution.
pub fn score(answers: &SurveyAnswers) -> StyleScore {
    let mut totals = [0u32; 3];
    for c in answers.contributions() {
        totals[c.style.index()] += c.weight;
    }
    // Every question contributes, so the grand total is never zero.
    let grand = f64::from(totals.iter().sum::<u32>().max(1));
    StyleScore {
        conservative: f64::from(totals[0]) / grand,
        balanced: f64::from(totals[1]) / grand,
        aggressive: f64::from(totals[2]) / grand,
    }
}

/// Complete quiz evaluation for one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub answers: SurveyAnswers,
    pub score: StyleScore,
    pub style: InvestorStyle,
    pub message: String,
    pub recommended_tool: Tool,
}

pub fn evaluate(answers: &SurveyAnswers) -> QuizOutcome {
    let score = score(answers);
    let style = score.winner();
    QuizOutcome {
        answers: *answers,
        score,
        style,
        message: style.message().to_string(),
        recommended_tool: style.recommended_tool(),
    }
}
