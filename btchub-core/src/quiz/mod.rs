//! Investor-style quiz: six categorical answers → weighted style distribution.

pub mod answers;
pub mod scoring;

pub use answers::{
    Approach, Choice, Experience, Goal, Horizon, RiskTolerance, SurveyAnswers, VolatilityComfort,
};
pub use scoring::{
    evaluate, score, Contribution, InvestorStyle, QuizOutcome, StyleScore, Tool, WeightedAnswer,
};
