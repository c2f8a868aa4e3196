//! The six survey questions and their fixed answer sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A categorical survey question with exactly three answers.
pub trait Choice: Copy + Sized + 'static {
    /// Question name used in error messages and reports.
    const QUESTION: &'static str;
    /// Answers in presentation order.
    const ALL: [Self; 3];

    fn name(self) -> &'static str;
}

fn parse_choice<T: Choice>(s: &str) -> Result<T, InputError> {
    let wanted = s.trim();
    T::ALL
        .into_iter()
        .find(|c| c.name().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| InputError::UnknownChoice {
            question: T::QUESTION,
            value: s.to_string(),
            expected: T::ALL.map(|c| c.name()).join(", "),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    Short,
    Medium,
    Long,
}

impl Choice for Horizon {
    const QUESTION: &'static str = "horizon";
    const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    fn name(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl Choice for RiskTolerance {
    const QUESTION: &'static str = "risk";
    const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    Newbie,
    Intermediate,
    Expert,
}

impl Choice for Experience {
    const QUESTION: &'static str = "experience";
    const ALL: [Self; 3] = [Self::Newbie, Self::Intermediate, Self::Expert];

    fn name(self) -> &'static str {
        match self {
            Self::Newbie => "Newbie",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    Preserve,
    Grow,
    Max,
}

impl Choice for Goal {
    const QUESTION: &'static str = "goal";
    const ALL: [Self; 3] = [Self::Preserve, Self::Grow, Self::Max];

    fn name(self) -> &'static str {
        match self {
            Self::Preserve => "Preserve",
            Self::Grow => "Grow",
            Self::Max => "Max",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolatilityComfort {
    Hate,
    Tolerate,
    Thrive,
}

impl Choice for VolatilityComfort {
    const QUESTION: &'static str = "volatility";
    const ALL: [Self; 3] = [Self::Hate, Self::Tolerate, Self::Thrive];

    fn name(self) -> &'static str {
        match self {
            Self::Hate => "Hate",
            Self::Tolerate => "Tolerate",
            Self::Thrive => "Thrive",
        }
    }
}

/// Preferred approach. Presentation order is Passive, Active, Systematic,
/// which is not the bucket order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approach {
    Passive,
    Active,
    Systematic,
}

impl Choice for Approach {
    const QUESTION: &'static str = "approach";
    const ALL: [Self; 3] = [Self::Passive, Self::Active, Self::Systematic];

    fn name(self) -> &'static str {
        match self {
            Self::Passive => "Passive",
            Self::Active => "Active",
            Self::Systematic => "Systematic",
        }
    }
}

macro_rules! impl_text {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl FromStr for $ty {
                type Err = InputError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_choice(s)
                }
            }
        )+
    };
}

impl_text!(
    Horizon,
    RiskTolerance,
    Experience,
    Goal,
    VolatilityComfort,
    Approach
);

/// One complete set of quiz answers.
///
/// Missing fields deserialize to the quiz's starting selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurveyAnswers {
    pub horizon: Horizon,
    pub risk: RiskTolerance,
    pub experience: Experience,
    pub goal: Goal,
    pub volatility: VolatilityComfort,
    pub approach: Approach,
}

impl Default for SurveyAnswers {
    fn default() -> Self {
        Self {
            horizon: Horizon::Long,
            risk: RiskTolerance::Medium,
            experience: Experience::Intermediate,
            goal: Goal::Grow,
            volatility: VolatilityComfort::Tolerate,
            approach: Approach::Systematic,
        }
    }
}

impl SurveyAnswers {
    /// Every one of the 3^6 possible answer sets.
    pub fn all_combinations() -> impl Iterator<Item = SurveyAnswers> {
        Horizon::ALL.into_iter().flat_map(|horizon| {
            RiskTolerance::ALL.into_iter().flat_map(move |risk| {
                Experience::ALL.into_iter().flat_map(move |experience| {
                    Goal::ALL.into_iter().flat_map(move |goal| {
                        VolatilityComfort::ALL.into_iter().flat_map(move |volatility| {
                            Approach::ALL.into_iter().map(move |approach| SurveyAnswers {
                                horizon,
                                risk,
                                experience,
                                goal,
                                volatility,
                                approach,
                            })
                        })
                    })
                })
            })
        })
    }
}
