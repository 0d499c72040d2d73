//! somno-scoring
//!
//! Deterministic scoring of sleep questionnaires. Component scorers are pure
//! functions of a [`QuestionnaireRecord`]; strategies combine them into a
//! total and, where bands exist, a sleep health classification.
//! Scoring never mutates the record and keeps no state between calls.

pub mod components;
pub mod error;
pub mod scoring;
pub mod strategies;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use somno_core::models::questionnaire::QuestionnaireRecord;

use error::ScoringError;
use scoring::{ComponentScore, ScoreRange, ScoreReport, SleepHealth};

/// An aggregation scheme turning a questionnaire into a total score.
pub trait Strategy: Send + Sync {
    /// Unique identifier (e.g., "primary", "legacy").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Smallest and largest totals this strategy can produce.
    fn total_range(&self) -> ScoreRange;

    /// The named terms whose sum is the total.
    fn breakdown(
        &self,
        record: &QuestionnaireRecord,
    ) -> Result<Vec<ComponentScore>, ScoringError>;

    /// Classify a total, if this strategy defines bands for it.
    fn interpret(&self, total: u32) -> Option<SleepHealth>;

    /// Validate the record, score every term and classify the sum.
    ///
    /// Any missing mandatory answer or degenerate interval aborts the whole
    /// computation; no partial total is ever returned.
    fn score(&self, record: &QuestionnaireRecord) -> Result<ScoreReport, ScoringError> {
        record.validate()?;
        let breakdown = self.breakdown(record)?;
        let total: u32 = breakdown.iter().map(|c| c.value).sum();
        let severity = self.interpret(total);

        tracing::debug!(
            strategy = self.id(),
            record_id = ?record.id,
            total,
            "questionnaire scored"
        );

        Ok(ScoreReport {
            strategy: self.id().to_string(),
            record_id: record.id,
            total,
            range: self.total_range(),
            severity,
            interpretation: severity.map(|s| s.label().to_string()),
            breakdown,
        })
    }
}

/// Return all registered strategies.
pub fn all_strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(strategies::primary::Primary),
        Box::new(strategies::legacy::Legacy),
    ]
}

/// Look up a strategy by ID.
pub fn get_strategy(id: &str) -> Option<Box<dyn Strategy>> {
    all_strategies().into_iter().find(|s| s.id() == id)
}

/// Caller-facing selector for the registered strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Primary,
    Legacy,
}

impl StrategyKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Legacy => "legacy",
        }
    }

    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Self::Primary => Box::new(strategies::primary::Primary),
            Self::Legacy => Box::new(strategies::legacy::Legacy),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "legacy" => Ok(Self::Legacy),
            other => Err(ScoringError::UnknownStrategy(other.to_string())),
        }
    }
}
