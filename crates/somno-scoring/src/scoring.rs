use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Inclusive integer range of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The seven terms of the standardized index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Component {
    Duration,
    Disturbance,
    Latency,
    DaytimeDysfunction,
    Efficiency,
    Quality,
    Medication,
}

impl Component {
    pub const ALL: [Component; 7] = [
        Component::Duration,
        Component::Disturbance,
        Component::Latency,
        Component::DaytimeDysfunction,
        Component::Efficiency,
        Component::Quality,
        Component::Medication,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Disturbance => "disturbance",
            Self::Latency => "latency",
            Self::DaytimeDysfunction => "daytime_dysfunction",
            Self::Efficiency => "efficiency",
            Self::Quality => "quality",
            Self::Medication => "medication",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Duration => "Sleep duration",
            Self::Disturbance => "Sleep disturbance",
            Self::Latency => "Sleep latency",
            Self::DaytimeDysfunction => "Daytime dysfunction",
            Self::Efficiency => "Habitual sleep efficiency",
            Self::Quality => "Subjective sleep quality",
            Self::Medication => "Use of sleep medication",
        }
    }

    /// Quality is the only term that never reaches zero: its inversion maps
    /// the best rating to 1.
    pub fn range(self) -> ScoreRange {
        match self {
            Self::Quality => ScoreRange::new(1, 4),
            _ => ScoreRange::new(0, 3),
        }
    }
}

/// One named term of a score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentScore {
    pub id: String,
    pub name: String,
    pub value: u32,
    pub range: ScoreRange,
}

impl ComponentScore {
    pub fn new(id: &str, name: &str, value: u32, range: ScoreRange) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value,
            range,
        }
    }

    pub fn of(component: Component, value: u8) -> Self {
        Self::new(
            component.id(),
            component.name(),
            u32::from(value),
            component.range(),
        )
    }
}

/// Sleep health classification of the legacy flat sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SleepHealth {
    Good,
    MildDisturbance,
    ModerateDisturbance,
    SevereDisturbance,
}

impl SleepHealth {
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good sleep health",
            Self::MildDisturbance => "Mild sleep disturbance",
            Self::ModerateDisturbance => "Moderate sleep disturbance",
            Self::SevereDisturbance => "Severe sleep disturbance",
        }
    }
}

impl fmt::Display for SleepHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome of scoring one questionnaire with one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    pub strategy: String,
    pub record_id: Option<Uuid>,
    pub total: u32,
    pub range: ScoreRange,
    pub severity: Option<SleepHealth>,
    /// Human-readable classification, when the strategy defines bands.
    pub interpretation: Option<String>,
    pub breakdown: Vec<ComponentScore>,
}

impl ScoreReport {
    pub fn component(&self, id: &str) -> Option<&ComponentScore> {
        self.breakdown.iter().find(|c| c.id == id)
    }

    pub fn summary(&self) -> String {
        let mut line = format!(
            "{}: {} (range {})",
            self.strategy, self.total, self.range
        );
        if let Some(interpretation) = &self.interpretation {
            line.push_str(&format!(" - {interpretation}"));
        }
        line
    }
}
