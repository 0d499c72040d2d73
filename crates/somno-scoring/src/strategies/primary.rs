use somno_core::models::questionnaire::QuestionnaireRecord;

use crate::Strategy;
use crate::components::{daytime, disturbance, duration, efficiency, latency, terms};
use crate::error::ScoringError;
use crate::scoring::{Component, ComponentScore, ScoreRange, SleepHealth};

/// Standardized seven-component index.
///
/// Five bucketed components (0–3 each), the inverted quality rating (1–4)
/// and raw medication use (0–3). Lower is better. No interpretation bands
/// are calibrated for this range, so [`Strategy::interpret`] yields `None`.
pub struct Primary;

impl Strategy for Primary {
    fn id(&self) -> &str {
        "primary"
    }

    fn name(&self) -> &str {
        "Standardized sleep quality index"
    }

    fn total_range(&self) -> ScoreRange {
        Component::ALL
            .iter()
            .map(|c| c.range())
            .fold(ScoreRange::new(0, 0), |acc, r| {
                ScoreRange::new(acc.min + r.min, acc.max + r.max)
            })
    }

    fn breakdown(
        &self,
        record: &QuestionnaireRecord,
    ) -> Result<Vec<ComponentScore>, ScoringError> {
        Ok(vec![
            ComponentScore::of(Component::Duration, duration::score(record)),
            ComponentScore::of(Component::Disturbance, disturbance::score(record)),
            ComponentScore::of(Component::Latency, latency::score(record)?),
            ComponentScore::of(Component::DaytimeDysfunction, daytime::score(record)),
            ComponentScore::of(Component::Efficiency, efficiency::score(record)?),
            ComponentScore::of(Component::Quality, terms::quality_term(record)?),
            ComponentScore::of(Component::Medication, terms::medication(record)?),
        ])
    }

    fn interpret(&self, _total: u32) -> Option<SleepHealth> {
        None
    }
}
