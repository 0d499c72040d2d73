use somno_core::choice::{Choice, sum_present};
use somno_core::models::questionnaire::QuestionnaireRecord;

use crate::Strategy;
use crate::components::terms;
use crate::error::ScoringError;
use crate::scoring::{ComponentScore, ScoreRange, SleepHealth};

/// Superseded flat-sum scheme, kept for comparison with [`super::primary::Primary`].
///
/// Adds every raw frequency answer (disturbances, medication, daytime
/// sleepiness, partner observations), the inverted quality rating and the
/// raw enthusiasm difficulty. Nothing is bucketed.
pub struct Legacy;

/// Map a legacy total onto its sleep health band.
pub fn classify(total: u32) -> SleepHealth {
    match total {
        0..=15 => SleepHealth::Good,
        16..=30 => SleepHealth::MildDisturbance,
        31..=45 => SleepHealth::ModerateDisturbance,
        _ => SleepHealth::SevereDisturbance,
    }
}

impl Strategy for Legacy {
    fn id(&self) -> &str {
        "legacy"
    }

    fn name(&self) -> &str {
        "Legacy flat sum"
    }

    fn total_range(&self) -> ScoreRange {
        // 10 disturbances + medication + sleepiness + 4 partner items, each 0–3,
        // plus quality 1–4 and enthusiasm 0–3.
        ScoreRange::new(1, 16 * 3 + 4 + 3)
    }

    fn breakdown(
        &self,
        record: &QuestionnaireRecord,
    ) -> Result<Vec<ComponentScore>, ScoringError> {
        let quality = terms::quality_term(record)?;
        let medication = terms::medication(record)?;
        let sleepiness = record.daytime_sleepiness.map_or(0, Choice::value);
        let enthusiasm = record.enthusiasm_difficulty.map_or(0, Choice::value);

        Ok(vec![
            ComponentScore::new(
                "disturbances",
                "Sleep disturbances",
                sum_present(&record.disturbances()),
                ScoreRange::new(0, 30),
            ),
            ComponentScore::new(
                "medication",
                "Use of sleep medication",
                u32::from(medication),
                ScoreRange::new(0, 3),
            ),
            ComponentScore::new(
                "daytime_sleepiness",
                "Daytime sleepiness",
                u32::from(sleepiness),
                ScoreRange::new(0, 3),
            ),
            ComponentScore::new(
                "partner_observations",
                "Partner observations",
                sum_present(&record.partner_observations()),
                ScoreRange::new(0, 12),
            ),
            ComponentScore::new(
                "quality",
                "Inverted sleep quality",
                u32::from(quality),
                ScoreRange::new(1, 4),
            ),
            ComponentScore::new(
                "enthusiasm",
                "Difficulty keeping enthusiasm",
                u32::from(enthusiasm),
                ScoreRange::new(0, 3),
            ),
        ])
    }

    fn interpret(&self, total: u32) -> Option<SleepHealth> {
        Some(classify(total))
    }
}
