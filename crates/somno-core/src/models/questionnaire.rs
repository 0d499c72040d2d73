use jiff::civil::Time;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::choice::{Choice, Difficulty, Frequency, PartnerPresence, Quality};
use crate::error::CoreError;

/// One submitted sleep questionnaire.
///
/// Scoring reads the record and never mutates it. Fields that scoring cannot
/// proceed without are still `Option` so their absence surfaces as an error
/// instead of a fabricated default:
/// `bedtime`, `wakeup_time`, `time_to_sleep`, `sleep_quality`, `medication_use`.
/// Every other optional answer counts as zero when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,

    // Sleep timing
    #[serde(default)]
    pub bedtime: Option<Time>,
    /// Minutes taken to fall asleep.
    #[serde(default)]
    pub time_to_sleep: Option<u32>,
    #[serde(default)]
    pub wakeup_time: Option<Time>,
    pub sleep_hours: f64,

    // Sleep disturbances
    #[serde(default)]
    pub difficulty_falling_asleep: Option<Frequency>,
    #[serde(default)]
    pub difficulty_staying_asleep: Option<Frequency>,
    #[serde(default)]
    pub bathroom_visits: Option<Frequency>,
    #[serde(default)]
    pub breathing_difficulty: Option<Frequency>,
    #[serde(default)]
    pub coughing_snoring: Option<Frequency>,
    #[serde(default)]
    pub felt_cold: Option<Frequency>,
    #[serde(default)]
    pub felt_hot: Option<Frequency>,
    #[serde(default)]
    pub bad_dreams: Option<Frequency>,
    #[serde(default)]
    pub pain: Option<Frequency>,
    #[serde(default)]
    pub other_reason: Option<String>,
    #[serde(default)]
    pub other_reason_frequency: Option<Frequency>,

    // General evaluation
    #[serde(default)]
    pub sleep_quality: Option<Quality>,
    #[serde(default)]
    pub medication_use: Option<Frequency>,
    #[serde(default)]
    pub daytime_sleepiness: Option<Frequency>,
    #[serde(default)]
    pub enthusiasm_difficulty: Option<Difficulty>,

    // Partner observations
    pub has_partner: PartnerPresence,
    #[serde(default)]
    pub partner_snoring: Option<Frequency>,
    #[serde(default)]
    pub partner_breathing_pauses: Option<Frequency>,
    #[serde(default)]
    pub partner_leg_movements: Option<Frequency>,
    #[serde(default)]
    pub partner_confusion: Option<Frequency>,
    #[serde(default)]
    pub partner_other_issues: Option<String>,
    #[serde(default)]
    pub partner_other_frequency: Option<Frequency>,
}

impl QuestionnaireRecord {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decode a record, naming the offending field when a choice answer is
    /// outside its range.
    pub fn from_value(json: serde_json::Value) -> Result<Self, CoreError> {
        check_choice_ranges(&json)?;
        Ok(serde_json::from_value(json)?)
    }

    /// The nine fixed disturbance answers plus the optional "other reason".
    pub fn disturbances(&self) -> [Option<Frequency>; 10] {
        [
            self.difficulty_falling_asleep,
            self.difficulty_staying_asleep,
            self.bathroom_visits,
            self.breathing_difficulty,
            self.coughing_snoring,
            self.felt_cold,
            self.felt_hot,
            self.bad_dreams,
            self.pain,
            self.other_reason_frequency,
        ]
    }

    /// The four symptoms a bed or room partner can report.
    pub fn partner_observations(&self) -> [Option<Frequency>; 4] {
        [
            self.partner_snoring,
            self.partner_breathing_pauses,
            self.partner_leg_movements,
            self.partner_confusion,
        ]
    }

    /// Reject `sleep_hours` values no clock can produce.
    ///
    /// Zero and negative hours pass: the scorers place them in the worst bucket.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.sleep_hours.is_finite() || self.sleep_hours > 24.0 {
            return Err(CoreError::OutOfRangeValue {
                field: "sleep_hours",
                value: self.sleep_hours.to_string(),
                expected: "at most 24",
            });
        }
        Ok(())
    }
}

struct ChoiceField {
    name: &'static str,
    expected: &'static str,
    accepts: fn(u8) -> bool,
}

const fn choice_field<C: Choice>(name: &'static str) -> ChoiceField {
    ChoiceField {
        name,
        expected: C::EXPECTED,
        accepts: accepts::<C>,
    }
}

fn accepts<C: Choice>(value: u8) -> bool {
    C::from_value(value).is_ok()
}

const CHOICE_FIELDS: [ChoiceField; 20] = [
    choice_field::<Frequency>("difficulty_falling_asleep"),
    choice_field::<Frequency>("difficulty_staying_asleep"),
    choice_field::<Frequency>("bathroom_visits"),
    choice_field::<Frequency>("breathing_difficulty"),
    choice_field::<Frequency>("coughing_snoring"),
    choice_field::<Frequency>("felt_cold"),
    choice_field::<Frequency>("felt_hot"),
    choice_field::<Frequency>("bad_dreams"),
    choice_field::<Frequency>("pain"),
    choice_field::<Frequency>("other_reason_frequency"),
    choice_field::<Quality>("sleep_quality"),
    choice_field::<Frequency>("medication_use"),
    choice_field::<Frequency>("daytime_sleepiness"),
    choice_field::<Difficulty>("enthusiasm_difficulty"),
    choice_field::<PartnerPresence>("has_partner"),
    choice_field::<Frequency>("partner_snoring"),
    choice_field::<Frequency>("partner_breathing_pauses"),
    choice_field::<Frequency>("partner_leg_movements"),
    choice_field::<Frequency>("partner_confusion"),
    choice_field::<Frequency>("partner_other_frequency"),
];

/// Reject numeric choice answers outside their scale before serde sees them.
/// Non-numeric values are left for deserialization to report.
fn check_choice_ranges(json: &serde_json::Value) -> Result<(), CoreError> {
    let Some(obj) = json.as_object() else {
        return Ok(());
    };
    for field in &CHOICE_FIELDS {
        let Some(raw) = obj.get(field.name) else {
            continue;
        };
        let serde_json::Value::Number(number) = raw else {
            continue;
        };
        let in_range = number
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .is_some_and(field.accepts);
        if !in_range {
            return Err(CoreError::OutOfRangeValue {
                field: field.name,
                value: raw.to_string(),
                expected: field.expected,
            });
        }
    }
    Ok(())
}
