#![allow(dead_code)]

use jiff::civil::time;
use somno_core::choice::{Difficulty, Frequency, PartnerPresence, Quality};
use somno_core::models::questionnaire::QuestionnaireRecord;

/// A healthy sleeper: every complaint answered "never".
pub fn healthy_record() -> QuestionnaireRecord {
    QuestionnaireRecord {
        id: None,
        created_at: None,
        bedtime: Some(time(23, 0, 0, 0)),
        time_to_sleep: Some(10),
        wakeup_time: Some(time(7, 0, 0, 0)),
        sleep_hours: 7.0,
        difficulty_falling_asleep: Some(Frequency::NotInPastMonth),
        difficulty_staying_asleep: Some(Frequency::NotInPastMonth),
        bathroom_visits: Some(Frequency::NotInPastMonth),
        breathing_difficulty: Some(Frequency::NotInPastMonth),
        coughing_snoring: Some(Frequency::NotInPastMonth),
        felt_cold: Some(Frequency::NotInPastMonth),
        felt_hot: Some(Frequency::NotInPastMonth),
        bad_dreams: Some(Frequency::NotInPastMonth),
        pain: Some(Frequency::NotInPastMonth),
        other_reason: None,
        other_reason_frequency: None,
        sleep_quality: Some(Quality::VeryGood),
        medication_use: Some(Frequency::NotInPastMonth),
        daytime_sleepiness: Some(Frequency::NotInPastMonth),
        enthusiasm_difficulty: Some(Difficulty::NoProblem),
        has_partner: PartnerPresence::No,
        partner_snoring: None,
        partner_breathing_pauses: None,
        partner_leg_movements: None,
        partner_confusion: None,
        partner_other_issues: None,
        partner_other_frequency: None,
    }
}

/// Every answer at its worst.
pub fn worst_record() -> QuestionnaireRecord {
    let always = Some(Frequency::ThreeOrMoreAWeek);
    QuestionnaireRecord {
        bedtime: Some(time(22, 0, 0, 0)),
        time_to_sleep: Some(90),
        wakeup_time: Some(time(8, 0, 0, 0)),
        sleep_hours: 4.0,
        difficulty_falling_asleep: always,
        difficulty_staying_asleep: always,
        bathroom_visits: always,
        breathing_difficulty: always,
        coughing_snoring: always,
        felt_cold: always,
        felt_hot: always,
        bad_dreams: always,
        pain: always,
        other_reason: Some("noise from the street".to_string()),
        other_reason_frequency: always,
        sleep_quality: Some(Quality::VeryBad),
        medication_use: always,
        daytime_sleepiness: always,
        enthusiasm_difficulty: Some(Difficulty::Severe),
        has_partner: PartnerPresence::SameBed,
        partner_snoring: always,
        partner_breathing_pauses: always,
        partner_leg_movements: always,
        partner_confusion: always,
        partner_other_issues: Some("talks in sleep".to_string()),
        partner_other_frequency: always,
        ..healthy_record()
    }
}

/// Set the nine fixed disturbance answers so their values sum to `total`.
pub fn with_disturbance_sum(mut record: QuestionnaireRecord, total: u8) -> QuestionnaireRecord {
    let mut remaining = total;
    let mut next = || {
        let value = remaining.min(3);
        remaining -= value;
        Some(match value {
            0 => Frequency::NotInPastMonth,
            1 => Frequency::LessThanOnceAWeek,
            2 => Frequency::OnceOrTwiceAWeek,
            _ => Frequency::ThreeOrMoreAWeek,
        })
    };
    record.difficulty_falling_asleep = next();
    record.difficulty_staying_asleep = next();
    record.bathroom_visits = next();
    record.breathing_difficulty = next();
    record.coughing_snoring = next();
    record.felt_cold = next();
    record.felt_hot = next();
    record.bad_dreams = next();
    record.pain = next();
    record
}
