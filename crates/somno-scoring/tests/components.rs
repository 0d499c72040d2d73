mod common;

use jiff::civil::time;
use somno_core::choice::{Difficulty, Frequency, Quality};
use somno_scoring::components::{daytime, disturbance, duration, efficiency, latency, terms};
use somno_scoring::error::ScoringError;

use common::{healthy_record, with_disturbance_sum};

#[test]
fn duration_boundaries() {
    assert_eq!(duration::bucket(8.0), 0);
    assert_eq!(duration::bucket(7.0), 0);
    assert_eq!(duration::bucket(6.99), 1);
    assert_eq!(duration::bucket(6.5), 1);
    assert_eq!(duration::bucket(6.0), 2);
    assert_eq!(duration::bucket(5.99), 2);
    assert_eq!(duration::bucket(5.0), 2);
    assert_eq!(duration::bucket(4.99), 3);
}

#[test]
fn duration_non_positive_hours_score_worst() {
    assert_eq!(duration::bucket(0.0), 3);
    assert_eq!(duration::bucket(-1.0), 3);

    let mut record = healthy_record();
    record.sleep_hours = 0.0;
    assert_eq!(duration::score(&record), 3);
}

#[test]
fn duration_never_improves_with_less_sleep() {
    let mut previous = duration::bucket(0.0);
    let mut hours = 0.0;
    while hours <= 12.0 {
        let current = duration::bucket(hours);
        assert!(current <= previous, "score rose at {hours}h");
        previous = current;
        hours += 0.25;
    }
}

#[test]
fn disturbance_bucket_boundaries() {
    assert_eq!(disturbance::bucket(0), 0);
    assert_eq!(disturbance::bucket(1), 1);
    assert_eq!(disturbance::bucket(8), 1);
    assert_eq!(disturbance::bucket(9), 2);
    assert_eq!(disturbance::bucket(17), 2);
    assert_eq!(disturbance::bucket(18), 3);
    assert_eq!(disturbance::bucket(30), 3);
}

#[test]
fn disturbance_sums_record_answers() {
    for (sum, expected) in [(0, 0), (1, 1), (8, 1), (9, 2), (17, 2), (18, 3)] {
        let record = with_disturbance_sum(healthy_record(), sum);
        assert_eq!(disturbance::sum(&record), u32::from(sum));
        assert_eq!(disturbance::score(&record), expected, "sum {sum}");
    }
}

#[test]
fn disturbance_counts_other_reason_and_skips_absent() {
    let mut record = healthy_record();
    record.pain = None;
    record.felt_hot = None;
    record.other_reason_frequency = Some(Frequency::OnceOrTwiceAWeek);
    assert_eq!(disturbance::sum(&record), 2);
    assert_eq!(disturbance::score(&record), 1);
}

#[test]
fn latency_recode_edges() {
    assert_eq!(latency::recode(0), 3);
    assert_eq!(latency::recode(1), 0);
    assert_eq!(latency::recode(14), 0);
    assert_eq!(latency::recode(15), 1);
    assert_eq!(latency::recode(29), 1);
    assert_eq!(latency::recode(30), 2);
    assert_eq!(latency::recode(59), 2);
    assert_eq!(latency::recode(60), 3);
    assert_eq!(latency::recode(240), 3);
}

#[test]
fn latency_combine_edges() {
    assert_eq!(latency::combine(0, 0), 0);
    assert_eq!(latency::combine(1, 0), 1);
    assert_eq!(latency::combine(1, 1), 1);
    assert_eq!(latency::combine(2, 1), 2);
    assert_eq!(latency::combine(2, 2), 2);
    assert_eq!(latency::combine(3, 2), 3);
    assert_eq!(latency::combine(3, 3), 3);
}

#[test]
fn latency_quick_sleeper_scores_zero() {
    let record = healthy_record();
    assert_eq!(latency::score(&record).unwrap(), 0);
}

#[test]
fn latency_forty_five_minutes_with_weekly_trouble() {
    let mut record = healthy_record();
    record.time_to_sleep = Some(45);
    record.difficulty_falling_asleep = Some(Frequency::OnceOrTwiceAWeek);
    assert_eq!(latency::recode(45), 2);
    assert_eq!(latency::score(&record).unwrap(), 2);
}

#[test]
fn latency_requires_time_to_sleep() {
    let mut record = healthy_record();
    record.time_to_sleep = None;
    assert!(matches!(
        latency::score(&record),
        Err(ScoringError::MissingRequiredField("time_to_sleep"))
    ));
}

#[test]
fn daytime_buckets() {
    assert_eq!(daytime::bucket(0), 0);
    assert_eq!(daytime::bucket(1), 1);
    assert_eq!(daytime::bucket(2), 1);
    assert_eq!(daytime::bucket(3), 2);
    assert_eq!(daytime::bucket(4), 2);
    assert_eq!(daytime::bucket(5), 3);
    assert_eq!(daytime::bucket(6), 3);
}

#[test]
fn daytime_sleepy_and_unenthusiastic() {
    let mut record = healthy_record();
    record.daytime_sleepiness = Some(Frequency::OnceOrTwiceAWeek);
    record.enthusiasm_difficulty = Some(Difficulty::Severe);
    assert_eq!(daytime::sum(&record), 5);
    assert_eq!(daytime::score(&record), 3);
}

#[test]
fn daytime_absent_answers_count_as_zero() {
    let mut record = healthy_record();
    record.daytime_sleepiness = None;
    record.enthusiasm_difficulty = Some(Difficulty::Mild);
    assert_eq!(daytime::score(&record), 1);
}

#[test]
fn efficiency_overnight_seven_hours() {
    let record = healthy_record();
    assert_eq!(efficiency::percentage(&record).unwrap(), 87.5);
    assert_eq!(efficiency::score(&record).unwrap(), 0);
}

#[test]
fn efficiency_overnight_five_and_a_half_hours() {
    let mut record = healthy_record();
    record.sleep_hours = 5.5;
    assert_eq!(efficiency::percentage(&record).unwrap(), 68.75);
    assert_eq!(efficiency::score(&record).unwrap(), 2);
}

#[test]
fn efficiency_bucket_boundaries() {
    assert_eq!(efficiency::bucket(100.0), 0);
    assert_eq!(efficiency::bucket(85.0), 0);
    assert_eq!(efficiency::bucket(84.9), 1);
    assert_eq!(efficiency::bucket(75.0), 1);
    assert_eq!(efficiency::bucket(74.9), 2);
    assert_eq!(efficiency::bucket(65.0), 2);
    assert_eq!(efficiency::bucket(64.9), 3);
    assert_eq!(efficiency::bucket(0.0), 3);
}

#[test]
fn efficiency_same_day_interval() {
    let mut record = healthy_record();
    record.bedtime = Some(time(1, 0, 0, 0));
    record.wakeup_time = Some(time(9, 0, 0, 0));
    record.sleep_hours = 6.0;
    assert_eq!(efficiency::percentage(&record).unwrap(), 75.0);
    assert_eq!(efficiency::score(&record).unwrap(), 1);
}

#[test]
fn efficiency_degenerate_interval_is_reported() {
    let mut record = healthy_record();
    record.bedtime = Some(time(23, 0, 0, 0));
    record.wakeup_time = Some(time(23, 0, 0, 0));
    match efficiency::score(&record) {
        Err(ScoringError::DegenerateInterval {
            bedtime,
            wakeup_time,
        }) => {
            assert_eq!(bedtime, time(23, 0, 0, 0));
            assert_eq!(wakeup_time, time(23, 0, 0, 0));
        }
        other => panic!("expected degenerate interval, got {other:?}"),
    }
}

#[test]
fn efficiency_requires_both_times() {
    let mut record = healthy_record();
    record.bedtime = None;
    assert!(matches!(
        efficiency::score(&record),
        Err(ScoringError::MissingRequiredField("bedtime"))
    ));

    let mut record = healthy_record();
    record.wakeup_time = None;
    assert!(matches!(
        efficiency::score(&record),
        Err(ScoringError::MissingRequiredField("wakeup_time"))
    ));
}

#[test]
fn quality_term_inverts_rating() {
    let mut record = healthy_record();
    let expected = [
        (Quality::VeryGood, 1),
        (Quality::Good, 2),
        (Quality::Bad, 3),
        (Quality::VeryBad, 4),
    ];
    for (quality, term) in expected {
        record.sleep_quality = Some(quality);
        assert_eq!(terms::quality_term(&record).unwrap(), term);
    }
}

#[test]
fn medication_is_raw_frequency() {
    let mut record = healthy_record();
    record.medication_use = Some(Frequency::OnceOrTwiceAWeek);
    assert_eq!(terms::medication(&record).unwrap(), 2);

    record.medication_use = None;
    assert!(matches!(
        terms::medication(&record),
        Err(ScoringError::MissingRequiredField("medication_use"))
    ));
}

#[test]
fn quality_is_required() {
    let mut record = healthy_record();
    record.sleep_quality = None;
    assert!(matches!(
        terms::quality_term(&record),
        Err(ScoringError::MissingRequiredField("sleep_quality"))
    ));
}
