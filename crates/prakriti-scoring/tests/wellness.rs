use prakriti_core::models::answer::Answer;
use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::wellness::{RiskBand, WellnessLevel};
use prakriti_scoring::wellness::{from_score, score};

fn wellness(weights: &[f64]) -> Vec<Answer> {
    weights
        .iter()
        .enumerate()
        .map(|(i, w)| Answer::wellness_answer(format!("mh{i}"), "a", *w))
        .collect()
}

#[test]
fn empty_subset_is_neutral() {
    let only_traits = vec![Answer::trait_answer("q1", "a", Dosha::Vata, 3.0)];
    let result = score(&only_traits);
    assert_eq!(result.score, 50);
    assert_eq!(result.level, WellnessLevel::Yellow);
    assert_eq!(result.risk, RiskBand::Medium);
    assert_eq!(result.label, "Not assessed");
}

#[test]
fn full_marks_is_green() {
    let result = score(&wellness(&[3.0, 3.0, 3.0]));
    assert_eq!(result.score, 100);
    assert_eq!(result.level, WellnessLevel::Green);
    assert_eq!(result.risk, RiskBand::Low);
}

#[test]
fn share_of_max_weight_is_rounded() {
    // 4 / 6 = 66.7%
    let result = score(&wellness(&[2.0, 2.0]));
    assert_eq!(result.score, 67);
    assert_eq!(result.level, WellnessLevel::Yellow);

    // 2 / 6 = 33.3%
    let result = score(&wellness(&[1.0, 1.0]));
    assert_eq!(result.score, 33);
    assert_eq!(result.level, WellnessLevel::Red);
}

#[test]
fn score_is_clamped_to_range() {
    assert_eq!(score(&wellness(&[0.0, 0.0])).score, 10);
    assert_eq!(score(&wellness(&[1e300, 5.0])).score, 100);
    assert_eq!(score(&wellness(&[f64::MAX, f64::MAX])).score, 100);
}

#[test]
fn trait_answers_are_excluded_from_subset() {
    let mut answers = wellness(&[3.0]);
    answers.push(Answer::trait_answer("q1", "a", Dosha::Kapha, 0.0));
    assert_eq!(score(&answers).score, 100);
}

#[test]
fn band_boundaries() {
    assert_eq!(from_score(70).level, WellnessLevel::Green);
    assert_eq!(from_score(69).level, WellnessLevel::Yellow);
    assert_eq!(from_score(40).level, WellnessLevel::Yellow);
    assert_eq!(from_score(39).level, WellnessLevel::Red);
    assert_eq!(from_score(39).label, "Needs attention");
}
