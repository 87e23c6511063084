use prakriti_core::models::answer::Answer;
use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::scores::TraitPercent;
use prakriti_scoring::accumulate::{accumulate, classify};

fn answers(weights: &[(Dosha, f64)]) -> Vec<Answer> {
    weights
        .iter()
        .enumerate()
        .map(|(i, (dosha, weight))| Answer::trait_answer(format!("q{i}"), "a", *dosha, *weight))
        .collect()
}

#[test]
fn three_one_one_is_sixty_twenty_twenty() {
    let profile = accumulate(&answers(&[
        (Dosha::Vata, 3.0),
        (Dosha::Pitta, 1.0),
        (Dosha::Kapha, 1.0),
    ]));

    assert_eq!(
        profile.percent,
        TraitPercent {
            vata: 60,
            pitta: 20,
            kapha: 20
        }
    );
    assert_eq!(profile.classification.dominant, Dosha::Vata);
    assert_eq!(profile.classification.secondary, None);
    assert_eq!(profile.scores.vata, 3.0);
}

#[test]
fn all_zero_weights_fall_back_to_even_split() {
    let profile = accumulate(&answers(&[
        (Dosha::Vata, 0.0),
        (Dosha::Pitta, 0.0),
        (Dosha::Kapha, 0.0),
    ]));

    assert_eq!(profile.percent, TraitPercent::EVEN);
    assert_eq!(profile.classification.dominant, Dosha::Vata);
    assert_eq!(profile.classification.secondary, Some(Dosha::Kapha));
    assert_eq!(profile.scores.total(), 0.0);
}

#[test]
fn no_trait_answers_fall_back_to_even_split() {
    let only_wellness = vec![Answer::wellness_answer("mh1", "a", 3.0)];
    let profile = accumulate(&only_wellness);
    assert_eq!(profile.percent, TraitPercent::EVEN);
    assert_eq!(profile.classification.dominant, Dosha::Vata);
}

#[test]
fn wellness_answers_do_not_feed_trait_buckets() {
    let mut list = answers(&[(Dosha::Kapha, 2.0)]);
    let mut tagged = Answer::wellness_answer("mh1", "a", 3.0);
    tagged.dosha = Some(Dosha::Vata);
    list.push(tagged);

    let profile = accumulate(&list);
    assert_eq!(profile.scores.vata, 0.0);
    assert_eq!(profile.percent.kapha, 100);
    assert_eq!(profile.classification.dominant, Dosha::Kapha);
}

#[test]
fn rounding_drift_is_not_corrected() {
    let low = accumulate(&answers(&[
        (Dosha::Vata, 1.0),
        (Dosha::Pitta, 1.0),
        (Dosha::Kapha, 1.0),
    ]));
    assert_eq!(low.percent.sum(), 99);

    let high = accumulate(&answers(&[
        (Dosha::Vata, 1.5),
        (Dosha::Pitta, 1.5),
        (Dosha::Kapha, 5.0),
    ]));
    assert_eq!(
        high.percent,
        TraitPercent {
            vata: 19,
            pitta: 19,
            kapha: 63
        }
    );
    assert_eq!(high.percent.sum(), 101);
}

#[test]
fn percent_sum_stays_within_rounding_band() {
    let cases: &[[f64; 3]] = &[
        [1.0, 2.0, 3.0],
        [7.0, 0.0, 0.0],
        [0.1, 0.2, 0.7],
        [5.0, 5.0, 1.0],
        [2.0, 3.0, 3.0],
        [9.0, 1.0, 1.0],
    ];
    for [v, p, k] in cases {
        let profile = accumulate(&answers(&[
            (Dosha::Vata, *v),
            (Dosha::Pitta, *p),
            (Dosha::Kapha, *k),
        ]));
        let sum = profile.percent.sum();
        assert!((99..=101).contains(&sum), "{v},{p},{k} summed to {sum}");
    }
}

#[test]
fn ties_prefer_vata_then_pitta() {
    let profile = accumulate(&answers(&[
        (Dosha::Vata, 2.0),
        (Dosha::Pitta, 2.0),
        (Dosha::Kapha, 1.0),
    ]));
    assert_eq!(profile.classification.dominant, Dosha::Vata);
    assert_eq!(profile.classification.secondary, Some(Dosha::Pitta));

    let profile = accumulate(&answers(&[
        (Dosha::Vata, 1.0),
        (Dosha::Pitta, 2.0),
        (Dosha::Kapha, 2.0),
    ]));
    assert_eq!(profile.classification.dominant, Dosha::Pitta);
    assert_eq!(profile.classification.secondary, Some(Dosha::Kapha));
}

#[test]
fn secondary_requires_strictly_more_than_thirty() {
    let at_threshold = classify(&TraitPercent {
        vata: 70,
        pitta: 30,
        kapha: 0,
    });
    assert_eq!(at_threshold.dominant, Dosha::Vata);
    assert_eq!(at_threshold.secondary, None);

    let above = classify(&TraitPercent {
        vata: 69,
        pitta: 0,
        kapha: 31,
    });
    assert_eq!(above.secondary, Some(Dosha::Kapha));
}

#[test]
fn weights_accumulate_across_answers() {
    let profile = accumulate(&answers(&[
        (Dosha::Pitta, 2.0),
        (Dosha::Pitta, 3.0),
        (Dosha::Vata, 4.0),
        (Dosha::Kapha, 1.0),
    ]));
    assert_eq!(profile.scores.pitta, 5.0);
    assert_eq!(
        profile.percent,
        TraitPercent {
            vata: 40,
            pitta: 50,
            kapha: 10
        }
    );
    assert_eq!(profile.classification.dominant, Dosha::Pitta);
    assert_eq!(profile.classification.secondary, Some(Dosha::Vata));
}

#[test]
fn huge_weights_still_split_evenly() {
    let profile = accumulate(&answers(&[
        (Dosha::Vata, 1e308),
        (Dosha::Pitta, 1e308),
    ]));
    assert_eq!(
        profile.percent,
        TraitPercent {
            vata: 50,
            pitta: 50,
            kapha: 0
        }
    );
    assert_eq!(profile.classification.dominant, Dosha::Vata);
    assert_eq!(profile.classification.secondary, Some(Dosha::Pitta));
}

#[test]
fn overflowing_bucket_dominates() {
    let profile = accumulate(&answers(&[
        (Dosha::Kapha, f64::MAX),
        (Dosha::Kapha, f64::MAX),
        (Dosha::Vata, 1.0),
    ]));
    assert_eq!(profile.percent.kapha, 100);
    assert_eq!(profile.percent.sum(), 100);
    assert_eq!(profile.classification.dominant, Dosha::Kapha);
}
