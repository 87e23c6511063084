use prakriti_core::models::answer::{Answer, AnswerCategory};
use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::scores::{Classification, TraitPercent, TraitProfile, TraitScores};

/// A secondary category is reported only above this percentage.
pub const SECONDARY_THRESHOLD: u8 = 30;

/// Sum trait answers into buckets, normalize, and classify.
///
/// Wellness answers are ignored. When every bucket is zero the percentages
/// fall back to `{33, 33, 34}` with `vata` dominant and, since kapha's 34 is
/// above the threshold, `kapha` secondary.
pub fn accumulate(answers: &[Answer]) -> TraitProfile {
    let mut scores = TraitScores::default();
    for answer in answers {
        if answer.category != AnswerCategory::Trait {
            continue;
        }
        if let Some(dosha) = answer.dosha {
            scores.add(dosha, answer.weight);
        }
    }

    let Some(fractions) = proportions(&scores) else {
        let percent = TraitPercent::EVEN;
        return TraitProfile {
            scores,
            percent,
            classification: classify_with_dominant(Dosha::Vata, &percent),
        };
    };

    let percent = TraitPercent {
        vata: share(fractions.vata),
        pitta: share(fractions.pitta),
        kapha: share(fractions.kapha),
    };

    TraitProfile {
        scores,
        percent,
        classification: classify(&percent),
    }
}

/// Each bucket's share of the total, or `None` when every bucket is zero.
///
/// A total too large to represent is computed from buckets scaled by the
/// largest one, so the shares still sum to 1.
pub fn proportions(scores: &TraitScores) -> Option<TraitScores> {
    let total = scores.total();
    if total.is_finite() {
        if total <= 0.0 {
            return None;
        }
        return Some(TraitScores {
            vata: scores.vata / total,
            pitta: scores.pitta / total,
            kapha: scores.kapha / total,
        });
    }

    // A single bucket may itself have overflowed.
    let bucket = |dosha: Dosha| scores.get(dosha).min(f64::MAX);
    let largest = Dosha::ALL.into_iter().map(bucket).fold(0.0, f64::max);
    let scaled = TraitScores {
        vata: bucket(Dosha::Vata) / largest,
        pitta: bucket(Dosha::Pitta) / largest,
        kapha: bucket(Dosha::Kapha) / largest,
    };
    let total = scaled.total();
    Some(TraitScores {
        vata: scaled.vata / total,
        pitta: scaled.pitta / total,
        kapha: scaled.kapha / total,
    })
}

/// `round(fraction * 100)`, no correction for rounding drift.
fn share(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Pick the dominant category by percentage, ties going to the earlier
/// category in `Dosha::ALL`.
pub fn classify(percent: &TraitPercent) -> Classification {
    classify_with_dominant(top(percent, None), percent)
}

/// Keep `dominant` as given and derive the secondary from `percent`.
pub fn classify_with_dominant(dominant: Dosha, percent: &TraitPercent) -> Classification {
    let runner_up = top(percent, Some(dominant));
    let secondary = (percent.get(runner_up) > SECONDARY_THRESHOLD).then_some(runner_up);
    Classification {
        dominant,
        secondary,
    }
}

fn top(percent: &TraitPercent, excluding: Option<Dosha>) -> Dosha {
    let mut best: Option<Dosha> = None;
    for dosha in Dosha::ALL {
        if Some(dosha) == excluding {
            continue;
        }
        match best {
            Some(current) if percent.get(dosha) <= percent.get(current) => {}
            _ => best = Some(dosha),
        }
    }
    // ALL has three entries and at most one is excluded.
    best.unwrap_or(Dosha::Vata)
}
