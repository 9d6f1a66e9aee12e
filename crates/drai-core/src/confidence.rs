//! Overall diagnosis confidence.
//!
//! The score shown on the diagnosis screen blends the strongest candidate
//! with the runner-up:
//!
//! ```text
//! confidence = round(max * 0.7 + (top_two_sum - max) * (1 - 0.7))   capped at 100
//! ```
//!
//! An empty list scores 0 and a single condition scores its own probability.

use tracing::debug;

use drai_contracts::diagnosis::Condition;

/// Weight given to the most probable condition.
pub const PRIMARY_WEIGHT: f64 = 0.7;

/// Upper bound of a blended confidence score.
pub const MAX_CONFIDENCE: u8 = 100;

/// Compute the overall confidence for a list of candidate conditions.
///
/// Probabilities are not validated. With exactly one condition its raw
/// probability is returned, even above 100; with two or more the blended
/// score is capped at [`MAX_CONFIDENCE`].
pub fn overall_confidence(conditions: &[Condition]) -> u8 {
    let Some(highest) = conditions.iter().map(|c| c.probability).max() else {
        return 0;
    };

    if conditions.len() == 1 {
        return highest;
    }

    // Stable sort: equal probabilities keep their original order.
    let mut ranked: Vec<&Condition> = conditions.iter().collect();
    ranked.sort_by(|a, b| b.probability.cmp(&a.probability));

    let pair_sum: u32 = ranked
        .iter()
        .take(2)
        .map(|c| u32::from(c.probability))
        .sum();

    let highest = f64::from(highest);
    let blended =
        highest * PRIMARY_WEIGHT + (f64::from(pair_sum) - highest) * (1.0 - PRIMARY_WEIGHT);
    let score = blended.round().min(f64::from(MAX_CONFIDENCE)) as u8;

    debug!(
        conditions = conditions.len(),
        top_id = %ranked[0].id,
        pair_sum,
        score,
        "computed overall confidence"
    );

    score
}
