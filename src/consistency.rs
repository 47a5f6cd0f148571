use crate::matches::{Match, chronological};

/// Trailing window used for the per-match momentum series.
const MOMENTUM_WINDOW: usize = 10;

/// Neutral score reported when there are too few samples to measure spread.
const NEUTRAL_SCORE: f64 = 5.0;

/// Population standard deviation (divide by N). Empty and single-element
/// inputs are 0 by definition.
pub fn calculate_standard_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    var.sqrt()
}

/// 0–10 stability score: 10 means identical output every match, dropping
/// 4 points per unit of standard deviation, floored at 0. Below 2 samples
/// the spread is meaningless, so a fixed neutral 5 is reported instead.
pub fn consistency_score(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return NEUTRAL_SCORE;
    }
    (10.0 - 4.0 * calculate_standard_deviation(values)).max(0.0)
}

/// One consistency score for the whole selection (the caller pre-filters the
/// slice to a season, a month, or all-time).
pub fn period_consistency(matches: &[Match]) -> f64 {
    let contributions: Vec<f64> = matches.iter().map(|m| m.contribution() as f64).collect();
    consistency_score(&contributions)
}

/// Chronological per-match series: at each match, the consistency of the
/// trailing window of up to 10 contributions ending there. Early points use
/// whatever shorter history exists (and so start at the neutral score).
pub fn momentum_series(matches: &[Match]) -> Vec<f64> {
    let ordered = chronological(matches);
    let contributions: Vec<f64> = ordered.iter().map(|m| m.contribution() as f64).collect();

    (0..contributions.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(MOMENTUM_WINDOW);
            consistency_score(&contributions[start..=i])
        })
        .collect()
}
