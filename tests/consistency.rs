use chrono::NaiveDate;

use matchlog::consistency::{
    calculate_standard_deviation, consistency_score, momentum_series, period_consistency,
};
use matchlog::matches::Match;

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(n as i64)
}

fn match_with_contribution(n: u32, goals: u32, assists: u32) -> Match {
    let mut m = Match::from_scoreline(&format!("m{n}"), day(n), goals + assists + 1, 0);
    m.my_goals = goals;
    m.my_assists = assists;
    m
}

#[test]
fn flat_series_scores_a_perfect_ten() {
    assert_eq!(calculate_standard_deviation(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    assert_eq!(consistency_score(&[5.0, 5.0, 5.0, 5.0]), 10.0);
}

#[test]
fn tiny_samples_use_the_neutral_default_not_the_formula() {
    // Raw stddev is 0 for both, but the wrapper must report 5, not 10.
    assert_eq!(calculate_standard_deviation(&[]), 0.0);
    assert_eq!(calculate_standard_deviation(&[8.0]), 0.0);
    assert_eq!(consistency_score(&[]), 5.0);
    assert_eq!(consistency_score(&[8.0]), 5.0);
}

#[test]
fn known_spread_maps_through_the_fixed_formula() {
    // Population stddev of [0, 2] is 1 -> 10 - 4 = 6.
    let score = consistency_score(&[0.0, 2.0]);
    assert!((score - 6.0).abs() < 1e-12);
}

#[test]
fn period_score_uses_goals_plus_assists() {
    let matches = vec![
        match_with_contribution(0, 1, 1),
        match_with_contribution(1, 2, 0),
        match_with_contribution(2, 0, 2),
    ];
    // Every contribution is 2: perfectly steady.
    assert_eq!(period_consistency(&matches), 10.0);
}

#[test]
fn momentum_series_has_one_point_per_match() {
    let matches: Vec<Match> = (0..15).map(|n| match_with_contribution(n, 1, 0)).collect();
    let series = momentum_series(&matches);
    assert_eq!(series.len(), 15);
    // First point has a single sample: neutral.
    assert_eq!(series[0], 5.0);
    // From the second point on the trailing values are identical.
    assert!(series[1..].iter().all(|s| *s == 10.0));
}

#[test]
fn momentum_window_forgets_old_variance() {
    // One wild early match, then a long flat run. Once the outlier falls out
    // of the 10-match trailing window the score must recover to 10.
    let mut matches = vec![match_with_contribution(0, 9, 0)];
    matches.extend((1..14).map(|n| match_with_contribution(n, 1, 0)));

    let series = momentum_series(&matches);
    let last = *series.last().unwrap();
    assert_eq!(last, 10.0);
    // While the outlier is still inside the window the score is depressed.
    assert!(series[5] < 10.0);
}

#[test]
fn momentum_is_chronological_regardless_of_input_order() {
    let mut matches: Vec<Match> = (0..12).map(|n| match_with_contribution(n, 1, 0)).collect();
    let forward = momentum_series(&matches);
    matches.reverse();
    let backward = momentum_series(&matches);
    assert_eq!(forward, backward);
}
