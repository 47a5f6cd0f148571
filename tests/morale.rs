use chrono::NaiveDate;

use matchlog::matches::Match;
use matchlog::morale::{MoraleLevel, MoraleTrend, calculate_team_morale};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(n as i64)
}

fn win(n: u32) -> Match {
    Match::from_scoreline(&format!("w{n}"), day(n), 2, 0)
}

fn loss(n: u32) -> Match {
    Match::from_scoreline(&format!("l{n}"), day(n), 0, 2)
}

#[test]
fn too_little_history_means_no_morale() {
    assert!(calculate_team_morale(&[]).is_none());
    assert!(calculate_team_morale(&[win(1)]).is_none());
    assert!(calculate_team_morale(&[win(1), loss(2)]).is_none());
}

#[test]
fn three_matches_are_enough() {
    let morale = calculate_team_morale(&[win(1), win(2), win(3)]).unwrap();
    assert!((0.0..=100.0).contains(&morale.score));
    assert_eq!(morale.recent.matches, 3);
}

#[test]
fn trend_is_new_while_history_fits_in_one_window() {
    // 8 matches = exactly the window; there is no previous window to compare.
    let matches: Vec<Match> = (1..=8).map(win).collect();
    let morale = calculate_team_morale(&matches).unwrap();
    assert_eq!(morale.trend, MoraleTrend::New);
}

#[test]
fn a_fresh_win_after_a_slump_trends_up() {
    let mut matches: Vec<Match> = (1..=10).map(loss).collect();
    let mut turnaround = Match::from_scoreline("up", day(11), 5, 0);
    turnaround.my_goals = 3;
    matches.push(turnaround);

    let morale = calculate_team_morale(&matches).unwrap();
    assert_eq!(morale.trend, MoraleTrend::Up);
}

#[test]
fn a_fresh_heavy_loss_after_a_run_trends_down() {
    let mut matches: Vec<Match> = (1..=10).map(win).collect();
    matches.push(Match::from_scoreline("down", day(11), 0, 6));

    let morale = calculate_team_morale(&matches).unwrap();
    assert_eq!(morale.trend, MoraleTrend::Down);
}

#[test]
fn perfect_run_hits_the_top_band_exactly() {
    // Raw score per match: +3 win, +12 goals, +0.2 * 12 diff = 17.4, beyond
    // the top of the affine range, so the clamp pins the score at 100.
    let matches: Vec<Match> = (1..=8)
        .map(|n| {
            let mut m = Match::from_scoreline(&format!("p{n}"), day(n), 12, 0);
            m.my_goals = 12;
            m
        })
        .collect();

    let morale = calculate_team_morale(&matches).unwrap();
    assert_eq!(morale.score, 100.0);
    assert_eq!(morale.level, MoraleLevel::Invincible);
}

#[test]
fn hopeless_run_clamps_at_the_bottom() {
    let matches: Vec<Match> = (1..=8)
        .map(|n| Match::from_scoreline(&format!("h{n}"), day(n), 0, 20))
        .collect();

    let morale = calculate_team_morale(&matches).unwrap();
    assert_eq!(morale.score, 0.0);
    assert_eq!(morale.level, MoraleLevel::Crisis);
}

#[test]
fn summary_reflects_the_current_window_only() {
    // 12 matches; the window is the 8 most recent (all wins), the 4 oldest
    // losses must not leak into the record string.
    let mut matches: Vec<Match> = (1..=4).map(loss).collect();
    matches.extend((5..=12).map(win));

    let morale = calculate_team_morale(&matches).unwrap();
    assert_eq!(morale.recent.record, "8W-0D-0L");
    assert_eq!(morale.recent.matches, 8);
}

#[test]
fn caller_order_does_not_matter() {
    let mut matches: Vec<Match> = (1..=9).map(win).collect();
    let a = calculate_team_morale(&matches).unwrap();
    matches.reverse();
    let b = calculate_team_morale(&matches).unwrap();
    assert_eq!(a, b);
}
