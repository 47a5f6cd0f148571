use serde::{Deserialize, Serialize};

use crate::matches::{Match, MatchResult, most_recent_first};

/// Matches scored in the current window.
const MORALE_WINDOW: usize = 8;
/// Below this many matches in a window there is no signal worth reporting.
const MIN_SAMPLE: usize = 3;
/// Linear recency decay per position; with the window at 8 the weights stay
/// in [0.3, 1.0].
const WEIGHT_DECAY: f64 = 0.1;

const WIN_POINTS: f64 = 3.0;
const DRAW_POINTS: f64 = 1.0;
const LOSS_POINTS: f64 = -2.0;
const GOAL_POINTS: f64 = 1.0;
const ASSIST_POINTS: f64 = 0.5;
const GOAL_DIFF_POINTS: f64 = 0.2;

// Raw per-match scores land in roughly this band; the 0–100 scale is a fixed
// affine map of it, so the thresholds below keep their meaning over time.
const RAW_MIN: f64 = -5.0;
const RAW_MAX: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoraleLevel {
    Invincible,
    OnFire,
    Excellent,
    VeryGood,
    Good,
    Steady,
    Shaky,
    Low,
    Fragile,
    Crisis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoraleTrend {
    Up,
    Down,
    Same,
    New,
}

/// What the current window looked like, for display next to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSummary {
    /// E.g. "5W-2D-1L".
    pub record: String,
    pub goals: u32,
    pub assists: u32,
    pub matches: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMorale {
    pub level: MoraleLevel,
    /// 0–100, recency-weighted.
    pub score: f64,
    pub trend: MoraleTrend,
    pub recent: RecentSummary,
}

/// Recomputed from raw history on every call; there is no carried state, the
/// recency weighting comes entirely from the window plus linear decay.
/// `None` means fewer than 3 matches in the scoring window, not an error.
pub fn calculate_team_morale(matches: &[Match]) -> Option<PlayerMorale> {
    let recent = most_recent_first(matches);

    let current_window = &recent[..recent.len().min(MORALE_WINDOW)];
    let score = score_for_window(current_window)?;

    let trend = if recent.len() <= MORALE_WINDOW {
        MoraleTrend::New
    } else {
        let shifted = &recent[1..recent.len().min(MORALE_WINDOW + 1)];
        match score_for_window(shifted) {
            None => MoraleTrend::New,
            Some(previous) => {
                if score > previous + 1.0 {
                    MoraleTrend::Up
                } else if score < previous - 1.0 {
                    MoraleTrend::Down
                } else {
                    MoraleTrend::Same
                }
            }
        }
    };

    Some(PlayerMorale {
        level: level_for_score(score),
        score,
        trend,
        recent: summarize_window(current_window),
    })
}

/// Weighted 0–100 score of one slice (most recent first), or `None` when the
/// slice is too small to mean anything.
fn score_for_window(window: &[&Match]) -> Option<f64> {
    if window.len() < MIN_SAMPLE {
        return None;
    }

    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    for (index, m) in window.iter().enumerate() {
        let result_points = match m.result {
            MatchResult::Win => WIN_POINTS,
            MatchResult::Draw => DRAW_POINTS,
            MatchResult::Loss => LOSS_POINTS,
        };
        let raw = result_points
            + GOAL_POINTS * m.my_goals as f64
            + ASSIST_POINTS * m.my_assists as f64
            + GOAL_DIFF_POINTS * m.goal_difference() as f64;

        let weight = 1.0 - index as f64 * WEIGHT_DECAY;
        weighted += raw * weight;
        weight_sum += weight;
    }

    let avg = weighted / weight_sum;
    let normalized = (avg - RAW_MIN) / (RAW_MAX - RAW_MIN) * 100.0;
    Some(normalized.clamp(0.0, 100.0))
}

fn level_for_score(score: f64) -> MoraleLevel {
    if score >= 100.0 {
        MoraleLevel::Invincible
    } else if score >= 90.0 {
        MoraleLevel::OnFire
    } else if score >= 80.0 {
        MoraleLevel::Excellent
    } else if score >= 70.0 {
        MoraleLevel::VeryGood
    } else if score >= 60.0 {
        MoraleLevel::Good
    } else if score >= 50.0 {
        MoraleLevel::Steady
    } else if score >= 40.0 {
        MoraleLevel::Shaky
    } else if score >= 30.0 {
        MoraleLevel::Low
    } else if score >= 10.0 {
        MoraleLevel::Fragile
    } else {
        MoraleLevel::Crisis
    }
}

fn summarize_window(window: &[&Match]) -> RecentSummary {
    let mut wins = 0u32;
    let mut draws = 0u32;
    let mut losses = 0u32;
    let mut goals = 0u32;
    let mut assists = 0u32;

    for m in window {
        match m.result {
            MatchResult::Win => wins += 1,
            MatchResult::Draw => draws += 1,
            MatchResult::Loss => losses += 1,
        }
        goals += m.my_goals;
        assists += m.my_assists;
    }

    RecentSummary {
        record: format!("{wins}W-{draws}D-{losses}L"),
        goals,
        assists,
        matches: window.len(),
    }
}
