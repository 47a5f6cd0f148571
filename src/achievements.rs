use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::matches::{Match, MatchResult, most_recent_first};

/// The closed set of conditions a rule can test. User files may carry metric
/// names this build does not know; those deserialize to `Unknown` and simply
/// never unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementMetric {
    WinStreak,
    LossStreak,
    UndefeatedStreak,
    WinlessStreak,
    GoalStreak,
    AssistStreak,
    GoalDrought,
    AssistDrought,
    BreakWinAfterLossStreak,
    BreakUndefeatedAfterWinlessStreak,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOperator {
    #[serde(rename = "greater_than_or_equal_to")]
    GreaterThanOrEqualTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementCondition {
    pub metric: AchievementMetric,
    pub operator: ConditionOperator,
    pub value: u32,
    /// Number of most-recent matches an ongoing-streak metric looks at.
    /// Streak-break metrics ignore it.
    #[serde(default)]
    pub window: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAchievement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub condition: AchievementCondition,
}

/// Stateless unlocked/locked decision against the current history. No stored
/// unlock flag is trusted; truth is re-derived on every call, and the
/// function never fails.
pub fn evaluate_custom_achievement(achievement: &CustomAchievement, matches: &[Match]) -> bool {
    let recent = most_recent_first(matches);
    let cond = &achievement.condition;

    // The only operator is >=, so each arm reduces to a counted run compare.
    match cond.metric {
        AchievementMetric::WinStreak => {
            ongoing_streak(&recent, cond, |m| m.result == MatchResult::Win)
        }
        AchievementMetric::LossStreak => {
            ongoing_streak(&recent, cond, |m| m.result == MatchResult::Loss)
        }
        AchievementMetric::UndefeatedStreak => {
            ongoing_streak(&recent, cond, |m| m.result != MatchResult::Loss)
        }
        AchievementMetric::WinlessStreak => {
            ongoing_streak(&recent, cond, |m| m.result != MatchResult::Win)
        }
        AchievementMetric::GoalStreak => ongoing_streak(&recent, cond, |m| m.my_goals > 0),
        AchievementMetric::AssistStreak => ongoing_streak(&recent, cond, |m| m.my_assists > 0),
        AchievementMetric::GoalDrought => ongoing_streak(&recent, cond, |m| m.my_goals == 0),
        AchievementMetric::AssistDrought => ongoing_streak(&recent, cond, |m| m.my_assists == 0),
        AchievementMetric::BreakWinAfterLossStreak => streak_break(
            &recent,
            cond.value,
            |m| m.result == MatchResult::Win,
            |m| m.result == MatchResult::Loss,
        ),
        AchievementMetric::BreakUndefeatedAfterWinlessStreak => streak_break(
            &recent,
            cond.value,
            |m| m.result != MatchResult::Loss,
            |m| m.result != MatchResult::Win,
        ),
        AchievementMetric::Unknown => false,
    }
}

/// Run length from the front of a most-recent-first slice.
fn leading_run(recent: &[&Match], holds: impl Fn(&Match) -> bool) -> u32 {
    recent.iter().take_while(|&&m| holds(m)).count() as u32
}

/// Ongoing-streak check: needs at least `window` matches of history, then
/// counts the run from the most recent match inside that window only.
fn ongoing_streak(
    recent: &[&Match],
    cond: &AchievementCondition,
    holds: impl Fn(&Match) -> bool,
) -> bool {
    if recent.len() < cond.window {
        return false;
    }
    leading_run(&recent[..cond.window], holds) >= cond.value
}

/// Streak-break check: the most recent match must be the qualifying break,
/// and the run immediately before it must reach `value`. The condition's
/// window plays no part; the preceding run extends as far back as it holds.
fn streak_break(
    recent: &[&Match],
    value: u32,
    is_break: impl Fn(&Match) -> bool,
    held_before: impl Fn(&Match) -> bool,
) -> bool {
    let Some(&latest) = recent.first() else {
        return false;
    };
    if !is_break(latest) {
        return false;
    }
    leading_run(&recent[1..], held_before) >= value
}

/// Pre-authored rules shipped with the app. They run through the same
/// evaluation path as user-authored ones.
pub static BUILTIN_ACHIEVEMENTS: Lazy<Vec<CustomAchievement>> = Lazy::new(|| {
    fn rule(
        id: &str,
        name: &str,
        description: &str,
        metric: AchievementMetric,
        value: u32,
        window: usize,
    ) -> CustomAchievement {
        CustomAchievement {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            condition: AchievementCondition {
                metric,
                operator: ConditionOperator::GreaterThanOrEqualTo,
                value,
                window,
            },
        }
    }

    vec![
        rule(
            "on-a-roll",
            "On a roll",
            "Win three matches in a row",
            AchievementMetric::WinStreak,
            3,
            3,
        ),
        rule(
            "untouchable",
            "Untouchable",
            "Go five matches unbeaten",
            AchievementMetric::UndefeatedStreak,
            5,
            5,
        ),
        rule(
            "sharpshooter",
            "Sharpshooter",
            "Score in four consecutive matches",
            AchievementMetric::GoalStreak,
            4,
            4,
        ),
        rule(
            "provider",
            "Provider",
            "Assist in three consecutive matches",
            AchievementMetric::AssistStreak,
            3,
            3,
        ),
        rule(
            "bounce-back",
            "Bounce back",
            "Win right after three straight defeats",
            AchievementMetric::BreakWinAfterLossStreak,
            3,
            0,
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, n).expect("valid test date")
    }

    // Builds a history where `results` is given most-recent-first, matching
    // how conditions are described.
    fn history(results: &[MatchResult]) -> Vec<Match> {
        results
            .iter()
            .rev()
            .enumerate()
            .map(|(i, r)| {
                let (team, opp) = match r {
                    MatchResult::Win => (2, 0),
                    MatchResult::Loss => (0, 2),
                    MatchResult::Draw => (1, 1),
                };
                Match::from_scoreline(&format!("m{i}"), day(i as u32 + 1), team, opp)
            })
            .collect()
    }

    fn condition(metric: AchievementMetric, value: u32, window: usize) -> CustomAchievement {
        CustomAchievement {
            id: "t".to_string(),
            name: "t".to_string(),
            description: None,
            condition: AchievementCondition {
                metric,
                operator: ConditionOperator::GreaterThanOrEqualTo,
                value,
                window,
            },
        }
    }

    #[test]
    fn win_streak_needs_full_window_of_history() {
        use MatchResult::*;
        let a = condition(AchievementMetric::WinStreak, 5, 5);
        // Only 4 matches: false no matter what they are.
        assert!(!evaluate_custom_achievement(&a, &history(&[Win, Win, Win, Win])));
    }

    #[test]
    fn win_streak_counts_from_most_recent_and_stops_at_break() {
        use MatchResult::*;
        let a = condition(AchievementMetric::WinStreak, 3, 5);
        assert!(evaluate_custom_achievement(
            &a,
            &history(&[Win, Win, Win, Loss, Win])
        ));
        // Streak of 2 at the front, the earlier wins don't count.
        assert!(!evaluate_custom_achievement(
            &a,
            &history(&[Win, Win, Loss, Win, Win])
        ));
    }

    #[test]
    fn break_win_after_loss_streak_measures_the_preceding_run() {
        use MatchResult::*;
        let matches = history(&[Win, Loss, Loss, Loss, Win]);
        let three = condition(AchievementMetric::BreakWinAfterLossStreak, 3, 0);
        let four = condition(AchievementMetric::BreakWinAfterLossStreak, 4, 0);
        assert!(evaluate_custom_achievement(&three, &matches));
        assert!(!evaluate_custom_achievement(&four, &matches));
    }

    #[test]
    fn break_condition_requires_the_break_event_itself() {
        use MatchResult::*;
        let a = condition(AchievementMetric::BreakWinAfterLossStreak, 2, 0);
        // Most recent match is still a loss: the streak is unbroken.
        assert!(!evaluate_custom_achievement(&a, &history(&[Loss, Loss, Loss])));
    }

    #[test]
    fn undefeated_break_accepts_a_draw_as_the_break() {
        use MatchResult::*;
        let a = condition(AchievementMetric::BreakUndefeatedAfterWinlessStreak, 2, 0);
        assert!(evaluate_custom_achievement(&a, &history(&[Draw, Loss, Draw, Win])));
    }

    #[test]
    fn unknown_metric_never_unlocks() {
        use MatchResult::*;
        let a = condition(AchievementMetric::Unknown, 0, 0);
        assert!(!evaluate_custom_achievement(&a, &history(&[Win, Win])));
    }

    #[test]
    fn unknown_metric_deserializes_instead_of_failing() {
        let raw = r#"{"metric":"pandemoniumStreak","operator":"greater_than_or_equal_to","value":1,"window":1}"#;
        let cond: AchievementCondition = serde_json::from_str(raw).expect("lenient metric parse");
        assert_eq!(cond.metric, AchievementMetric::Unknown);
    }
}
